//! Pendulum integration and the release transition.
//!
//! Active only while the gymnast holds a bar. Integration order matters and
//! is fixed: force injection, gravity restoring term, damping, angle update,
//! position derivation.

use glam::Vec3;

use crate::arena::Bar;
use crate::config::SwingConfig;
use crate::gymnast::{Gymnast, Mode};

/// Advance the pendulum by one step.
///
/// `force` is the operator's angular acceleration for this frame (already
/// scaled to ±`max_swing_force` or 0). `dt` must already be clamped.
pub fn step_pendulum(gymnast: &mut Gymnast, bar: &Bar, force: f32, config: &SwingConfig, dt: f32) {
    debug_assert!(gymnast.mode == Mode::Holding);

    // Operator input injects angular acceleration directly.
    gymnast.swing_velocity += force * dt;

    // Gravity restores toward the bottom of the swing (angle 0). Gravity is
    // negative, so the term opposes sin(angle).
    gymnast.swing_velocity +=
        (config.gravity / config.swing_radius) * gymnast.swing_angle.sin() * dt;

    // Flat per-frame damping, not dt-scaled. Tuned this way on purpose;
    // do not "fix" it.
    gymnast.swing_velocity *= config.damping;

    gymnast.swing_angle += gymnast.swing_velocity * dt;

    // Derive the body position on the arc. Motion is pinned to the vertical
    // plane through the bar.
    let r = config.swing_radius;
    gymnast.position = Vec3::new(
        bar.position.x + r * gymnast.swing_angle.sin(),
        bar.position.y - r * gymnast.swing_angle.cos(),
        bar.position.z,
    );

    // Body rotates rigidly with the pendulum.
    gymnast.rotation = gymnast.swing_angle;
}

/// Let go of the bar: convert angular state to linear velocity and go
/// airborne.
///
/// The tangential speed at the hands maps onto the swing plane, plus a fixed
/// horizontal boost directed toward the other bar (+X off the low bar, -X
/// off the high bar). Pure in `(swing_angle, swing_velocity, bar_index)`.
pub fn release(gymnast: &mut Gymnast, config: &SwingConfig) {
    debug_assert!(gymnast.mode == Mode::Holding);

    let tangential = gymnast.swing_velocity * config.swing_radius;
    let boost = if gymnast.bar_index == 0 {
        config.release_boost
    } else {
        -config.release_boost
    };

    gymnast.velocity = Vec3::new(
        tangential * gymnast.swing_angle.cos() + boost,
        tangential * gymnast.swing_angle.sin(),
        0.0,
    );
    gymnast.mode = Mode::Airborne;
    // bar_index stays: the flight check needs it to exclude the departure
    // bar while ascending.

    log::debug!(
        "release from bar {} at angle {:.3} rad, velocity {:?}",
        gymnast.bar_index,
        gymnast.swing_angle,
        gymnast.velocity
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arena::Bar;

    fn setup() -> (Gymnast, Bar, SwingConfig) {
        let config = SwingConfig::default();
        let bar = Bar::new(Vec3::new(-2.0, 3.0, 0.0), 0.04);
        let gymnast = Gymnast::hanging_from(0, &bar, &config);
        (gymnast, bar, config)
    }

    #[test]
    fn rest_is_stable_equilibrium() {
        let (mut gymnast, bar, config) = setup();
        let hang = gymnast.position;

        for _ in 0..1000 {
            step_pendulum(&mut gymnast, &bar, 0.0, &config, 0.1);
        }

        assert_eq!(gymnast.swing_angle, 0.0);
        assert_eq!(gymnast.swing_velocity, 0.0);
        assert_eq!(gymnast.position, hang);
    }

    #[test]
    fn damping_dissipates_angular_speed() {
        let (mut gymnast, bar, mut config) = setup();
        // Kill the gravity term so only damping acts on the velocity
        config.gravity = 0.0;
        gymnast.swing_velocity = 4.0;

        let mut prev = gymnast.swing_velocity.abs();
        for _ in 0..100 {
            step_pendulum(&mut gymnast, &bar, 0.0, &config, 0.016);
            let current = gymnast.swing_velocity.abs();
            assert!(current < prev, "|angular velocity| must shrink every frame");
            prev = current;
        }
    }

    #[test]
    fn gravity_restores_toward_bottom() {
        let (mut gymnast, bar, config) = setup();
        gymnast.swing_angle = 0.5;

        step_pendulum(&mut gymnast, &bar, 0.0, &config, 0.016);

        // Displaced to positive angle, at rest: the restoring term must pull
        // angular velocity negative.
        assert!(gymnast.swing_velocity < 0.0);
    }

    #[test]
    fn position_stays_on_arc() {
        let (mut gymnast, bar, config) = setup();

        for _ in 0..50 {
            step_pendulum(&mut gymnast, &bar, 12.0, &config, 0.016);
            let dist = gymnast.position.distance(bar.position);
            assert!((dist - config.swing_radius).abs() < 1e-4);
            assert_eq!(gymnast.position.z, bar.position.z);
            assert_eq!(gymnast.rotation, gymnast.swing_angle);
        }
    }

    #[test]
    fn release_is_deterministic() {
        let config = SwingConfig::default();
        let bar = Bar::new(Vec3::new(-2.0, 3.0, 0.0), 0.04);

        let mut a = Gymnast::hanging_from(0, &bar, &config);
        a.swing_angle = 0.8;
        a.swing_velocity = 3.0;
        let mut b = a.clone();

        release(&mut a, &config);
        release(&mut b, &config);

        assert_eq!(a.velocity, b.velocity);
        assert!(a.is_airborne());
    }

    #[test]
    fn release_boost_points_at_other_bar() {
        let config = SwingConfig::default();
        let bar = Bar::new(Vec3::ZERO, 0.04);

        // Off the low bar from dead rest: pure boost, +X
        let mut low = Gymnast::hanging_from(0, &bar, &config);
        release(&mut low, &config);
        assert_eq!(low.velocity, Vec3::new(config.release_boost, 0.0, 0.0));

        // Off the high bar: -X
        let mut high = Gymnast::hanging_from(1, &bar, &config);
        release(&mut high, &config);
        assert_eq!(high.velocity, Vec3::new(-config.release_boost, 0.0, 0.0));
    }

    #[test]
    fn release_converts_tangential_speed() {
        let config = SwingConfig::default();
        let bar = Bar::new(Vec3::ZERO, 0.04);
        let mut gymnast = Gymnast::hanging_from(0, &bar, &config);
        gymnast.swing_angle = 0.8;
        gymnast.swing_velocity = 3.0;

        release(&mut gymnast, &config);

        let tangential = 3.0 * config.swing_radius;
        let expected = Vec3::new(
            tangential * 0.8f32.cos() + config.release_boost,
            tangential * 0.8f32.sin(),
            0.0,
        );
        assert!((gymnast.velocity - expected).length() < 1e-5);
    }

    /// Replays the documented constants by hand and checks the integrator
    /// against the literal recurrence: ten steps of force +12 at dt = 0.1
    /// from rest, then release off the low bar.
    #[test]
    fn pump_and_release_matches_hand_replay() {
        let config = SwingConfig::default();
        let bar = Bar::new(Vec3::new(-2.0, 3.0, 0.0), 0.04);
        let mut gymnast = Gymnast::hanging_from(0, &bar, &config);

        let dt = 0.1;
        for _ in 0..10 {
            step_pendulum(&mut gymnast, &bar, config.max_swing_force, &config, dt);
        }

        // Literal replay of the recurrence
        let (mut angle, mut omega) = (0.0f32, 0.0f32);
        for _ in 0..10 {
            omega += 12.0 * dt;
            omega += (-6.5 / 1.15) * angle.sin() * dt;
            omega *= 0.995;
            angle += omega * dt;
        }

        assert!((gymnast.swing_angle - angle).abs() < 1e-5);
        assert!((gymnast.swing_velocity - omega).abs() < 1e-5);

        release(&mut gymnast, &config);

        let tangential = omega * 1.15;
        let expected = Vec3::new(
            tangential * angle.cos() + 3.0,
            tangential * angle.sin(),
            0.0,
        );
        assert!((gymnast.velocity - expected).length() < 1e-5);
    }
}

//! Free-flight integration and landing detection.
//!
//! Active only while the gymnast is airborne. After integrating, the
//! simulation runs the checks in a fixed order: bar grab, mat landing,
//! ground fail. First match wins within each check; iteration order is bar
//! index order and mat list order.

use glam::Vec3;

use crate::arena::Arena;
use crate::config::SwingConfig;
use crate::gymnast::{Gymnast, Mode};

/// Advance ballistic flight by one step.
pub fn step_flight(gymnast: &mut Gymnast, config: &SwingConfig, dt: f32) {
    debug_assert!(gymnast.mode == Mode::Airborne);

    gymnast.velocity.y += config.gravity * dt;
    gymnast.position += gymnast.velocity * dt;
}

/// Try to catch a bar. On success the gymnast re-attaches (mode becomes
/// `Holding` with recomputed pendulum state) and the caught bar index is
/// returned.
///
/// The departure bar is skipped while the gymnast is still ascending, so a
/// release doesn't instantly re-grab the bar just left.
pub fn try_grab(gymnast: &mut Gymnast, arena: &Arena, config: &SwingConfig) -> Option<usize> {
    for (i, bar) in arena.bars.iter().enumerate() {
        if i == gymnast.bar_index && gymnast.velocity.y > 0.0 {
            continue;
        }
        if gymnast.position.distance(bar.position) < config.grab_radius {
            gymnast.attach_to(i, bar, config);
            return Some(i);
        }
    }
    None
}

/// Try to land on a mat. On success the gymnast is snapped to rest on the
/// mat's top surface with zeroed velocity and the mat index is returned.
///
/// The gymnast stays formally airborne; the caller starts the landing
/// celebration and the delayed reset.
pub fn try_land(gymnast: &mut Gymnast, arena: &Arena, config: &SwingConfig) -> Option<usize> {
    for (i, mat) in arena.mats.iter().enumerate() {
        let rest_height = mat.top(config) + config.body_clearance;
        if gymnast.position.y <= rest_height && mat.contains_horizontal(gymnast.position, config) {
            gymnast.position.y = rest_height;
            gymnast.velocity = Vec3::ZERO;
            return Some(i);
        }
    }
    None
}

/// Whether the gymnast has fallen below the floor.
#[inline]
pub fn below_ground(gymnast: &Gymnast) -> bool {
    gymnast.position.y < 0.0
}

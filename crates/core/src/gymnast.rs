//! Gymnast kinematic state.

use bincode::{Decode, Encode};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::arena::Bar;
use crate::config::SwingConfig;

/// What the gymnast is currently doing. Exactly one mode holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum Mode {
    /// Hands fixed to a bar; motion constrained to the pendulum arc.
    Holding,
    /// Free flight; ballistic translation.
    Airborne,
}

/// Complete kinematic state of the gymnast.
///
/// While `Holding`, `swing_angle`/`swing_velocity` are authoritative and
/// `position` is derived from them each step. While `Airborne`, `velocity`
/// is authoritative and the angular fields are stale until the next grab.
#[derive(Debug, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct Gymnast {
    /// Body center in world space.
    #[bincode(with_serde)]
    pub position: Vec3,

    /// Visual rotation about the lateral (swing) axis, radians.
    pub rotation: f32,

    /// Current mode.
    pub mode: Mode,

    /// Bar being held while `Holding`; retained while `Airborne` so the
    /// departure bar can be excluded from grab checks on the way up.
    pub bar_index: usize,

    /// Pendulum angle from vertical, radians. 0 is the bottom of the swing.
    /// Unbounded: full revolutions accumulate without wraparound.
    pub swing_angle: f32,

    /// Pendulum angular velocity, rad/s.
    pub swing_velocity: f32,

    /// Linear velocity while `Airborne`.
    #[bincode(with_serde)]
    pub velocity: Vec3,
}

impl Gymnast {
    /// Create a gymnast hanging at rest from the given bar.
    pub fn hanging_from(bar_index: usize, bar: &Bar, config: &SwingConfig) -> Self {
        Self {
            position: bar.hang_position(config.swing_radius),
            rotation: 0.0,
            mode: Mode::Holding,
            bar_index,
            swing_angle: 0.0,
            swing_velocity: 0.0,
            velocity: Vec3::ZERO,
        }
    }

    #[inline]
    pub fn is_holding(&self) -> bool {
        self.mode == Mode::Holding
    }

    #[inline]
    pub fn is_airborne(&self) -> bool {
        self.mode == Mode::Airborne
    }

    /// Re-attach to a bar mid-flight, recomputing the pendulum state from
    /// the current position and velocity.
    ///
    /// The angle is measured from the straight-down vertical through the bar;
    /// the angular velocity is the swing-plane velocity projected onto the
    /// arc tangent.
    pub fn attach_to(&mut self, bar_index: usize, bar: &Bar, config: &SwingConfig) {
        let delta = self.position - bar.position;
        let angle = f32::atan2(delta.x, -delta.y);

        self.mode = Mode::Holding;
        self.bar_index = bar_index;
        self.swing_angle = angle;
        self.swing_velocity = self.velocity.x * angle.cos() / config.swing_radius;
        self.velocity = Vec3::ZERO;
    }
}

//! Fixed session geometry: the two bars and the landing mats.
//!
//! Bars and mats never move; the arena is built once at startup and shared
//! read-only with the renderer.

use bincode::{Decode, Encode};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::SwingConfig;

/// Index of the lower bar, where every session starts.
pub const LOW_BAR: usize = 0;

/// Index of the higher bar.
pub const HIGH_BAR: usize = 1;

/// A horizontal bar the gymnast can hold.
///
/// The bar's long axis runs along Z; swinging happens in the XY plane
/// through `position`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Encode, Decode)]
pub struct Bar {
    /// Anchor point of the grip, in world space.
    #[bincode(with_serde)]
    pub position: Vec3,

    /// Visual radius of the bar tube.
    pub radius: f32,
}

impl Bar {
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self { position, radius }
    }

    /// Body-center position when hanging at rest from this bar.
    pub fn hang_position(&self, swing_radius: f32) -> Vec3 {
        self.position - Vec3::new(0.0, swing_radius, 0.0)
    }
}

/// A landing mat lying on the floor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Encode, Decode)]
pub struct Mat {
    /// Anchor position; the top surface sits `mat_surface_offset` above it.
    #[bincode(with_serde)]
    pub position: Vec3,
}

impl Mat {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Height of the top surface.
    #[inline]
    pub fn top(&self, config: &SwingConfig) -> f32 {
        config.mat_top(self.position.y)
    }

    /// Whether a point lies within the mat's horizontal footprint.
    ///
    /// Half-depth bounds the swing-plane axis (X), half-width the lateral
    /// axis (Z).
    pub fn contains_horizontal(&self, point: Vec3, config: &SwingConfig) -> bool {
        (point.x - self.position.x).abs() <= config.mat_half_depth
            && (point.z - self.position.z).abs() <= config.mat_half_width
    }
}

/// The full playfield: two bars and the mat list.
#[derive(Debug, Clone)]
pub struct Arena {
    /// Bars in index order: `LOW_BAR` then `HIGH_BAR`.
    pub bars: [Bar; 2],

    /// Landing mats, checked in list order.
    pub mats: Vec<Mat>,
}

impl Arena {
    /// The standard playfield layout.
    ///
    /// The low bar sits on the negative-X side with the high bar across from
    /// it, one unit up. A mat waits on the far side of each bar so both
    /// release directions have a landing target.
    pub fn standard() -> Self {
        Self {
            bars: [
                Bar::new(Vec3::new(-2.0, 3.0, 0.0), 0.04),
                Bar::new(Vec3::new(2.0, 4.0, 0.0), 0.04),
            ],
            mats: vec![
                Mat::new(Vec3::new(6.0, 0.0, 0.0)),
                Mat::new(Vec3::new(-6.0, 0.0, 0.0)),
            ],
        }
    }

    #[inline]
    pub fn bar(&self, index: usize) -> &Bar {
        &self.bars[index]
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::standard()
    }
}

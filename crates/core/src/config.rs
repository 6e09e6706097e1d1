//! Swing physics configuration constants.
//!
//! All tuned parameters are grouped here. The defaults are the values the
//! game was balanced against; change them together or the feel falls apart.

use serde::{Deserialize, Serialize};

/// Configuration for the swing, flight, and landing physics.
///
/// Distances are in world units, times in seconds, angles in radians.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwingConfig {
    // ========================================================================
    // Pendulum
    // ========================================================================
    /// Vertical acceleration (negative = downward).
    pub gravity: f32,

    /// Pendulum length from bar anchor to body center.
    pub swing_radius: f32,

    /// Angular velocity multiplier applied once per frame.
    ///
    /// Deliberately NOT scaled by dt: the game was tuned against this exact
    /// frame-rate-dependent decay and changing it alters the swing feel.
    pub damping: f32,

    /// Magnitude of the angular acceleration injected by directional input.
    ///
    /// Applied directly to angular velocity rather than as a torque over the
    /// radius, so the force stays tunable independent of geometry.
    pub max_swing_force: f32,

    // ========================================================================
    // Release and grab
    // ========================================================================
    /// Horizontal speed added at release, directed toward the other bar.
    pub release_boost: f32,

    /// Distance threshold for catching a bar mid-flight.
    pub grab_radius: f32,

    // ========================================================================
    // Mats
    // ========================================================================
    /// Rest height of the body center above a mat's top surface.
    pub body_clearance: f32,

    /// Mat half-extent along the lateral axis (Z).
    pub mat_half_width: f32,

    /// Mat half-extent along the swing-plane axis (X).
    pub mat_half_depth: f32,

    /// Height of a mat's top surface above its anchor position.
    pub mat_surface_offset: f32,

    // ========================================================================
    // Scoring and timing
    // ========================================================================
    /// Score bonus for catching a bar.
    pub grab_score: u32,

    /// Score bonus for landing on a mat.
    pub landing_score: u32,

    /// Delay between a mat landing and the automatic reset (seconds).
    pub reset_delay: f32,

    /// Per-step cap on elapsed frame time (seconds).
    ///
    /// Long pauses (tab backgrounding, debugger stops) otherwise feed a huge
    /// dt into the integrators and blow the simulation up.
    pub max_frame_dt: f32,
}

impl Default for SwingConfig {
    fn default() -> Self {
        Self {
            // Pendulum
            gravity: -6.5,
            swing_radius: 1.15,
            damping: 0.995,
            max_swing_force: 12.0,

            // Release and grab
            release_boost: 3.0,
            grab_radius: 0.5,

            // Mats
            body_clearance: 0.5,
            mat_half_width: 1.5,
            mat_half_depth: 1.0,
            mat_surface_offset: 0.15,

            // Scoring and timing
            grab_score: 100,
            landing_score: 200,
            reset_delay: 2.0,
            max_frame_dt: 0.1,
        }
    }
}

impl SwingConfig {
    /// Top surface height for a mat anchored at `mat_y`.
    #[inline]
    pub fn mat_top(&self, mat_y: f32) -> f32 {
        mat_y + self.mat_surface_offset
    }

    /// Clamp an elapsed frame time to the stable integration range.
    #[inline]
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        dt.clamp(0.0, self.max_frame_dt)
    }
}

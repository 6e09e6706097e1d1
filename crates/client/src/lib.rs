//! Highbar Client - Host-side boundary adapters
//!
//! The simulation core is self-contained; this crate supplies the pieces a
//! host (native window or browser shell) wires around it:
//!
//! - [`input::InputHandler`] converts platform key events into the core's
//!   per-frame input snapshot.
//! - [`hud`] renders observable game events (score, falls, landings).
//! - [`clock::FrameClock`] measures elapsed wall time per animation frame.
//!
//! Event ordering guarantee: key events only ever mutate the input handler's
//! snapshot; the host passes that snapshot to `Simulation::tick`, so input
//! mutation always happens-before the next integration step.

pub mod clock;
pub mod hud;
pub mod input;

pub use clock::FrameClock;
pub use hud::{Hud, LogHud};
pub use input::InputHandler;

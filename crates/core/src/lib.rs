//! Highbar Core - Deterministic Swing Simulation
//!
//! This crate contains the complete game simulation for Highbar: a gymnast
//! swings on one of two bars, pumps momentum with directional input, releases
//! at a chosen moment, and must re-grab a bar or land on a mat.
//!
//! The core is frame-driven and self-contained: one [`Simulation::tick`] per
//! animation frame, consuming an input snapshot and an elapsed-time delta,
//! producing updated kinematic state that a rendering collaborator reads.
//!
//! # Determinism Rules
//!
//! 1. No `rand::thread_rng()` - Use `SeededRng` only
//! 2. No system time - The host passes elapsed time into `tick`
//! 3. Ordered iteration - bars and mats are checked in index order
//! 4. No async, no threads - Pure synchronous logic

pub mod arena;
pub mod config;
pub mod effects;
pub mod flight;
pub mod gymnast;
pub mod input;
pub mod random;
pub mod simulation;
pub mod swing;

pub use arena::{Arena, Bar, Mat, HIGH_BAR, LOW_BAR};
pub use config::SwingConfig;
pub use effects::FireEffect;
pub use gymnast::{Gymnast, Mode};
pub use input::SwingInput;
pub use random::SeededRng;
pub use simulation::{GameEvent, GameState, Simulation};

//! Core game simulation.
//!
//! One [`Simulation::tick`] per animation frame. The tick clamps the elapsed
//! time, routes to the pendulum or flight integrator based on the gymnast's
//! mode, runs the landing checks, animates the fire burst, and counts down
//! the delayed reset. Everything the renderer needs afterwards is in
//! [`GameState`].

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::arena::{Arena, LOW_BAR};
use crate::config::SwingConfig;
use crate::effects::FireEffect;
use crate::flight;
use crate::gymnast::{Gymnast, Mode};
use crate::input::SwingInput;
use crate::random::SeededRng;
use crate::swing;

/// Observable outcome of a frame, for HUD, audio, and score display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The gymnast let go of a bar.
    Released { bar: usize },
    /// The gymnast caught a bar mid-flight.
    BarGrabbed { bar: usize },
    /// The gymnast landed on a mat; the celebration burst started.
    Landed { mat: usize },
    /// The gymnast hit the floor off the mats.
    GroundFall,
    /// The score changed; `score` is the new total.
    ScoreChanged { score: u32 },
    /// The session snapped back to its initial state.
    Reset,
}

/// The complete mutable session state - everything needed to simulate and
/// render one frame, serializable as a unit.
#[derive(Debug, Clone, Serialize, Deserialize, Encode, Decode)]
pub struct GameState {
    /// Frames simulated since the session started.
    pub frame: u64,

    /// The gymnast.
    pub gymnast: Gymnast,

    /// Current score. Monotonic between resets.
    pub score: u32,

    /// Landing celebration burst.
    pub fire: FireEffect,

    /// Deterministic randomness source (particle scatter).
    pub rng: SeededRng,

    /// Seconds until the post-landing reset fires, when one is scheduled.
    /// Cleared by any reset, so a ground fall cannot double-fire it.
    pub pending_reset: Option<f32>,

    /// Release key state from the previous frame, for edge detection.
    pub prev_release_held: bool,
}

impl GameState {
    fn new(arena: &Arena, config: &SwingConfig, seed: u32) -> Self {
        Self {
            frame: 0,
            gymnast: Gymnast::hanging_from(LOW_BAR, arena.bar(LOW_BAR), config),
            score: 0,
            fire: FireEffect::new(),
            rng: SeededRng::new(seed),
            pending_reset: None,
            prev_release_held: false,
        }
    }
}

/// The main simulation engine.
pub struct Simulation {
    /// Physics constants, fixed for the session.
    pub config: SwingConfig,

    /// Bars and mats, fixed for the session.
    pub arena: Arena,

    /// All mutable session state.
    pub state: GameState,
}

impl Simulation {
    pub fn new(config: SwingConfig, arena: Arena, seed: u32) -> Self {
        let state = GameState::new(&arena, &config, seed);
        Self {
            config,
            arena,
            state,
        }
    }

    /// Default configuration on the standard playfield.
    pub fn standard(seed: u32) -> Self {
        Self::new(SwingConfig::default(), Arena::standard(), seed)
    }

    /// Advance the simulation by one frame.
    ///
    /// `dt` is the elapsed wall time since the previous frame; it is clamped
    /// internally so long pauses cannot destabilize the integrators.
    /// Returns the frame's observable events in the order they occurred.
    pub fn tick(&mut self, input: SwingInput, dt: f32) -> Vec<GameEvent> {
        let dt = self.config.clamp_dt(dt);
        let mut events = Vec::new();

        self.state.frame += 1;

        // Edge-detect the release key: one press, one release.
        let release_requested = input.release() && !self.state.prev_release_held;
        self.state.prev_release_held = input.release();

        match self.state.gymnast.mode {
            Mode::Holding => {
                if release_requested {
                    swing::release(&mut self.state.gymnast, &self.config);
                    events.push(GameEvent::Released {
                        bar: self.state.gymnast.bar_index,
                    });
                } else {
                    let bar_index = self.state.gymnast.bar_index;
                    swing::step_pendulum(
                        &mut self.state.gymnast,
                        &self.arena.bars[bar_index],
                        input.applied_force(self.config.max_swing_force),
                        &self.config,
                        dt,
                    );
                }
            }
            Mode::Airborne => {
                flight::step_flight(&mut self.state.gymnast, &self.config, dt);

                if let Some(bar) = flight::try_grab(&mut self.state.gymnast, &self.arena, &self.config)
                {
                    events.push(GameEvent::BarGrabbed { bar });
                    self.award(self.config.grab_score, &mut events);
                } else if !self.state.fire.active {
                    if let Some(mat) =
                        flight::try_land(&mut self.state.gymnast, &self.arena, &self.config)
                    {
                        let state = &mut self.state;
                        let origin = state.gymnast.position;
                        state.fire.ignite(origin, &mut state.rng);
                        state.pending_reset = Some(self.config.reset_delay);

                        events.push(GameEvent::Landed { mat });
                        self.award(self.config.landing_score, &mut events);
                        log::info!("landed on mat {mat}");
                    } else if flight::below_ground(&self.state.gymnast) {
                        events.push(GameEvent::GroundFall);
                        self.reset(&mut events);
                    }
                }
            }
        }

        // Effect sub-system runs after whichever integrator was active.
        self.state.fire.update(dt);

        // Delayed post-landing reset, frame-clocked so it cannot race the
        // ground-fall reset above.
        if let Some(remaining) = self.state.pending_reset {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.reset(&mut events);
            } else {
                self.state.pending_reset = Some(remaining);
            }
        }

        events
    }

    /// Snap the session back to its initial state: hanging at rest from the
    /// low bar, score zeroed, burst hidden, pending reset cancelled.
    fn reset(&mut self, events: &mut Vec<GameEvent>) {
        self.state.gymnast =
            Gymnast::hanging_from(LOW_BAR, self.arena.bar(LOW_BAR), &self.config);
        self.state.score = 0;
        self.state.fire.extinguish();
        self.state.pending_reset = None;

        events.push(GameEvent::Reset);
        events.push(GameEvent::ScoreChanged { score: 0 });
        log::info!("session reset");
    }

    fn award(&mut self, points: u32, events: &mut Vec<GameEvent>) {
        self.state.score += points;
        events.push(GameEvent::ScoreChanged {
            score: self.state.score,
        });
    }

    /// Get the current frame number.
    pub fn frame(&self) -> u64 {
        self.state.frame
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Serialize the current state for snapshots.
    pub fn serialize_state(&self) -> Vec<u8> {
        bincode::encode_to_vec(&self.state, bincode::config::standard())
            .expect("serialization should not fail")
    }

    /// Deserialize and restore a previously captured state.
    pub fn deserialize_state(&mut self, data: &[u8]) -> Result<(), bincode::error::DecodeError> {
        let (state, _): (GameState, _) =
            bincode::decode_from_slice(data, bincode::config::standard())?;
        self.state = state;
        Ok(())
    }
}

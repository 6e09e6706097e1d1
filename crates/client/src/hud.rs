//! HUD rendering of observable game events.
//!
//! The score display is a boundary: the core emits events, the host shows
//! them however it likes. Implementations are presence-checked no-ops - a
//! host without a score surface just skips wiring a HUD at all.

use highbar_core::GameEvent;

/// HUD abstraction for platform-specific score/status display.
pub trait Hud {
    /// The score changed; show the new total.
    fn show_score(&mut self, score: u32);

    /// The gymnast stuck a mat landing.
    fn show_landing(&mut self);

    /// The gymnast hit the floor; the session is restarting.
    fn show_fall(&mut self);
}

/// Route one frame's events to a HUD.
pub fn dispatch(hud: &mut dyn Hud, events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::ScoreChanged { score } => hud.show_score(*score),
            GameEvent::Landed { .. } => hud.show_landing(),
            GameEvent::GroundFall => hud.show_fall(),
            _ => {}
        }
    }
}

/// Structured-log HUD for headless hosts and debugging.
#[derive(Debug, Default)]
pub struct LogHud;

impl Hud for LogHud {
    fn show_score(&mut self, score: u32) {
        tracing::info!(score, "score");
    }

    fn show_landing(&mut self) {
        tracing::info!("stuck the landing");
    }

    fn show_fall(&mut self) {
        tracing::info!("fell off the mats");
    }
}

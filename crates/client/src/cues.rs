//! Audio/vibration side channel.
//!
//! Sound cues become the terminal bell; vibration cues become a short
//! full-screen flash. Both are fire-and-forget: a cue that cannot be
//! delivered is logged and dropped, never surfaced as an error.

use std::io::Write;
use std::time::Duration;

use runtime::CueEvent;

use crate::state::AppState;

const FLASH_DURATION: Duration = Duration::from_millis(150);

pub struct CuePlayer;

impl CuePlayer {
    pub fn new() -> Self {
        Self
    }

    /// Delivers one cue, honoring the current sound/vibration settings.
    pub fn play(&self, cue: CueEvent, app_state: &mut AppState) {
        if app_state.settings.sound_enabled {
            self.ring_bell(cue);
        }
        if cue.vibrate && app_state.settings.vibration_enabled {
            app_state.start_flash(FLASH_DURATION);
        }
    }

    fn ring_bell(&self, cue: CueEvent) {
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            tracing::debug!(kind = ?cue.kind, "failed to ring bell: {e}");
        }
    }
}

impl Default for CuePlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use match_core::{CueKind, Settings};

    fn cue(kind: CueKind, vibrate: bool) -> CueEvent {
        CueEvent { kind, vibrate }
    }

    fn state(settings: Settings) -> AppState {
        AppState::new(settings, Vec::new(), Duration::from_secs(1))
    }

    #[test]
    fn vibration_cue_starts_a_flash() {
        let player = CuePlayer::new();
        let mut app_state = state(Settings::default());
        player.play(cue(CueKind::TimeUp, true), &mut app_state);
        assert!(app_state.flash_active());
    }

    #[test]
    fn vibration_setting_suppresses_the_flash() {
        let player = CuePlayer::new();
        let mut app_state = state(Settings {
            vibration_enabled: false,
            ..Settings::default()
        });
        player.play(cue(CueKind::TimeUp, true), &mut app_state);
        assert!(!app_state.flash_active());
    }

    #[test]
    fn non_vibrating_cue_does_not_flash() {
        let player = CuePlayer::new();
        let mut app_state = state(Settings::default());
        player.play(cue(CueKind::Score, false), &mut app_state);
        assert!(!app_state.flash_active());
    }
}

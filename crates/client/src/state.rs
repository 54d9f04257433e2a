//! Application state for screen routing and UI context.

use std::time::{Duration, Instant};

use match_core::{MatchConfig, Settings};
use runtime::{MatchRecord, SessionSnapshot};

/// Top-level screen determining input handling and layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppScreen {
    /// Player names and target score entry.
    Setup,
    /// The live match. A winner overlay renders on top once decided.
    Scoreboard,
    /// Sound/vibration/timer/theme preferences.
    Settings,
    /// Saved match records, newest first.
    History,
}

/// Which setup field has focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupField {
    Player1,
    Player2,
    RaceTo,
}

/// Editable state of the setup screen.
#[derive(Clone, Debug)]
pub struct SetupForm {
    pub player1_name: String,
    pub player2_name: String,
    pub race_to_index: usize,
    pub focus: SetupField,
}

impl SetupForm {
    const MAX_NAME_LEN: usize = 24;

    pub fn race_to(&self) -> u32 {
        MatchConfig::RACE_TO_OPTIONS[self.race_to_index]
    }

    /// Builds the setup payload. Blank names fall back to the defaults.
    pub fn config(&self) -> MatchConfig {
        MatchConfig::new(
            self.player1_name.clone(),
            self.player2_name.clone(),
            self.race_to(),
        )
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            SetupField::Player1 => SetupField::Player2,
            SetupField::Player2 => SetupField::RaceTo,
            SetupField::RaceTo => SetupField::Player1,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            SetupField::Player1 => SetupField::RaceTo,
            SetupField::Player2 => SetupField::Player1,
            SetupField::RaceTo => SetupField::Player2,
        };
    }

    /// Types a character into the focused name field.
    pub fn push_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        if let Some(field) = self.focused_name_mut()
            && field.chars().count() < Self::MAX_NAME_LEN
        {
            field.push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_name_mut() {
            field.pop();
        }
    }

    /// Steps the race-to selector left or right, wrapping around.
    pub fn cycle_race_to(&mut self, step: i32) {
        let len = MatchConfig::RACE_TO_OPTIONS.len() as i32;
        let idx = self.race_to_index as i32 + step;
        self.race_to_index = idx.rem_euclid(len) as usize;
    }

    fn focused_name_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            SetupField::Player1 => Some(&mut self.player1_name),
            SetupField::Player2 => Some(&mut self.player2_name),
            SetupField::RaceTo => None,
        }
    }
}

impl Default for SetupForm {
    fn default() -> Self {
        let default_index = MatchConfig::RACE_TO_OPTIONS
            .iter()
            .position(|&n| n == MatchConfig::DEFAULT_RACE_TO)
            .unwrap_or(0);

        Self {
            player1_name: String::new(),
            player2_name: String::new(),
            race_to_index: default_index,
            focus: SetupField::Player1,
        }
    }
}

/// Transient status-line notification.
#[derive(Clone, Debug)]
pub struct Notice {
    pub text: String,
    pub expires_at: Instant,
}

/// Mutable client-side state: screen routing plus cached runtime views.
pub struct AppState {
    pub screen: AppScreen,
    pub setup: SetupForm,
    /// Local copy of the settings, kept in sync via SettingsChanged events.
    pub settings: Settings,
    /// Latest session snapshot; `None` while no match is active.
    pub snapshot: Option<SessionSnapshot>,
    /// Cached history, newest first.
    pub history: Vec<MatchRecord>,
    pub history_scroll: usize,
    /// Clear-history asks for confirmation first.
    pub confirm_clear: bool,
    pub notice: Option<Notice>,
    /// Vibration cues flash the screen until this deadline.
    pub flash_until: Option<Instant>,
    notice_ttl: Duration,
}

impl AppState {
    pub fn new(settings: Settings, history: Vec<MatchRecord>, notice_ttl: Duration) -> Self {
        Self {
            screen: AppScreen::Setup,
            setup: SetupForm::default(),
            settings,
            snapshot: None,
            history,
            history_scroll: 0,
            confirm_clear: false,
            notice: None,
            flash_until: None,
            notice_ttl,
        }
    }

    pub fn set_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            expires_at: Instant::now() + self.notice_ttl,
        });
    }

    pub fn start_flash(&mut self, duration: Duration) {
        self.flash_until = Some(Instant::now() + duration);
    }

    pub fn flash_active(&self) -> bool {
        self.flash_until.is_some_and(|until| Instant::now() < until)
    }

    /// Drops the notice and flash once their deadlines pass.
    /// Returns true if anything changed (a redraw is needed).
    pub fn expire_transients(&mut self) -> bool {
        let now = Instant::now();
        let mut changed = false;

        if self
            .notice
            .as_ref()
            .is_some_and(|notice| now >= notice.expires_at)
        {
            self.notice = None;
            changed = true;
        }

        if self.flash_until.is_some_and(|until| now >= until) {
            self.flash_until = None;
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_defaults_select_race_to_seven() {
        let form = SetupForm::default();
        assert_eq!(form.race_to(), 7);
        assert_eq!(form.focus, SetupField::Player1);
    }

    #[test]
    fn blank_names_produce_default_config() {
        let form = SetupForm::default();
        let config = form.config();
        assert_eq!(config.player1_name, "Player 1");
        assert_eq!(config.player2_name, "Player 2");
        assert_eq!(config.race_to, 7);
    }

    #[test]
    fn typing_targets_the_focused_field() {
        let mut form = SetupForm::default();
        form.push_char('A');
        form.focus_next();
        form.push_char('B');
        assert_eq!(form.player1_name, "A");
        assert_eq!(form.player2_name, "B");

        form.backspace();
        assert_eq!(form.player2_name, "");

        // The race-to field ignores typed characters.
        form.focus_next();
        form.push_char('x');
        assert_eq!(form.player1_name, "A");
        assert_eq!(form.player2_name, "");
    }

    #[test]
    fn race_to_cycles_and_wraps() {
        let mut form = SetupForm::default();
        assert_eq!(form.race_to(), 7);
        form.cycle_race_to(1);
        assert_eq!(form.race_to(), 9);
        form.cycle_race_to(-2);
        assert_eq!(form.race_to(), 5);
        for _ in 0..MatchConfig::RACE_TO_OPTIONS.len() {
            form.cycle_race_to(1);
        }
        assert_eq!(form.race_to(), 5);
    }

    #[test]
    fn focus_wraps_both_directions() {
        let mut form = SetupForm::default();
        form.focus_prev();
        assert_eq!(form.focus, SetupField::RaceTo);
        form.focus_next();
        assert_eq!(form.focus, SetupField::Player1);
    }

    #[test]
    fn transients_expire() {
        let mut state = AppState::new(Settings::default(), Vec::new(), Duration::from_millis(0));
        state.set_notice("saved");
        state.flash_until = Some(Instant::now());

        assert!(state.expire_transients());
        assert!(state.notice.is_none());
        assert!(!state.flash_active());
        assert!(!state.expire_transients());
    }
}

//! Input processing for the terminal client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use match_core::PlayerSlot;
use runtime::ScoreDelta;

use crate::state::AppScreen;

/// High-level outcome of processing a keyboard event.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,

    // Setup screen
    FocusNext,
    FocusPrev,
    Insert(char),
    Backspace,
    CycleRaceTo(i32),
    BeginMatch,
    OpenSettings,
    OpenHistory,

    // Scoreboard screen
    Score { slot: PlayerSlot, delta: ScoreDelta },
    SaveResult,
    PlayAgain,
    NewGame,

    // Settings screen
    ToggleSound,
    ToggleVibration,
    ToggleTimer,
    CycleTimerDuration,
    CycleTheme,

    // History screen
    RequestClear,
    ConfirmClear,
    CancelClear,
    ScrollUp,
    ScrollDown,

    /// Leave a sub-screen, back to setup.
    Back,

    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into client commands based on the active screen.
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, screen: AppScreen) -> KeyAction {
        match screen {
            AppScreen::Setup => self.handle_setup_key(key),
            AppScreen::Scoreboard => self.handle_scoreboard_key(key),
            AppScreen::Settings => self.handle_settings_key(key),
            AppScreen::History => self.handle_history_key(key),
        }
    }

    fn handle_setup_key(&self, key: KeyEvent) -> KeyAction {
        // Ctrl shortcuts first; plain characters type into the name fields.
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => KeyAction::OpenSettings,
                KeyCode::Char('h') => KeyAction::OpenHistory,
                KeyCode::Char('c') => KeyAction::Quit,
                _ => KeyAction::None,
            };
        }

        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Enter => KeyAction::BeginMatch,
            KeyCode::Tab | KeyCode::Down => KeyAction::FocusNext,
            KeyCode::BackTab | KeyCode::Up => KeyAction::FocusPrev,
            KeyCode::Left => KeyAction::CycleRaceTo(-1),
            KeyCode::Right => KeyAction::CycleRaceTo(1),
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(ch) => KeyAction::Insert(ch),
            _ => KeyAction::None,
        }
    }

    fn handle_scoreboard_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                'a' => KeyAction::Score {
                    slot: PlayerSlot::One,
                    delta: ScoreDelta::Increment,
                },
                'z' => KeyAction::Score {
                    slot: PlayerSlot::One,
                    delta: ScoreDelta::Decrement,
                },
                'k' => KeyAction::Score {
                    slot: PlayerSlot::Two,
                    delta: ScoreDelta::Increment,
                },
                'm' => KeyAction::Score {
                    slot: PlayerSlot::Two,
                    delta: ScoreDelta::Decrement,
                },
                's' => KeyAction::SaveResult,
                'r' => KeyAction::PlayAgain,
                'n' => KeyAction::NewGame,
                _ => KeyAction::None,
            },
            KeyCode::Esc => KeyAction::NewGame,
            _ => KeyAction::None,
        }
    }

    fn handle_settings_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Back,
                's' => KeyAction::ToggleSound,
                'v' => KeyAction::ToggleVibration,
                't' => KeyAction::ToggleTimer,
                'd' => KeyAction::CycleTimerDuration,
                'c' => KeyAction::CycleTheme,
                _ => KeyAction::None,
            },
            KeyCode::Esc => KeyAction::Back,
            _ => KeyAction::None,
        }
    }

    fn handle_history_key(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Back,
                'c' => KeyAction::RequestClear,
                'y' => KeyAction::ConfirmClear,
                'n' => KeyAction::CancelClear,
                'k' => KeyAction::ScrollUp,
                'j' => KeyAction::ScrollDown,
                _ => KeyAction::None,
            },
            KeyCode::Up => KeyAction::ScrollUp,
            KeyCode::Down => KeyAction::ScrollDown,
            KeyCode::Esc => KeyAction::CancelClear,
            _ => KeyAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(ch),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn setup_typing_and_navigation() {
        let input = InputHandler::new();
        assert_eq!(
            input.handle_key(key(KeyCode::Char('a')), AppScreen::Setup),
            KeyAction::Insert('a')
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Tab), AppScreen::Setup),
            KeyAction::FocusNext
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Enter), AppScreen::Setup),
            KeyAction::BeginMatch
        );
        assert_eq!(
            input.handle_key(ctrl('h'), AppScreen::Setup),
            KeyAction::OpenHistory
        );
        assert_eq!(
            input.handle_key(ctrl('s'), AppScreen::Setup),
            KeyAction::OpenSettings
        );
    }

    #[test]
    fn scoreboard_score_keys() {
        let input = InputHandler::new();
        assert_eq!(
            input.handle_key(key(KeyCode::Char('a')), AppScreen::Scoreboard),
            KeyAction::Score {
                slot: PlayerSlot::One,
                delta: ScoreDelta::Increment
            }
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Char('m')), AppScreen::Scoreboard),
            KeyAction::Score {
                slot: PlayerSlot::Two,
                delta: ScoreDelta::Decrement
            }
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Char('r')), AppScreen::Scoreboard),
            KeyAction::PlayAgain
        );
    }

    #[test]
    fn history_clear_flow_keys() {
        let input = InputHandler::new();
        assert_eq!(
            input.handle_key(key(KeyCode::Char('c')), AppScreen::History),
            KeyAction::RequestClear
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Char('y')), AppScreen::History),
            KeyAction::ConfirmClear
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Esc), AppScreen::History),
            KeyAction::CancelClear
        );
    }

    #[test]
    fn escape_leaves_subscreens() {
        let input = InputHandler::new();
        assert_eq!(
            input.handle_key(key(KeyCode::Esc), AppScreen::Settings),
            KeyAction::Back
        );
        assert_eq!(
            input.handle_key(key(KeyCode::Esc), AppScreen::Scoreboard),
            KeyAction::NewGame
        );
    }
}

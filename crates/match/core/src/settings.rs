//! User preferences: sound, vibration, turn timer, and color theme.

use strum::{Display, EnumIter, IntoEnumIterator};

/// Color theme for the scoreboard UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Theme {
    #[default]
    #[strum(serialize = "Default")]
    Default,
    #[strum(serialize = "Dark")]
    Dark,
    #[strum(serialize = "High Contrast")]
    HighContrast,
}

impl Theme {
    /// The next theme in display order, wrapping around.
    pub fn cycled(self) -> Self {
        let mut themes = Theme::iter().cycle();
        themes.find(|t| *t == self);
        themes.next().unwrap_or_default()
    }
}

/// Process-wide user settings.
///
/// Loaded once at startup and persisted on every change. Unknown or missing
/// fields deserialize to their defaults so older settings files keep working.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Settings {
    pub sound_enabled: bool,
    pub timer_duration: u32,
    pub timer_enabled: bool,
    pub theme: Theme,
    pub vibration_enabled: bool,
}

impl Settings {
    pub const DEFAULT_TIMER_DURATION: u32 = 30;

    /// Countdown lengths offered on the settings screen, in seconds.
    pub const TIMER_DURATION_OPTIONS: [u32; 6] = [15, 30, 45, 60, 90, 120];

    /// The next duration option after `current`, wrapping around.
    pub fn next_timer_duration(current: u32) -> u32 {
        let options = Self::TIMER_DURATION_OPTIONS;
        match options.iter().position(|&d| d == current) {
            Some(idx) => options[(idx + 1) % options.len()],
            None => Self::DEFAULT_TIMER_DURATION,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            timer_duration: Self::DEFAULT_TIMER_DURATION,
            timer_enabled: true,
            theme: Theme::Default,
            vibration_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let settings = Settings::default();
        assert!(settings.sound_enabled);
        assert_eq!(settings.timer_duration, 30);
        assert!(settings.timer_enabled);
        assert_eq!(settings.theme, Theme::Default);
        assert!(settings.vibration_enabled);
    }

    #[test]
    fn theme_cycles_through_all_variants() {
        let mut theme = Theme::Default;
        theme = theme.cycled();
        assert_eq!(theme, Theme::Dark);
        theme = theme.cycled();
        assert_eq!(theme, Theme::HighContrast);
        theme = theme.cycled();
        assert_eq!(theme, Theme::Default);
    }

    #[test]
    fn duration_cycles_and_recovers_from_unknown_values() {
        assert_eq!(Settings::next_timer_duration(30), 45);
        assert_eq!(Settings::next_timer_duration(120), 15);
        assert_eq!(Settings::next_timer_duration(42), 30);
    }
}

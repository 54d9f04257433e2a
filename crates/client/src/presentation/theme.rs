//! Theme-to-style mapping for the terminal UI.
//!
//! A [`Palette`] is the single source of styling for all widgets, so the
//! three user-selectable themes stay consistent across screens.

use match_core::{Theme, TimerPhase};
use ratatui::style::{Color, Modifier, Style};

/// Concrete colors for one theme.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub player1: Color,
    pub player2: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub warning: Color,
    pub winner: Color,
    pub flash_bg: Color,
    pub border: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Default => Self {
                player1: Color::Blue,
                player2: Color::Red,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                warning: Color::Yellow,
                winner: Color::Green,
                flash_bg: Color::Yellow,
                border: Color::Cyan,
            },
            Theme::Dark => Self {
                player1: Color::LightBlue,
                player2: Color::LightRed,
                text: Color::Gray,
                muted: Color::DarkGray,
                accent: Color::LightMagenta,
                warning: Color::LightYellow,
                winner: Color::LightGreen,
                flash_bg: Color::DarkGray,
                border: Color::DarkGray,
            },
            Theme::HighContrast => Self {
                player1: Color::White,
                player2: Color::Yellow,
                text: Color::White,
                muted: Color::Gray,
                accent: Color::White,
                warning: Color::Yellow,
                winner: Color::White,
                flash_bg: Color::White,
                border: Color::White,
            },
        }
    }

    pub fn player(&self, is_player1: bool) -> Color {
        if is_player1 { self.player1 } else { self.player2 }
    }

    /// Score emphasis: the leading player renders bold.
    pub fn score_style(&self, is_player1: bool, leading: bool) -> Style {
        let mut style = Style::default().fg(self.player(is_player1));
        if leading {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    pub fn hill_style(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }

    pub fn timer_style(&self, phase: TimerPhase) -> Style {
        match phase {
            TimerPhase::Warning => Style::default()
                .fg(self.warning)
                .add_modifier(Modifier::BOLD | Modifier::RAPID_BLINK),
            TimerPhase::Expired => Style::default().fg(self.warning),
            TimerPhase::Running => Style::default().fg(self.text),
            TimerPhase::Idle => Style::default().fg(self.muted),
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn winner_style(&self) -> Style {
        Style::default()
            .fg(self.winner)
            .add_modifier(Modifier::BOLD)
    }

    pub fn notice_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn key_hint_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn flash_style(&self) -> Style {
        Style::default().bg(self.flash_bg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_theme_has_distinct_player_colors() {
        for theme in [Theme::Default, Theme::Dark, Theme::HighContrast] {
            let palette = Palette::for_theme(theme);
            assert_ne!(palette.player1, palette.player2);
        }
    }
}

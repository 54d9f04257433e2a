//! Footer widget with per-screen key hints.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Palette;
use crate::state::AppScreen;

pub fn render(frame: &mut Frame, area: Rect, screen: AppScreen, palette: &Palette) {
    let hints: &[(&str, &str)] = match screen {
        AppScreen::Setup => &[
            ("Tab", "Next field"),
            ("←/→", "Race to"),
            ("Enter", "Begin"),
            ("^S", "Settings"),
            ("^H", "History"),
            ("Esc", "Quit"),
        ],
        AppScreen::Scoreboard => &[
            ("a/z", "P1 +/-"),
            ("k/m", "P2 +/-"),
            ("s", "Save"),
            ("r", "Play again"),
            ("n", "New game"),
            ("q", "Quit"),
        ],
        AppScreen::Settings => &[("Esc", "Back")],
        AppScreen::History => &[
            ("↑/↓", "Scroll"),
            ("c", "Clear all"),
            ("Esc", "Back"),
        ],
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled((*key).to_string(), palette.key_hint_style()));
        spans.push(Span::styled(format!(" {label}  "), palette.muted_style()));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(paragraph, area);
}

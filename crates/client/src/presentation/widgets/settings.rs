//! Settings screen: sound, vibration, timer, and theme preferences.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use match_core::Settings;

use crate::presentation::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, settings: &Settings, palette: &Palette) {
    let on_off = |enabled: bool| if enabled { "On" } else { "Off" };

    let row = |key: &str, label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {key}  "), palette.key_hint_style()),
            Span::styled(format!("{label:<16}"), palette.muted_style()),
            Span::styled(value, ratatui::style::Style::default().fg(palette.text)),
        ])
    };

    let lines = vec![
        Line::from(""),
        row("s", "Sound", on_off(settings.sound_enabled).to_string()),
        Line::from(""),
        row(
            "v",
            "Vibration",
            on_off(settings.vibration_enabled).to_string(),
        ),
        Line::from(""),
        row("t", "Turn timer", on_off(settings.timer_enabled).to_string()),
        Line::from(""),
        row(
            "d",
            "Timer duration",
            format!("{}s", settings.timer_duration),
        ),
        Line::from(""),
        row("c", "Theme", settings.theme.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "  Changes are saved immediately",
            palette.muted_style(),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style())
            .title(" Settings ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(paragraph, area);
}

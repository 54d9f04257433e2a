//! Setup screen: player names and target score.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use match_core::MatchConfig;

use crate::presentation::theme::Palette;
use crate::state::{AppState, SetupField};

pub fn render(frame: &mut Frame, area: Rect, app_state: &AppState, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title banner
            Constraint::Min(0),    // Form
        ])
        .split(area);

    render_title(frame, chunks[0], palette);
    render_form(frame, chunks[1], app_state, palette);
}

fn render_title(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled("RACEBOARD", palette.title_style())),
        Line::from(Span::styled(
            "Track your game scores with style",
            palette.muted_style(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style()),
    );

    frame.render_widget(title, area);
}

fn render_form(frame: &mut Frame, area: Rect, app_state: &AppState, palette: &Palette) {
    let form = &app_state.setup;

    let name_line = |label: &str, value: &str, placeholder: &str, focused: bool| {
        let marker = if focused { "► " } else { "  " };
        let shown = if value.is_empty() { placeholder } else { value };
        let value_style = if value.is_empty() {
            palette.muted_style()
        } else {
            ratatui::style::Style::default().fg(palette.text)
        };
        let cursor = if focused { "_" } else { "" };

        Line::from(vec![
            Span::styled(marker.to_string(), palette.key_hint_style()),
            Span::styled(format!("{label:<10}"), palette.muted_style()),
            Span::styled(shown.to_string(), value_style),
            Span::styled(cursor.to_string(), palette.key_hint_style()),
        ])
    };

    let race_focused = form.focus == SetupField::RaceTo;
    let race_marker = if race_focused { "► " } else { "  " };
    let race_line = Line::from(vec![
        Span::styled(race_marker.to_string(), palette.key_hint_style()),
        Span::styled(format!("{:<10}", "Race to"), palette.muted_style()),
        Span::styled("◄ ", palette.key_hint_style()),
        Span::styled(
            format!("{} points", form.race_to()),
            palette.title_style(),
        ),
        Span::styled(" ►", palette.key_hint_style()),
    ]);

    let lines = vec![
        Line::from(""),
        name_line(
            "Player 1",
            &form.player1_name,
            MatchConfig::DEFAULT_PLAYER1_NAME,
            form.focus == SetupField::Player1,
        ),
        Line::from(""),
        name_line(
            "Player 2",
            &form.player2_name,
            MatchConfig::DEFAULT_PLAYER2_NAME,
            form.focus == SetupField::Player2,
        ),
        Line::from(""),
        race_line,
        Line::from(""),
        Line::from(Span::styled(
            "Enter to begin",
            palette.title_style(),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Left).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style())
            .title(" New Game ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(paragraph, area);
}

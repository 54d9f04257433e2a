//! Scoreboard screen: two player panels with a center race-to/timer overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use match_core::{PlayerSlot, TimerPhase};
use runtime::SessionSnapshot;

use crate::presentation::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Turn indicator
            Constraint::Min(0),    // Player panels
        ])
        .split(area);

    render_turn_indicator(frame, chunks[0], snapshot, palette);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_player_panel(frame, panels[0], snapshot, PlayerSlot::One, palette);
    render_player_panel(frame, panels[1], snapshot, PlayerSlot::Two, palette);

    render_center_overlay(frame, chunks[1], snapshot, palette);
}

fn render_turn_indicator(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SessionSnapshot,
    palette: &Palette,
) {
    let warning = snapshot.timer_phase == TimerPhase::Warning;

    let text = if snapshot.winner.is_some() {
        Line::from(Span::styled("Match over", palette.winner_style()))
    } else {
        let style = if warning {
            palette.hill_style()
        } else {
            ratatui::style::Style::default().fg(palette.text)
        };
        Line::from(Span::styled(
            format!("{}'s Turn", snapshot.player_name(snapshot.active_player)),
            style,
        ))
    };

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style()),
    );

    frame.render_widget(paragraph, area);
}

fn render_player_panel(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SessionSnapshot,
    slot: PlayerSlot,
    palette: &Palette,
) {
    let is_player1 = slot == PlayerSlot::One;
    let score = snapshot.score(slot);
    let leading = score > snapshot.score(slot.opponent());
    let active = snapshot.winner.is_none() && snapshot.active_player == slot;

    let mut lines = vec![Line::from("")];

    let marker = if active { "● " } else { "" };
    lines.push(
        Line::from(vec![
            Span::styled(marker.to_string(), palette.key_hint_style()),
            Span::styled(
                snapshot.player_name(slot).to_string(),
                ratatui::style::Style::default()
                    .fg(palette.player(is_player1))
                    .add_modifier(ratatui::style::Modifier::BOLD),
            ),
        ])
        .alignment(Alignment::Center),
    );

    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            score.to_string(),
            palette.score_style(is_player1, leading),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::from(""));

    if snapshot.on_hill(slot) {
        lines.push(
            Line::from(Span::styled("▲ ON THE HILL ▲", palette.hill_style()))
                .alignment(Alignment::Center),
        );
    } else {
        lines.push(Line::from(""));
    }

    lines.push(Line::from(""));
    let keys = if is_player1 { "a + / z -" } else { "k + / m -" };
    lines.push(
        Line::from(Span::styled(keys.to_string(), palette.muted_style()))
            .alignment(Alignment::Center),
    );

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(ratatui::style::Style::default().fg(palette.player(is_player1))),
    );

    frame.render_widget(paragraph, area);
}

fn render_center_overlay(
    frame: &mut Frame,
    area: Rect,
    snapshot: &SessionSnapshot,
    palette: &Palette,
) {
    let width = 16u16.min(area.width);
    let height = if snapshot.timer_enabled { 5 } else { 4 };
    let overlay = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height: height.min(area.height),
    };

    let mut lines = vec![
        Line::from(Span::styled("RACE TO", palette.muted_style())),
        Line::from(Span::styled(
            snapshot.config.race_to.to_string(),
            palette.title_style(),
        )),
    ];

    if snapshot.timer_enabled {
        let label = match snapshot.timer_phase {
            TimerPhase::Idle => "--".to_string(),
            _ => format!("{}s", snapshot.timer_remaining),
        };
        lines.push(Line::from(Span::styled(
            label,
            palette.timer_style(snapshot.timer_phase),
        )));
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style()),
    );

    frame.render_widget(Clear, overlay);
    frame.render_widget(paragraph, overlay);
}

//! UI rendering entry point.
//!
//! Routes rendering by the current screen, then stacks overlays on top:
//! the winner modal, the transient notice line, and the vibration flash.
use anyhow::Result;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::presentation::{terminal::Tui, theme::Palette, widgets};
use crate::state::{AppScreen, AppState};

pub fn render(terminal: &mut Tui, app_state: &AppState) -> Result<()> {
    let palette = Palette::for_theme(app_state.settings.theme);

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Screen body
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());
        let body = chunks[0];

        match app_state.screen {
            AppScreen::Setup => widgets::setup::render(frame, body, app_state, &palette),
            AppScreen::Scoreboard => {
                if let Some(snapshot) = &app_state.snapshot {
                    widgets::scoreboard::render(frame, body, snapshot, &palette);
                    if snapshot.winner.is_some() {
                        let overlay = centered_rect(50, 60, body);
                        widgets::winner_overlay::render(frame, overlay, snapshot, &palette);
                    }
                }
            }
            AppScreen::Settings => {
                widgets::settings::render(frame, body, &app_state.settings, &palette)
            }
            AppScreen::History => widgets::history::render(
                frame,
                body,
                &app_state.history,
                app_state.history_scroll,
                app_state.confirm_clear,
                &palette,
            ),
        }

        widgets::footer::render(frame, chunks[1], app_state.screen, &palette);

        if let Some(notice) = &app_state.notice {
            render_notice(frame, body, &notice.text, &palette);
        }

        if app_state.flash_active() {
            frame.render_widget(Block::default().style(palette.flash_style()), frame.area());
        }
    })?;

    Ok(())
}

fn render_notice(frame: &mut ratatui::Frame, area: Rect, text: &str, palette: &Palette) {
    let line = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        palette.notice_style(),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, line);
}

/// Create a centered rectangle for modal overlays.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

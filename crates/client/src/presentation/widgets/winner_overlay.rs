//! Winner overlay rendered on top of the scoreboard once a match is decided.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use runtime::SessionSnapshot;

use crate::presentation::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot, palette: &Palette) {
    let Some(winner_name) = snapshot.winner_name.as_deref() else {
        return;
    };

    let save_line = if snapshot.result_saved {
        Line::from(Span::styled("Result saved ✓", palette.muted_style()))
    } else {
        Line::from(vec![
            Span::styled("s", palette.key_hint_style()),
            Span::styled(" Save Result", palette.muted_style()),
        ])
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("Winner!", palette.winner_style())),
        Line::from(""),
        Line::from(Span::styled(
            winner_name.to_string(),
            palette.title_style(),
        )),
        Line::from(""),
        save_line,
        Line::from(vec![
            Span::styled("r", palette.key_hint_style()),
            Span::styled(" Play Again", palette.muted_style()),
        ]),
        Line::from(vec![
            Span::styled("n", palette.key_hint_style()),
            Span::styled(" New Game", palette.muted_style()),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(palette.border_style())
            .title(" Match Over ")
            .title_alignment(Alignment::Center),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

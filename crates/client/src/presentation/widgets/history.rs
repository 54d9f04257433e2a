//! Match history screen: saved records, newest first.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use match_core::PlayerSlot;
use runtime::MatchRecord;

use crate::presentation::theme::Palette;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    records: &[MatchRecord],
    scroll: usize,
    confirm_clear: bool,
    palette: &Palette,
) {
    if confirm_clear {
        render_confirm(frame, area, records.len(), palette);
        return;
    }

    if records.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "No matches saved yet",
                palette.muted_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Finish a game and press s to save it",
                palette.muted_style(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(title_block(palette));

        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = records
        .iter()
        .skip(scroll)
        .map(|record| record_item(record, palette))
        .collect();

    let list = List::new(items).block(title_block(palette));
    frame.render_widget(list, area);
}

fn record_item<'a>(record: &'a MatchRecord, palette: &Palette) -> ListItem<'a> {
    let trophy = |name: &str| record.winner == name;

    let name_span = |name: &'a str, slot: PlayerSlot| {
        let color = palette.player(slot == PlayerSlot::One);
        let mut style = ratatui::style::Style::default().fg(color);
        if trophy(name) {
            style = style.add_modifier(ratatui::style::Modifier::BOLD);
        }
        Span::styled(name, style)
    };

    let score_line = Line::from(vec![
        Span::styled(
            if trophy(&record.player1_name) { "🏆 " } else { "   " },
            palette.muted_style(),
        ),
        name_span(&record.player1_name, PlayerSlot::One),
        Span::styled(
            format!("  {} — {}  ", record.player1_score, record.player2_score),
            ratatui::style::Style::default().fg(palette.text),
        ),
        name_span(&record.player2_name, PlayerSlot::Two),
        Span::styled(
            if trophy(&record.player2_name) { " 🏆" } else { "" },
            palette.muted_style(),
        ),
    ]);

    let detail_line = Line::from(Span::styled(
        format!(
            "   race to {} · {}",
            record.race_to,
            record.finished_at.format("%Y-%m-%d %H:%M")
        ),
        palette.muted_style(),
    ));

    ListItem::new(vec![score_line, detail_line, Line::from("")])
}

fn render_confirm(frame: &mut Frame, area: Rect, count: usize, palette: &Palette) {
    let confirm = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Delete all {count} saved matches?"),
            palette.hill_style(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", palette.key_hint_style()),
            Span::styled(" Yes, clear everything   ", palette.muted_style()),
            Span::styled("n", palette.key_hint_style()),
            Span::styled(" Keep history", palette.muted_style()),
        ]),
    ])
    .alignment(Alignment::Center)
    .block(title_block(palette));

    frame.render_widget(confirm, area);
}

fn title_block(palette: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(palette.border_style())
        .title(" Match History ")
        .title_alignment(Alignment::Center)
}

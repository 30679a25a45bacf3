use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let is_active = state.mode == Mode::Cards;
    let store = state.workspace.store();

    let block = Block::default()
        .title(format!(" Cards ({}) ", store.len()))
        .borders(Borders::ALL)
        .border_style(if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    let items: Vec<ListItem> = store
        .iter()
        .map(|card| {
            ListItem::new(Line::from(vec![
                Span::styled(card.front.clone(), Style::default().fg(Color::Yellow)),
                Span::styled(" \u{2192} ", Style::default().fg(Color::DarkGray)),
                Span::raw(card.back.clone()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(if is_active { Color::DarkGray } else { Color::Black })
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    // While studying, follow the card on screen
    let selected = match state.workspace.study().session() {
        Some(session) => session.card_index(),
        None => state.selected,
    };

    let mut list_state = ListState::default();
    if !store.is_empty() {
        list_state.select(Some(selected));
    }

    f.render_stateful_widget(list, area, &mut list_state);
}

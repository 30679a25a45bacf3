use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use vocards_lib::flashcards::Face;

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    if state.mode == Mode::Study {
        draw_study(f, area, state);
    } else {
        draw_selected(f, area, state);
    }
}

fn draw_study(f: &mut Frame, area: Rect, state: &TuiState) {
    let store = state.workspace.store();
    let Some(session) = state.workspace.study().session() else {
        return;
    };

    let block = Block::default()
        .title(format!(" {} ", session.position_label(store)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let (face_label, face_style) = match session.face() {
        Face::Front => ("front", Style::default().fg(Color::Yellow)),
        Face::Back => ("back", Style::default().fg(Color::Green)),
    };
    let text = session.visible_text(store).unwrap_or_default();

    // Vertically center the word
    let pad = area.height.saturating_sub(6) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        text.to_string(),
        face_style.add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("({})", face_label),
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_selected(f: &mut Frame, area: Rect, state: &TuiState) {
    let block = Block::default()
        .title(" Card ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = match state.selected_card() {
        Some(card) => vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {}", card.front),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!("  {}", card.back)),
        ],
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No cards yet.",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  Press m to add one by hand or g to generate a set.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

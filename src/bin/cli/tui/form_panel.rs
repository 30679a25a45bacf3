use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use vocards_lib::flashcards::{LanguagePair, MAX_GENERATION_COUNT, MIN_GENERATION_COUNT};

use super::app_state::{ManualField, Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    match state.mode {
        Mode::Manual => draw_manual(f, area, state),
        Mode::Generate => draw_generate(f, area, state),
        _ => {}
    }
}

fn direction_line(pair: LanguagePair) -> Line<'static> {
    Line::from(vec![
        Span::styled("  Direction: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!(
            "{} \u{2192} {}",
            pair.source().label(),
            pair.target().label()
        )),
        Span::styled("  (Ctrl-d)", Style::default().fg(Color::DarkGray)),
    ])
}

fn field_line(label: &str, value: &str, focused: bool) -> Line<'static> {
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Line::from(vec![
        Span::styled(format!("  {:<8}", label), label_style),
        Span::raw(value.to_string()),
    ])
}

fn form_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

fn draw_manual(f: &mut Frame, area: Rect, state: &TuiState) {
    let draft = &state.manual;
    let pair = draft.language_pair;

    let front_label = pair.source().label();
    let back_label = pair.target().label();

    let lines = vec![
        Line::from(""),
        direction_line(pair),
        Line::from(""),
        field_line(front_label, &draft.front, state.manual_field == ManualField::Front),
        field_line(back_label, &draft.back, state.manual_field == ManualField::Back),
        Line::from(""),
        Line::from(Span::styled(
            "  Ctrl-t fills the translation automatically",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines).block(form_block(" New card ".to_string()));
    f.render_widget(paragraph, area);

    // Cursor sits at the end of the focused field: border + indent + label
    let (row, value) = match state.manual_field {
        ManualField::Front => (4, &draft.front),
        ManualField::Back => (5, &draft.back),
    };
    set_cursor(f, area, row, value);
}

fn draw_generate(f: &mut Frame, area: Rect, state: &TuiState) {
    let form = &state.generate;

    let count = Line::from(vec![
        Span::styled(format!("  {:<8}", "Count"), Style::default().fg(Color::DarkGray)),
        Span::raw(format!("< {} >", form.count)),
        Span::styled(
            format!("  (+/-, {}-{})", MIN_GENERATION_COUNT, MAX_GENERATION_COUNT),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let lines = vec![
        Line::from(""),
        direction_line(form.language_pair),
        Line::from(""),
        field_line("Topic", &form.topic, true),
        count,
    ];

    let paragraph = Paragraph::new(lines).block(form_block(" Generate cards ".to_string()));
    f.render_widget(paragraph, area);

    set_cursor(f, area, 4, &form.topic);
}

fn set_cursor(f: &mut Frame, area: Rect, row: u16, value: &str) {
    let x = area.x + 1 + 2 + 8 + value.chars().count() as u16;
    let y = area.y + row;
    if x < area.x + area.width.saturating_sub(1) && y < area.y + area.height.saturating_sub(1) {
        f.set_cursor_position(Position::new(x, y));
    }
}

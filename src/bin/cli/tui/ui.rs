use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::app_state::{Mode, TuiState};
use super::{card_list, card_view, form_panel, status_bar};

const HELP_LINES: &[(&str, &str)] = &[
    ("Cards", ""),
    ("  j/k", "move selection"),
    ("  m", "add a card by hand"),
    ("  g", "generate cards on a topic"),
    ("  d", "delete selected card"),
    ("  s", "study"),
    ("  q", "quit"),
    ("Card forms", ""),
    ("  Tab", "switch field"),
    ("  Ctrl-t", "translate the front into the back"),
    ("  Ctrl-d", "swap direction"),
    ("  +/-", "card count"),
    ("  Enter", "add / generate"),
    ("  Esc", "back to cards"),
    ("Study", ""),
    ("  Space", "flip card"),
    ("  l/h", "next / previous"),
    ("  Esc", "stop studying"),
];

pub fn draw(f: &mut Frame, state: &TuiState) {
    let size = f.area();

    // Main layout: content area + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(size);

    let main_area = outer[0];
    let status_area = outer[1];

    // Horizontal split: card list (35%) | detail (65%)
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(main_area);

    card_list::draw(f, panels[0], state);

    match state.mode {
        Mode::Manual | Mode::Generate => form_panel::draw(f, panels[1], state),
        Mode::Cards | Mode::Study => card_view::draw(f, panels[1], state),
    }

    status_bar::draw(f, status_area, state);

    if state.show_help {
        draw_help(f, size);
    }
}

fn draw_help(f: &mut Frame, area: Rect) {
    let height = (HELP_LINES.len() as u16 + 2).min(area.height);
    let width = 48.min(area.width);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup);

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(keys, action)| {
            if action.is_empty() {
                Line::from(Span::styled(*keys, Style::default().add_modifier(Modifier::BOLD)))
            } else {
                Line::from(vec![
                    Span::styled(format!("{:<10}", keys), Style::default().fg(Color::Yellow)),
                    Span::raw(*action),
                ])
            }
        })
        .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .title(" Keys (Esc to close) ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(help, popup);
}

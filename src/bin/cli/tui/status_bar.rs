use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::{FlashKind, Mode, TuiState};

const SPINNER: &[char] = &['\u{280b}', '\u{2819}', '\u{2839}', '\u{2838}', '\u{283c}', '\u{2834}'];

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref flash) = state.flash {
        let bg = match flash.kind {
            FlashKind::Info => Color::Green,
            FlashKind::Error => Color::Red,
        };
        let widget = Paragraph::new(format!(" {}", flash.text))
            .style(Style::default().bg(bg).fg(Color::Black));
        f.render_widget(widget, area);
        return;
    }

    let controller = state.workspace.controller();
    if controller.is_generating() || controller.is_translating() {
        let what = if controller.is_generating() {
            "Generating cards"
        } else {
            "Translating"
        };
        let frame = SPINNER[state.tick % SPINNER.len()];
        let widget = Paragraph::new(format!(" {} {}...", frame, what))
            .style(Style::default().bg(Color::Blue).fg(Color::White));
        f.render_widget(widget, area);
        return;
    }

    let hints = match state.mode {
        Mode::Cards => " m: add  g: generate  s: study  d: delete  j/k: navigate  ?: help  q: quit ",
        Mode::Manual => " Tab: next field  Ctrl-t: translate  Ctrl-d: direction  Enter: add  Esc: back ",
        Mode::Generate => " +/-: count  Ctrl-d: direction  Enter: generate  Esc: back ",
        Mode::Study => " Space: flip  l/\u{2192}: next  h/\u{2190}: previous  Esc: stop ",
    };

    let status = Paragraph::new(hints).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}

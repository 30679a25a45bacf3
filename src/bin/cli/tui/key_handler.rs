use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use super::app_state::{Mode, TuiState};

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash = None;

    if state.show_help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            state.show_help = false;
        }
        return;
    }

    match state.mode {
        Mode::Cards => handle_cards_key(state, key),
        Mode::Manual => handle_manual_key(state, key),
        Mode::Generate => handle_generate_key(state, key),
        Mode::Study => handle_study_key(state, key),
    }
}

fn handle_cards_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Char('j') | KeyCode::Down => state.move_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_up(),
        KeyCode::Char('d') | KeyCode::Delete => state.delete_selected(),
        KeyCode::Char('s') => state.start_study(),
        KeyCode::Char('m') => state.open_manual(),
        KeyCode::Char('g') => state.open_generate(),
        KeyCode::Char('?') => state.show_help = true,
        _ => {}
    }
}

fn handle_manual_key(state: &mut TuiState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('t') => state.request_translation(),
            KeyCode::Char('d') => state.toggle_direction(),
            KeyCode::Char('c') => state.quit = true,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => state.close_form(),
        KeyCode::Tab | KeyCode::BackTab => state.toggle_manual_field(),
        KeyCode::Enter => state.add_manual_card(),
        KeyCode::Backspace | KeyCode::Char(_) if state.manual_input_locked() => {}
        KeyCode::Backspace => {
            state.manual_input().pop();
        }
        KeyCode::Char(c) => state.manual_input().push(c),
        _ => {}
    }
}

fn handle_generate_key(state: &mut TuiState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('d') => state.toggle_direction(),
            KeyCode::Char('c') => state.quit = true,
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => state.close_form(),
        KeyCode::Enter => state.submit_generation(),
        KeyCode::Char('+') | KeyCode::Up => state.generate.increment_count(),
        KeyCode::Char('-') | KeyCode::Down => state.generate.decrement_count(),
        KeyCode::Backspace => {
            state.generate.topic.pop();
        }
        KeyCode::Char(c) => state.generate.topic.push(c),
        _ => {}
    }
}

fn handle_study_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => state.exit_study(),
        KeyCode::Char(' ') | KeyCode::Enter => state.workspace.flip(),
        KeyCode::Char('l') | KeyCode::Right => state.workspace.next_card(),
        KeyCode::Char('h') | KeyCode::Left => state.workspace.previous_card(),
        _ => {}
    }
}

pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    match (mouse.kind, state.mode) {
        (MouseEventKind::ScrollDown, Mode::Cards) => state.move_down(),
        (MouseEventKind::ScrollUp, Mode::Cards) => state.move_up(),
        (MouseEventKind::ScrollDown, Mode::Study) => state.workspace.next_card(),
        (MouseEventKind::ScrollUp, Mode::Study) => state.workspace.previous_card(),
        _ => {}
    }
}

use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::quiz::engine::Phase;
use crate::quiz::view::PrimaryAction;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::ValidationElapsed { ticket } => {
            if state.engine.complete_validation(ticket) {
                state.dirty = true;
            }
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) {
    state.tick_count = state.tick_count.wrapping_add(1);

    // Only the spinner animates.
    if state.view().primary_action() == PrimaryAction::Validating {
        state.dirty = true;
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key);
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
        }
        _ => {}
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    // Confirmation dialog captures all input when visible
    if state.confirm.is_some() {
        handle_confirm_key(state, key);
        return;
    }

    match state.view().phase {
        Phase::Playing => handle_game_key(state, key),
        Phase::Summary => handle_summary_key(state, key),
    }
}

fn handle_confirm_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            tracing::debug!("back to start confirmed");
            state.reset_game();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.confirm = None;
        }
        _ => {}
    }
}

fn handle_game_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            if state.engine.select_index(index) {
                state.cursor = state.engine.state().selected().unwrap_or(state.cursor);
            }
        }
        KeyCode::Left | KeyCode::Char('h') => state.cursor = state.cursor.prev(),
        KeyCode::Right | KeyCode::Char('l') => state.cursor = state.cursor.next(),
        KeyCode::Char(' ') => {
            let cursor = state.cursor;
            state.engine.select(cursor);
        }
        KeyCode::Enter => primary_action(state),
        KeyCode::Char('r') => state.reset_game(),
        KeyCode::Char('b') | KeyCode::Esc => state.request_back_to_start(),
        _ => {}
    }
}

fn handle_summary_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Enter | KeyCode::Char('r') => state.reset_game(),
        _ => {}
    }
}

/// The one action button: validate, then next, then start again.
fn primary_action(state: &mut AppState) {
    match state.view().primary_action() {
        PrimaryAction::Validate { enabled: true } => {
            state.engine.validate();
        }
        PrimaryAction::Next => {
            state.engine.advance();
        }
        PrimaryAction::StartAgain => state.reset_game(),
        PrimaryAction::Validate { enabled: false } | PrimaryAction::Validating => {}
    }
}

//! Terminal rendering. Reads the engine's `QuizView` and draws it; all quiz
//! rules live in `crate::quiz`.

mod action_bar;
mod board;
mod confirm;
mod flags;
mod header;
mod layout;
mod status_bar;
mod summary;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let view = state.view();
    let app_layout = layout::compute_layout(frame.area());

    header::render(frame, app_layout.header, &view);
    match &view.round {
        Some(round) => board::render(frame, app_layout.body, &view, round, state.cursor),
        None => summary::render(frame, app_layout.body, &view),
    }
    action_bar::render(frame, app_layout.action_bar, &view, state.tick_count);
    status_bar::render(frame, app_layout.status_bar, state);
    confirm::render(frame, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::ConfirmPrompt;
    use crate::config::AppConfig;
    use crate::quiz::engine::QuizEngine;
    use crate::quiz::testing::{FixedRandom, ManualDelay};
    use ratatui::backend::TestBackend;

    fn test_state() -> AppState {
        let engine = QuizEngine::new(Box::new(FixedRandom::new(0)), Box::new(ManualDelay::default()));
        AppState::with_engine(AppConfig::default(), engine)
    }

    fn screen_text(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_game_screen() {
        let state = test_state();
        let text = screen_text(&state);
        assert!(text.contains("Flag Quiz!"));
        assert!(text.contains("[ 1 / 10 ]"));
        assert!(text.contains("Estonia"));
        assert!(text.contains("Validate"));
    }

    #[test]
    fn test_summary_screen() {
        let mut state = test_state();
        for _ in 0..10 {
            state.engine.select_index(0);
            state.engine.validate();
            let ticket = state.engine.pending_validation().unwrap();
            state.engine.complete_validation(ticket);
            state.engine.advance();
        }
        let text = screen_text(&state);
        assert!(text.contains("Your total score:"));
        assert!(text.contains("10 / 10"));
        assert!(text.contains("Start again"));
    }

    #[test]
    fn test_confirm_popup() {
        let mut state = test_state();
        state.confirm = Some(ConfirmPrompt::BackToStart);
        let text = screen_text(&state);
        assert!(text.contains("Back to start"));
        assert!(text.contains("Are you sure?"));
    }
}

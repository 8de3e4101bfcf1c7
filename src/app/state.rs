use crate::app::event::AppEvent;
use crate::config::AppConfig;
use crate::quiz::delay::TokioDelay;
use crate::quiz::engine::QuizEngine;
use crate::quiz::random::ThreadRandom;
use crate::quiz::slot::Slot;
use crate::quiz::view::QuizView;
use tokio::sync::mpsc;

/// Modal dialogs that capture all input while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmPrompt {
    BackToStart,
}

pub struct AppState {
    pub config: AppConfig,
    pub engine: QuizEngine,
    /// Card highlighted for keyboard selection.
    pub cursor: Slot,
    pub confirm: Option<ConfirmPrompt>,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        let engine = QuizEngine::new(
            Box::new(ThreadRandom),
            Box::new(TokioDelay::new(event_tx)),
        );
        Self::with_engine(config, engine)
    }

    pub fn with_engine(config: AppConfig, engine: QuizEngine) -> Self {
        Self {
            config,
            engine,
            cursor: Slot::ALL[0],
            confirm: None,
            tick_count: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn view(&self) -> QuizView {
        self.engine.view()
    }

    pub fn reset_game(&mut self) {
        self.engine.reset();
        self.cursor = Slot::ALL[0];
        self.confirm = None;
        self.dirty = true;
    }

    /// Ask before going back to the start, unless the config says not to.
    pub fn request_back_to_start(&mut self) {
        if self.config.ui.confirm_back {
            self.confirm = Some(ConfirmPrompt::BackToStart);
            self.dirty = true;
        } else {
            self.reset_game();
        }
    }

    pub fn status_line(&self) -> String {
        let view = self.view();
        format!("Score: {} | Round {} of {}", view.score, view.display_attempt(), view.total_rounds)
    }
}

use crate::quiz::delay::ValidationTicket;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The validation delay for `ticket` has elapsed
    ValidationElapsed { ticket: ValidationTicket },

    /// Tick for UI refresh
    Tick,
}

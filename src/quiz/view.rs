//! Read-only snapshot of a game for rendering.
//!
//! Everything here is computed from [`GameState`] on demand; the renderer
//! reads these fields and never re-derives quiz rules itself.

use crate::quiz::catalog::Country;
use crate::quiz::engine::{GameState, Phase, ValidationState};
use crate::quiz::slot::{Slot, SLOT_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub attempt: usize,
    pub total_rounds: usize,
    pub score: usize,
    pub phase: Phase,
    pub validation: ValidationState,
    pub selected: Option<Slot>,
    pub correct: Slot,
    pub target: Country,
    pub no_selection: bool,
    pub pending_validation: bool,
    pub is_validated: bool,
    /// `None` on the summary screen.
    pub round: Option<RoundView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub slots: [SlotView; SLOT_COUNT],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotView {
    pub slot: Slot,
    pub country: Country,
    pub user_pick: bool,
    pub wrong_pick: bool,
    pub correct_highlight: bool,
}

/// What the single action button shows and does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Validate { enabled: bool },
    Validating,
    Next,
    StartAgain,
}

impl QuizView {
    pub fn from_state(state: &GameState) -> Self {
        let phase = state.phase();
        let round = (phase == Phase::Playing).then(|| RoundView {
            slots: Slot::ALL.map(|slot| SlotView {
                slot,
                country: state.rounds().country_at(slot),
                user_pick: state.user_pick(slot),
                wrong_pick: state.wrong_pick(slot),
                correct_highlight: state.correct_highlight(slot),
            }),
        });

        Self {
            attempt: state.attempt(),
            total_rounds: state.total_rounds(),
            score: state.score(),
            phase,
            validation: state.validation(),
            selected: state.selected(),
            correct: state.correct(),
            target: state.target(),
            no_selection: state.no_selection(),
            pending_validation: state.pending_validation(),
            is_validated: state.is_validated(),
            round,
        }
    }

    pub fn primary_action(&self) -> PrimaryAction {
        if self.phase == Phase::Summary {
            return PrimaryAction::StartAgain;
        }
        match self.validation {
            ValidationState::Validating => PrimaryAction::Validating,
            ValidationState::Validated if self.is_validated => PrimaryAction::Next,
            _ => PrimaryAction::Validate {
                enabled: self.pending_validation,
            },
        }
    }

    /// Attempt number for the header counter. Capped at the round count,
    /// since after the last round `attempt` is one past it.
    pub fn display_attempt(&self) -> usize {
        self.attempt.min(self.total_rounds)
    }
}

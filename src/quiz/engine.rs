//! Quiz progression state machine.
//!
//! Per round the engine moves `NotValidated -> Validating -> Validated` and
//! `advance()` starts the next round. Once every round of the catalog has
//! been played the game sits in [`Phase::Summary`] until `reset()`.
//!
//! Illegal calls are never errors: they are dropped and reported as `false`
//! so a UI can forward every key press without guarding it first.

use crate::quiz::catalog::Country;
use crate::quiz::delay::{DelayScheduler, ValidationTicket};
use crate::quiz::random::QuizRng;
use crate::quiz::rounds::RoundSet;
use crate::quiz::slot::Slot;
use crate::quiz::view::QuizView;
use std::time::Duration;

/// Time between `validate()` and the answer being revealed.
pub const VALIDATION_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationState {
    NotValidated,
    Validating,
    Validated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Summary,
}

/// Everything one game owns. Replaced wholesale on reset.
#[derive(Debug, Clone)]
pub struct GameState {
    attempt: usize,
    score: usize,
    selected: Option<Slot>,
    validation: ValidationState,
    rounds: RoundSet,
    // Drawn once per game; the country under it changes every round.
    correct: Slot,
}

impl GameState {
    pub fn new(rng: &mut dyn QuizRng) -> Self {
        let rounds = RoundSet::shuffled(rng);
        let correct = rng.pick_slot();
        Self {
            attempt: 1,
            score: 0,
            selected: None,
            validation: ValidationState::NotValidated,
            rounds,
            correct,
        }
    }

    pub fn attempt(&self) -> usize {
        self.attempt
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn selected(&self) -> Option<Slot> {
        self.selected
    }

    pub fn validation(&self) -> ValidationState {
        self.validation
    }

    pub fn rounds(&self) -> &RoundSet {
        &self.rounds
    }

    pub fn correct(&self) -> Slot {
        self.correct
    }

    pub fn total_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn phase(&self) -> Phase {
        if self.attempt > self.rounds.len() {
            Phase::Summary
        } else {
            Phase::Playing
        }
    }

    /// The country the prompt asks for.
    pub fn target(&self) -> Country {
        self.rounds.country_at(self.correct)
    }

    pub fn no_selection(&self) -> bool {
        self.selected.is_none() && self.validation == ValidationState::NotValidated
    }

    pub fn pending_validation(&self) -> bool {
        self.selected.is_some() && self.validation == ValidationState::NotValidated
    }

    pub fn is_validated(&self) -> bool {
        self.selected.is_some() && self.validation == ValidationState::Validated
    }

    pub fn user_pick(&self, slot: Slot) -> bool {
        self.selected == Some(slot) && !self.is_validated()
    }

    pub fn wrong_pick(&self, slot: Slot) -> bool {
        self.selected == Some(slot) && self.is_validated() && slot != self.correct
    }

    pub fn correct_highlight(&self, slot: Slot) -> bool {
        slot == self.correct && self.is_validated()
    }
}

pub struct QuizEngine {
    game: GameState,
    rng: Box<dyn QuizRng>,
    delay: Box<dyn DelayScheduler>,
    pending: Option<ValidationTicket>,
    next_ticket: u64,
}

impl QuizEngine {
    pub fn new(mut rng: Box<dyn QuizRng>, delay: Box<dyn DelayScheduler>) -> Self {
        let game = GameState::new(rng.as_mut());
        tracing::info!(correct = game.correct.index(), "new game");
        Self {
            game,
            rng,
            delay,
            pending: None,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.game
    }

    pub fn view(&self) -> QuizView {
        QuizView::from_state(&self.game)
    }

    /// Ticket of the validation waiting for its delay, if any.
    pub fn pending_validation(&self) -> Option<ValidationTicket> {
        self.pending
    }

    pub fn select(&mut self, slot: Slot) -> bool {
        if self.game.phase() != Phase::Playing
            || self.game.validation != ValidationState::NotValidated
        {
            tracing::trace!(slot = slot.index(), "select ignored");
            return false;
        }
        self.game.selected = Some(slot);
        tracing::debug!(slot = slot.index(), attempt = self.game.attempt, "slot selected");
        true
    }

    /// `select` for a raw index; out-of-range indices are dropped.
    pub fn select_index(&mut self, index: usize) -> bool {
        match Slot::try_from(index) {
            Ok(slot) => self.select(slot),
            Err(e) => {
                tracing::trace!("select ignored: {}", e);
                false
            }
        }
    }

    /// Lock the selection and start the validation delay. The state is
    /// `Validating` as soon as this returns.
    pub fn validate(&mut self) -> bool {
        if self.game.phase() != Phase::Playing || !self.game.pending_validation() {
            tracing::trace!("validate ignored");
            return false;
        }
        self.game.validation = ValidationState::Validating;

        let ticket = ValidationTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        self.delay.schedule(ticket, VALIDATION_DELAY);
        tracing::debug!(ticket = ticket.0, attempt = self.game.attempt, "validating");
        true
    }

    /// Deliver the end of the validation delay for `ticket`.
    pub fn complete_validation(&mut self, ticket: ValidationTicket) -> bool {
        if self.pending != Some(ticket) || self.game.validation != ValidationState::Validating {
            tracing::debug!(ticket = ticket.0, "stale validation completion dropped");
            return false;
        }
        self.pending = None;

        let hit = self.game.selected == Some(self.game.correct);
        if hit {
            self.game.score += 1;
        }
        self.game.validation = ValidationState::Validated;
        tracing::info!(
            attempt = self.game.attempt,
            correct = hit,
            score = self.game.score,
            "answer validated"
        );
        true
    }

    /// Move to the next round. Only legal once the answer is revealed.
    pub fn advance(&mut self) -> bool {
        if self.game.phase() != Phase::Playing
            || self.game.validation != ValidationState::Validated
        {
            tracing::trace!("advance ignored");
            return false;
        }
        self.game.attempt += 1;
        self.game.validation = ValidationState::NotValidated;
        self.game.selected = None;
        self.game.rounds.reshuffle(self.rng.as_mut());
        tracing::trace!(order = ?self.game.rounds.countries(), "rounds reshuffled");

        if self.game.phase() == Phase::Summary {
            tracing::info!(
                score = self.game.score,
                total = self.game.total_rounds(),
                "game finished"
            );
        }
        true
    }

    /// Start a fresh game from any phase, dropping a pending validation.
    pub fn reset(&mut self) {
        if let Some(ticket) = self.pending.take() {
            self.delay.cancel(ticket);
        }
        self.game = GameState::new(self.rng.as_mut());
        tracing::info!(correct = self.game.correct.index(), "game reset");
    }
}

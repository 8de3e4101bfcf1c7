//! Deterministic doubles for the engine's randomness and delay.

use crate::quiz::catalog::Country;
use crate::quiz::delay::{DelayScheduler, ValidationTicket};
use crate::quiz::random::QuizRng;
use crate::quiz::slot::Slot;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Always picks the same slot. Leaves the catalog order untouched unless
/// `rotating`, in which case every shuffle rotates it left by one.
pub struct FixedRandom {
    slot: Slot,
    rotate: bool,
}

impl FixedRandom {
    pub fn new(slot: usize) -> Self {
        Self {
            slot: Slot::try_from(slot).expect("fixed slot out of range"),
            rotate: false,
        }
    }

    pub fn rotating(mut self) -> Self {
        self.rotate = true;
        self
    }
}

impl QuizRng for FixedRandom {
    fn shuffle(&mut self, countries: &mut [Country]) {
        if self.rotate && !countries.is_empty() {
            countries.rotate_left(1);
        }
    }

    fn pick_slot(&mut self) -> Slot {
        self.slot
    }
}

#[derive(Default)]
struct DelayRecord {
    scheduled: Vec<(ValidationTicket, Duration)>,
    cancelled: Vec<ValidationTicket>,
}

/// Shared view of what a [`ManualDelay`] was asked to do.
#[derive(Clone, Default)]
pub struct DelayLog(Rc<RefCell<DelayRecord>>);

impl DelayLog {
    pub fn scheduled(&self) -> Vec<(ValidationTicket, Duration)> {
        self.0.borrow().scheduled.clone()
    }

    pub fn cancelled(&self) -> Vec<ValidationTicket> {
        self.0.borrow().cancelled.clone()
    }
}

/// Records requests and never fires; tests complete validations by hand.
#[derive(Default)]
pub struct ManualDelay {
    log: DelayLog,
}

impl ManualDelay {
    pub fn log(&self) -> DelayLog {
        self.log.clone()
    }
}

impl DelayScheduler for ManualDelay {
    fn schedule(&mut self, ticket: ValidationTicket, delay: Duration) {
        self.log.0.borrow_mut().scheduled.push((ticket, delay));
    }

    fn cancel(&mut self, ticket: ValidationTicket) {
        self.log.0.borrow_mut().cancelled.push(ticket);
    }
}

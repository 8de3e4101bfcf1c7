//! Quiz core: catalog, rounds, and the progression state machine.
//!
//! The engine has no I/O of its own. Randomness and the validation delay are
//! injected through [`random::QuizRng`] and [`delay::DelayScheduler`].

pub mod catalog;
pub mod delay;
pub mod engine;
pub mod random;
pub mod rounds;
pub mod slot;
pub mod view;

#[cfg(test)]
pub mod testing;

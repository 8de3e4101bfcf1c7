//! Application shell: state, event handling, and the glue between terminal
//! input and the quiz engine.

pub mod event;
pub mod handler;
pub mod state;

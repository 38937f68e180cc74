//! Full-screen terminal game
//!
//! Play one or more puzzles, get help with a puzzle played elsewhere, or
//! watch the hint engine solve them.

mod app;
pub mod event;
pub mod lifecycle;
mod rendering;

pub use app::{
    Action, App, InputMode, Message, MessageStyle, TICK_RATE, action_for_key, answer_reveal,
    keyboard_status, run_app, run_tui,
};
pub use event::Event;
pub use lifecycle::ExitHandlers;

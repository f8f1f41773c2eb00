//! # nextstep-tui - Terminal UI for NextStep
//!
//! The view half of the TEA pattern: terminal setup, event polling, layout,
//! widgets, and the runner event loop that ties rendering to the update
//! function in `nextstep-app`.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub mod test_utils;

// Re-export the main entry point
pub use runner::run;

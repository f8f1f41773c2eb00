//! # nextstep-app - Application State and Orchestration
//!
//! The model/update half of the TEA pattern. [`state::AppState`] is the
//! model, [`message::Message`] the event vocabulary, and
//! [`handler::update`] the pure transition function. Side effects (HTTP
//! fetches, opening a browser) are described as [`tasks::Task`] values and
//! executed outside the update function by the runner.

pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
pub mod tasks;

pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, DetailPhase, HomePhase, Route};
pub use tasks::{run_task, Task, DETAIL_RECENT_LIMIT};

//! Message handling (Update in TEA pattern)

mod keys;
mod update;

#[cfg(test)]
mod tests;

pub use update::update;

use crate::message::Message;
use crate::tasks::Task;

/// Side effect requested by [`update`], executed by the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    SpawnTask(Task),
}

/// Result of processing one message: an optional follow-up message that is
/// fed straight back into `update`, and an optional action for the runner.
#[derive(Debug, Default)]
pub struct UpdateResult {
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(message: Message) -> Self {
        Self {
            message: Some(message),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn spawn(task: Task) -> Self {
        Self::action(UpdateAction::SpawnTask(task))
    }
}

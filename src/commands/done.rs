//! Completion toggle command.

use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, task::TaskError},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task ID to toggle
    #[arg(required = true)]
    id: u64,
}

/// Flips the completion flag of one task and reports its new state.
pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    match tasks.toggle(args.id) {
        Ok(task) if task.completed => {
            msg_success!(Message::TaskCompleted(task.id));
            Ok(())
        }
        Ok(task) => {
            msg_success!(Message::TaskReopened(task.id));
            Ok(())
        }
        Err(TaskError::NotFound(id)) => {
            msg_error!(Message::TaskNotFoundWithId(id));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

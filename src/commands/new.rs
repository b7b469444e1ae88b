//! Task creation command.

use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, task::TaskError},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Task text
    #[arg(required = true)]
    text: String,
}

/// Creates a task from the given text.
///
/// Blank input is rejected with a notice and leaves the collection
/// untouched.
pub fn cmd(args: NewArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    match tasks.create(&args.text) {
        Ok(task) => {
            msg_success!(Message::TaskCreated(task.text));
            Ok(())
        }
        Err(TaskError::EmptyText) => {
            msg_error!(Message::TaskTextEmpty);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

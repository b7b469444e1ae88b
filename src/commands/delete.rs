//! Task deletion command with confirmation.

use crate::{
    db::tasks::Tasks,
    libs::messages::Message,
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID to delete
    #[arg(required = true)]
    id: u64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

/// Deletes one task after the user confirms.
///
/// The confirmation is resolved here; the store only ever sees the final
/// decision.
pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let task = match tasks.get_by_id(args.id) {
        Some(task) => task.clone(),
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(());
        }
    };

    let confirmed = args.yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.text.clone()).to_string())
            .default(false)
            .interact()?;

    if confirmed {
        tasks.delete(args.id)?;
        msg_success!(Message::TaskDeleted(args.id));
    } else {
        msg_info!(Message::OperationCancelled);
    }

    Ok(())
}

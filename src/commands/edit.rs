//! Task text editing command.
//!
//! The new text can be given inline or collected through an interactive
//! prompt pre-filled with the current text. Cancelling the prompt leaves
//! the task untouched; submitting blank text is rejected.

use crate::{
    db::tasks::Tasks,
    libs::{messages::Message, task::TaskError},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID to edit
    #[arg(required = true)]
    id: u64,
    /// New task text; prompts interactively when omitted
    text: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut tasks = Tasks::new()?;

    let current = match tasks.get_by_id(args.id) {
        Some(task) => task.clone(),
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(());
        }
    };

    let new_text = match args.text {
        Some(text) => Some(text),
        None => prompt_new_text(&current.text),
    };

    match tasks.edit(args.id, new_text.as_deref()) {
        Ok(()) if new_text.is_some() => {
            msg_success!(Message::TaskUpdated(args.id));
            Ok(())
        }
        Ok(()) => {
            msg_info!(Message::OperationCancelled);
            Ok(())
        }
        Err(TaskError::EmptyText) => {
            msg_error!(Message::TaskTextEmpty);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Collects replacement text interactively. An aborted prompt counts as a
/// cancelled edit.
fn prompt_new_text(current: &str) -> Option<String> {
    msg_print!(Message::EditingTask(current.to_string()));

    Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskText.to_string())
        .default(current.to_string())
        .allow_empty(true)
        .interact_text()
        .ok()
}

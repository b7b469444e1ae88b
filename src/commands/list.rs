//! Task listing with an optional status filter.

use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        messages::Message,
        task::{filter_by_status, TaskStatusFilter},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Status filter: all, active, or completed
    #[arg(short, long, value_enum, default_value = "all")]
    status: TaskStatusFilter,
}

/// Renders the collection, optionally narrowed to one completion status.
pub fn cmd(args: ListArgs) -> Result<()> {
    let tasks = Tasks::new()?;
    let snapshot = filter_by_status(tasks.list(), args.status);

    if snapshot.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let display = Config::read().unwrap_or_default().display.unwrap_or_default();
    msg_print!(Message::TasksHeader, true);
    View::tasks(&snapshot, &display)?;

    Ok(())
}

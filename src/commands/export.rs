//! Task export command.
//!
//! Dumps the whole collection to CSV or JSON for backup or processing in
//! other tools.

use crate::{
    db::tasks::Tasks,
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    /// Custom output file path; a default name in the working directory
    /// is used when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let tasks = Tasks::new()?;

    if tasks.list().is_empty() {
        msg_info!(Message::NoTasksToExport);
        return Ok(());
    }

    msg_info!(Message::ExportingData(format!("{:?}", args.format)));

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(tasks.list())
}

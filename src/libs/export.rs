//! Task export for backup and external processing.
//!
//! Exports the whole collection in one of two formats:
//!
//! - **CSV**: one row per task, for spreadsheets and quick greps
//! - **JSON**: the exact persisted shape, suitable for re-import or
//!   programmatic processing

use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_success;
use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for universal compatibility.
    Csv,
    /// Pretty-printed JSON preserving types and structure.
    Json,
}

/// Export handler holding the output format and destination.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to a default
    /// file name in the working directory when none is given.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };

        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("tdl_tasks.{}", extension)));

        Self { format, output_path }
    }

    /// Writes the full collection to the output file in the selected format.
    pub fn export(&self, tasks: &[Task]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(tasks)?,
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(tasks)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
            }
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, tasks: &[Task]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "Text", "Completed"])?;

        for task in tasks {
            wtr.write_record([task.id.to_string(), task.text.clone(), task.completed.to_string()])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

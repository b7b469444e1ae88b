use super::config::DisplayConfig;
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

/// Terminal rendering of collection snapshots.
pub struct View {}

impl View {
    /// Renders tasks as a table, one row per record in snapshot order.
    pub fn tasks(tasks: &[Task], display: &DisplayConfig) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TASK"]);
        for task in tasks {
            let mark = if task.completed { &display.done_mark } else { &display.pending_mark };
            table.add_row(row![task.id, mark, task.text]);
        }
        table.printstd();

        Ok(())
    }
}

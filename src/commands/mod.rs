pub mod delete;
pub mod done;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod new;
pub mod search;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create a new task", arg_required_else_help = true)]
    New(new::NewArgs),
    #[command(about = "List tasks, optionally filtered by status")]
    List(list::ListArgs),
    #[command(about = "Toggle task completion", arg_required_else_help = true)]
    Done(done::DoneArgs),
    #[command(about = "Edit task text", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Search tasks by text")]
    Search(search::SearchArgs),
    #[command(about = "Export tasks to a file")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        init_tracing();

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::New(args) => new::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Search(args) => search::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Installs the fmt subscriber so the message macros have a tracing
/// consumer in debug mode. Outside debug mode messages go straight to the
/// console and no subscriber is needed.
fn init_tracing() {
    if crate::libs::messages::macros::is_debug_mode() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}

//! Substring search over task text.

use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message, task::search, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Search term, matched case-insensitively; an empty term matches
    /// every task
    #[arg(default_value = "")]
    term: String,
}

/// Renders the tasks whose text contains the term.
pub fn cmd(args: SearchArgs) -> Result<()> {
    let tasks = Tasks::new()?;
    let matches = search(tasks.list(), &args.term);

    if matches.is_empty() {
        msg_info!(Message::SearchNoMatches(args.term));
        return Ok(());
    }

    let display = Config::read().unwrap_or_default().display.unwrap_or_default();
    msg_print!(Message::SearchResultsHeader(args.term.clone()), true);
    View::tasks(&matches, &display)?;

    Ok(())
}

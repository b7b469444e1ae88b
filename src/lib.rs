//! # Tdl - Terminal task list
//!
//! A command-line manager for short text tasks, persisted between runs
//! as a single JSON document.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, complete, and delete tasks
//! - **Search**: Case-insensitive substring search over task text
//! - **Status Filters**: Show all, active, or completed tasks
//! - **Durable Storage**: The whole collection lives in one JSON file
//! - **Data Export**: Export tasks to CSV and JSON formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tdl::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;

//! CLI 模块

pub mod add;
pub mod list;
pub mod reset;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tido")]
#[command(version)]
#[command(about = "Todo list TUI with local-first storage and demo-API sync")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive TUI (default)
    Tui,
    /// Print the persisted todo list
    List,
    /// Add a todo without entering the TUI
    Add {
        /// Todo text
        text: String,
    },
    /// Drop the local cache so the next start refetches the remote list
    Reset,
}

//! Todo operations - shared business logic layer
//!
//! This module contains the core store logic for todo operations,
//! shared between the TUI and the headless CLI subcommands.

pub mod todos;

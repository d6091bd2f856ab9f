//! Command-line interface for vmanage-templates.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    AttachmentsArgs, Cli, Commands, DeleteArgs, ExportArgs, ImportArgs, InputArgs, ListArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};

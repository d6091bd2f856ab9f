//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which owns the
//! [`DeviceTemplates`](crate::templates::DeviceTemplates) client and hands
//! every command a borrow of it. Any [`Transport`](crate::transport::Transport)
//! works, so commands are tested against a scripted mock.

pub mod attachments;
pub mod delete;
pub mod dispatcher;
pub mod display;
pub mod export;
pub mod import;
pub mod input;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

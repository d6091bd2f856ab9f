//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::Commands;
use crate::error::Result;
use crate::templates::DeviceTemplates;
use crate::transport::Transport;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher<T> {
    client: DeviceTemplates<T>,
}

impl<T: Transport> CommandDispatcher<T> {
    /// Create a dispatcher issuing requests through `transport`.
    pub fn new(transport: T) -> Self {
        Self {
            client: DeviceTemplates::new(transport),
        }
    }

    /// The device template client commands run against.
    pub fn client(&self) -> &DeviceTemplates<T> {
        &self.client
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, command: &Commands, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match command {
            Commands::List(args) => {
                super::list::ListCommand::new(&self.client, args.clone()).execute(ui)
            }
            Commands::Export(args) => {
                super::export::ExportCommand::new(&self.client, args.clone()).execute(ui)
            }
            Commands::Import(args) => {
                super::import::ImportCommand::new(&self.client, args.clone()).execute(ui)
            }
            Commands::Delete(args) => {
                super::delete::DeleteCommand::new(&self.client, args.clone()).execute(ui)
            }
            Commands::Attachments(args) => {
                super::attachments::AttachmentsCommand::new(&self.client, args.clone())
                    .execute(ui)
            }
            Commands::Input(args) => {
                super::input::InputCommand::new(&self.client, args.clone()).execute(ui)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::DeleteArgs;
    use crate::transport::{Method, MockTransport, Response};
    use crate::ui::MockUI;
    use serde_json::json;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(2);
        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn dispatches_to_command() {
        let mock = MockTransport::new();
        mock.on(Method::Delete, "template/device/d-1", Response::ok(json!({})));
        let dispatcher = CommandDispatcher::new(mock);
        let mut ui = MockUI::new();

        let command = Commands::Delete(DeleteArgs {
            template_id: "d-1".to_string(),
        });
        let result = dispatcher.dispatch(&command, &mut ui).unwrap();

        assert!(result.success);
        assert_eq!(
            dispatcher
                .client()
                .transport()
                .count(Method::Delete, "template/device/d-1"),
            1
        );
    }
}

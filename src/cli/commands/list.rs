//! List command implementation.
//!
//! The `vmanage-templates list` command lists device templates with their
//! feature templates referenced by name.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::templates::{DeviceTemplates, ListOptions};
use crate::transport::Transport;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::show_template;

/// The list command implementation.
pub struct ListCommand<'a, T> {
    client: &'a DeviceTemplates<T>,
    args: ListArgs,
}

impl<'a, T: Transport> ListCommand<'a, T> {
    /// Create a new list command.
    pub fn new(client: &'a DeviceTemplates<T>, args: ListArgs) -> Self {
        Self { client, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }
}

impl<T: Transport> Command for ListCommand<'_, T> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let options = ListOptions {
            factory_default: self.args.factory_default,
            names: self.args.names.clone(),
            enrich: self.args.json || ui.output_mode().shows_details(),
        };
        let records = self.client.list(&options)?;

        if self.args.json {
            ui.output(&serde_json::to_string_pretty(&records)?);
            return Ok(CommandResult::success());
        }

        if records.is_empty() {
            ui.message("No device templates found.");
            return Ok(CommandResult::success());
        }

        ui.show_header("Device templates");
        for record in &records {
            show_template(ui, record);
        }

        Ok(CommandResult::success())
    }
}

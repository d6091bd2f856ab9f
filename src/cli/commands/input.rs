//! Input command implementation.
//!
//! Shows the editable input columns of a device template and the variable
//! name each one binds.

use crate::cli::args::InputArgs;
use crate::error::Result;
use crate::templates::DeviceTemplates;
use crate::transport::Transport;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The input command implementation.
pub struct InputCommand<'a, T> {
    client: &'a DeviceTemplates<T>,
    args: InputArgs,
}

impl<'a, T: Transport> InputCommand<'a, T> {
    /// Create a new input command.
    pub fn new(client: &'a DeviceTemplates<T>, args: InputArgs) -> Self {
        Self { client, args }
    }
}

impl<T: Transport> Command for InputCommand<'_, T> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = self.client.input_schema(&self.args.template_id)?;

        if self.args.json {
            ui.output(&serde_json::to_string_pretty(&schema)?);
            return Ok(CommandResult::success());
        }

        if schema.columns.is_empty() {
            ui.message("No editable input variables.");
            return Ok(CommandResult::success());
        }

        ui.show_header(&format!("Input variables of {}", self.args.template_id));
        for column in &schema.columns {
            ui.message(&format!(
                "  {:<24} {} [{}]",
                column.variable.as_deref().unwrap_or("-"),
                column.title,
                column.property
            ));
        }
        Ok(CommandResult::success())
    }
}

//! Delete command implementation.

use crate::cli::args::DeleteArgs;
use crate::error::Result;
use crate::templates::DeviceTemplates;
use crate::transport::Transport;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The delete command implementation.
pub struct DeleteCommand<'a, T> {
    client: &'a DeviceTemplates<T>,
    args: DeleteArgs,
}

impl<'a, T: Transport> DeleteCommand<'a, T> {
    /// Create a new delete command.
    pub fn new(client: &'a DeviceTemplates<T>, args: DeleteArgs) -> Self {
        Self { client, args }
    }
}

impl<T: Transport> Command for DeleteCommand<'_, T> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.client.delete(&self.args.template_id)?;
        ui.success(&format!("Deleted device template {}", self.args.template_id));
        Ok(CommandResult::success())
    }
}

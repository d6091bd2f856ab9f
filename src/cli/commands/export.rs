//! Export command implementation.
//!
//! The `vmanage-templates export` command writes device templates to a YAML
//! file that `import` accepts.

use crate::cli::args::ExportArgs;
use crate::error::Result;
use crate::templates::{save_records, DeviceTemplates, ListOptions};
use crate::transport::Transport;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The export command implementation.
pub struct ExportCommand<'a, T> {
    client: &'a DeviceTemplates<T>,
    args: ExportArgs,
}

impl<'a, T: Transport> ExportCommand<'a, T> {
    /// Create a new export command.
    pub fn new(client: &'a DeviceTemplates<T>, args: ExportArgs) -> Self {
        Self { client, args }
    }
}

impl<T: Transport> Command for ExportCommand<'_, T> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let options = ListOptions {
            factory_default: self.args.factory_default,
            names: self.args.names.clone(),
            enrich: true,
        };
        let records = self.client.list(&options)?;
        save_records(&self.args.file, &records)?;

        ui.success(&format!(
            "Exported {} device template(s) to {}",
            records.len(),
            self.args.file.display()
        ));
        Ok(CommandResult::success())
    }
}

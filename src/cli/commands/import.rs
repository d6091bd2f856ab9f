//! Import command implementation.
//!
//! The `vmanage-templates import` command reconciles vManage with the
//! device templates in a YAML file. Missing templates are created;
//! existing ones are only updated with `--update`. `--check` reports the
//! same changes without submitting anything.

use crate::cli::args::ImportArgs;
use crate::error::Result;
use crate::templates::{load_templates, ChangeRecord, DeviceTemplates, PlanOptions, Reconciler};
use crate::transport::Transport;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{change_label, show_change};

/// The import command implementation.
pub struct ImportCommand<'a, T> {
    client: &'a DeviceTemplates<T>,
    args: ImportArgs,
}

impl<'a, T: Transport> ImportCommand<'a, T> {
    /// Create a new import command.
    pub fn new(client: &'a DeviceTemplates<T>, args: ImportArgs) -> Self {
        Self { client, args }
    }

    fn options(&self) -> PlanOptions {
        PlanOptions {
            check_mode: self.args.check,
            update: self.args.update,
        }
    }

    fn show_records(&self, ui: &mut dyn UserInterface, records: &[ChangeRecord]) -> Result<()> {
        if self.args.json {
            ui.output(&serde_json::to_string_pretty(records)?);
            return Ok(());
        }

        for record in records {
            let label = change_label(record.action, self.args.check, self.args.update);
            show_change(ui, record, label);
        }
        Ok(())
    }
}

impl<T: Transport> Command for ImportCommand<'_, T> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let desired = load_templates(&self.args.file)?;

        if !self.args.json {
            ui.show_header(&format!(
                "Importing {} device template(s) from {}",
                desired.len(),
                self.args.file.display()
            ));
        }

        let records = match Reconciler::new(self.client).plan(&desired, self.options()) {
            Ok(records) => records,
            Err(err) => {
                self.show_records(ui, &err.records)?;
                ui.error(&format!("Import stopped: {}", err.source));
                return Ok(CommandResult::failure(1));
            }
        };

        self.show_records(ui, &records)?;

        if !self.args.json {
            if records.is_empty() {
                ui.success("All device templates are up to date");
            } else if self.args.check {
                ui.message(&format!(
                    "{} change(s) found; nothing submitted (check mode)",
                    records.len()
                ));
            } else {
                ui.success(&format!("{} change(s) found", records.len()));
            }
        }

        Ok(CommandResult::success())
    }
}

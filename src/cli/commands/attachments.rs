//! Attachments command implementation.
//!
//! Prints one attached device per line so the output pipes cleanly.

use crate::cli::args::AttachmentsArgs;
use crate::error::Result;
use crate::templates::DeviceTemplates;
use crate::transport::Transport;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The attachments command implementation.
pub struct AttachmentsCommand<'a, T> {
    client: &'a DeviceTemplates<T>,
    args: AttachmentsArgs,
}

impl<'a, T: Transport> AttachmentsCommand<'a, T> {
    /// Create a new attachments command.
    pub fn new(client: &'a DeviceTemplates<T>, args: AttachmentsArgs) -> Self {
        Self { client, args }
    }
}

impl<T: Transport> Command for AttachmentsCommand<'_, T> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let devices = self
            .client
            .attachments(&self.args.template_id, &self.args.key)?;

        if devices.is_empty() {
            ui.message(&format!(
                "No devices attached to {}",
                self.args.template_id
            ));
        }
        for device in &devices {
            ui.output(device);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::fixtures::vmanage;
    use crate::templates::DEFAULT_ATTACHMENT_KEY;
    use crate::transport::{Method, Response};
    use crate::ui::MockUI;
    use serde_json::json;

    fn args(id: &str, key: &str) -> AttachmentsArgs {
        AttachmentsArgs {
            template_id: id.to_string(),
            key: key.to_string(),
        }
    }

    #[test]
    fn prints_attached_hosts() {
        let client = DeviceTemplates::new(vmanage());
        let mut ui = MockUI::new();

        AttachmentsCommand::new(&client, args("d-1", DEFAULT_ATTACHMENT_KEY))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.outputs(), ["edge-1"]);
    }

    #[test]
    fn custom_key() {
        let client = DeviceTemplates::new(vmanage());
        let mut ui = MockUI::new();

        AttachmentsCommand::new(&client, args("d-1", "deviceIP"))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.outputs(), ["10.0.0.1"]);
    }

    #[test]
    fn no_attachments() {
        let mock = vmanage();
        mock.on(
            Method::Get,
            "template/device/config/attached/d-9",
            Response::ok(json!({"data": []})),
        );
        let client = DeviceTemplates::new(mock);
        let mut ui = MockUI::new();

        let result = AttachmentsCommand::new(&client, args("d-9", DEFAULT_ATTACHMENT_KEY))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.outputs().is_empty());
        assert!(ui.has_message("No devices attached to d-9"));
    }
}

//! Shared display helpers for templates and change records.
//!
//! Used by `list` and `import` so templates and diffs render the same way
//! everywhere.

use crate::templates::{ChangeAction, ChangeRecord, DeviceTemplateRecord};
use crate::ui::UserInterface;

/// What an import did (or would do) with a change record.
pub fn change_label(action: ChangeAction, check_mode: bool, update: bool) -> &'static str {
    match (action, check_mode, update) {
        (ChangeAction::Create, true, _) => "would create",
        (ChangeAction::Create, false, _) => "created",
        (ChangeAction::Update, true, true) => "would update",
        (ChangeAction::Update, false, true) => "updated",
        (ChangeAction::Update, _, false) => "differs",
    }
}

/// Print a change record: one line per template, then its diff unless quiet.
pub fn show_change(ui: &mut dyn UserInterface, record: &ChangeRecord, label: &str) {
    let line = format!("  {} {}", record.name, label);
    match record.action {
        ChangeAction::Create => ui.success(&line),
        ChangeAction::Update => ui.warning(&line),
    }

    if ui.output_mode().shows_diffs() {
        for op in &record.diff {
            ui.show_diff_line(&op.to_string());
        }
    }
}

/// Print one device template line, with attachments and variables in
/// verbose mode.
pub fn show_template(ui: &mut dyn UserInterface, record: &DeviceTemplateRecord) {
    let template = &record.template;
    ui.message(&format!(
        "  {} ({}, {}) {}",
        template.template_name,
        template.device_type,
        template.config_type(),
        record.template_id
    ));

    if !ui.output_mode().shows_details() {
        return;
    }

    if !template.template_description.is_empty() {
        ui.message(&format!("      {}", template.template_description));
    }
    if !record.attached_devices.is_empty() {
        ui.message(&format!(
            "      attached: {}",
            record.attached_devices.join(", ")
        ));
    }
    if let Some(input) = &record.input {
        let variables: Vec<&str> = input
            .columns
            .iter()
            .filter_map(|c| c.variable.as_deref())
            .collect();
        if !variables.is_empty() {
            ui.message(&format!("      variables: {}", variables.join(", ")));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{DeviceTemplate, DiffOp, InputColumn, InputSchema};
    use crate::ui::{MockUI, OutputMode};
    use serde_json::json;

    fn record() -> ChangeRecord {
        ChangeRecord {
            name: "branch".to_string(),
            action: ChangeAction::Create,
            diff: vec![DiffOp::Add {
                path: "0".to_string(),
                value: json!({"templateName": "system"}),
            }],
        }
    }

    #[test]
    fn change_labels() {
        assert_eq!(change_label(ChangeAction::Create, false, false), "created");
        assert_eq!(change_label(ChangeAction::Create, true, false), "would create");
        assert_eq!(change_label(ChangeAction::Update, false, true), "updated");
        assert_eq!(change_label(ChangeAction::Update, true, true), "would update");
        assert_eq!(change_label(ChangeAction::Update, false, false), "differs");
    }

    #[test]
    fn show_change_with_diff() {
        let mut ui = MockUI::new();
        show_change(&mut ui, &record(), "created");

        assert!(ui.has_success("branch created"));
        assert_eq!(ui.diff_lines().len(), 1);
        assert!(ui.diff_lines()[0].contains("+ 0:"));
    }

    #[test]
    fn quiet_mode_hides_diff() {
        let mut ui = MockUI::with_mode(OutputMode::Quiet);
        show_change(&mut ui, &record(), "created");

        assert!(ui.has_success("branch"));
        assert!(ui.diff_lines().is_empty());
    }

    #[test]
    fn verbose_template_details() {
        let record = DeviceTemplateRecord {
            template_id: "d-1".to_string(),
            template: DeviceTemplate::file("cli", "vedge-cloud", "x").with_description("CLI edge"),
            attached_devices: vec!["edge-1".to_string(), "edge-2".to_string()],
            input: Some(InputSchema {
                columns: vec![InputColumn {
                    title: "Hostname (hostname)".to_string(),
                    property: "//system/host-name".to_string(),
                    variable: Some("hostname".to_string()),
                }],
            }),
        };

        let mut normal = MockUI::new();
        show_template(&mut normal, &record);
        assert_eq!(normal.messages().len(), 1);
        assert!(normal.has_message("cli (vedge-cloud, file) d-1"));

        let mut verbose = MockUI::with_mode(OutputMode::Verbose);
        show_template(&mut verbose, &record);
        assert!(verbose.has_message("CLI edge"));
        assert!(verbose.has_message("attached: edge-1, edge-2"));
        assert!(verbose.has_message("variables: hostname"));
    }
}

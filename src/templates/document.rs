//! Template documents on disk.
//!
//! Import files hold either a bare YAML list of device templates or a
//! mapping with a `vmanage_device_templates` key, which is also the shape
//! written by export:
//!
//! ```yaml
//! vmanage_device_templates:
//!   - templateName: branch
//!     templateDescription: Branch routers
//!     deviceType: vedge-cloud
//!     configType: template
//!     generalTemplates:
//!       - templateName: system-base
//!         templateType: cisco_system
//! ```

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, TemplateError};

use super::model::{DeviceTemplate, DeviceTemplateRecord};

/// Top-level key of export files.
pub const DOCUMENT_KEY: &str = "vmanage_device_templates";

#[derive(Serialize)]
struct ExportFile<'a> {
    vmanage_device_templates: &'a [DeviceTemplateRecord],
}

/// Parse device templates from YAML text.
///
/// Each entry must be exactly file- or feature-shaped.
pub fn parse_templates(content: &str) -> Result<Vec<DeviceTemplate>> {
    // Entries are converted one at a time so a malformed template reports
    // its own error.
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    let entries = match value {
        serde_yaml::Value::Mapping(mut map) => match map.remove(DOCUMENT_KEY) {
            Some(serde_yaml::Value::Null) => serde_yaml::Value::Sequence(Vec::new()),
            Some(entries) => entries,
            None => {
                return Err(TemplateError::ConfigValidationError {
                    message: format!("missing top-level '{}' key", DOCUMENT_KEY),
                })
            }
        },
        serde_yaml::Value::Null => serde_yaml::Value::Sequence(Vec::new()),
        other => other,
    };

    let serde_yaml::Value::Sequence(items) = entries else {
        return Err(TemplateError::ConfigValidationError {
            message: format!("expected a list of device templates or a '{}' key", DOCUMENT_KEY),
        });
    };

    items
        .into_iter()
        .map(|item| serde_yaml::from_value(item).map_err(TemplateError::from))
        .collect()
}

/// Load device templates from a YAML file.
pub fn load_templates(path: &Path) -> Result<Vec<DeviceTemplate>> {
    let content = fs::read_to_string(path)?;
    parse_templates(&content)
}

/// Render records as an import-compatible YAML document.
pub fn render_records(records: &[DeviceTemplateRecord]) -> Result<String> {
    Ok(serde_yaml::to_string(&ExportFile {
        vmanage_device_templates: records,
    })?)
}

/// Write records to `path` as YAML.
pub fn save_records(path: &Path, records: &[DeviceTemplateRecord]) -> Result<()> {
    fs::write(path, render_records(records)?)?;
    Ok(())
}

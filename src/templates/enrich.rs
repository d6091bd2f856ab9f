//! Attachment and input-variable lookups for device templates.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::Result;
use crate::transport::{Method, ResponseParser, Transport};

use super::model::{InputColumn, InputSchema};

/// Device field listed by [`attachments`] unless told otherwise.
pub const DEFAULT_ATTACHMENT_KEY: &str = "host-name";

static VARIABLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((?P<variable>[^(]+)\)").unwrap());

/// The `key` field of every device attached to `template_id`, in server order.
pub fn attachments<T: Transport + ?Sized>(
    transport: &T,
    template_id: &str,
    key: &str,
) -> Result<Vec<String>> {
    let path = format!("template/device/config/attached/{}", template_id);
    let response = transport.request(Method::Get, &path, None)?;
    let devices = ResponseParser::parse_data(&response)?;

    let mut attached = Vec::with_capacity(devices.len());
    for device in &devices {
        match device.get(key) {
            Some(Value::String(s)) => attached.push(s.clone()),
            Some(Value::Null) | None => {
                debug!("Attached device of {} has no '{}' field", template_id, key)
            }
            Some(other) => attached.push(other.to_string()),
        }
    }
    Ok(attached)
}

/// Editable input columns of `template_id`, from a dry-run input request
/// with no devices selected.
pub fn input_schema<T: Transport + ?Sized>(transport: &T, template_id: &str) -> Result<InputSchema> {
    let payload = json!({
        "deviceIds": [],
        "isEdited": false,
        "isMasterEdited": false,
        "templateId": template_id,
    });
    let response = transport.request(Method::Post, "template/device/config/input", Some(&payload))?;
    ResponseParser::ensure_success(&response)?;

    Ok(InputSchema {
        columns: response
            .body
            .as_ref()
            .map(editable_columns)
            .unwrap_or_default(),
    })
}

/// Editable columns listed under `header.columns` of an input response.
pub fn editable_columns(body: &Value) -> Vec<InputColumn> {
    let Some(columns) = body
        .get("header")
        .and_then(|h| h.get("columns"))
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    columns
        .iter()
        .filter(|c| c.get("editable").and_then(Value::as_bool).unwrap_or(false))
        .map(|c| {
            let title = str_field(c, "title");
            InputColumn {
                variable: extract_variable(&title),
                property: str_field(c, "property"),
                title,
            }
        })
        .collect()
}

/// Variable name embedded in a column title as `(name)`; first match wins.
///
/// ```
/// use vmanage_templates::templates::extract_variable;
///
/// assert_eq!(extract_variable("Hostname (hostname)").as_deref(), Some("hostname"));
/// assert_eq!(extract_variable("Description"), None);
/// ```
pub fn extract_variable(title: &str) -> Option<String> {
    VARIABLE_REGEX
        .captures(title)
        .and_then(|c| c.name("variable"))
        .map(|m| m.as_str().to_string())
}

fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

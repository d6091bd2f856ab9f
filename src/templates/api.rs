//! Device template endpoints of the vManage API.

use serde::Deserialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::error::{Result, TemplateError};
use crate::transport::{Method, ResponseParser, StatusRecord, Transport};

use super::catalog::{Catalog, FeatureCatalog};
use super::enrich;
use super::model::{DeviceTemplate, DeviceTemplateRecord, FeatureTemplateRef, InputSchema};
use super::normalize::{denormalize, normalize, TemplateObject};

/// Summary row of `GET template/device`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSummary {
    pub template_id: String,
    pub template_name: String,
    #[serde(default)]
    pub factory_default: bool,
}

/// Selects which device templates [`DeviceTemplates::list`] returns.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// Include factory default templates.
    pub factory_default: bool,
    /// Only these names (all templates when empty).
    pub names: Vec<String>,
    /// Fetch attached devices and input variables for every template.
    pub enrich: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            factory_default: false,
            names: Vec::new(),
            enrich: true,
        }
    }
}

impl ListOptions {
    /// Non-default templates without enrichment, as compared by the reconciler.
    pub fn comparable() -> Self {
        Self {
            enrich: false,
            ..Self::default()
        }
    }
}

/// Client for device templates.
///
/// # Example
///
/// ```
/// use vmanage_templates::templates::DeviceTemplates;
/// use vmanage_templates::transport::{Method, MockTransport, Response};
/// use serde_json::json;
///
/// let mock = MockTransport::new();
/// mock.on(Method::Get, "template/device", Response::ok(json!({"data": []})));
/// mock.on(Method::Get, "template/feature", Response::ok(json!({"data": []})));
///
/// let client = DeviceTemplates::new(mock);
/// assert!(client.list(&Default::default()).unwrap().is_empty());
/// ```
pub struct DeviceTemplates<T> {
    transport: T,
}

impl<T: Transport> DeviceTemplates<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Summaries of all device templates.
    pub fn summaries(&self) -> Result<Vec<TemplateSummary>> {
        let response = self.transport.request(Method::Get, "template/device", None)?;
        from_rows(ResponseParser::parse_data(&response)?)
    }

    /// Full object of one device template, `None` when vManage returns no body.
    pub fn object(&self, template_id: &str) -> Result<Option<TemplateObject>> {
        let path = format!("template/device/object/{}", template_id);
        let response = self.transport.request(Method::Get, &path, None)?;
        ResponseParser::ensure_success(&response)?;

        match response.body {
            None => Ok(None),
            Some(Value::Object(map)) if map.is_empty() => Ok(None),
            Some(body) => Ok(Some(serde_json::from_value(body)?)),
        }
    }

    /// Delete a device template.
    ///
    /// There is no dependency check; vManage itself refuses to delete
    /// templates that are still attached.
    pub fn delete(&self, template_id: &str) -> Result<StatusRecord> {
        let path = format!("template/device/{}", template_id);
        let response = self.transport.request(Method::Delete, &path, None)?;
        let status = ResponseParser::ensure_success(&response)?;
        info!("Deleted device template {}", template_id);
        Ok(status)
    }

    /// Feature templates, optionally including factory defaults.
    pub fn feature_catalog(&self, factory_default: bool) -> Result<FeatureCatalog> {
        let response = self.transport.request(Method::Get, "template/feature", None)?;
        let refs: Vec<FeatureTemplateRef> = from_rows(ResponseParser::parse_data(&response)?)?;
        FeatureCatalog::from_refs(
            refs.into_iter()
                .filter(|r| factory_default || !r.factory_default),
        )
    }

    /// Device templates with feature template ids translated to names.
    pub fn list(&self, options: &ListOptions) -> Result<Vec<DeviceTemplateRecord>> {
        let summaries = self.summaries()?;
        let features = self.feature_catalog(true)?;

        let mut records = Vec::new();
        for summary in summaries {
            if !options.names.is_empty() && !options.names.contains(&summary.template_name) {
                continue;
            }

            let Some(object) = self.object(&summary.template_id)? else {
                warn!(
                    "Skipping device template {}: vManage returned no object",
                    summary.template_name
                );
                continue;
            };
            if !options.factory_default && object.factory_default {
                continue;
            }

            let template = denormalize(object, &features)?;
            let (attached_devices, input) = if options.enrich {
                (
                    self.attachments(&summary.template_id, enrich::DEFAULT_ATTACHMENT_KEY)?,
                    Some(self.input_schema(&summary.template_id)?),
                )
            } else {
                (Vec::new(), None)
            };

            records.push(DeviceTemplateRecord {
                template_id: summary.template_id,
                template,
                attached_devices,
                input,
            });
        }

        Ok(records)
    }

    /// [`list`](Self::list) keyed by template name.
    pub fn catalog(&self, options: &ListOptions) -> Result<Catalog<DeviceTemplateRecord>> {
        Catalog::from_entries(
            self.list(options)?
                .into_iter()
                .map(|r| (r.template.template_name.clone(), r)),
        )
    }

    /// Create a device template.
    ///
    /// Feature template names are resolved against the current feature
    /// catalog, factory defaults included.
    pub fn create(&self, template: &DeviceTemplate) -> Result<StatusRecord> {
        let body = self.submission(template)?;
        let path = if template.is_file() {
            "template/device/cli"
        } else {
            "template/device/feature"
        };

        let response = self.transport.request(Method::Post, path, Some(&body))?;
        let status = ResponseParser::ensure_success(&response)?;
        info!("Created device template {}", template.template_name);
        Ok(status)
    }

    /// Replace the definition of an existing device template.
    pub fn update(&self, template_id: &str, template: &DeviceTemplate) -> Result<StatusRecord> {
        let mut body = self.submission(template)?;
        if let Value::Object(map) = &mut body {
            map.insert(
                "templateId".to_string(),
                Value::String(template_id.to_string()),
            );
        }

        let path = format!("template/device/{}", template_id);
        let response = self.transport.request(Method::Put, &path, Some(&body))?;
        let status = ResponseParser::ensure_success(&response)?;
        info!("Updated device template {}", template.template_name);
        Ok(status)
    }

    /// See [`enrich::attachments`].
    pub fn attachments(&self, template_id: &str, key: &str) -> Result<Vec<String>> {
        enrich::attachments(&self.transport, template_id, key)
    }

    /// See [`enrich::input_schema`].
    pub fn input_schema(&self, template_id: &str) -> Result<InputSchema> {
        enrich::input_schema(&self.transport, template_id)
    }

    fn submission(&self, template: &DeviceTemplate) -> Result<Value> {
        let features = if template.is_file() {
            FeatureCatalog::default()
        } else {
            self.feature_catalog(true)?
        };
        Ok(serde_json::to_value(normalize(template, &features)?)?)
    }
}

fn from_rows<R: serde::de::DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<R>> {
    rows.into_iter()
        .map(|row| {
            serde_json::from_value(row).map_err(|e| TemplateError::MalformedResponse {
                message: e.to_string(),
            })
        })
        .collect()
}

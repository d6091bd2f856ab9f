//! Device template data model.
//!
//! Templates come in two shapes, selected by `configType`:
//!
//! - **file** templates carry opaque CLI text in `templateConfiguration`
//! - **feature** templates carry an ordered list of feature-template
//!   references in `generalTemplates`
//!
//! [`DeviceTemplate`] models this as a tagged [`TemplateBody`]. Documents
//! are converted through [`TemplateDocument`], which rejects anything that is
//! not exactly one of the two shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::TemplateError;

/// `configType` value of CLI (file) templates.
pub const FILE_CONFIG_TYPE: &str = "file";

/// `configType` value of feature templates.
pub const FEATURE_CONFIG_TYPE: &str = "template";

/// A feature template as listed by `template/feature`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureTemplateRef {
    pub template_name: String,
    pub template_id: String,
    #[serde(default)]
    pub factory_default: bool,
}

/// Name-addressed reference to a feature template inside a device template.
///
/// Sub-templates nest one level deep at most.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralTemplateNode {
    pub template_name: String,
    pub template_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_templates: Option<Vec<GeneralTemplateNode>>,
}

impl GeneralTemplateNode {
    /// A node without sub-templates.
    pub fn leaf(name: impl Into<String>, template_type: impl Into<String>) -> Self {
        Self {
            template_name: name.into(),
            template_type: template_type.into(),
            sub_templates: None,
        }
    }

    /// A node with sub-templates.
    pub fn with_children(
        name: impl Into<String>,
        template_type: impl Into<String>,
        children: Vec<GeneralTemplateNode>,
    ) -> Self {
        Self {
            template_name: name.into(),
            template_type: template_type.into(),
            sub_templates: Some(children),
        }
    }

    /// JSON shape used for structural comparison.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert(
            "templateName".to_string(),
            Value::String(self.template_name.clone()),
        );
        map.insert(
            "templateType".to_string(),
            Value::String(self.template_type.clone()),
        );
        if let Some(children) = &self.sub_templates {
            map.insert(
                "subTemplates".to_string(),
                Value::Array(children.iter().map(Self::to_value).collect()),
            );
        }
        Value::Object(map)
    }
}

/// Id-addressed twin of [`GeneralTemplateNode`], as exchanged with vManage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralTemplateRef {
    pub template_id: String,
    pub template_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_templates: Option<Vec<GeneralTemplateRef>>,
}

/// The shape-specific part of a device template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateBody {
    /// CLI template text.
    File { configuration: String },
    /// Feature template references. `config_type` is kept verbatim
    /// (normally `"template"`).
    Feature {
        config_type: String,
        general_templates: Vec<GeneralTemplateNode>,
    },
}

/// A device template addressed by feature-template names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TemplateDocument", into = "TemplateDocument")]
pub struct DeviceTemplate {
    pub template_name: String,
    pub template_description: String,
    pub device_type: String,
    pub factory_default: bool,
    pub body: TemplateBody,
}

impl DeviceTemplate {
    /// A file template.
    pub fn file(
        name: impl Into<String>,
        device_type: impl Into<String>,
        configuration: impl Into<String>,
    ) -> Self {
        Self {
            template_name: name.into(),
            template_description: String::new(),
            device_type: device_type.into(),
            factory_default: false,
            body: TemplateBody::File {
                configuration: configuration.into(),
            },
        }
    }

    /// A feature template.
    pub fn feature(
        name: impl Into<String>,
        device_type: impl Into<String>,
        general_templates: Vec<GeneralTemplateNode>,
    ) -> Self {
        Self {
            template_name: name.into(),
            template_description: String::new(),
            device_type: device_type.into(),
            factory_default: false,
            body: TemplateBody::Feature {
                config_type: FEATURE_CONFIG_TYPE.to_string(),
                general_templates,
            },
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.template_description = description.into();
        self
    }

    /// The `configType` value of this template.
    pub fn config_type(&self) -> &str {
        match &self.body {
            TemplateBody::File { .. } => FILE_CONFIG_TYPE,
            TemplateBody::Feature { config_type, .. } => config_type,
        }
    }

    /// Whether this is a file (CLI) template.
    pub fn is_file(&self) -> bool {
        matches!(self.body, TemplateBody::File { .. })
    }

    /// Whether both templates have the same shape (file vs feature).
    pub fn same_shape(&self, other: &DeviceTemplate) -> bool {
        self.is_file() == other.is_file()
    }

    /// The part of the template compared during reconciliation:
    /// `generalTemplates` for feature templates, `templateConfiguration`
    /// for file templates.
    pub fn payload(&self) -> Value {
        match &self.body {
            TemplateBody::File { configuration } => Value::String(configuration.clone()),
            TemplateBody::Feature {
                general_templates, ..
            } => Value::Array(
                general_templates
                    .iter()
                    .map(GeneralTemplateNode::to_value)
                    .collect(),
            ),
        }
    }
}

/// Untyped wire/document form of a [`DeviceTemplate`].
///
/// `configType` may be omitted in hand-written documents; it is then
/// inferred from whichever of the two payload fields is present.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocument {
    pub template_name: String,
    #[serde(default)]
    pub template_description: String,
    #[serde(default)]
    pub device_type: String,
    #[serde(default)]
    pub factory_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_configuration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_templates: Option<Vec<GeneralTemplateNode>>,
}

impl TryFrom<TemplateDocument> for DeviceTemplate {
    type Error = TemplateError;

    fn try_from(doc: TemplateDocument) -> Result<Self, Self::Error> {
        let unknown = || TemplateError::UnknownTemplateType {
            name: doc.template_name.clone(),
        };

        let body = match (
            doc.config_type.as_deref(),
            &doc.template_configuration,
            &doc.general_templates,
        ) {
            (Some(FILE_CONFIG_TYPE) | None, Some(configuration), None) => TemplateBody::File {
                configuration: configuration.clone(),
            },
            (Some(FILE_CONFIG_TYPE), _, _) => return Err(unknown()),
            (config_type, None, Some(general_templates)) => TemplateBody::Feature {
                config_type: config_type.unwrap_or(FEATURE_CONFIG_TYPE).to_string(),
                general_templates: general_templates.clone(),
            },
            _ => return Err(unknown()),
        };

        Ok(Self {
            template_name: doc.template_name,
            template_description: doc.template_description,
            device_type: doc.device_type,
            factory_default: doc.factory_default,
            body,
        })
    }
}

impl From<DeviceTemplate> for TemplateDocument {
    fn from(template: DeviceTemplate) -> Self {
        let config_type = template.config_type().to_string();
        let (template_configuration, general_templates) = match template.body {
            TemplateBody::File { configuration } => (Some(configuration), None),
            TemplateBody::Feature {
                general_templates, ..
            } => (None, Some(general_templates)),
        };

        Self {
            template_name: template.template_name,
            template_description: template.template_description,
            device_type: template.device_type,
            factory_default: template.factory_default,
            config_type: Some(config_type),
            template_configuration,
            general_templates,
        }
    }
}

/// A device template read back from vManage, with derived data that is
/// not part of its identity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceTemplateRecord {
    #[serde(skip)]
    pub template_id: String,
    #[serde(flatten)]
    pub template: DeviceTemplate,
    /// Hosts the template is attached to.
    pub attached_devices: Vec<String>,
    /// Editable input variables, when fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<InputSchema>,
}

/// Editable input columns of a device template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSchema {
    pub columns: Vec<InputColumn>,
}

/// One editable input column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputColumn {
    pub title: String,
    pub property: String,
    /// Variable name embedded in the title as `(name)`.
    pub variable: Option<String>,
}

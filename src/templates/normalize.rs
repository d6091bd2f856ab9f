//! Conversion between name-addressed templates and the id-addressed
//! objects vManage stores.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, TemplateError};

use super::catalog::FeatureCatalog;
use super::model::{
    DeviceTemplate, GeneralTemplateNode, GeneralTemplateRef, TemplateBody, FILE_CONFIG_TYPE,
};
use super::resolver::NameResolver;

/// A device template as exchanged with `template/device/*` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    pub template_name: String,
    #[serde(default)]
    pub template_description: String,
    #[serde(default)]
    pub device_type: String,
    #[serde(default)]
    pub factory_default: bool,
    #[serde(default)]
    pub config_type: String,
    #[serde(default)]
    pub policy_id: String,
    #[serde(default)]
    pub feature_template_uid_range: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_configuration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_templates: Option<Vec<GeneralTemplateRef>>,
}

/// Turn a template into the object submitted to vManage, replacing every
/// feature template name with its id.
pub fn normalize(template: &DeviceTemplate, catalog: &FeatureCatalog) -> Result<TemplateObject> {
    let (template_configuration, general_templates) = match &template.body {
        TemplateBody::File { configuration } => (Some(configuration.clone()), None),
        TemplateBody::Feature {
            general_templates, ..
        } => {
            let resolver = NameResolver::new(catalog);
            (None, Some(resolver.resolve_all(general_templates)?))
        }
    };

    Ok(TemplateObject {
        template_id: None,
        template_name: template.template_name.clone(),
        template_description: template.template_description.clone(),
        device_type: template.device_type.clone(),
        factory_default: template.factory_default,
        config_type: template.config_type().to_string(),
        policy_id: String::new(),
        feature_template_uid_range: Vec::new(),
        template_configuration,
        general_templates,
    })
}

/// Turn a vManage object back into a name-addressed template.
///
/// Fails with [`TemplateError::UnknownTemplateId`] when a referenced feature
/// template is missing from `catalog`, and with
/// [`TemplateError::UnknownTemplateType`] when the object has neither or
/// the wrong payload for its `configType`.
pub fn denormalize(object: TemplateObject, catalog: &FeatureCatalog) -> Result<DeviceTemplate> {
    let unknown = || TemplateError::UnknownTemplateType {
        name: object.template_name.clone(),
    };

    let body = if object.config_type == FILE_CONFIG_TYPE {
        let configuration = object.template_configuration.clone().ok_or_else(unknown)?;
        TemplateBody::File { configuration }
    } else {
        let refs = object.general_templates.as_ref().ok_or_else(unknown)?;
        TemplateBody::Feature {
            config_type: object.config_type.clone(),
            general_templates: names_for(refs, catalog)?,
        }
    };

    Ok(DeviceTemplate {
        template_name: object.template_name,
        template_description: object.template_description,
        device_type: object.device_type,
        factory_default: object.factory_default,
        body,
    })
}

fn names_for(refs: &[GeneralTemplateRef], catalog: &FeatureCatalog) -> Result<Vec<GeneralTemplateNode>> {
    refs.iter()
        .map(|r| {
            let name = catalog
                .name_for(&r.template_id)
                .ok_or_else(|| TemplateError::UnknownTemplateId {
                    id: r.template_id.clone(),
                })?;
            let sub_templates = r
                .sub_templates
                .as_deref()
                .map(|children| names_for(children, catalog))
                .transpose()?;

            Ok(GeneralTemplateNode {
                template_name: name.to_string(),
                template_type: r.template_type.clone(),
                sub_templates,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::model::FeatureTemplateRef;
    use serde_json::json;

    fn catalog() -> FeatureCatalog {
        FeatureCatalog::from_refs(
            [
                ("system", "id-sys"),
                ("vpn-0", "id-vpn"),
                ("vpn-0-if", "id-if"),
                ("Factory_Default_AAA", "id-aaa"),
            ]
            .into_iter()
            .map(|(name, id)| FeatureTemplateRef {
                template_name: name.to_string(),
                template_id: id.to_string(),
                factory_default: name.starts_with("Factory"),
            }),
        )
        .unwrap()
    }

    fn branch() -> DeviceTemplate {
        DeviceTemplate::feature(
            "branch",
            "vedge-cloud",
            vec![
                GeneralTemplateNode::leaf("system", "cisco_system"),
                GeneralTemplateNode::leaf("Factory_Default_AAA", "cisco_aaa"),
                GeneralTemplateNode::with_children(
                    "vpn-0",
                    "cisco_vpn",
                    vec![GeneralTemplateNode::leaf("vpn-0-if", "cisco_vpn_interface")],
                ),
            ],
        )
        .with_description("Branch routers")
    }

    #[test]
    fn normalize_replaces_names_with_ids() {
        let object = normalize(&branch(), &catalog()).unwrap();
        let value = serde_json::to_value(&object).unwrap();

        assert_eq!(
            value,
            json!({
                "templateName": "branch",
                "templateDescription": "Branch routers",
                "deviceType": "vedge-cloud",
                "factoryDefault": false,
                "configType": "template",
                "policyId": "",
                "featureTemplateUidRange": [],
                "generalTemplates": [
                    {"templateId": "id-sys", "templateType": "cisco_system"},
                    {"templateId": "id-aaa", "templateType": "cisco_aaa"},
                    {
                        "templateId": "id-vpn",
                        "templateType": "cisco_vpn",
                        "subTemplates": [
                            {"templateId": "id-if", "templateType": "cisco_vpn_interface"}
                        ]
                    }
                ]
            })
        );
    }

    #[test]
    fn normalize_file_template_keeps_configuration() {
        let template = DeviceTemplate::file("cli", "vedge-cloud", "system\n host-name x\n");
        let object = normalize(&template, &FeatureCatalog::default()).unwrap();
        assert_eq!(object.config_type, "file");
        assert_eq!(
            object.template_configuration.as_deref(),
            Some("system\n host-name x\n")
        );
        assert!(object.general_templates.is_none());
    }

    #[test]
    fn normalize_fails_on_unknown_name() {
        let template = DeviceTemplate::feature(
            "t",
            "vedge-cloud",
            vec![
                GeneralTemplateNode::leaf("system", "cisco_system"),
                GeneralTemplateNode::leaf("logging", "cisco_logging"),
            ],
        );
        let err = normalize(&template, &catalog()).unwrap_err();
        assert!(matches!(err, TemplateError::UnknownTemplate { name } if name == "logging"));
    }

    #[test]
    fn round_trip_preserves_names_types_and_order() {
        let catalog = catalog();
        let original = branch();
        let restored = denormalize(normalize(&original, &catalog).unwrap(), &catalog).unwrap();
        assert_eq!(restored, original);

        let file = DeviceTemplate::file("cli", "vedge-cloud", "banner motd x");
        let restored = denormalize(normalize(&file, &catalog).unwrap(), &catalog).unwrap();
        assert_eq!(restored, file);
    }

    #[test]
    fn denormalize_server_object() {
        let object: TemplateObject = serde_json::from_value(json!({
            "templateId": "dev-1",
            "templateName": "branch",
            "templateDescription": "Branch",
            "deviceType": "vedge-cloud",
            "factoryDefault": false,
            "configType": "template",
            "policyId": "",
            "featureTemplateUidRange": [],
            "connectionPreference": true,
            "generalTemplates": [
                {"templateId": "id-vpn", "templateType": "cisco_vpn",
                 "subTemplates": [{"templateId": "id-if", "templateType": "cisco_vpn_interface"}]}
            ]
        }))
        .unwrap();

        let template = denormalize(object, &catalog()).unwrap();
        assert_eq!(
            template.payload(),
            json!([{
                "templateName": "vpn-0",
                "templateType": "cisco_vpn",
                "subTemplates": [{"templateName": "vpn-0-if", "templateType": "cisco_vpn_interface"}]
            }])
        );
    }

    #[test]
    fn denormalize_unknown_id_fails() {
        let object = TemplateObject {
            general_templates: Some(vec![GeneralTemplateRef {
                template_id: "gone".to_string(),
                template_type: "cisco_system".to_string(),
                sub_templates: None,
            }]),
            ..normalize(&DeviceTemplate::feature("t", "x", vec![]), &catalog()).unwrap()
        };
        let err = denormalize(object, &catalog()).unwrap_err();
        assert!(matches!(err, TemplateError::UnknownTemplateId { id } if id == "gone"));
    }

    #[test]
    fn denormalize_file_without_configuration_fails() {
        let object = TemplateObject {
            template_configuration: None,
            ..normalize(&DeviceTemplate::file("cli", "x", "y"), &catalog()).unwrap()
        };
        let err = denormalize(object, &catalog()).unwrap_err();
        assert!(matches!(err, TemplateError::UnknownTemplateType { .. }));
    }
}

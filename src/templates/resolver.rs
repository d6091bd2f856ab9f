//! Feature template name resolution.

use crate::error::{Result, TemplateError};

use super::catalog::FeatureCatalog;
use super::model::{GeneralTemplateNode, GeneralTemplateRef};

/// Resolves feature template names to ids against a [`FeatureCatalog`].
///
/// The catalog should include factory defaults, since device templates may
/// reference built-in feature templates.
pub struct NameResolver<'a> {
    catalog: &'a FeatureCatalog,
}

impl<'a> NameResolver<'a> {
    pub fn new(catalog: &'a FeatureCatalog) -> Self {
        Self { catalog }
    }

    /// Id for `name`, or [`TemplateError::UnknownTemplate`].
    pub fn resolve(&self, name: &str) -> Result<&'a str> {
        self.catalog
            .id_for(name)
            .ok_or_else(|| TemplateError::UnknownTemplate {
                name: name.to_string(),
            })
    }

    /// Resolve a node and all of its sub-templates.
    ///
    /// Any unresolvable name fails the whole node.
    pub fn resolve_node(&self, node: &GeneralTemplateNode) -> Result<GeneralTemplateRef> {
        let template_id = self.resolve(&node.template_name)?;
        let sub_templates = node
            .sub_templates
            .as_ref()
            .map(|children| self.resolve_all(children))
            .transpose()?;

        Ok(GeneralTemplateRef {
            template_id: template_id.to_string(),
            template_type: node.template_type.clone(),
            sub_templates,
        })
    }

    /// Resolve a sequence of nodes, preserving order.
    pub fn resolve_all(&self, nodes: &[GeneralTemplateNode]) -> Result<Vec<GeneralTemplateRef>> {
        nodes.iter().map(|node| self.resolve_node(node)).collect()
    }
}

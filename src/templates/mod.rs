//! Device templates: model, translation, enrichment and reconciliation.
//!
//! - [`model`] - template types and the file/feature shape invariant
//! - [`catalog`] - name-keyed catalogs and the feature name ↔ id index
//! - [`resolver`] / [`normalize`] - name ↔ id translation
//! - [`diff`] - structural comparison of template payloads
//! - [`enrich`] - attached devices and input variables
//! - [`api`] - the device template endpoints
//! - [`reconcile`] - declarative import
//! - [`document`] - YAML import/export files

pub mod api;
pub mod catalog;
pub mod diff;
pub mod document;
pub mod enrich;
pub mod model;
pub mod normalize;
pub mod reconcile;
pub mod resolver;

pub use api::{DeviceTemplates, ListOptions, TemplateSummary};
pub use catalog::{Catalog, FeatureCatalog};
pub use diff::{creation_diff, diff, DiffOp};
pub use document::{load_templates, parse_templates, render_records, save_records};
pub use enrich::{extract_variable, DEFAULT_ATTACHMENT_KEY};
pub use model::{
    DeviceTemplate, DeviceTemplateRecord, FeatureTemplateRef, GeneralTemplateNode,
    GeneralTemplateRef, InputColumn, InputSchema, TemplateBody, TemplateDocument,
};
pub use normalize::{denormalize, normalize, TemplateObject};
pub use reconcile::{
    compute_change, ChangeAction, ChangeRecord, PlanOptions, ReconcileError, Reconciler,
};
pub use resolver::NameResolver;

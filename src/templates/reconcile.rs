//! Declarative import of device templates.
//!
//! [`Reconciler::plan`] compares a desired list of device templates with
//! what vManage currently holds and creates or updates whatever differs.
//!
//! Reading the current state and submitting changes is not transactional;
//! concurrent edits on vManage between the two are overwritten.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::error::{Result, TemplateError};
use crate::transport::Transport;

use super::api::{DeviceTemplates, ListOptions};
use super::diff::{creation_diff, diff, DiffOp};
use super::model::DeviceTemplate;

/// What a [`ChangeRecord`] does to vManage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Create,
    Update,
}

/// A template that differs from its desired definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub name: String,
    pub action: ChangeAction,
    pub diff: Vec<DiffOp>,
}

/// How [`Reconciler::plan`] treats differences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanOptions {
    /// Compute changes without submitting anything.
    pub check_mode: bool,
    /// Submit changes to templates that already exist. Missing templates
    /// are created regardless.
    pub update: bool,
}

/// A failed plan, with the records completed before the failure.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct ReconcileError {
    /// Changes computed (and, outside check mode, applied) before the failure.
    pub records: Vec<ChangeRecord>,
    pub source: TemplateError,
}

/// Compute the change needed to turn `current` into `desired`.
///
/// Returns `None` when nothing differs. A template whose existing and
/// desired shapes differ (file vs feature) cannot be compared and fails
/// with [`TemplateError::UnknownTemplateType`].
pub fn compute_change(
    current: Option<&DeviceTemplate>,
    desired: &DeviceTemplate,
) -> Result<Option<ChangeRecord>> {
    let Some(current) = current else {
        return Ok(Some(ChangeRecord {
            name: desired.template_name.clone(),
            action: ChangeAction::Create,
            diff: creation_diff(&desired.payload()),
        }));
    };

    if !current.same_shape(desired) {
        return Err(TemplateError::UnknownTemplateType {
            name: desired.template_name.clone(),
        });
    }

    let ops = diff(&current.payload(), &desired.payload());
    if ops.is_empty() {
        return Ok(None);
    }

    Ok(Some(ChangeRecord {
        name: desired.template_name.clone(),
        action: ChangeAction::Update,
        diff: ops,
    }))
}

/// Drives create/update decisions against a [`DeviceTemplates`] client.
pub struct Reconciler<'a, T> {
    client: &'a DeviceTemplates<T>,
}

impl<'a, T: Transport> Reconciler<'a, T> {
    pub fn new(client: &'a DeviceTemplates<T>) -> Self {
        Self { client }
    }

    /// Reconcile `desired` with vManage.
    ///
    /// Templates are processed in input order and records are returned in
    /// the same order. In check mode nothing is submitted and the records
    /// are exactly those an applying run would produce.
    pub fn plan(
        &self,
        desired: &[DeviceTemplate],
        options: PlanOptions,
    ) -> std::result::Result<Vec<ChangeRecord>, ReconcileError> {
        let mut records = Vec::new();

        let current = match self.client.catalog(&ListOptions::comparable()) {
            Ok(current) => current,
            Err(source) => return Err(ReconcileError { records, source }),
        };
        debug!("{} device templates on vManage", current.len());

        for template in desired {
            let existing = current.get(&template.template_name);
            let change = match compute_change(existing.map(|r| &r.template), template) {
                Ok(change) => change,
                Err(source) => return Err(ReconcileError { records, source }),
            };

            let Some(change) = change else {
                debug!("{} is up to date", template.template_name);
                continue;
            };

            if !options.check_mode {
                let submitted = match (existing, change.action) {
                    (None, _) => self.client.create(template).map(|_| ()),
                    (Some(record), ChangeAction::Update) if options.update => self
                        .client
                        .update(&record.template_id, template)
                        .map(|_| ()),
                    _ => {
                        info!(
                            "{} differs from vManage; not updating without --update",
                            template.template_name
                        );
                        Ok(())
                    }
                };
                if let Err(source) = submitted {
                    return Err(ReconcileError { records, source });
                }
            }

            records.push(change);
        }

        Ok(records)
    }
}

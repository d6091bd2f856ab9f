//! Structural diff over template payloads.
//!
//! Payloads are compared as JSON values. Objects are compared key by key,
//! lists position by position (reordering shows up as changes), and
//! anything else by equality. Paths are dotted: `""` is the payload root,
//! `1.subTemplates.0.templateName` a nested field.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One structural difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DiffOp {
    /// `value` exists only in the desired payload.
    Add { path: String, value: Value },
    /// `value` exists only in the current payload.
    Remove { path: String, value: Value },
    /// The value at `path` differs.
    Change { path: String, old: Value, new: Value },
}

impl DiffOp {
    pub fn path(&self) -> &str {
        match self {
            Self::Add { path, .. } | Self::Remove { path, .. } | Self::Change { path, .. } => path,
        }
    }
}

impl fmt::Display for DiffOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = if self.path().is_empty() {
            "."
        } else {
            self.path()
        };
        match self {
            Self::Add { value, .. } => write!(f, "+ {}: {}", shown, value),
            Self::Remove { value, .. } => write!(f, "- {}: {}", shown, value),
            Self::Change { old, new, .. } => write!(f, "~ {}: {} -> {}", shown, old, new),
        }
    }
}

/// Differences that turn `current` into `desired`.
pub fn diff(current: &Value, desired: &Value) -> Vec<DiffOp> {
    let mut ops = Vec::new();
    diff_into("", current, desired, &mut ops);
    ops
}

/// Differences against an empty baseline: one addition per list element or
/// object key of `desired`, or a single root addition for scalars.
///
/// Never empty, so a creation always has something to show.
pub fn creation_diff(desired: &Value) -> Vec<DiffOp> {
    let ops: Vec<DiffOp> = match desired {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, value)| DiffOp::Add {
                path: i.to_string(),
                value: value.clone(),
            })
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| DiffOp::Add {
                path: key.clone(),
                value: value.clone(),
            })
            .collect(),
        _ => Vec::new(),
    };

    if ops.is_empty() {
        vec![DiffOp::Add {
            path: String::new(),
            value: desired.clone(),
        }]
    } else {
        ops
    }
}

fn diff_into(path: &str, current: &Value, desired: &Value, ops: &mut Vec<DiffOp>) {
    match (current, desired) {
        (Value::Object(old), Value::Object(new)) => {
            for (key, new_value) in new {
                let child = join(path, key);
                match old.get(key) {
                    Some(old_value) => diff_into(&child, old_value, new_value, ops),
                    None => ops.push(DiffOp::Add {
                        path: child,
                        value: new_value.clone(),
                    }),
                }
            }
            for (key, old_value) in old {
                if !new.contains_key(key) {
                    ops.push(DiffOp::Remove {
                        path: join(path, key),
                        value: old_value.clone(),
                    });
                }
            }
        }
        (Value::Array(old), Value::Array(new)) => {
            let common = old.len().min(new.len());
            for i in 0..common {
                diff_into(&join(path, &i.to_string()), &old[i], &new[i], ops);
            }
            for (i, value) in new.iter().enumerate().skip(common) {
                ops.push(DiffOp::Add {
                    path: join(path, &i.to_string()),
                    value: value.clone(),
                });
            }
            for (i, value) in old.iter().enumerate().skip(common) {
                ops.push(DiffOp::Remove {
                    path: join(path, &i.to_string()),
                    value: value.clone(),
                });
            }
        }
        _ if current != desired => ops.push(DiffOp::Change {
            path: path.to_string(),
            old: current.clone(),
            new: desired.clone(),
        }),
        _ => {}
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

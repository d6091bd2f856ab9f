//! vmanage-templates - Device template management for Cisco vManage.
//!
//! Device templates reference feature templates by id on the server. This
//! crate lets you read and write them by feature template *name*, and
//! reconciles a declared list of templates with what vManage holds.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Connection settings from `vmanage.yml`, environment and flags
//! - [`error`] - Error types and result aliases
//! - [`templates`] - Template model, name/id translation, diffing and reconciliation
//! - [`transport`] - HTTP session handling and response parsing
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use vmanage_templates::templates::{
//!     DeviceTemplate, DeviceTemplates, GeneralTemplateNode, PlanOptions, Reconciler,
//! };
//! use vmanage_templates::transport::{Method, MockTransport, Response};
//! use serde_json::json;
//!
//! let vmanage = MockTransport::new();
//! vmanage.on(Method::Get, "template/device", Response::ok(json!({"data": []})));
//! vmanage.on(Method::Get, "template/feature", Response::ok(json!({"data": []})));
//!
//! let client = DeviceTemplates::new(vmanage);
//! let desired = vec![DeviceTemplate::feature(
//!     "branch",
//!     "vedge-cloud",
//!     vec![GeneralTemplateNode::leaf("system-base", "cisco_system")],
//! )];
//!
//! let check = PlanOptions { check_mode: true, update: false };
//! let records = Reconciler::new(&client).plan(&desired, check).unwrap();
//! assert_eq!(records.len(), 1);
//! assert!(client.transport().mutations().is_empty());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod templates;
pub mod transport;
pub mod ui;

pub use error::{Result, TemplateError};

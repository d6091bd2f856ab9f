//! Response envelope and status parsing.
//!
//! vManage wraps list results as `{"data": [...]}` and reports failures as
//! `{"error": {"message": ..., "details": ...}}` next to a non-2xx status.

use serde::Serialize;
use serde_json::Value;

use crate::error::{Result, TemplateError};

use super::Response;

/// Outcome of a request as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    /// HTTP status code.
    pub status_code: u16,
    /// Whether the request succeeded.
    pub success: bool,
    /// Error message reported by vManage, if any.
    pub message: Option<String>,
    /// Additional error details reported by vManage, if any.
    pub details: Option<String>,
}

impl StatusRecord {
    /// Human readable failure description.
    pub fn describe(&self) -> String {
        match (&self.message, &self.details) {
            (Some(m), Some(d)) => format!("{}: {}", m, d),
            (Some(m), None) => m.clone(),
            (None, Some(d)) => d.clone(),
            (None, None) => format!("HTTP {}", self.status_code),
        }
    }
}

/// Parses vManage responses.
pub struct ResponseParser;

impl ResponseParser {
    /// Unwrap the `{"data": [...]}` envelope of a list response.
    ///
    /// A failure status is reported as [`TemplateError::RequestFailed`]. An
    /// empty body or missing `data` key yields an empty list.
    pub fn parse_data(response: &Response) -> Result<Vec<Value>> {
        Self::ensure_success(response)?;

        match response.body.as_ref().and_then(|b| b.get("data")) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items.clone()),
            Some(other) => Err(TemplateError::MalformedResponse {
                message: format!("expected `data` to be a list, got {}", type_name(other)),
            }),
        }
    }

    /// Map a response to a [`StatusRecord`].
    pub fn parse_status(response: &Response) -> StatusRecord {
        let error = response.body.as_ref().and_then(|b| b.get("error"));
        let field = |name: &str| {
            error
                .and_then(|e| e.get(name))
                .and_then(Value::as_str)
                .map(String::from)
        };

        StatusRecord {
            status_code: response.status,
            success: response.is_success() && error.is_none(),
            message: field("message"),
            details: field("details"),
        }
    }

    /// Like [`parse_status`](Self::parse_status), but turn failures into errors.
    pub fn ensure_success(response: &Response) -> Result<StatusRecord> {
        let status = Self::parse_status(response);
        if status.success {
            Ok(status)
        } else {
            Err(TemplateError::RequestFailed {
                status: status.status_code,
                message: status.describe(),
            })
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

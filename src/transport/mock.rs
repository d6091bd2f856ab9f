//! Mock transport implementation for testing.
//!
//! `MockTransport` implements the [`Transport`] trait, answers from a table
//! of scripted responses and records every request for later assertion.
//!
//! # Example
//!
//! ```
//! use vmanage_templates::transport::{Method, MockTransport, Response, Transport};
//! use serde_json::json;
//!
//! let mock = MockTransport::new();
//! mock.on(Method::Get, "template/device", Response::ok(json!({"data": []})));
//!
//! let response = mock.request(Method::Get, "template/device", None).unwrap();
//! assert!(response.is_success());
//! assert_eq!(mock.requests().len(), 1);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use serde_json::Value;

use crate::error::Result;

use super::{Method, Response, Transport};

/// A request captured by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

/// Scripted transport for tests.
///
/// Responses registered with [`on`](Self::on) are replayed for every
/// matching request; responses registered with [`queue`](Self::queue) are
/// consumed in order and take precedence. Unscripted requests get a 404.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: RefCell<HashMap<(Method, String), Response>>,
    queues: RefCell<HashMap<(Method, String), VecDeque<Response>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    /// Create a mock with no scripted routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every `method path` request with `response`.
    pub fn on(&self, method: Method, path: &str, response: Response) {
        self.routes
            .borrow_mut()
            .insert((method, path.to_string()), response);
    }

    /// Answer the next `method path` request with `response`.
    pub fn queue(&self, method: Method, path: &str, response: Response) {
        self.queues
            .borrow_mut()
            .entry((method, path.to_string()))
            .or_default()
            .push_back(response);
    }

    /// All requests received so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    /// Requests that may mutate remote state (POST/PUT/DELETE), excluding
    /// the read-only input-schema dry run.
    pub fn mutations(&self) -> Vec<RecordedRequest> {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method != Method::Get && r.path != "template/device/config/input")
            .cloned()
            .collect()
    }

    /// Number of requests that matched `method path`.
    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }
}

impl Transport for MockTransport {
    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Response> {
        self.requests.borrow_mut().push(RecordedRequest {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });

        let key = (method, path.to_string());
        if let Some(response) = self
            .queues
            .borrow_mut()
            .get_mut(&key)
            .and_then(VecDeque::pop_front)
        {
            return Ok(response);
        }

        Ok(self
            .routes
            .borrow()
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Response::empty(404)))
    }
}

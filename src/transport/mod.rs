//! HTTP transport for the vManage REST API.
//!
//! Everything above this module talks to vManage through the [`Transport`]
//! trait, which keeps the template logic independent of the HTTP client:
//! - [`HttpTransport`] speaks to a real vManage over `reqwest`
//! - [`MockTransport`] replays scripted responses in tests
//! - [`ResponseParser`] unwraps response envelopes and status codes
//!
//! Paths passed to [`Transport::request`] are relative to the
//! `/dataservice/` root, e.g. `template/device/object/<id>`.

pub mod http;
pub mod mock;
pub mod parse;

pub use http::HttpTransport;
pub use mock::{MockTransport, RecordedRequest};
pub use parse::{ResponseParser, StatusRecord};

use std::fmt;

use serde_json::Value;

use crate::error::Result;

/// HTTP verbs used by the template API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Upper-case verb as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A response from vManage.
///
/// `body` is `None` when the server sent nothing or something that is not
/// JSON (vManage answers some errors with HTML pages).
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Parsed JSON body, if any.
    pub body: Option<Value>,
}

impl Response {
    /// A 200 response carrying `body`.
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body: Some(body),
        }
    }

    /// A response with the given status and no body.
    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    /// A response with the given status and body.
    pub fn with_status(status: u16, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Synchronous request/response access to the vManage API.
///
/// Implementations report connection and timeout failures as
/// [`TemplateError::Transport`](crate::error::TemplateError::Transport).
/// Non-2xx answers are *not* errors at this level; callers interpret them
/// through [`ResponseParser`].
pub trait Transport {
    /// Issue a request against `path` (relative to `/dataservice/`).
    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Response>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Response> {
        (**self).request(method, path, body)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Response> {
        (**self).request(method, path, body)
    }
}

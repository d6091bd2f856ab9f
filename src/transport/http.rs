//! Blocking HTTP transport backed by `reqwest`.
//!
//! Authenticates with the vManage form login (`j_security_check`), keeps
//! the session cookie in the client's cookie store and forwards the
//! XSRF token on every data-service request.

use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::ConnectionConfig;
use crate::error::{Result, TemplateError};

use super::{Method, Response, Transport};

const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Talks to a vManage instance over HTTPS.
pub struct HttpTransport {
    client: Client,
    root_url: String,
    timeout: Duration,
    xsrf_token: Option<String>,
}

impl HttpTransport {
    /// Build a transport for `config` and log in.
    pub fn connect(config: &ConnectionConfig) -> Result<Self> {
        let mut transport =
            Self::with_root(&config.root_url(), config.timeout(), config.verify_tls)?;
        transport.login(&config.username, &config.password)?;
        Ok(transport)
    }

    /// Build an unauthenticated transport rooted at `root_url`
    /// (e.g. `https://vmanage:443/`).
    pub fn with_root(root_url: &str, timeout: Duration, verify_tls: bool) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("vmanage-templates/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .cookie_store(true)
            .danger_accept_invalid_certs(!verify_tls)
            .build()?;

        let root_url = if root_url.ends_with('/') {
            root_url.to_string()
        } else {
            format!("{}/", root_url)
        };

        Ok(Self {
            client,
            root_url,
            timeout,
            xsrf_token: None,
        })
    }

    /// Log in and fetch the XSRF token.
    ///
    /// vManage answers a rejected login with its HTML login page and a 200
    /// status, so the body is inspected as well as the status.
    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let url = format!("{}j_security_check", self.root_url);
        debug!("Logging in to {} as {}", self.root_url, username);

        let response = self
            .client
            .post(&url)
            .form(&[("j_username", username), ("j_password", password)])
            .send()?;
        let status = response.status();
        let text = response.text()?;

        if !status.is_success() || looks_like_html(&text) {
            return Err(TemplateError::Authentication {
                message: format!("vManage rejected credentials for user '{}'", username),
            });
        }

        let response = self.client.get(self.url("client/token")).send()?;
        if response.status().is_success() {
            let token = response.text()?;
            let token = token.trim();
            if !token.is_empty() && !looks_like_html(token) {
                self.xsrf_token = Some(token.to_string());
            }
        } else {
            debug!(
                "No XSRF token available (HTTP {}), continuing without it",
                response.status()
            );
        }

        Ok(())
    }

    /// Root URL of the vManage instance.
    pub fn root_url(&self) -> &str {
        &self.root_url
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// XSRF token obtained at login, if any.
    pub fn xsrf_token(&self) -> Option<&str> {
        self.xsrf_token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}dataservice/{}",
            self.root_url,
            path.trim_start_matches('/')
        )
    }
}

impl Transport for HttpTransport {
    fn request(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Response> {
        let url = self.url(path);
        debug!("{} {}", method, url);

        let mut request = self.client.request(method.into(), &url);
        if let Some(token) = &self.xsrf_token {
            request = request.header(XSRF_HEADER, token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let text = response.text()?;

        let body = if text.trim().is_empty() {
            None
        } else {
            match serde_json::from_str(&text) {
                Ok(value) => Some(value),
                Err(e) => {
                    debug!("Ignoring non-JSON body from {} ({})", url, e);
                    None
                }
            }
        };

        debug!("{} {} -> {}", method, url, status);
        Ok(Response { status, body })
    }
}

fn looks_like_html(text: &str) -> bool {
    text.to_ascii_lowercase().contains("<html")
}

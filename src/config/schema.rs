//! Connection configuration schema.
//!
//! [`ConfigFile`] mirrors the optional YAML file on disk; [`ConnectionConfig`]
//! is the fully resolved, validated result handed to the transport.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default HTTPS port of vManage.
pub const DEFAULT_PORT: u16 = 443;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Contents of a `vmanage.yml` connection file.
///
/// Every field is optional so that the file can be partially overridden by
/// environment variables and command-line flags.
///
/// ```yaml
/// host: vmanage.example.com
/// port: 8443
/// username: admin
/// password: admin
/// verify_tls: false
/// timeout: 60
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Hostname or IP address of vManage.
    pub host: Option<String>,
    /// HTTPS port.
    pub port: Option<u16>,
    /// Login user.
    pub username: Option<String>,
    /// Login password.
    pub password: Option<String>,
    /// Verify the server certificate.
    pub verify_tls: Option<bool>,
    /// Request timeout in seconds.
    pub timeout: Option<u64>,
}

/// Resolved connection settings.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub verify_tls: bool,
    pub timeout_secs: u64,
}

impl ConnectionConfig {
    /// Root URL of the vManage instance, e.g. `https://vmanage:443/`.
    pub fn root_url(&self) -> String {
        format!("https://{}:{}/", self.host, self.port)
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// Keep the password out of debug logs.
impl std::fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("verify_tls", &self.verify_tls)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

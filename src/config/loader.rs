//! Connection configuration discovery and loading.
//!
//! Settings are layered, later layers winning:
//! 1. Built-in defaults (port 443, 30 second timeout, TLS verification on)
//! 2. The YAML config file (`--config`, or `vmanage.yml` in the working directory)
//! 3. Overrides from the command line and `VMANAGE_*` environment variables

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::{ConfigFile, ConnectionConfig, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};
use crate::error::{Result, TemplateError};

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "vmanage.yml";

/// Values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConnectionOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Disable certificate verification.
    pub insecure: bool,
    pub timeout: Option<u64>,
}

/// Find `vmanage.yml` in `dir`.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load a single config file.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            TemplateError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            TemplateError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a [`ConfigFile`].
///
/// An empty document is an empty config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ConfigFile> {
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    serde_yaml::from_str(content).map_err(|e| TemplateError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Merge a config file with overrides and validate the result.
pub fn resolve_connection(
    file: ConfigFile,
    overrides: &ConnectionOverrides,
) -> Result<ConnectionConfig> {
    let host = overrides.host.clone().or(file.host);
    let username = overrides.username.clone().or(file.username);
    let password = overrides.password.clone().or(file.password);

    let config = ConnectionConfig {
        host: require("host", host)?,
        port: overrides.port.or(file.port).unwrap_or(DEFAULT_PORT),
        username: require("username", username)?,
        password: require("password", password)?,
        verify_tls: !overrides.insecure && file.verify_tls.unwrap_or(true),
        timeout_secs: overrides
            .timeout
            .or(file.timeout)
            .unwrap_or(DEFAULT_TIMEOUT_SECS),
    };

    validate(&config)?;
    Ok(config)
}

/// Load the connection settings.
///
/// An explicit `config_path` must exist; otherwise `vmanage.yml` in
/// `working_dir` is used when present.
pub fn load_connection(
    config_path: Option<&Path>,
    working_dir: &Path,
    overrides: &ConnectionOverrides,
) -> Result<ConnectionConfig> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config(working_dir),
    };

    let file = match path {
        Some(path) => {
            tracing::debug!("Loading connection settings from {}", path.display());
            load_config_file(&path)?
        }
        None => ConfigFile::default(),
    };

    resolve_connection(file, overrides)
}

fn require(field: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(TemplateError::ConfigValidationError {
            message: format!(
                "missing '{}' (set it in {}, VMANAGE_{} or --{})",
                field,
                DEFAULT_CONFIG_FILE,
                field.to_uppercase(),
                field
            ),
        }),
    }
}

fn validate(config: &ConnectionConfig) -> Result<()> {
    if config.port == 0 {
        return Err(TemplateError::ConfigValidationError {
            message: "port must be between 1 and 65535".to_string(),
        });
    }
    if config.timeout_secs == 0 {
        return Err(TemplateError::ConfigValidationError {
            message: "timeout must be at least one second".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn full_file() -> ConfigFile {
        ConfigFile {
            host: Some("vmanage.lab".to_string()),
            port: Some(8443),
            username: Some("admin".to_string()),
            password: Some("admin".to_string()),
            verify_tls: Some(false),
            timeout: Some(60),
        }
    }

    #[test]
    fn load_config_file_reads_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vmanage.yml");
        fs::write(&path, "host: 10.0.0.1\nusername: admin\npassword: pw\n").unwrap();

        let file = load_config_file(&path).unwrap();
        assert_eq!(file.host.as_deref(), Some("10.0.0.1"));
        assert_eq!(file.port, None);
    }

    #[test]
    fn load_config_file_missing_is_not_found() {
        let temp = TempDir::new().unwrap();
        let result = load_config_file(&temp.path().join("missing.yml"));
        assert!(matches!(result, Err(TemplateError::ConfigNotFound { .. })));
    }

    #[test]
    fn load_config_file_invalid_yaml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("vmanage.yml");
        fs::write(&path, "host: [unclosed\n").unwrap();

        let result = load_config_file(&path);
        assert!(matches!(result, Err(TemplateError::ConfigParseError { .. })));
    }

    #[test]
    fn empty_file_is_empty_config() {
        let file = parse_config("  \n", Path::new("vmanage.yml")).unwrap();
        assert_eq!(file, ConfigFile::default());
    }

    #[test]
    fn defaults_apply() {
        let file = ConfigFile {
            port: None,
            verify_tls: None,
            timeout: None,
            ..full_file()
        };
        let config = resolve_connection(file, &ConnectionOverrides::default()).unwrap();
        assert_eq!(config.port, 443);
        assert!(config.verify_tls);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn overrides_win_over_file() {
        let overrides = ConnectionOverrides {
            host: Some("override.lab".to_string()),
            port: Some(9443),
            ..Default::default()
        };
        let config = resolve_connection(full_file(), &overrides).unwrap();
        assert_eq!(config.host, "override.lab");
        assert_eq!(config.port, 9443);
        assert_eq!(config.username, "admin");
        assert!(!config.verify_tls);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn insecure_flag_disables_verification() {
        let file = ConfigFile {
            verify_tls: Some(true),
            ..full_file()
        };
        let overrides = ConnectionOverrides {
            insecure: true,
            ..Default::default()
        };
        let config = resolve_connection(file, &overrides).unwrap();
        assert!(!config.verify_tls);
    }

    #[test]
    fn missing_host_is_validation_error() {
        let file = ConfigFile {
            host: None,
            ..full_file()
        };
        let err = resolve_connection(file, &ConnectionOverrides::default()).unwrap_err();
        assert!(matches!(err, TemplateError::ConfigValidationError { .. }));
        assert!(err.to_string().contains("VMANAGE_HOST"));
    }

    #[test]
    fn zero_port_is_rejected() {
        let file = ConfigFile {
            port: Some(0),
            ..full_file()
        };
        let err = resolve_connection(file, &ConnectionOverrides::default()).unwrap_err();
        assert!(err.to_string().contains("port"));
    }

    #[test]
    fn load_connection_discovers_default_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(DEFAULT_CONFIG_FILE),
            "host: vm\nusername: u\npassword: p\n",
        )
        .unwrap();

        let config =
            load_connection(None, temp.path(), &ConnectionOverrides::default()).unwrap();
        assert_eq!(config.host, "vm");
    }

    #[test]
    fn load_connection_explicit_path_must_exist() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("other.yml");
        let result = load_connection(Some(&missing), temp.path(), &ConnectionOverrides::default());
        assert!(matches!(result, Err(TemplateError::ConfigNotFound { .. })));
    }

    #[test]
    fn load_connection_without_file_uses_overrides() {
        let temp = TempDir::new().unwrap();
        let overrides = ConnectionOverrides {
            host: Some("vm".to_string()),
            username: Some("u".to_string()),
            password: Some("p".to_string()),
            ..Default::default()
        };
        let config = load_connection(None, temp.path(), &overrides).unwrap();
        assert_eq!(config.root_url(), "https://vm:443/");
    }
}

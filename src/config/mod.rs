//! Connection configuration for vManage.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, layering and validation in [`loader`]
//!
//! # Example
//!
//! ```
//! use vmanage_templates::config::{resolve_connection, ConfigFile, ConnectionOverrides};
//!
//! let file: ConfigFile = serde_yaml::from_str("host: vmanage.lab\nusername: admin").unwrap();
//! let overrides = ConnectionOverrides {
//!     password: Some("secret".to_string()),
//!     ..Default::default()
//! };
//!
//! let config = resolve_connection(file, &overrides).unwrap();
//! assert_eq!(config.root_url(), "https://vmanage.lab:443/");
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    discover_config, load_config_file, load_connection, parse_config, resolve_connection,
    ConnectionOverrides, DEFAULT_CONFIG_FILE,
};
pub use schema::{ConfigFile, ConnectionConfig, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS};

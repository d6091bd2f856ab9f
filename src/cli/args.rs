//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConnectionOverrides;
use crate::templates::DEFAULT_ATTACHMENT_KEY;
use crate::ui::OutputMode;

/// vmanage-templates - Manage and reconcile vManage device templates.
#[derive(Debug, Parser)]
#[command(name = "vmanage-templates")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to connection config (defaults to ./vmanage.yml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// vManage hostname or IP address
    #[arg(long, global = true, env = "VMANAGE_HOST")]
    pub host: Option<String>,

    /// vManage HTTPS port
    #[arg(long, global = true, env = "VMANAGE_PORT")]
    pub port: Option<u16>,

    /// Login user
    #[arg(short, long, global = true, env = "VMANAGE_USERNAME")]
    pub username: Option<String>,

    /// Login password
    #[arg(long, global = true, env = "VMANAGE_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Show attachments and input variables in listings
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Connection settings given on the command line or in the environment.
    pub fn overrides(&self) -> ConnectionOverrides {
        ConnectionOverrides {
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
            password: self.password.clone(),
            insecure: self.insecure,
            timeout: self.timeout,
        }
    }

    /// Output mode selected by `--quiet` / `--verbose`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List device templates
    List(ListArgs),

    /// Export device templates to a YAML file
    Export(ExportArgs),

    /// Create or update device templates from a YAML file
    Import(ImportArgs),

    /// Delete a device template
    Delete(DeleteArgs),

    /// List devices attached to a device template
    Attachments(AttachmentsArgs),

    /// Show the editable input variables of a device template
    Input(InputArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Include factory default templates
    #[arg(long)]
    pub factory_default: bool,

    /// Only list these templates (repeatable)
    #[arg(short, long = "name")]
    pub names: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ExportArgs {
    /// File to write
    pub file: PathBuf,

    /// Include factory default templates
    #[arg(long)]
    pub factory_default: bool,

    /// Only export these templates (repeatable)
    #[arg(short, long = "name")]
    pub names: Vec<String>,
}

/// Arguments for the `import` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ImportArgs {
    /// YAML file with the desired device templates
    pub file: PathBuf,

    /// Only report what would change
    #[arg(long)]
    pub check: bool,

    /// Update templates that already exist (missing ones are always created)
    #[arg(long)]
    pub update: bool,

    /// Output change records as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command.
#[derive(Debug, Clone, clap::Args)]
pub struct DeleteArgs {
    /// Id of the device template
    pub template_id: String,
}

/// Arguments for the `attachments` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AttachmentsArgs {
    /// Id of the device template
    pub template_id: String,

    /// Device field to print
    #[arg(long, default_value = DEFAULT_ATTACHMENT_KEY)]
    pub key: String,
}

/// Arguments for the `input` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InputArgs {
    /// Id of the device template
    pub template_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

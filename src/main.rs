//! vmanage-templates CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vmanage_templates::cli::{Cli, CommandDispatcher};
use vmanage_templates::config::load_connection;
use vmanage_templates::transport::HttpTransport;
use vmanage_templates::ui::{create_ui, UserInterface};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("vmanage_templates=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("vmanage_templates=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli, ui: &mut dyn UserInterface) -> vmanage_templates::Result<i32> {
    let working_dir = std::env::current_dir()?;
    let connection = load_connection(cli.config.as_deref(), &working_dir, &cli.overrides())?;
    tracing::debug!("Connecting to {}", connection.root_url());

    let transport = HttpTransport::connect(&connection)?;
    let dispatcher = CommandDispatcher::new(transport);
    Ok(dispatcher.dispatch(&cli.command, ui)?.exit_code)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("vmanage-templates starting: {:?}", cli.command);

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(cli.output_mode());

    match run(&cli, ui.as_mut()) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            ui.error(&format!("Error: {}", e));
            ExitCode::from(1)
        }
    }
}

//! fconstgen - C++ constants header generator for Fortran sources

#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::io::{self, Write};
use std::path::Path;

use fconstgen::process::{render_header, write_header};
use fconstgen::{parse_args, CliArgs, Config, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let args = parse_args();
    init_logging(args.debug)?;

    // Relative inputs and output resolve against the project root we run in
    let cwd = std::env::current_dir()?;
    let config = build_config(&args, &cwd)?;

    let header = render_header(&config, &cwd)?;
    tracing::debug!(
        files = header.files.len(),
        lines = header.lines_emitted(),
        "rendered header"
    );

    if args.stdout {
        io::stdout().write_all(&header.contents)?;
        return Ok(());
    }

    write_header(&cwd.join(&config.output), &header.contents)?;
    if !args.silent {
        println!("Created: {}", config.output.display());
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` is honoured, `--debug` raises our level
fn init_logging(debug: bool) -> Result<()> {
    let level = if debug { "fconstgen=debug" } else { "fconstgen=warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(level.parse()?))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();
    Ok(())
}

/// Build configuration from an explicit or discovered config file and CLI args
fn build_config(args: &CliArgs, cwd: &Path) -> Result<Config> {
    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!(config = %config_path.display(), "using explicit config file");
        Config::from_toml_file(config_path)?
    } else {
        Config::discover(cwd)?
    };

    // Override with CLI arguments
    if !args.inputs.is_empty() {
        config.inputs.clone_from(&args.inputs);
    }
    if let Some(output) = &args.output {
        config.output.clone_from(output);
    }

    tracing::debug!(?config, "configuration");

    if let Some(error) = config.validate() {
        anyhow::bail!("Invalid configuration: {error}");
    }

    Ok(config)
}

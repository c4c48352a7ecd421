//! # smarthome — demo report binary
//!
//! Composition root that builds the sample home and prints the report.
//!
//! ## Responsibilities
//! - Load configuration (optional `smarthome.toml`, env overrides); a bad
//!   config only affects logging, never the report
//! - Install the `tracing` subscriber on stderr
//! - Build the sample devices and their home
//! - Write the report to stdout
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use std::io::Write;

use smarthome_adapter_sample::SampleHome;
use smarthome_app::report::HomeReport;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LoggingConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (config, config_error) = Config::load();
    init_tracing(&config.logging);
    if let Some(err) = config_error {
        tracing::warn!(error = %err, "ignoring configuration file, using defaults");
    }

    let sample = SampleHome::build()?;
    tracing::info!(devices = sample.home().len(), "smart home ready");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    HomeReport::new(sample.home()).write_all(&mut out, &sample.introspection_targets())?;
    out.flush()?;

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&logging.filter))
        .with_writer(std::io::stderr)
        .init();
}

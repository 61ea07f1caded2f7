//! Command-line interface for soap-injector
//!
//! # Usage Examples
//!
//! ```bash
//! # Send a single message chosen at random from ./soap_templates
//! soap-injector http://localhost:8080/services/Orders
//!
//! # Send 50 messages, 200ms apart, with a 5 second request timeout
//! soap-injector http://localhost:8080/services/Orders \
//!   --templates-dir ./templates \
//!   --count 50 --delay 200ms --timeout 5s
//!
//! # Reproducible run in file name order with a JSON report
//! soap-injector http://localhost:8080/services/Orders \
//!   --order sequential --seed 42 --report-json report.json
//!
//! # Check substitution without sending anything
//! soap-injector http://localhost:8080/services/Orders --dry-run -v
//! ```
//!
//! ## Placeholders
//! `{{UUID}}`, `{{UUID_UPPER}}`, `{{UUID_NO_DASH}}`, `{{TIMESTAMP}}`,
//! `{{TIMESTAMP_MS}}`, `{{DATE}}`, `{{TIME}}`, `{{EPOCH}}`, `{{RANDOM_ID}}`,
//! `{{RANDOM_ALPHA}}`, `{{RANDOM_ALPHANUM}}`. Anything else is sent as is.

use clap::Parser;
use soap_injector::inject::build_injector;
use soap_injector::{InjectArgs, InjectConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "soap-injector")]
#[command(about = "Send templated SOAP/XML messages to an HTTP endpoint")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    inject: InjectArgs,

    /// Verbose (debug) logging; ignored when RUST_LOG is set
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    match run().await {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

/// Returns whether every message was delivered.
async fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = InjectConfig::try_from(&cli.inject)?;
    let mut injector = build_injector(&config).await?;

    if config.dry_run {
        tracing::info!(
            "[DRY-RUN] Would send {} message(s) to {} (timeout {:?}, delay {:?})",
            config.count,
            config.endpoint,
            config.timeout,
            config.delay
        );
        injector.preview(config.count);
        return Ok(true);
    }

    let stats = injector.run(config.count, config.delay).await;

    if let Some(path) = &config.report_json {
        stats.write_json(path)?;
    }

    Ok(stats.all_succeeded())
}

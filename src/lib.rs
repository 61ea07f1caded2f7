//! soap-injector library
//!
//! Loads XML message templates from a directory, fills in `{{NAME}}`
//! placeholders with generated values and POSTs the result to an HTTP
//! endpoint, one message at a time.
//!
//! # Pipeline
//!
//! 1. Template discovery (`soap_injector_templates`)
//! 2. Placeholder substitution (`placeholder_generator`)
//! 3. HTTP POST with a timeout ([`inject::HttpSender`])
//! 4. Counter update ([`inject::RunStats`])
//!
//! # CLI Usage
//!
//! ```bash
//! # Send one message picked at random from ./soap_templates
//! soap-injector http://localhost:8080/ws
//!
//! # Send 100 messages in template order, one every 500ms
//! soap-injector http://localhost:8080/ws -d ./templates -c 100 -w 500ms --order sequential
//! ```

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

pub mod config;
pub mod inject;

pub use placeholder_generator as placeholders;
pub use soap_injector_templates as templates;

/// How the next template is chosen on each iteration.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionOrder {
    /// Uniform random choice on every send
    #[default]
    Random,
    /// Round-robin in file name order
    Sequential,
}

#[derive(Parser, Clone, Debug)]
pub struct InjectArgs {
    /// Endpoint URL that receives the messages
    #[arg(env = "SOAP_INJECTOR_ENDPOINT")]
    pub endpoint: String,

    /// Directory containing the message templates
    #[arg(
        long,
        short = 'd',
        default_value = "./soap_templates",
        env = "SOAP_INJECTOR_TEMPLATES_DIR"
    )]
    pub templates_dir: PathBuf,

    /// File extension recognized as a template
    #[arg(long, default_value = soap_injector_templates::DEFAULT_EXTENSION)]
    pub extension: String,

    /// Number of messages to send
    #[arg(long, short = 'c', default_value = "1")]
    pub count: u64,

    /// Delay between sends
    /// Format: seconds ("0.5") or with units like "500ms", "2s", "1m"
    #[arg(long, short = 'w', default_value = "0")]
    pub delay: String,

    /// HTTP request timeout
    /// Format: seconds ("30") or with units like "500ms", "30s", "2m"
    #[arg(long, short = 't', default_value = "30s")]
    pub timeout: String,

    /// Template selection order
    #[arg(long, value_enum, default_value_t = SelectionOrder::Random)]
    pub order: SelectionOrder,

    /// Random seed for reproducible placeholder values and template choice
    #[arg(long)]
    pub seed: Option<u64>,

    /// SOAPAction header value (sent quoted)
    #[arg(long, default_value = "")]
    pub soap_action: String,

    /// Dry run mode - substitute templates and log them without sending
    #[arg(long)]
    pub dry_run: bool,

    /// Write the final run statistics as JSON to this path (not with --dry-run)
    #[arg(long, value_name = "PATH", conflicts_with = "dry_run")]
    pub report_json: Option<PathBuf>,
}

/// Validated run configuration.
#[derive(Clone, Debug)]
pub struct InjectConfig {
    pub endpoint: reqwest::Url,
    pub templates_dir: PathBuf,
    pub extension: String,
    pub count: u64,
    pub delay: Duration,
    pub timeout: Duration,
    pub order: SelectionOrder,
    pub seed: Option<u64>,
    pub soap_action: String,
    pub dry_run: bool,
    pub report_json: Option<PathBuf>,
}

impl TryFrom<&InjectArgs> for InjectConfig {
    type Error = anyhow::Error;

    fn try_from(args: &InjectArgs) -> anyhow::Result<Self> {
        let endpoint = reqwest::Url::parse(&args.endpoint)
            .with_context(|| format!("Invalid endpoint URL: {}", args.endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            anyhow::bail!("Endpoint must be an http or https URL: {}", args.endpoint);
        }

        if args.count == 0 {
            anyhow::bail!("--count must be at least 1");
        }

        let delay = config::parse_duration(&args.delay)
            .with_context(|| format!("Invalid --delay: {}", args.delay))?;
        let timeout = config::parse_duration(&args.timeout)
            .with_context(|| format!("Invalid --timeout: {}", args.timeout))?;
        if timeout.is_zero() {
            anyhow::bail!("--timeout must be greater than zero");
        }

        Ok(Self {
            endpoint,
            templates_dir: args.templates_dir.clone(),
            extension: args.extension.clone(),
            count: args.count,
            delay,
            timeout,
            order: args.order,
            seed: args.seed,
            soap_action: args.soap_action.clone(),
            dry_run: args.dry_run,
            report_json: args.report_json.clone(),
        })
    }
}

//! Injection run loop.

use crate::inject::{HttpSender, RunStats, SendOutcome};
use crate::{InjectConfig, SelectionOrder};
use anyhow::Context;
use placeholder_generator::Substitutor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use soap_injector_templates::{Template, TemplateSet};
use std::time::{Duration, Instant};

/// A substituted message produced by a dry run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub template: String,
    pub body: String,
}

/// Picks templates, substitutes them and sends them one at a time.
pub struct Injector {
    templates: TemplateSet,
    substitutor: Substitutor,
    sender: HttpSender,
    order: SelectionOrder,
    /// Random source for template selection
    rng: StdRng,
    /// Next template for sequential selection
    cursor: usize,
}

impl Injector {
    pub fn new(
        templates: TemplateSet,
        substitutor: Substitutor,
        sender: HttpSender,
        order: SelectionOrder,
    ) -> Self {
        Self {
            templates,
            substitutor,
            sender,
            order,
            rng: StdRng::from_os_rng(),
            cursor: 0,
        }
    }

    /// Seed template selection for reproducible random order.
    pub fn with_selection_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    fn next_template(&mut self) -> &Template {
        let all = self.templates.as_slice();
        let index = match self.order {
            SelectionOrder::Random => self.rng.random_range(0..all.len()),
            SelectionOrder::Sequential => {
                let index = self.cursor % all.len();
                self.cursor = self.cursor.wrapping_add(1);
                index
            }
        };
        &all[index]
    }

    /// Select, substitute and send a single message.
    pub async fn inject_single(&mut self) -> SendOutcome {
        let template = self.next_template().clone();
        let substituted = self.substitutor.substitute(&template.content);

        tracing::debug!(
            "Generated values for [{}]: {:?}",
            template.name,
            substituted.replaced()
        );

        self.sender.send(&template.name, substituted.text).await
    }

    /// Send `count` messages, sleeping `delay` between consecutive sends.
    ///
    /// Every send runs to completion before the next starts. Failures are
    /// counted and the loop carries on.
    pub async fn run(&mut self, count: u64, delay: Duration) -> RunStats {
        tracing::info!(
            "Starting injection of {} message(s) to {}",
            count,
            self.sender.endpoint()
        );

        let mut stats = RunStats::start(self.sender.endpoint().as_str());
        let start_time = Instant::now();

        for i in 1..=count {
            tracing::debug!("--- Injection {i}/{count} ---");

            let outcome = self.inject_single().await;
            stats.record(&outcome);

            if !delay.is_zero() && i < count {
                tracing::debug!("Waiting {delay:?} before next send");
                tokio::time::sleep(delay).await;
            }
        }

        stats.finish(start_time.elapsed());
        stats.log_summary();
        stats
    }

    /// Select and substitute `count` messages without sending anything.
    pub fn preview(&mut self, count: u64) -> Vec<Preview> {
        (1..=count)
            .map(|i| {
                let template = self.next_template().clone();
                let substituted = self.substitutor.substitute(&template.content);
                tracing::info!(
                    "[DRY-RUN] {}/{} [{}] - {} placeholder(s) substituted",
                    i,
                    count,
                    template.name,
                    substituted.values.len()
                );
                tracing::debug!("[DRY-RUN] Payload:\n{}", substituted.text);
                Preview {
                    template: template.name,
                    body: substituted.text,
                }
            })
            .collect()
    }
}

/// Load templates and assemble an [`Injector`] from a validated configuration.
pub async fn build_injector(config: &InjectConfig) -> anyhow::Result<Injector> {
    let templates = TemplateSet::load(&config.templates_dir, &config.extension)
        .await
        .with_context(|| {
            format!(
                "Failed to load templates from {}",
                config.templates_dir.display()
            )
        })?;

    let sender = HttpSender::new(config.endpoint.clone(), config.timeout, &config.soap_action)?;

    let injector = match config.seed {
        Some(seed) => Injector::new(
            templates,
            Substitutor::with_seed(seed),
            sender,
            config.order,
        )
        // Selection draws from its own stream
        .with_selection_seed(seed.wrapping_add(1)),
        None => Injector::new(templates, Substitutor::new(), sender, config.order),
    };

    Ok(injector)
}

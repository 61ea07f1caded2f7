//! Template body substitution.

use crate::generators::generate_value;
use crate::Placeholder;
use chrono::{DateTime, FixedOffset, Local};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

/// Output of a single substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substituted {
    /// Body with recognized placeholders replaced.
    pub text: String,
    /// Value used for each placeholder that occurred in the body.
    pub values: BTreeMap<Placeholder, String>,
}

impl Substituted {
    /// Placeholders that were replaced, in declaration order.
    pub fn replaced(&self) -> Vec<Placeholder> {
        self.values.keys().copied().collect()
    }
}

/// Replaces `{{NAME}}` tokens with generated values.
///
/// Within one call every occurrence of the same placeholder receives the same
/// value, so a message can reference its own identifier more than once. Each
/// call draws new values.
pub struct Substitutor {
    /// Random source for identifiers and random strings
    rng: StdRng,
}

impl Substitutor {
    /// Create a substitutor seeded from operating system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a substitutor with a fixed seed.
    ///
    /// Two substitutors with the same seed produce the same random values for
    /// the same sequence of calls. Time-based values still follow the clock.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Substitute using the current local time.
    pub fn substitute(&mut self, body: &str) -> Substituted {
        self.substitute_at(body, Local::now().fixed_offset())
    }

    /// Substitute using an explicit instant for the time-based placeholders.
    pub fn substitute_at(&mut self, body: &str, now: DateTime<FixedOffset>) -> Substituted {
        let mut values: BTreeMap<Placeholder, String> = BTreeMap::new();
        let mut text = String::with_capacity(body.len());
        let mut rest = body;

        while let Some(start) = rest.find("{{") {
            text.push_str(&rest[..start]);
            let after = &rest[start + 2..];

            // Names never contain braces, so the candidate ends at the first
            // non-name byte and each byte is scanned a bounded number of times.
            let name_len = after
                .bytes()
                .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
                .count();
            let (name, tail) = after.split_at(name_len);
            let placeholder = tail
                .strip_prefix("}}")
                .and_then(|_| Placeholder::from_name(name));

            match placeholder {
                Some(placeholder) => {
                    let value = values
                        .entry(placeholder)
                        .or_insert_with(|| generate_value(placeholder, &mut self.rng, &now));
                    text.push_str(value);
                    rest = &tail[2..];
                }
                None => {
                    // Unknown or unterminated. Emit the opening braces only,
                    // so a recognized token after them (e.g. `{{{{UUID}}`)
                    // is still found.
                    text.push_str("{{");
                    rest = after;
                }
            }
        }
        text.push_str(rest);

        Substituted { text, values }
    }
}

impl Default for Substitutor {
    fn default() -> Self {
        Self::new()
    }
}

//! Placeholder substitution engine for soap-injector.
//!
//! Message templates carry `{{NAME}}` tokens. The [`Substitutor`] scans a
//! template body once and replaces every recognized token with a freshly
//! generated value. Tokens it does not recognize are left in place.
//!
//! # Architecture
//!
//! ```text
//! template body
//!        │
//!        ▼
//! ┌─────────────────┐
//! │   Substitutor   │
//! │                 │
//! │  - rng (StdRng) │
//! │  - instant      │
//! └────────┬────────┘
//!          │
//!          ▼
//!    Substituted { text, replaced }
//! ```
//!
//! # Example
//!
//! ```rust
//! use placeholder_generator::Substitutor;
//!
//! let mut substitutor = Substitutor::with_seed(42);
//! let out = substitutor.substitute("<id>{{UUID}}</id><x>{{UNKNOWN}}</x>");
//! assert!(!out.text.contains("{{UUID}}"));
//! assert!(out.text.contains("{{UNKNOWN}}"));
//! ```
//!
//! # Placeholders
//!
//! - `UUID`, `UUID_UPPER`, `UUID_NO_DASH` - random UUID v4 in three spellings
//! - `TIMESTAMP`, `TIMESTAMP_MS`, `DATE`, `TIME`, `EPOCH` - current local time
//! - `RANDOM_ID` - six digit number
//! - `RANDOM_ALPHA` - eight uppercase letters
//! - `RANDOM_ALPHANUM` - ten uppercase letters or digits

pub mod generators;
pub mod placeholder;
pub mod substitutor;

// Re-exports for convenience
pub use placeholder::Placeholder;
pub use substitutor::{Substituted, Substitutor};

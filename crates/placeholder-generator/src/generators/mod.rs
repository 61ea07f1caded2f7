//! Value generators for each placeholder.
//!
//! Every generator returns the exact text that replaces its token.

pub mod random;
pub mod timestamp;
pub mod uuid;

use crate::Placeholder;
use chrono::{DateTime, FixedOffset};
use rand::Rng;

/// Generate the replacement text for a placeholder.
///
/// Time-based placeholders render `now`, so a caller that passes the same
/// instant for every placeholder of one message gets consistent timestamps.
pub fn generate_value<R: Rng>(
    placeholder: Placeholder,
    rng: &mut R,
    now: &DateTime<FixedOffset>,
) -> String {
    match placeholder {
        Placeholder::Uuid => uuid::generate_uuid_v4(rng).hyphenated().to_string(),

        Placeholder::UuidUpper => uuid::generate_uuid_v4(rng)
            .hyphenated()
            .to_string()
            .to_uppercase(),

        Placeholder::UuidNoDash => uuid::generate_uuid_v4(rng).simple().to_string(),

        Placeholder::Timestamp => timestamp::format_timestamp(now),

        Placeholder::TimestampMs => timestamp::format_timestamp_millis(now),

        Placeholder::Date => timestamp::format_date(now),

        Placeholder::Time => timestamp::format_time(now),

        Placeholder::Epoch => timestamp::format_epoch(now),

        Placeholder::RandomId => random::generate_int_range(rng, 100_000, 999_999).to_string(),

        Placeholder::RandomAlpha => random::generate_from_charset(rng, random::ALPHA, 8),

        Placeholder::RandomAlphanum => random::generate_from_charset(rng, random::ALPHANUM, 10),
    }
}

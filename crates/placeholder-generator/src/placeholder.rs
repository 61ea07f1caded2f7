//! The closed set of placeholder tokens recognized in templates.

use std::fmt;

/// A recognized `{{NAME}}` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    /// Lowercase hyphenated UUID v4.
    Uuid,
    /// Uppercase hyphenated UUID v4.
    UuidUpper,
    /// Lowercase UUID v4 without hyphens.
    UuidNoDash,
    /// Local time as `YYYY-MM-DDTHH:MM:SS`.
    Timestamp,
    /// Local time as `YYYY-MM-DDTHH:MM:SS.mmm`.
    TimestampMs,
    /// Local date as `YYYY-MM-DD`.
    Date,
    /// Local time of day as `HH:MM:SS`.
    Time,
    /// Unix time in whole seconds.
    Epoch,
    /// Random number in `100000..=999999`.
    RandomId,
    /// Eight random uppercase letters.
    RandomAlpha,
    /// Ten random characters from `A-Z0-9`.
    RandomAlphanum,
}

impl Placeholder {
    /// Every recognized placeholder.
    pub const ALL: [Placeholder; 11] = [
        Placeholder::Uuid,
        Placeholder::UuidUpper,
        Placeholder::UuidNoDash,
        Placeholder::Timestamp,
        Placeholder::TimestampMs,
        Placeholder::Date,
        Placeholder::Time,
        Placeholder::Epoch,
        Placeholder::RandomId,
        Placeholder::RandomAlpha,
        Placeholder::RandomAlphanum,
    ];

    /// Token name as it appears between the braces.
    pub fn name(&self) -> &'static str {
        match self {
            Placeholder::Uuid => "UUID",
            Placeholder::UuidUpper => "UUID_UPPER",
            Placeholder::UuidNoDash => "UUID_NO_DASH",
            Placeholder::Timestamp => "TIMESTAMP",
            Placeholder::TimestampMs => "TIMESTAMP_MS",
            Placeholder::Date => "DATE",
            Placeholder::Time => "TIME",
            Placeholder::Epoch => "EPOCH",
            Placeholder::RandomId => "RANDOM_ID",
            Placeholder::RandomAlpha => "RANDOM_ALPHA",
            Placeholder::RandomAlphanum => "RANDOM_ALPHANUM",
        }
    }

    /// Look up a placeholder by token name. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|p| p.name() == name)
    }

    /// The full token, braces included.
    pub fn token(&self) -> String {
        format!("{{{{{}}}}}", self.name())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Occurrence cardinality and the permissive cardinality parser

use serde::{Deserialize, Serialize};

/// Minimum/maximum repeat count allowed for a schema node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    /// Minimum occurrence count
    pub min: u32,

    /// Maximum occurrence count; [`Occurrence::UNBOUNDED`] means no limit
    pub max: u32,
}

impl Default for Occurrence {
    /// Optional-singular: the default for freshly created elements
    fn default() -> Self {
        Self { min: 0, max: 1 }
    }
}

impl Occurrence {
    /// Sentinel for an unbounded maximum.
    pub const UNBOUNDED: u32 = u32::MAX;

    /// Create an occurrence with explicit bounds
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Parse a repeat-cardinality string of the form `"m"` or `"m:n"`.
    ///
    /// A max token of `n` or `*` (case-insensitive) means unbounded; a bare
    /// `"m"` means min `m` with unbounded max. Any malformed input yields
    /// the documented fallback of `(0, unbounded)` — specification tables
    /// are known to contain inconsistent cells, and one bad cardinality
    /// must never abort a whole conversion.
    pub fn parse(text: &str) -> Self {
        let parts: Vec<&str> = text.split(':').collect();

        let parsed = if parts.len() == 2 {
            let max_token = parts[1].trim().to_lowercase();
            let max = if max_token == "n" || max_token == "*" {
                Ok(Self::UNBOUNDED)
            } else {
                max_token.parse::<u32>()
            };
            parts[0]
                .trim()
                .parse::<u32>()
                .and_then(|min| max.map(|max| Self { min, max }))
        } else {
            parts[0].trim().parse::<u32>().map(|min| Self {
                min,
                max: Self::UNBOUNDED,
            })
        };

        parsed.unwrap_or(Self {
            min: 0,
            max: Self::UNBOUNDED,
        })
    }

    /// Whether the maximum is unbounded
    pub fn is_unbounded(&self) -> bool {
        self.max == Self::UNBOUNDED
    }
}

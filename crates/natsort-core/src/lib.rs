//! Alphanumeric ("natural") string comparison.
//!
//! Orders strings the way a human reads them: `"img2"` sorts before
//! `"img10"`. Each string is cut into maximal runs of digit and non-digit
//! characters, runs are compared pairwise in lockstep, digit runs by
//! magnitude with leading zeros ignored, everything else by code point or
//! by a locale collation chosen at construction.
//!
//! ```
//! use natsort_core::{AlphanumericComparator, StringSort};
//!
//! let comparator = AlphanumericComparator::new();
//! let mut files = vec!["image10.jpg", "image2.jpg", "image1.jpg"];
//! files.string_sort(|lhs, rhs| comparator.compare(lhs, rhs));
//! assert_eq!(files, ["image1.jpg", "image2.jpg", "image10.jpg"]);
//! ```
//!
//! Numeric notation is out of scope: signs, decimal points, exponents and
//! grouping separators are ordinary text, and a digit run of any length is
//! compared without ever being parsed into a machine integer.

use std::cmp::Ordering;

pub use icu_locale::Locale;

mod chunk;
mod collation;
mod sort;

pub use collation::{Collation, ConfigError};
pub use sort::StringSort;

use chunk::{Chunk, ChunkKind, Chunks, char_is_ascii_digit, char_is_decimal_digit, compare_numeric};
use collation::TextOrdering;

/// A total order over strings with embedded digit runs.
///
/// The comparator holds nothing but its text-ordering strategy, so one
/// instance can be shared freely between threads and reused for any number
/// of comparisons.
pub struct AlphanumericComparator {
    ordering: TextOrdering,
}

impl AlphanumericComparator {
    /// Ordinal mode: non-numeric chunks compare by raw code point, and only
    /// ascii `'0'..='9'` count as digits.
    pub fn new() -> Self {
        Self {
            ordering: TextOrdering::Ordinal,
        }
    }

    /// Collated mode: non-numeric chunks compare according to the locale's
    /// collation rules, and any Unicode decimal digit counts as a digit.
    ///
    /// Fails if no collation data can be loaded for the locale.
    pub fn with_locale(locale: Locale) -> Result<Self, ConfigError> {
        Ok(Self {
            ordering: TextOrdering::Collated(collation::collation_for(locale)?),
        })
    }

    /// Same as [`with_locale`](Self::with_locale), parsing a BCP-47 tag such
    /// as `"sv-SE"` first.
    pub fn with_locale_str(tag: &str) -> Result<Self, ConfigError> {
        Self::with_locale(tag.parse::<Locale>()?)
    }

    /// Collated mode with a caller supplied collation. The digit predicate
    /// is the same general one used by [`with_locale`](Self::with_locale).
    pub fn with_collation(
        collation: impl Fn(&str, &str) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        Self {
            ordering: TextOrdering::Collated(Box::new(collation)),
        }
    }

    /// Compare two strings.
    ///
    /// Pulls one chunk from each side at a time and returns at the first
    /// pair that does not compare equal; the rest of the inputs is never
    /// inspected. When one side runs out while every compared pair was
    /// equal, the shorter string (by character count) sorts first.
    pub fn compare(&self, lhs: &str, rhs: &str) -> Ordering {
        let is_digit = self.digit_predicate();
        let mut lhs_chunks = Chunks::new(lhs, is_digit);
        let mut rhs_chunks = Chunks::new(rhs, is_digit);

        while let (Some(lhs), Some(rhs)) = (lhs_chunks.next(), rhs_chunks.next()) {
            let result = self.compare_chunks(lhs, rhs);
            if result != Ordering::Equal {
                return result;
            }
        }

        lhs.chars().count().cmp(&rhs.chars().count())
    }

    fn compare_chunks(&self, lhs: Chunk, rhs: Chunk) -> Ordering {
        if lhs.kind() == ChunkKind::Numeric && rhs.kind() == ChunkKind::Numeric {
            let result = compare_numeric(lhs.text(), rhs.text());
            if result != Ordering::Equal {
                return result;
            }
            // Equal magnitude but possibly different formatting ("7" vs
            // "007"), the text rule decides.
        }
        self.ordering.compare(lhs.text(), rhs.text())
    }

    // The two modes deliberately disagree on what a digit is. Unifying them
    // would move chunk boundaries and change sort results for ordinal
    // callers.
    fn digit_predicate(&self) -> fn(char) -> bool {
        match self.ordering {
            TextOrdering::Ordinal => char_is_ascii_digit,
            TextOrdering::Collated(_) => char_is_decimal_digit,
        }
    }
}

impl Default for AlphanumericComparator {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AlphanumericComparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphanumericComparator")
            .field("ordering", &self.ordering)
            .finish()
    }
}

/// One-shot ordinal comparison, for use as a sort callback.
pub fn natural_cmp(lhs: &str, rhs: &str) -> Ordering {
    AlphanumericComparator::new().compare(lhs, rhs)
}

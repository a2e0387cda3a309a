//! Text-ordering strategies for non-numeric chunks.

use std::{cmp::Ordering, error::Error, fmt};

use icu_collator::{Collator, CollatorPreferences, options::CollatorOptions};
use icu_locale::Locale;

/// A caller supplied text ordering. Applied to whole chunks, never to
/// individual characters.
pub type Collation = dyn Fn(&str, &str) -> Ordering + Send + Sync;

/// How two text chunks are ordered relative to each other.
pub(crate) enum TextOrdering {
    /// Raw code point order.
    Ordinal,
    /// Locale defined order.
    Collated(Box<Collation>),
}

impl TextOrdering {
    pub fn compare(&self, lhs: &str, rhs: &str) -> Ordering {
        match self {
            TextOrdering::Ordinal => lhs.cmp(rhs),
            TextOrdering::Collated(collation) => collation(lhs, rhs),
        }
    }
}

impl fmt::Debug for TextOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextOrdering::Ordinal => f.write_str("Ordinal"),
            TextOrdering::Collated(_) => f.write_str("Collated"),
        }
    }
}

pub(crate) fn collation_for(locale: Locale) -> Result<Box<Collation>, ConfigError> {
    let prefs = CollatorPreferences::from(locale);
    let collator = Collator::try_new(prefs, CollatorOptions::default())?;
    Ok(Box::new(move |lhs, rhs| collator.compare(lhs, rhs)))
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLocale(icu_locale::ParseError),
    Collation(icu_provider::DataError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLocale(err) => write!(f, "invalid locale tag: {err}"),
            Self::Collation(err) => write!(f, "unable to load collation data: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidLocale(err) => Some(err),
            Self::Collation(err) => Some(err),
        }
    }
}

impl From<icu_locale::ParseError> for ConfigError {
    fn from(value: icu_locale::ParseError) -> Self {
        Self::InvalidLocale(value)
    }
}

impl From<icu_provider::DataError> for ConfigError {
    fn from(value: icu_provider::DataError) -> Self {
        Self::Collation(value)
    }
}

//! Splitting a string into maximal digit/non-digit chunks.

use std::cmp::Ordering;

use unicode_general_category::{GeneralCategory, get_general_category};

/// Classification of a chunk, decided by the digit predicate applied to its
/// first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
    Numeric,
    Text,
}

/// A maximal run of digit or non-digit characters, borrowed from the input
/// it was cut from. Never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk<'a> {
    text: &'a str,
    kind: ChunkKind,
}

impl<'a> Chunk<'a> {
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn kind(&self) -> ChunkKind {
        self.kind
    }
}

/// Digit predicate for ordinal mode, ascii `'0'..='9'` only.
#[inline]
pub fn char_is_ascii_digit(ch: char) -> bool {
    ch.is_ascii_digit()
}

/// Digit predicate for collated mode, any decimal digit (general category
/// `Nd`). Classifies more characters as digits than [`char_is_ascii_digit`],
/// so chunk boundaries can differ between the two modes.
#[inline]
pub fn char_is_decimal_digit(ch: char) -> bool {
    ch.is_ascii_digit() || get_general_category(ch) == GeneralCategory::DecimalNumber
}

/// Cursor that cuts a string into chunks front to back. The cursor only ever
/// advances, and every yielded chunk is maximal: it ends exactly where the
/// digit predicate changes value or the input runs out.
#[derive(Clone)]
pub struct Chunks<'a> {
    rest: &'a str,
    is_digit: fn(char) -> bool,
}

impl<'a> Chunks<'a> {
    pub fn new(text: &'a str, is_digit: fn(char) -> bool) -> Self {
        Self { rest: text, is_digit }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Chunk<'a>> {
        let first = self.rest.chars().next()?;
        let first_is_digit = (self.is_digit)(first);

        let end = self
            .rest
            .char_indices()
            .find(|&(_, ch)| (self.is_digit)(ch) != first_is_digit)
            .map(|(idx, _)| idx)
            .unwrap_or(self.rest.len());
        let (text, rest) = self.rest.split_at(end);
        self.rest = rest;

        Some(Chunk {
            text,
            kind: if first_is_digit {
                ChunkKind::Numeric
            } else {
                ChunkKind::Text
            },
        })
    }
}

/// Compare two all-digit chunks by magnitude. No numeric value is ever
/// materialized, so digit runs of any length are supported.
///
/// Returns [`Ordering::Equal`] for chunks that only differ in leading
/// zeros; the caller breaks that tie with the text rule.
pub fn compare_numeric(lhs: &str, rhs: &str) -> Ordering {
    // Only ascii zeros are insignificant. Other scripts keep their zero
    // characters and compare as ordinary digits.
    let lhs = lhs.trim_start_matches('0');
    let rhs = rhs.trim_start_matches('0');

    let result = lhs.chars().count().cmp(&rhs.chars().count());
    if result != Ordering::Equal {
        return result;
    }

    for (lhs, rhs) in lhs.chars().zip(rhs.chars()) {
        let result = lhs.cmp(&rhs);
        if result != Ordering::Equal {
            return result;
        }
    }

    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunks(text: &str, is_digit: fn(char) -> bool) -> Vec<(&str, ChunkKind)> {
        Chunks::new(text, is_digit)
            .map(|chunk| (chunk.text(), chunk.kind()))
            .collect()
    }

    #[test]
    fn chunks_alternate_and_are_maximal() {
        assert_eq!(
            chunks("abc123def", char_is_ascii_digit),
            vec![
                ("abc", ChunkKind::Text),
                ("123", ChunkKind::Numeric),
                ("def", ChunkKind::Text)
            ]
        );
        assert_eq!(
            chunks("a01b", char_is_ascii_digit),
            vec![
                ("a", ChunkKind::Text),
                ("01", ChunkKind::Numeric),
                ("b", ChunkKind::Text)
            ]
        );
        assert_eq!(chunks("42", char_is_ascii_digit), vec![("42", ChunkKind::Numeric)]);
        assert_eq!(chunks("", char_is_ascii_digit), vec![]);
    }

    #[test]
    fn predicates_classify_non_ascii_digits_differently() {
        // Arabic-Indic digits are a single text chunk in ordinal mode but a
        // numeric chunk in collated mode.
        assert_eq!(
            chunks("\u{661}\u{662}abc", char_is_ascii_digit),
            vec![("\u{661}\u{662}abc", ChunkKind::Text)]
        );
        assert_eq!(
            chunks("\u{661}\u{662}abc", char_is_decimal_digit),
            vec![
                ("\u{661}\u{662}", ChunkKind::Numeric),
                ("abc", ChunkKind::Text)
            ]
        );
    }

    #[test]
    fn cursor_never_yields_empty_chunks() {
        for text in ["a", "1", "a1", "1a", "a1b2c3", "0001"] {
            for chunk in Chunks::new(text, char_is_ascii_digit) {
                assert!(!chunk.text().is_empty());
            }
        }
    }

    #[test]
    fn numeric_compare_ignores_leading_zeros() {
        assert_eq!(compare_numeric("7", "007"), Ordering::Equal);
        assert_eq!(compare_numeric("0", "0000"), Ordering::Equal);
        assert_eq!(compare_numeric("02", "1"), Ordering::Greater);
        assert_eq!(compare_numeric("2", "10"), Ordering::Less);
        assert_eq!(compare_numeric("123", "124"), Ordering::Less);
    }

    #[test]
    fn numeric_compare_handles_unbounded_runs() {
        let nines = "9".repeat(40);
        let one_followed_by_zeros = format!("1{}", "0".repeat(40));
        assert_eq!(
            compare_numeric(&nines, &one_followed_by_zeros),
            Ordering::Less
        );
        assert_eq!(
            compare_numeric(&one_followed_by_zeros, &nines),
            Ordering::Greater
        );
        assert_eq!(compare_numeric(&nines, &nines), Ordering::Equal);
    }
}

use alloc::string::String;
use alloc::vec::Vec;

use crate::MorphError;

/// Vowel letters counted by [`Word::syllables`].
pub const VOWELS: [char; 10] = ['а', 'о', 'у', 'э', 'ы', 'я', 'ё', 'ю', 'е', 'и'];

/// A name prepared for rule matching.
///
/// Built once per declension and never mutated. Matching looks at the
/// lowercased characters, while splicing cuts the original spelling so the
/// caller's capitalisation survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    original: String,
    original_len: usize,
    normalized: String,
    chars: Vec<char>,
}

impl Word {
    pub fn new(original: &str) -> Result<Self, MorphError> {
        if original.is_empty() {
            return Err(MorphError::EmptyWord);
        }

        let normalized = original.to_lowercase();
        let chars = normalized.chars().collect();

        Ok(Self {
            original: String::from(original),
            original_len: original.chars().count(),
            normalized,
            chars,
        })
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Lowercased code points.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of lowercased code points.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Number of code points in the original spelling.
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// `offset` 0 is the last character.
    pub fn char_from_end(&self, offset: usize) -> Option<char> {
        self.chars.len().checked_sub(offset + 1).map(|i| self.chars[i])
    }

    /// Whole-word comparison, case-insensitive on the literal side too.
    pub fn equals(&self, literal: &str) -> bool {
        self.normalized == literal.to_lowercase()
    }

    /// Plain tail equality on the lowercased word.
    pub fn ends_with_literal(&self, tail: &str) -> bool {
        self.normalized.ends_with(tail)
    }

    /// Coarse syllable count: the number of vowel letters.
    pub fn syllables(&self) -> usize {
        self.chars.iter().filter(|&c| VOWELS.contains(c)).count()
    }

    /// The original spelling with `drop` trailing characters removed.
    /// Dropping more than the word holds yields an empty base.
    pub fn truncated(&self, drop: usize) -> &str {
        let keep = self.original_len.saturating_sub(drop);
        let end = self
            .original
            .char_indices()
            .nth(keep)
            .map_or(self.original.len(), |(i, _)| i);
        &self.original[..end]
    }
}

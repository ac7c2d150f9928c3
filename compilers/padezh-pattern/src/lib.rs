//! The suffix grammar used by the declension rules.
//!
//! A pattern describes the tail of a word and is read right to left:
//!
//! - a plain letter must equal the word letter at that position
//! - `[abc]` accepts any listed letter
//! - `!` before a letter or a class inverts it
//! - `-` skips one position without looking at it
//!
//! `"[ое]в"` therefore matches "Иванов" and "Алексеев", and `"![жч]-"` matches
//! any word whose second-to-last letter is neither `ж` nor `ч`.

pub mod parser;
pub mod token;

use core::fmt;

use padezh_morph::Word;

use crate::parser::{parse_elements, SPECIAL};
use crate::token::Element;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
    #[error("unclosed character class in pattern '{pattern}'")]
    UnclosedClass { pattern: String },
    #[error("']' without a matching '[' in pattern '{pattern}'")]
    UnexpectedClassEnd { pattern: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Compiled {
    /// No special characters: plain tail equality.
    Literal(String),
    Elements(Vec<Element>),
}

/// A compiled suffix pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    compiled: Compiled,
}

impl Pattern {
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        let lowered = source.to_lowercase();

        if lowered.is_empty() {
            return Err(PatternError::Empty);
        }

        if !lowered.contains(|c: char| SPECIAL.contains(c)) {
            return Ok(Self {
                source: source.to_string(),
                compiled: Compiled::Literal(lowered),
            });
        }

        let elements = match parse_elements(&lowered) {
            Ok(("", elements)) => elements,
            Ok((rest, _)) if rest.starts_with('[') => {
                return Err(PatternError::UnclosedClass { pattern: source.to_string() })
            }
            _ => return Err(PatternError::UnexpectedClassEnd { pattern: source.to_string() }),
        };

        if elements.is_empty() {
            return Err(PatternError::Empty);
        }

        Ok(Self {
            source: source.to_string(),
            compiled: Compiled::Elements(elements),
        })
    }

    /// The text the pattern was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Whether the pattern compiled to a plain tail comparison.
    pub fn is_literal(&self) -> bool {
        matches!(self.compiled, Compiled::Literal(_))
    }

    /// Number of word positions that are actually compared.
    pub fn min_len(&self) -> usize {
        match &self.compiled {
            Compiled::Literal(tail) => tail.chars().count(),
            Compiled::Elements(elements) => elements.iter().filter(|e| !e.is_wildcard()).count(),
        }
    }

    pub fn matches(&self, word: &Word) -> bool {
        match &self.compiled {
            Compiled::Literal(tail) => word.ends_with_literal(tail),
            Compiled::Elements(elements) => scan(elements, word),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Walks the elements from the right, one word position per element.
fn scan(elements: &[Element], word: &Word) -> bool {
    elements
        .iter()
        .rev()
        .enumerate()
        .all(|(offset, element)| element.accepts(word.char_from_end(offset)))
}

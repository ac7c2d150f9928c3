use padezh_morph::Word;
use padezh_pattern::{Pattern, PatternError};

/// Boolean test deciding whether a rule applies to a word.
///
/// Composite guards short-circuit: `All` stops on the first `false`, `Any`
/// on the first `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guard {
    /// The word's tail matches a suffix pattern.
    Ends(Pattern),
    /// The whole word equals a lexical item.
    Equals(&'static str),
    /// The word has exactly this many vowel letters.
    Syllables(usize),
    Not(Box<Guard>),
    All(Vec<Guard>),
    Any(Vec<Guard>),
}

impl Guard {
    pub fn ends(pattern: &str) -> Result<Self, PatternError> {
        Pattern::compile(pattern).map(Guard::Ends)
    }

    pub fn not(inner: Guard) -> Self {
        Guard::Not(Box::new(inner))
    }

    pub fn evaluate(&self, word: &Word) -> bool {
        match self {
            Guard::Ends(pattern) => pattern.matches(word),
            Guard::Equals(literal) => word.equals(literal),
            Guard::Syllables(n) => word.syllables() == *n,
            Guard::Not(inner) => !inner.evaluate(word),
            Guard::All(guards) => guards.iter().all(|g| g.evaluate(word)),
            Guard::Any(guards) => guards.iter().any(|g| g.evaluate(word)),
        }
    }

    /// Fewest characters a word must have for this guard to pass.
    pub fn min_len(&self) -> usize {
        match self {
            Guard::Ends(pattern) => pattern.min_len(),
            Guard::Equals(literal) => literal.chars().count(),
            Guard::Syllables(n) => *n,
            Guard::Not(_) => 0,
            Guard::All(guards) => guards.iter().map(Guard::min_len).max().unwrap_or(0),
            Guard::Any(guards) => guards.iter().map(Guard::min_len).min().unwrap_or(0),
        }
    }
}

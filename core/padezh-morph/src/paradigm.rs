use alloc::string::String;

use padezh_protocol::DeclinedForm;

use crate::word::Word;

/// Marks trailing characters to drop from the original word.
pub const TRUNCATION_MARKER: char = '-';

/// One authored ending, e.g. `"--ого"`.
///
/// Only the position of the *last* marker matters: with the marker at
/// character index `p`, the word loses `p + 1` trailing characters and the
/// text after the marker is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixTemplate {
    truncate: usize,
    ending: &'static str,
}

impl SuffixTemplate {
    pub fn new(source: &'static str) -> Self {
        match source.rfind(TRUNCATION_MARKER) {
            Some(byte) => Self {
                truncate: source[..byte].chars().count() + 1,
                ending: &source[byte + TRUNCATION_MARKER.len_utf8()..],
            },
            None => Self {
                truncate: 0,
                ending: source,
            },
        }
    }

    /// How many trailing characters of the original word are dropped.
    pub fn truncation(&self) -> usize {
        self.truncate
    }

    pub fn apply(&self, word: &Word) -> String {
        let base = word.truncated(self.truncate);
        let mut out = String::with_capacity(base.len() + self.ending.len());
        out.push_str(base);
        out.push_str(self.ending);
        out
    }
}

/// Endings for the five oblique cases, in genitive → prepositional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paradigm {
    templates: [SuffixTemplate; 5],
}

impl Paradigm {
    pub fn new(sources: [&'static str; 5]) -> Self {
        Self {
            templates: sources.map(SuffixTemplate::new),
        }
    }

    /// The deepest cut any template in this paradigm makes.
    pub fn max_truncation(&self) -> usize {
        self.templates.iter().map(SuffixTemplate::truncation).max().unwrap_or(0)
    }

    pub fn decline(&self, word: &Word) -> DeclinedForm {
        let [genitive, dative, accusative, instrumental, prepositional] = &self.templates;
        DeclinedForm {
            genitive: genitive.apply(word),
            dative: dative.apply(word),
            accusative: accusative.apply(word),
            instrumental: instrumental.apply(word),
            prepositional: prepositional.apply(word),
        }
    }
}

#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

pub mod paradigm;
pub mod word;

pub use paradigm::{Paradigm, SuffixTemplate, TRUNCATION_MARKER};
pub use word::{Word, VOWELS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MorphError {
    /// Names are never empty; an empty input is a caller bug.
    #[error("cannot decline an empty word")]
    EmptyWord,
}

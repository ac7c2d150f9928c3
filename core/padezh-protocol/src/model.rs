use core::fmt;

use alloc::string::String;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

use crate::morphology::Case;

/// The five oblique forms of one name.
///
/// There is deliberately no nominative slot: the nominative is the caller's
/// own input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct DeclinedForm {
    pub genitive: String,
    pub dative: String,
    pub accusative: String,
    pub instrumental: String,
    pub prepositional: String,
}

impl DeclinedForm {
    /// Every oblique case equals `word`. Used when no rule knows the word.
    pub fn identity(word: &str) -> Self {
        Self {
            genitive: String::from(word),
            dative: String::from(word),
            accusative: String::from(word),
            instrumental: String::from(word),
            prepositional: String::from(word),
        }
    }

    /// Returns `None` for `Case::Nominative`.
    pub fn get(&self, case: Case) -> Option<&str> {
        match case {
            Case::Nominative => None,
            Case::Genitive => Some(&self.genitive),
            Case::Dative => Some(&self.dative),
            Case::Accusative => Some(&self.accusative),
            Case::Instrumental => Some(&self.instrumental),
            Case::Prepositional => Some(&self.prepositional),
        }
    }

    /// Like [`get`](Self::get), but answers the nominative with the caller's input.
    pub fn form<'a>(&'a self, case: Case, nominative: &'a str) -> &'a str {
        self.get(case).unwrap_or(nominative)
    }

    /// Oblique cases in table order.
    pub fn iter(&self) -> impl Iterator<Item = (Case, &str)> + '_ {
        Case::OBLIQUE
            .into_iter()
            .filter_map(move |case| self.get(case).map(|form| (case, form)))
    }

    pub fn is_identity_of(&self, word: &str) -> bool {
        self.iter().all(|(_, form)| form == word)
    }
}

impl fmt::Display for DeclinedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (case, form)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", case, form)?;
        }
        Ok(())
    }
}

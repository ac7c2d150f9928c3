use core::fmt;
use core::str::FromStr;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Russian grammatical case.
///
/// `Nominative` is the dictionary form. The engine never computes it; it is
/// always the untouched input word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Case {
    Nominative = 0,
    Genitive = 1,
    Dative = 2,
    Accusative = 3,
    Instrumental = 4,
    Prepositional = 5,
}

impl Case {
    pub const ALL: [Case; 6] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
    ];

    /// The five cases produced by declension, in table order.
    pub const OBLIQUE: [Case; 5] = [
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
    ];

    pub const fn is_oblique(self) -> bool {
        !matches!(self, Case::Nominative)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Genitive => "genitive",
            Case::Dative => "dative",
            Case::Accusative => "accusative",
            Case::Instrumental => "instrumental",
            Case::Prepositional => "prepositional",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Gender {
    Masculine = 0,
    Feminine = 1,
}

/// Which part of a personal name a word is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum NameKind {
    FirstName = 0,
    Surname = 1,
}

/// Selects one of the four independent rule cascades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum RuleSet {
    MaleFirstName = 0,
    FemaleFirstName = 1,
    MaleSurname = 2,
    FemaleSurname = 3,
}

impl RuleSet {
    pub const ALL: [RuleSet; 4] = [
        RuleSet::MaleFirstName,
        RuleSet::FemaleFirstName,
        RuleSet::MaleSurname,
        RuleSet::FemaleSurname,
    ];

    pub const fn new(kind: NameKind, gender: Gender) -> Self {
        match (kind, gender) {
            (NameKind::FirstName, Gender::Masculine) => RuleSet::MaleFirstName,
            (NameKind::FirstName, Gender::Feminine) => RuleSet::FemaleFirstName,
            (NameKind::Surname, Gender::Masculine) => RuleSet::MaleSurname,
            (NameKind::Surname, Gender::Feminine) => RuleSet::FemaleSurname,
        }
    }

    pub const fn kind(self) -> NameKind {
        match self {
            RuleSet::MaleFirstName | RuleSet::FemaleFirstName => NameKind::FirstName,
            RuleSet::MaleSurname | RuleSet::FemaleSurname => NameKind::Surname,
        }
    }

    pub const fn gender(self) -> Gender {
        match self {
            RuleSet::MaleFirstName | RuleSet::MaleSurname => Gender::Masculine,
            RuleSet::FemaleFirstName | RuleSet::FemaleSurname => Gender::Feminine,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RuleSet::MaleFirstName => "male-first-name",
            RuleSet::FemaleFirstName => "female-first-name",
            RuleSet::MaleSurname => "male-surname",
            RuleSet::FemaleSurname => "female-surname",
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule-set name (expected one of male-first-name, female-first-name, male-surname, female-surname)")]
pub struct ParseRuleSetError;

impl FromStr for RuleSet {
    type Err = ParseRuleSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleSet::ALL
            .into_iter()
            .find(|set| set.as_str() == s)
            .ok_or(ParseRuleSetError)
    }
}

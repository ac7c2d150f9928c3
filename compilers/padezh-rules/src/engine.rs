use padezh_morph::{MorphError, Word};
use padezh_protocol::{DeclinedForm, Gender, NameKind, RuleId, RuleSet};

use crate::tables::{rules, Rule};

#[derive(Debug, thiserror::Error)]
pub enum DeclineError {
    #[error("invalid word: {0}")]
    Word(#[from] MorphError),
}

/// A declined name together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declension {
    pub form: DeclinedForm,
    /// `None` when no rule matched and every case is the input itself.
    pub rule: Option<RuleId>,
}

impl Declension {
    pub fn is_fallback(&self) -> bool {
        self.rule.is_none()
    }
}

/// Looks up a rule by its id.
pub fn rule(id: RuleId) -> Option<&'static Rule> {
    rules(id.rule_set).get(id.index)
}

/// Runs one rule-set over an already normalized word.
pub fn apply(word: &Word, rule_set: RuleSet) -> Declension {
    let table = rules(rule_set);

    match table.iter().position(|rule| rule.guard.evaluate(word)) {
        Some(index) => Declension {
            form: table[index].paradigm.decline(word),
            rule: Some(RuleId::new(rule_set, index)),
        },
        None => Declension {
            form: DeclinedForm::identity(word.original()),
            rule: None,
        },
    }
}

pub fn decline_traced(word: &str, rule_set: RuleSet) -> Result<Declension, DeclineError> {
    let word = Word::new(word)?;
    Ok(apply(&word, rule_set))
}

/// Declines a single name.
///
/// Names the rule-set does not recognise come back unchanged in every case.
pub fn decline(word: &str, rule_set: RuleSet) -> Result<DeclinedForm, DeclineError> {
    decline_traced(word, rule_set).map(|declension| declension.form)
}

/// Declines "first last" as a pair, joining each case with a space.
pub fn decline_full_name(first: &str, last: &str, gender: Gender) -> Result<DeclinedForm, DeclineError> {
    let first = decline(first, RuleSet::new(NameKind::FirstName, gender))?;
    let last = decline(last, RuleSet::new(NameKind::Surname, gender))?;

    let join = |a: &str, b: &str| format!("{} {}", a, b);
    Ok(DeclinedForm {
        genitive: join(&first.genitive, &last.genitive),
        dative: join(&first.dative, &last.dative),
        accusative: join(&first.accusative, &last.accusative),
        instrumental: join(&first.instrumental, &last.instrumental),
        prepositional: join(&first.prepositional, &last.prepositional),
    })
}

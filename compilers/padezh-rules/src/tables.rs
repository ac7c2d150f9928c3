//! Ordered rule tables, one per rule-set.
//!
//! Order is part of the contract: lexical exceptions and longer endings sit
//! above the broader endings that would otherwise shadow them. The first rule
//! whose guard passes wins.

use std::sync::LazyLock;

use padezh_morph::Paradigm;
use padezh_pattern::PatternError;
use padezh_protocol::RuleSet;

use crate::guard::Guard;

/// Hard consonants, `й` included.
const CONSONANTS: &str = "[бвгджзлмнрйпфктшсхцчщ]";
/// Hard consonants without `й`, for surnames where `-ай`/`-ей` take soft endings.
const CONSONANTS_NO_J: &str = "[бвгджзлмнрпфктшсхцчщ]";

/// A guarded paradigm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    /// Short human-readable description for traces.
    pub label: &'static str,
    pub guard: Guard,
    pub paradigm: Paradigm,
}

impl Rule {
    fn new(label: &'static str, guard: Guard, endings: [&'static str; 5]) -> Self {
        Self {
            label,
            guard,
            paradigm: Paradigm::new(endings),
        }
    }
}

struct RuleTables {
    male_first_name: Vec<Rule>,
    female_first_name: Vec<Rule>,
    male_surname: Vec<Rule>,
    female_surname: Vec<Rule>,
}

static TABLES: LazyLock<RuleTables> = LazyLock::new(|| {
    build_tables().unwrap_or_else(|e| panic!("Failed to compile declension rules: {}", e))
});

fn build_tables() -> Result<RuleTables, PatternError> {
    Ok(RuleTables {
        male_first_name: male_first_name()?,
        female_first_name: female_first_name()?,
        male_surname: male_surname()?,
        female_surname: female_surname()?,
    })
}

/// The ordered rules of one rule-set.
pub fn rules(rule_set: RuleSet) -> &'static [Rule] {
    let tables = &*TABLES;
    match rule_set {
        RuleSet::MaleFirstName => &tables.male_first_name,
        RuleSet::FemaleFirstName => &tables.female_first_name,
        RuleSet::MaleSurname => &tables.male_surname,
        RuleSet::FemaleSurname => &tables.female_surname,
    }
}

fn ends(pattern: &str) -> Result<Guard, PatternError> {
    Guard::ends(pattern)
}

fn male_first_name() -> Result<Vec<Rule>, PatternError> {
    Ok(vec![
        // Fleeting vowel: Павел → Павла, Лев → Льва
        Rule::new("павел", Guard::Equals("павел"), ["--ла", "--лу", "--ла", "--лом", "--ле"]),
        Rule::new("лев", Guard::Equals("лев"), ["--ьва", "--ьву", "--ьва", "--ьвом", "--ьве"]),
        // Sibilant or ц: instrumental -ем
        Rule::new("sibilant", ends("[жчшщц]")?, ["а", "у", "а", "ем", "е"]),
        Rule::new(
            "vowel + й",
            Guard::All(vec![ends("й")?, ends("[аеёоуяю]-")?]),
            ["-я", "-ю", "-я", "-ем", "-е"],
        ),
        // -ий: prepositional -и
        Rule::new("й", ends("й")?, ["-я", "-ю", "-я", "-ем", "-и"]),
        Rule::new("hard consonant", ends(CONSONANTS)?, ["а", "у", "а", "ом", "е"]),
        Rule::new(
            "soft consonant",
            ends(&format!("{}[ь]", CONSONANTS))?,
            ["-я", "-ю", "-я", "-ем", "-е"],
        ),
        Rule::new(
            "а after hard stem",
            Guard::All(vec![ends("а")?, ends("![жчшщгкхц]-")?]),
            ["-ы", "-е", "-у", "-ой", "-е"],
        ),
        Rule::new("а", ends("а")?, ["-и", "-е", "-у", "-ей", "-е"]),
        // Unstressed -ия, except two-syllable names
        Rule::new(
            "ия",
            Guard::All(vec![ends("я")?, ends("и-")?, Guard::not(Guard::Syllables(2))]),
            ["-и", "-и", "-ю", "-ей", "-и"],
        ),
        Rule::new("я", ends("я")?, ["-и", "-е", "-ю", "-ей", "-е"]),
    ])
}

fn female_first_name() -> Result<Vec<Rule>, PatternError> {
    Ok(vec![
        Rule::new(
            "а after hard stem",
            Guard::All(vec![ends("а")?, ends("![гкхцжчшщ]-")?]),
            ["-ы", "-е", "-у", "-ой", "-е"],
        ),
        Rule::new(
            "а after sibilant or velar",
            Guard::All(vec![ends("а")?, ends("[гкхцжчшщ]-")?]),
            ["-и", "-е", "-у", "-ой", "-е"],
        ),
        // Only the bare letter а reaches this one.
        Rule::new("а", ends("а")?, ["-ы", "-е", "-у", "-ей", "-е"]),
        Rule::new(
            "two-syllable ия",
            Guard::All(vec![ends("я")?, ends("и-")?, Guard::Syllables(2)]),
            ["-и", "-е", "-ю", "-ей", "-е"],
        ),
        Rule::new(
            "ия",
            Guard::All(vec![ends("я")?, ends("и-")?]),
            ["-и", "-и", "-ю", "-ей", "-и"],
        ),
        Rule::new("я", ends("я")?, ["-и", "-е", "-ю", "-ей", "-е"]),
        Rule::new(
            "soft consonant",
            ends(&format!("{}[яёюеиь]", CONSONANTS))?,
            ["-и", "-и", "", "-ью", "-и"],
        ),
        Rule::new("sibilant", ends("[жчшщ]")?, ["и", "и", "", "ью", "и"]),
    ])
}

fn male_surname() -> Result<Vec<Rule>, PatternError> {
    Ok(vec![
        Rule::new(
            "ов/ев/ин",
            Guard::Any(vec![ends("[ое]в")?, ends("ин")?]),
            ["а", "у", "а", "ым", "е"],
        ),
        Rule::new("ой", ends("ой")?, ["--ого", "--ому", "--ого", "--ым", "--ом"]),
        Rule::new("ый", ends("ый")?, ["--ого", "--ому", "--ого", "--ым", "--ом"]),
        Rule::new("ий", ends("ий")?, ["--ого", "--ому", "--ого", "--им", "--ом"]),
        // Plural-genitive surnames (Черных, Седых) stay as they are.
        Rule::new(
            "hard consonant",
            Guard::All(vec![Guard::not(ends("[иы]х")?), ends(CONSONANTS_NO_J)?]),
            ["а", "у", "а", "ом", "е"],
        ),
        Rule::new("й/ь", ends("[йь]")?, ["-я", "-ю", "-я", "-ем", "-е"]),
    ])
}

fn female_surname() -> Result<Vec<Rule>, PatternError> {
    Ok(vec![
        Rule::new(
            "ова/ева/ина",
            Guard::Any(vec![ends("[ое]ва")?, ends("ина")?]),
            ["-ой", "-ой", "-у", "-ой", "-ой"],
        ),
        Rule::new("ая", ends("ая")?, ["--ой", "--ой", "--ую", "--ой", "--ой"]),
    ])
}

//! Declension of Russian personal names.
//!
//! Given a first name or surname in the nominative, produces the genitive,
//! dative, accusative, instrumental and prepositional forms:
//!
//! ```
//! use padezh_rules::{decline, RuleSet};
//!
//! let form = decline("Иванов", RuleSet::MaleSurname).unwrap();
//! assert_eq!(form.genitive, "Иванова");
//! assert_eq!(form.instrumental, "Ивановым");
//! ```

pub mod engine;
pub mod guard;
pub mod tables;

pub use engine::{apply, decline, decline_full_name, decline_traced, rule, DeclineError, Declension};
pub use guard::Guard;
pub use tables::{rules, Rule};

pub use padezh_protocol::{Case, DeclinedForm, Gender, NameKind, RuleId, RuleSet};

#[cfg(test)]
mod tests {
    use super::*;
    use padezh_morph::MorphError;
    use proptest::prelude::*;

    fn forms(word: &str, set: RuleSet) -> [String; 5] {
        let f = decline(word, set).unwrap();
        [f.genitive, f.dative, f.accusative, f.instrumental, f.prepositional]
    }

    fn fired(word: &str, set: RuleSet) -> Option<usize> {
        decline_traced(word, set).unwrap().rule.map(|id| id.index)
    }

    /// (word, rule index, gen, dat, acc, ins, prep)
    type Row = (&'static str, usize, [&'static str; 5]);

    fn check_rows(set: RuleSet, rows: &[Row]) {
        for (word, index, expected) in rows {
            assert_eq!(fired(word, set), Some(*index), "{} '{}' fired the wrong rule", set, word);
            assert_eq!(forms(word, set), expected.map(String::from), "{} '{}'", set, word);
        }
    }

    #[test]
    fn test_male_first_name_rules() {
        check_rows(
            RuleSet::MaleFirstName,
            &[
                ("Павел", 0, ["Павла", "Павлу", "Павла", "Павлом", "Павле"]),
                ("Лев", 1, ["Льва", "Льву", "Льва", "Львом", "Льве"]),
                ("Януш", 2, ["Януша", "Янушу", "Януша", "Янушем", "Януше"]),
                ("Андрей", 3, ["Андрея", "Андрею", "Андрея", "Андреем", "Андрее"]),
                ("Василий", 4, ["Василия", "Василию", "Василия", "Василием", "Василии"]),
                ("Иван", 5, ["Ивана", "Ивану", "Ивана", "Иваном", "Иване"]),
                ("Игорь", 6, ["Игоря", "Игорю", "Игоря", "Игорем", "Игоре"]),
                ("Никита", 7, ["Никиты", "Никите", "Никиту", "Никитой", "Никите"]),
                ("Лука", 8, ["Луки", "Луке", "Луку", "Лукей", "Луке"]),
                ("Илия", 9, ["Илии", "Илии", "Илию", "Илией", "Илии"]),
                ("Илья", 10, ["Ильи", "Илье", "Илью", "Ильей", "Илье"]),
            ],
        );
    }

    #[test]
    fn test_female_first_name_rules() {
        check_rows(
            RuleSet::FemaleFirstName,
            &[
                ("Анна", 0, ["Анны", "Анне", "Анну", "Анной", "Анне"]),
                ("Ольга", 1, ["Ольги", "Ольге", "Ольгу", "Ольгой", "Ольге"]),
                ("А", 2, ["ы", "е", "у", "ей", "е"]),
                ("Лия", 3, ["Лии", "Лие", "Лию", "Лией", "Лие"]),
                ("Мария", 4, ["Марии", "Марии", "Марию", "Марией", "Марии"]),
                ("Майя", 5, ["Майи", "Майе", "Майю", "Майей", "Майе"]),
                ("Любовь", 6, ["Любови", "Любови", "Любовь", "Любовью", "Любови"]),
                ("Мэдж", 7, ["Мэджи", "Мэджи", "Мэдж", "Мэджью", "Мэджи"]),
            ],
        );
    }

    #[test]
    fn test_male_surname_rules() {
        check_rows(
            RuleSet::MaleSurname,
            &[
                ("Иванов", 0, ["Иванова", "Иванову", "Иванова", "Ивановым", "Иванове"]),
                ("Пушкин", 0, ["Пушкина", "Пушкину", "Пушкина", "Пушкиным", "Пушкине"]),
                ("Толстой", 1, ["Толстого", "Толстому", "Толстого", "Толстым", "Толстом"]),
                ("Белый", 2, ["Белого", "Белому", "Белого", "Белым", "Белом"]),
                ("Горький", 3, ["Горького", "Горькому", "Горького", "Горьким", "Горьком"]),
                ("Мандельштам", 4, ["Мандельштама", "Мандельштаму", "Мандельштама", "Мандельштамом", "Мандельштаме"]),
                ("Гоголь", 5, ["Гоголя", "Гоголю", "Гоголя", "Гоголем", "Гоголе"]),
                ("Гайдай", 5, ["Гайдая", "Гайдаю", "Гайдая", "Гайдаем", "Гайдае"]),
            ],
        );
    }

    #[test]
    fn test_female_surname_rules() {
        check_rows(
            RuleSet::FemaleSurname,
            &[
                ("Иванова", 0, ["Ивановой", "Ивановой", "Иванову", "Ивановой", "Ивановой"]),
                ("Цветаева", 0, ["Цветаевой", "Цветаевой", "Цветаеву", "Цветаевой", "Цветаевой"]),
                ("Пушкина", 0, ["Пушкиной", "Пушкиной", "Пушкину", "Пушкиной", "Пушкиной"]),
                ("Толстая", 1, ["Толстой", "Толстой", "Толстую", "Толстой", "Толстой"]),
            ],
        );
    }

    #[test]
    fn test_unknown_endings_fall_back_to_identity() {
        for (word, set) in [
            ("Отто", RuleSet::MaleFirstName),
            ("Кармен", RuleSet::FemaleFirstName),
            ("Шевченко", RuleSet::MaleSurname),
            ("Черных", RuleSet::MaleSurname),
            ("Гоголь", RuleSet::FemaleSurname),
        ] {
            let declension = decline_traced(word, set).unwrap();
            assert!(declension.is_fallback(), "{} '{}'", set, word);
            assert!(declension.form.is_identity_of(word));
        }
    }

    #[test]
    fn test_capitalisation_is_preserved() {
        assert_eq!(decline("ПАВЕЛ", RuleSet::MaleFirstName).unwrap().genitive, "ПАВла");
        assert_eq!(decline("анна", RuleSet::FemaleFirstName).unwrap().instrumental, "анной");
    }

    #[test]
    fn test_empty_word_is_an_error() {
        let err = decline("", RuleSet::MaleSurname).unwrap_err();
        assert!(matches!(err, DeclineError::Word(MorphError::EmptyWord)));
    }

    #[test]
    fn test_rule_lookup() {
        let id = decline_traced("Толстая", RuleSet::FemaleSurname).unwrap().rule.unwrap();
        assert_eq!(rule(id).map(|r| r.label), Some("ая"));
        assert!(rule(RuleId::new(RuleSet::FemaleSurname, 7)).is_none());
    }

    #[test]
    fn test_exceptions_shadow_broader_endings() {
        // "Лев" ends in -ев: only the lexical rule above keeps it from the -ов/-ев paradigm.
        assert_eq!(fired("Лев", RuleSet::MaleFirstName), Some(1));
        assert_eq!(decline("Лев", RuleSet::MaleFirstName).unwrap().genitive, "Льва");

        assert_eq!(fired("Лев", RuleSet::MaleSurname), Some(0));
        let surname = decline("Лев", RuleSet::MaleSurname).unwrap();
        assert_eq!(surname.genitive, "Лева");
        assert_eq!(surname.instrumental, "Левым");
    }

    #[test]
    fn test_rule_ids_index_their_tables() {
        for set in RuleSet::ALL {
            for (index, expected) in rules(set).iter().enumerate() {
                let found = rule(RuleId::new(set, index)).unwrap();
                assert!(core::ptr::eq(found, expected), "{}#{}", set, index);
            }
            assert!(rule(RuleId::new(set, rules(set).len())).is_none());
        }
    }

    #[test]
    fn test_full_name() {
        let form = decline_full_name("Анна", "Ахматова", Gender::Feminine).unwrap();
        assert_eq!(form.genitive, "Анны Ахматовой");
        assert_eq!(form.accusative, "Анну Ахматову");

        let form = decline_full_name("Лев", "Толстой", Gender::Masculine).unwrap();
        assert_eq!(form.instrumental, "Львом Толстым");
        assert_eq!(form.get(Case::Prepositional), Some("Льве Толстом"));
    }

    proptest! {
        #[test]
        fn test_fallback_is_identity(word in "[а-яА-ЯёЁ-]{1,12}", set_index in 0usize..4) {
            let set = RuleSet::ALL[set_index];
            let declension = decline_traced(&word, set).unwrap();
            if declension.is_fallback() {
                prop_assert!(declension.form.is_identity_of(&word));
            }
        }

        #[test]
        fn test_declension_is_deterministic(word in "[а-яА-ЯёЁ]{1,12}", set_index in 0usize..4) {
            let set = RuleSet::ALL[set_index];
            prop_assert_eq!(decline_traced(&word, set).unwrap(), decline_traced(&word, set).unwrap());
        }

        #[test]
        fn test_fired_rule_never_cuts_past_the_word(word in "[а-яА-ЯёЁ]{1,12}", set_index in 0usize..4) {
            let set = RuleSet::ALL[set_index];
            if let Some(id) = decline_traced(&word, set).unwrap().rule {
                let fired = rule(id).unwrap();
                prop_assert!(fired.paradigm.max_truncation() <= word.chars().count());
            }
        }
    }
}

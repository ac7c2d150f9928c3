use nom::{
    branch::alt,
    character::complete::{char, none_of},
    combinator::{map, value},
    multi::{many0, many0_count},
    sequence::{delimited, pair, terminated},
    IResult,
};

use crate::token::Element;

/// Characters with a meaning of their own in the suffix grammar.
pub const SPECIAL: &str = "[]!-";

#[derive(Debug, Clone)]
enum Atom {
    Literal(char),
    Class(Vec<char>),
    Wildcard,
}

/// Any run of `!` negates the following atom once.
fn bangs(input: &str) -> IResult<&str, bool> {
    map(many0_count(char('!')), |n| n > 0)(input)
}

fn class(input: &str) -> IResult<&str, Vec<char>> {
    map(
        delimited(char('['), many0(none_of("[]")), char(']')),
        // `!` inside brackets is not a member
        |members: Vec<char>| members.into_iter().filter(|c| *c != '!').collect(),
    )(input)
}

fn atom(input: &str) -> IResult<&str, Atom> {
    alt((
        map(class, Atom::Class),
        value(Atom::Wildcard, char('-')),
        map(none_of(SPECIAL), Atom::Literal),
    ))(input)
}

fn element(input: &str) -> IResult<&str, Element> {
    map(pair(bangs, atom), |(negated, atom)| match atom {
        Atom::Literal(ch) => Element::Literal { ch, negated },
        Atom::Class(members) => Element::Class { members, negated },
        Atom::Wildcard => Element::Wildcard,
    })(input)
}

/// Tokenizes as much of `input` as forms valid elements; trailing `!` are
/// swallowed. Whatever is left over is malformed.
pub fn parse_elements(input: &str) -> IResult<&str, Vec<Element>> {
    terminated(many0(element), bangs)(input)
}

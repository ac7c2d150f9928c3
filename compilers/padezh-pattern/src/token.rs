/// One position of a compiled suffix pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    /// `x` or `!x`
    Literal { ch: char, negated: bool },
    /// `[abc]` or `![abc]`
    Class { members: Vec<char>, negated: bool },
    /// `-`: skips one word position without looking at it
    Wildcard,
}

impl Element {
    /// Tests this element against the word character at its position, or
    /// against a missing character when the word is too short.
    pub fn accepts(&self, target: Option<char>) -> bool {
        match self {
            // No bounds check: a wildcard past the start of the word still passes.
            Element::Wildcard => true,
            Element::Literal { ch, negated } => match target {
                Some(c) => (c == *ch) != *negated,
                None => false,
            },
            Element::Class { members, negated } => match target {
                Some(c) => members.contains(&c) != *negated,
                None => false,
            },
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Element::Wildcard)
    }
}

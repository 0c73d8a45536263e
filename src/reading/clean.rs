// Cleaner/Classifier - strips tokens to ASCII alphanumerics and tags them

use std::cmp::Ordering;
use std::fmt;

use super::token::Token;

/// Type tag of a cleaned token. Output position `i` always carries the same
/// kind as input position `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Integer,
}

/// Signed decimal integer of unbounded size.
///
/// Stored as a sign plus a normalized digit magnitude (no leading zeros, `"0"` for
/// zero, zero is never negative), so any digit-bearing token converts without
/// overflow and the derived equality agrees with numeric ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Integer {
    negative: bool,
    magnitude: String,
}

impl Integer {
    /// Builds an integer from a sign and a string of ASCII digits.
    /// Returns `None` if `digits` is empty or contains anything but `0-9`.
    pub fn from_digits(negative: bool, digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(Self::normalized(negative, digits))
    }

    fn normalized(negative: bool, digits: &str) -> Self {
        let trimmed = digits.trim_start_matches('0');
        let magnitude = if trimmed.is_empty() { "0" } else { trimmed };
        Self {
            negative: negative && magnitude != "0",
            magnitude: magnitude.to_string(),
        }
    }

    /// Absolute value as canonical decimal digits.
    pub fn magnitude(&self) -> &str {
        &self.magnitude
    }

    /// The value as an `i64`, if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        self.to_string().parse().ok()
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self {
            negative: value < 0,
            magnitude: value.unsigned_abs().to_string(),
        }
    }
}

fn cmp_magnitude(a: &str, b: &str) -> Ordering {
    // Normalized magnitudes: more digits means larger.
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => cmp_magnitude(&self.magnitude, &other.magnitude),
            (true, true) => cmp_magnitude(&other.magnitude, &self.magnitude),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            f.write_str(&self.magnitude)
        }
    }
}

/// A token after character filtering, tagged as a word or an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CleanedToken {
    /// Cleaned string with no digits. May be empty when every character was stripped.
    Word(String),
    Integer(Integer),
}

impl CleanedToken {
    pub fn word(text: impl Into<String>) -> Self {
        CleanedToken::Word(text.into())
    }

    pub fn integer(value: i64) -> Self {
        CleanedToken::Integer(Integer::from(value))
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            CleanedToken::Word(_) => TokenKind::Word,
            CleanedToken::Integer(_) => TokenKind::Integer,
        }
    }
}

impl fmt::Display for CleanedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanedToken::Word(text) => f.write_str(text),
            CleanedToken::Integer(value) => value.fmt(f),
        }
    }
}

/// Cleans and classifies one raw token.
///
/// Every character outside ASCII letters and digits is dropped. If a digit
/// survives, the token is an integer built from its digit characters, negated
/// when the raw token started with `-`. Otherwise it is a word holding the
/// cleaned text, so `-ban!ana` becomes the word `banana` while `-~12#3@4`
/// becomes `-1234`.
pub fn clean_token(token: &Token) -> CleanedToken {
    let cleaned: String = token
        .text
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();

    if !cleaned.bytes().any(|b| b.is_ascii_digit()) {
        return CleanedToken::Word(cleaned);
    }

    let digits: String = cleaned.chars().filter(char::is_ascii_digit).collect();
    let negative = token.text.starts_with('-');
    CleanedToken::Integer(Integer::normalized(negative, &digits))
}

/// Cleans every token, preserving length and position.
pub fn clean_tokens(tokens: &[Token]) -> TypedSequence {
    tokens.iter().map(clean_token).collect()
}

/// Ordered mixture of words and integers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypedSequence {
    items: Vec<CleanedToken>,
}

impl TypedSequence {
    pub fn new(items: Vec<CleanedToken>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CleanedToken> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&CleanedToken> {
        self.items.get(index)
    }

    /// Kind pattern by position.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.items.iter().map(CleanedToken::kind).collect()
    }

    pub fn count_of(&self, kind: TokenKind) -> usize {
        self.items.iter().filter(|item| item.kind() == kind).count()
    }

    pub fn into_inner(self) -> Vec<CleanedToken> {
        self.items
    }
}

impl FromIterator<CleanedToken> for TypedSequence {
    fn from_iter<I: IntoIterator<Item = CleanedToken>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TypedSequence {
    type Item = &'a CleanedToken;
    type IntoIter = std::slice::Iter<'a, CleanedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for TypedSequence {
    type Item = CleanedToken;
    type IntoIter = std::vec::IntoIter<CleanedToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

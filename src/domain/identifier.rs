//! Single pre-release identifier
//!
//! One dot-separated token of a pre-release field, either a number or a run of text.
//! Precedence follows https://semver.org/#spec-item-11

use std::cmp::Ordering;
use std::fmt;

/// Numeric or textual pre-release identifier
///
/// Text identifiers borrow their span from the parsed input. The default value,
/// an empty text span, is the "absent" sentinel used to pad unused pre-release slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Identifier<'a> {
    /// Identifier made of ASCII digits only
    Numeric(u32),
    /// Any other identifier, kept verbatim
    Text(&'a str),
}

impl Default for Identifier<'_> {
    fn default() -> Self {
        Identifier::Text("")
    }
}

impl<'a> Identifier<'a> {
    /// Classify a token
    ///
    /// Empty text gives the absent identifier, all-digit text gives a numeric
    /// identifier and anything else is kept as text. Never fails: numbers too
    /// large for `u32` wrap around.
    ///
    /// # Examples
    /// ```
    /// use project_semver::Identifier;
    ///
    /// assert_eq!(Identifier::parse("5"), Identifier::Numeric(5));
    /// assert_eq!(Identifier::parse("beta"), Identifier::Text("beta"));
    /// assert!(Identifier::parse("").is_empty());
    /// ```
    pub fn parse(text: &'a str) -> Self {
        if text.is_empty() {
            return Identifier::default();
        }

        if text.bytes().all(|b| b.is_ascii_digit()) {
            Identifier::Numeric(accumulate_digits(text.bytes()))
        } else {
            Identifier::Text(text)
        }
    }

    /// True only for the absent sentinel (empty text). A numeric `0` is not empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Identifier::Text(text) if text.is_empty())
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Identifier::Numeric(_))
    }

    pub fn as_number(&self) -> Option<u32> {
        match self {
            Identifier::Numeric(value) => Some(*value),
            Identifier::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&'a str> {
        match self {
            Identifier::Numeric(_) => None,
            Identifier::Text(text) => Some(*text),
        }
    }
}

/// Fold ASCII digits into a `u32`, wrapping on overflow.
pub(crate) fn accumulate_digits(digits: impl Iterator<Item = u8>) -> u32 {
    digits.fold(0u32, |acc, digit| {
        acc.wrapping_mul(10).wrapping_add(u32::from(digit - b'0'))
    })
}

impl From<u32> for Identifier<'_> {
    fn from(value: u32) -> Self {
        Identifier::Numeric(value)
    }
}

impl<'a> From<&'a str> for Identifier<'a> {
    fn from(text: &'a str) -> Self {
        Identifier::Text(text)
    }
}

impl Ord for Identifier<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Identifier::Numeric(left), Identifier::Numeric(right)) => left.cmp(right),
            // Numeric identifiers always have lower precedence than text
            (Identifier::Numeric(_), Identifier::Text(_)) => Ordering::Less,
            (Identifier::Text(_), Identifier::Numeric(_)) => Ordering::Greater,
            (Identifier::Text(left), Identifier::Text(right)) => {
                left.as_bytes().cmp(right.as_bytes())
            }
        }
    }
}

impl PartialOrd for Identifier<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Numeric(value) => write!(f, "{}", value),
            Identifier::Text(text) => f.write_str(text),
        }
    }
}

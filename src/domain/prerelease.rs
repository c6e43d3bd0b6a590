//! Pre-release field as an ordered run of identifiers
//!
//! According to semver.org: https://semver.org/#spec-item-9

use std::cmp::Ordering;
use std::fmt;
use std::slice;

use super::identifier::Identifier;

/// Borrowed, ordered sequence of pre-release identifiers
///
/// The identifiers keep their source order and are never re-sorted. The
/// sequence does not own them: they live in a literal array or in a
/// `ProjectVersion`'s pre-release slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IdentifierSequence<'a> {
    items: &'a [Identifier<'a>],
}

impl<'a> IdentifierSequence<'a> {
    /// Sequence with no identifiers (a normal, non pre-release version)
    pub const EMPTY: IdentifierSequence<'static> = IdentifierSequence { items: &[] };

    pub const fn new(items: &'a [Identifier<'a>]) -> Self {
        IdentifierSequence { items }
    }

    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'a, Identifier<'a>> {
        self.items.iter()
    }

    pub const fn as_slice(&self) -> &'a [Identifier<'a>] {
        self.items
    }
}

impl<'a> From<&'a [Identifier<'a>]> for IdentifierSequence<'a> {
    fn from(items: &'a [Identifier<'a>]) -> Self {
        IdentifierSequence::new(items)
    }
}

impl<'a> IntoIterator for IdentifierSequence<'a> {
    type Item = &'a Identifier<'a>;
    type IntoIter = slice::Iter<'a, Identifier<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Ord for IdentifierSequence<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            // A pre-release has lower precedence than the normal version
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Left to right until a difference; a longer run wins a shared prefix
            (false, false) => self.items.cmp(other.items),
        }
    }
}

impl PartialOrd for IdentifierSequence<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for IdentifierSequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut separator = '-';
        for identifier in self.items {
            write!(f, "{}{}", separator, identifier)?;
            separator = '.';
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHA: &[Identifier<'static>] = &[Identifier::Text("alpha")];
    const ALPHA_1: &[Identifier<'static>] = &[Identifier::Text("alpha"), Identifier::Numeric(1)];
    const ALPHA_BETA: &[Identifier<'static>] =
        &[Identifier::Text("alpha"), Identifier::Text("beta")];
    const BETA_2: &[Identifier<'static>] = &[Identifier::Text("beta"), Identifier::Numeric(2)];
    const BETA_11: &[Identifier<'static>] = &[Identifier::Text("beta"), Identifier::Numeric(11)];
    const NUMERIC_1: &[Identifier<'static>] = &[Identifier::Numeric(1)];

    #[test]
    fn test_len_and_empty() {
        assert_eq!(IdentifierSequence::EMPTY.len(), 0);
        assert!(IdentifierSequence::EMPTY.is_empty());
        assert!(IdentifierSequence::default().is_empty());

        let seq = IdentifierSequence::new(ALPHA_1);
        assert_eq!(seq.len(), 2);
        assert!(!seq.is_empty());
    }

    #[test]
    fn test_empty_outranks_prerelease() {
        let release = IdentifierSequence::EMPTY;
        let pre = IdentifierSequence::new(ALPHA);
        assert!(pre < release);
        assert!(release > pre);
    }

    #[test]
    fn test_two_empty_are_equal() {
        assert_eq!(
            IdentifierSequence::EMPTY.cmp(&IdentifierSequence::default()),
            Ordering::Equal
        );
    }

    #[test]
    fn test_longer_wins_on_shared_prefix() {
        assert!(IdentifierSequence::new(ALPHA) < IdentifierSequence::new(ALPHA_1));
    }

    #[test]
    fn test_first_difference_decides() {
        assert!(IdentifierSequence::new(ALPHA_1) < IdentifierSequence::new(ALPHA_BETA));
        assert!(IdentifierSequence::new(ALPHA_BETA) < IdentifierSequence::new(BETA_2));
        assert!(IdentifierSequence::new(BETA_2) < IdentifierSequence::new(BETA_11));
    }

    #[test]
    fn test_numeric_lead_below_text_lead() {
        assert!(IdentifierSequence::new(NUMERIC_1) < IdentifierSequence::new(ALPHA));
    }

    #[test]
    fn test_equality() {
        let owned = [Identifier::parse("alpha"), Identifier::parse("1")];
        assert_eq!(IdentifierSequence::new(&owned), IdentifierSequence::new(ALPHA_1));
        assert_ne!(IdentifierSequence::new(ALPHA), IdentifierSequence::new(ALPHA_1));
    }

    #[test]
    fn test_iteration_keeps_source_order() {
        let seq = IdentifierSequence::new(BETA_11);
        let rendered: Vec<String> = seq.iter().map(|id| id.to_string()).collect();
        assert_eq!(rendered, vec!["beta", "11"]);
        assert_eq!(seq.into_iter().count(), 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(IdentifierSequence::EMPTY.to_string(), "");
        assert_eq!(IdentifierSequence::new(ALPHA).to_string(), "-alpha");
        assert_eq!(IdentifierSequence::new(BETA_11).to_string(), "-beta.11");
    }
}

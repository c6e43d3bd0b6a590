//! Version string owner
//!
//! `ProjectVersion` decomposes a raw string once and keeps the pieces a
//! `VersionView` needs. Parsing is total: malformed input degrades to zeros,
//! empty identifiers or truncated values, it never fails.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::trace;

use super::identifier::{accumulate_digits, Identifier};
use super::prerelease::IdentifierSequence;
use super::version::VersionView;

/// Parsed project version
///
/// Only two pre-release identifiers are stored: a tag and a counter
/// (`1.3.0-beta.5`). With more dots the counter takes the whole remainder as
/// one text identifier, so `1.0.0-rc.1.2` holds `rc` and `1.2`.
///
/// The `VersionView` is rebuilt from the stored fields on every call to
/// [`ProjectVersion::view`], so copies never share a dangling back-reference.
///
/// # Examples
/// ```
/// use project_semver::ProjectVersion;
///
/// let built = ProjectVersion::new("1.2.0");
/// let runtime = ProjectVersion::new("1.3.0-beta.5+something.mixed.5");
/// assert!(built.compatible_with(&runtime));
/// assert_eq!(runtime.to_string(), "1.3.0-beta.5+something.mixed.5");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ProjectVersion<'a> {
    source: &'a str,
    major: u32,
    minor: u32,
    patch: u32,
    prerelease: [Identifier<'a>; 2],
    build: &'a str,
}

impl<'a> ProjectVersion<'a> {
    pub fn new(source: &'a str) -> Self {
        let parts = RawParts::split(source);

        let version = ProjectVersion {
            source,
            major: parse_number(parts.major),
            minor: parse_number(parts.minor),
            patch: parse_number(parts.patch),
            prerelease: [Identifier::parse(parts.tag), Identifier::parse(parts.counter)],
            build: parts.build,
        };

        trace!(input = source, parsed = %version, "parsed project version");
        version
    }

    /// The text this version was parsed from, verbatim
    pub fn as_str(&self) -> &'a str {
        self.source
    }

    pub fn view(&self) -> VersionView<'_> {
        VersionView {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            prerelease: self.prerelease(),
            build: self.build,
        }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// Occupied pre-release slots
    ///
    /// An empty tag hides the counter as well.
    pub fn prerelease(&self) -> IdentifierSequence<'_> {
        let len = if self.prerelease[0].is_empty() {
            0
        } else if self.prerelease[1].is_empty() {
            1
        } else {
            2
        };
        IdentifierSequence::new(&self.prerelease[..len])
    }

    pub fn build(&self) -> &'a str {
        self.build
    }

    pub fn is_public(&self) -> bool {
        self.view().is_public()
    }

    /// See [`VersionView::compatible_with`].
    pub fn compatible_with(&self, runtime: &ProjectVersion<'_>) -> bool {
        self.view().compatible_with(&runtime.view())
    }
}

/// Raw substrings of a version, before any number is read
#[derive(Debug, Default, PartialEq)]
struct RawParts<'a> {
    major: &'a str,
    minor: &'a str,
    patch: &'a str,
    tag: &'a str,
    counter: &'a str,
    build: &'a str,
}

impl<'a> RawParts<'a> {
    fn split(source: &'a str) -> Self {
        let (rest, build) = source.split_once('+').unwrap_or((source, ""));
        let (core, prerelease) = rest.split_once('-').unwrap_or((rest, ""));

        // The counter keeps everything past the tag, further dots included
        let (tag, counter) = prerelease.split_once('.').unwrap_or((prerelease, ""));

        // Anything past the patch segment is dropped
        let mut numbers = core.splitn(4, '.');
        let major = numbers.next().unwrap_or("");
        let minor = numbers.next().unwrap_or("");
        let patch = numbers.next().unwrap_or("");

        RawParts {
            major,
            minor,
            patch,
            tag,
            counter,
            build,
        }
    }
}

/// Read leading decimal digits, stopping at the first non-digit.
fn parse_number(text: &str) -> u32 {
    accumulate_digits(text.bytes().take_while(u8::is_ascii_digit))
}

impl<'a> From<&'a str> for ProjectVersion<'a> {
    fn from(source: &'a str) -> Self {
        ProjectVersion::new(source)
    }
}

impl PartialEq for ProjectVersion<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.view() == other.view()
    }
}

impl Eq for ProjectVersion<'_> {}

impl PartialOrd for ProjectVersion<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ProjectVersion<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.view().cmp(&other.view())
    }
}

impl Hash for ProjectVersion<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.view().hash(state);
    }
}

impl fmt::Display for ProjectVersion<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

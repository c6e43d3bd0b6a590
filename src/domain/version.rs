use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::debug;

use super::prerelease::IdentifierSequence;

/// Structured semantic version
///
/// A lightweight view: pre-release identifiers and build metadata borrow from
/// longer-lived storage (literals or a `ProjectVersion`). Build metadata is
/// carried for display only and never takes part in equality, hashing or ordering.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionView<'a> {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub prerelease: IdentifierSequence<'a>,
    pub build: &'a str,
}

impl<'a> VersionView<'a> {
    /// Create a normal version with no pre-release and no build metadata
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        VersionView {
            major,
            minor,
            patch,
            prerelease: IdentifierSequence::new(&[]),
            build: "",
        }
    }

    pub const fn with_prerelease(self, prerelease: IdentifierSequence<'a>) -> Self {
        VersionView { prerelease, ..self }
    }

    pub const fn with_build(self, build: &'a str) -> Self {
        VersionView { build, ..self }
    }

    /// Version 1.0.0 defines the public API; major zero is initial development.
    pub const fn is_public(&self) -> bool {
        self.major != 0
    }

    /// Whether something built as `self` can be consumed by `runtime`
    ///
    /// - A major change always means incompatibility.
    /// - On a public line (`major > 0`) the runtime must be at least as new as `self`.
    /// - During initial development (`major == 0`) only the exact same version is accepted.
    ///
    /// # Examples
    /// ```
    /// use project_semver::VersionView;
    ///
    /// let built = VersionView::new(1, 2, 0);
    /// assert!(built.compatible_with(&VersionView::new(1, 3, 0)));
    /// assert!(!VersionView::new(1, 3, 0).compatible_with(&built));
    /// ```
    pub fn compatible_with(&self, runtime: &Self) -> bool {
        let compatible = if self.major != runtime.major {
            false
        } else if self.is_public() {
            self <= runtime
        } else {
            self == runtime
        };

        debug!(version = %self, runtime = %runtime, compatible, "compatibility check");
        compatible
    }
}

impl PartialEq for VersionView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease == other.prerelease
    }
}

impl Eq for VersionView<'_> {}

impl PartialOrd for VersionView<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionView<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| self.prerelease.cmp(&other.prerelease))
    }
}

impl Hash for VersionView<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}

impl fmt::Display for VersionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}{}",
            self.major, self.minor, self.patch, self.prerelease
        )?;
        if !self.build.is_empty() {
            write!(f, "+{}", self.build)?;
        }
        Ok(())
    }
}

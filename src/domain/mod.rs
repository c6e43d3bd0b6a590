//! Version model - parsing, precedence and compatibility, free of any I/O

pub mod identifier;
pub mod prerelease;
pub mod project;
pub mod version;

pub use identifier::Identifier;
pub use prerelease::IdentifierSequence;
pub use project::ProjectVersion;
pub use version::VersionView;

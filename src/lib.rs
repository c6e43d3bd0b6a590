//! Semantic version parsing, precedence and compatibility checks.
//!
//! A program embeds its compiled-in version ([`version::VERSION`]) and asks at
//! runtime whether it is compatible with the version another component reports.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
pub mod version;

pub use domain::{Identifier, IdentifierSequence, ProjectVersion, VersionView};
pub use error::{CompatError, Result};
pub use version::{get_version, VERSION};

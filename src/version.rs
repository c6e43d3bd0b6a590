//! Version this build was compiled with

use std::sync::LazyLock;

use crate::domain::ProjectVersion;

/// Raw version literal baked in at compile time.
///
/// Taken from `PROJECT_SEMVER_BUILD_VERSION` when set during the build,
/// otherwise from the package version.
pub const BUILD_VERSION: &str = match option_env!("PROJECT_SEMVER_BUILD_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Process-wide compiled-in version, parsed on first use and never mutated.
pub static VERSION: LazyLock<ProjectVersion<'static>> =
    LazyLock::new(|| ProjectVersion::new(BUILD_VERSION));

/// Returns a copy of the compiled-in version.
pub fn get_version() -> ProjectVersion<'static> {
    *VERSION
}

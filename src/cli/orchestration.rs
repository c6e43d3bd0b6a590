//! Compatibility check workflow
//!
//! Resolves the version under test and the runtime versions from CLI arguments
//! and configuration, then produces one verdict per runtime. Kept apart from
//! clap so it can be driven programmatically.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::{self, Config};
use crate::domain::ProjectVersion;
use crate::version;

/// Arguments for the check workflow
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckArgs {
    /// Path to custom config file
    pub config_path: Option<String>,

    /// Version under test, overriding config and the compiled-in version
    pub declared: Option<String>,

    /// Runtime versions given on the command line
    pub runtimes: Vec<String>,

    /// Report failure when any runtime is incompatible
    pub strict: bool,
}

/// Outcome of checking one runtime version
#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    /// Component name, for runtimes that come from configuration
    pub label: Option<String>,

    /// Canonical rendering of the version under test
    pub declared: String,

    /// Canonical rendering of the runtime version
    pub runtime: String,

    pub compatible: bool,
}

/// All verdicts of one run
#[derive(Debug, Clone, PartialEq)]
pub struct CheckReport {
    pub verdicts: Vec<Verdict>,
    pub strict: bool,
}

impl CheckReport {
    pub fn all_compatible(&self) -> bool {
        self.verdicts.iter().all(|verdict| verdict.compatible)
    }

    /// 1 when running strict and something is incompatible, else 0
    pub fn exit_code(&self) -> i32 {
        if self.strict && !self.all_compatible() {
            1
        } else {
            0
        }
    }
}

/// Check a single runtime version against the version under test.
pub fn check(
    declared: &ProjectVersion<'_>,
    runtime: &ProjectVersion<'_>,
    label: Option<&str>,
) -> Verdict {
    Verdict {
        label: label.map(str::to_string),
        declared: declared.to_string(),
        runtime: runtime.to_string(),
        compatible: declared.compatible_with(runtime),
    }
}

/// Main check workflow
///
/// Rejects blank versions in the arguments the same way configuration does,
/// loads configuration (see [`config::load_config`]) and evaluates every check.
pub fn run_check(args: &CheckArgs) -> Result<CheckReport> {
    validate_args(args).context("invalid arguments")?;
    let config = config::load_config(args.config_path.as_deref())
        .context("failed to load configuration")?;
    Ok(evaluate(args, &config))
}

fn validate_args(args: &CheckArgs) -> crate::error::Result<()> {
    if let Some(declared) = &args.declared {
        config::ensure_version("'declared'", declared)?;
    }
    for runtime in &args.runtimes {
        config::ensure_version("runtime", runtime)?;
    }
    Ok(())
}

/// Produce verdicts for already loaded configuration
///
/// The version under test is `args.declared`, then `config.declared`, then the
/// compiled-in version. Command line runtimes come first, followed by the
/// configured components in name order. With no runtimes at all, the version
/// under test is checked against the compiled-in version.
pub fn evaluate(args: &CheckArgs, config: &Config) -> CheckReport {
    let declared = match args.declared.as_deref().or(config.declared.as_deref()) {
        Some(text) => ProjectVersion::new(text),
        None => version::get_version(),
    };
    debug!(declared = %declared, "version under test");

    let mut verdicts = Vec::with_capacity(args.runtimes.len() + config.components.len());

    for runtime in &args.runtimes {
        verdicts.push(check(&declared, &ProjectVersion::new(runtime), None));
    }

    for (name, runtime) in &config.components {
        verdicts.push(check(&declared, &ProjectVersion::new(runtime), Some(name.as_str())));
    }

    if verdicts.is_empty() {
        debug!("no runtime versions given, checking against the compiled-in version");
        verdicts.push(check(&declared, &version::get_version(), None));
    }

    let report = CheckReport {
        verdicts,
        strict: args.strict || config.behavior.strict,
    };
    info!(
        checks = report.verdicts.len(),
        all_compatible = report.all_compatible(),
        "compatibility check finished"
    );

    report
}

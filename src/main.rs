use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use project_semver::cli::{self, CheckArgs};
use project_semver::{ui, version};

#[derive(clap::Parser)]
#[command(
    name = "project-semver",
    about = "Check whether runtime versions are compatible with the compiled-in version"
)]
struct Args {
    #[arg(help = "Runtime versions to check against")]
    runtimes: Vec<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, help = "Version to check instead of the compiled-in one")]
    declared: Option<String>,

    #[arg(long, help = "Exit with status 1 when any runtime is incompatible")]
    strict: bool,

    #[arg(long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.version {
        println!("project-semver {}", version::get_version());
        return Ok(());
    }

    let check_args = CheckArgs {
        config_path: args.config,
        declared: args.declared,
        runtimes: args.runtimes,
        strict: args.strict,
    };

    let report = match cli::run_check(&check_args) {
        Ok(report) => report,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(2);
        }
    };

    ui::display_report(&report);
    std::process::exit(report.exit_code());
}

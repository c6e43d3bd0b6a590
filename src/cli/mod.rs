//! Command line workflow, independent of argument parsing

pub mod orchestration;

pub use orchestration::{check, evaluate, run_check, CheckArgs, CheckReport, Verdict};

//! User interface module - terminal output for compatibility verdicts.

pub mod formatter;

pub use formatter::{
    display_error, display_report, display_verdict, format_summary, format_verdict,
};

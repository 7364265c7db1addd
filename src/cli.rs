//! CLI argument definitions using clap derive macros.

use clap::Parser;

/// Classify academic platform access URLs.
///
/// Reads URLs from the arguments, or from stdin when it is not a terminal, and
/// writes one JSON object per classified URL to stdout.
#[derive(Parser, Debug)]
#[command(name = "access-classifier")]
#[command(author, version, about)]
pub struct Args {
    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Platform id to classify with (skips host detection)
    #[arg(short, long, value_name = "ID")]
    pub platform: Option<String>,

    /// Treat each stdin line as a JSON-encoded decomposed URL
    #[arg(long)]
    pub json_input: bool,

    /// Log each classification's decomposed input and record at debug level
    #[arg(long)]
    pub diagnostics: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Print registered platform ids and names, then exit
    #[arg(long)]
    pub list_platforms: bool,

    /// Access URLs to classify
    #[arg(value_name = "URLS")]
    pub urls: Vec<String>,
}

impl Args {
    /// Returns true when the command line chose a verbosity explicitly.
    #[must_use]
    pub fn verbosity_overridden(&self) -> bool {
        self.quiet || self.verbose > 0
    }
}

//! CLI entry point for the access classifier.

use std::io::{self, BufWriter, IsTerminal, Read, Write};

use access_classifier::config::{VerbositySetting, load_default_file_config};
use access_classifier::parser::{DecomposedUrl, parse_input, parse_json_line};
use access_classifier::platform::{
    Classifier, ClassifyError, Diagnostics, Platform, PlatformRegistry,
    build_default_platform_registry,
};
use access_classifier::record::{AccessRecord, ResultRecord};
use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, error, info, warn};

mod cli;

use cli::Args;

/// One output line.
#[derive(Serialize)]
struct Classified<'a> {
    url: &'a str,
    platform: &'static str,
    record: &'a ResultRecord,
}

fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    let loaded = load_default_file_config()?;
    let file_config = loaded.config.clone().unwrap_or_default();

    // Priority: RUST_LOG env var > quiet flag > verbose flag > config verbosity > default (info)
    let default_level = log_level(&args, file_config.verbosity);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    debug!(?args, "CLI arguments parsed");
    debug!(
        path = ?loaded.path,
        loaded = loaded.loaded_from_file,
        "Configuration resolved"
    );

    let registry = build_default_platform_registry();

    if args.list_platforms {
        let mut out = io::stdout().lock();
        for platform in registry.platforms() {
            writeln!(out, "{}\t{}", platform.id(), platform.name())?;
        }
        return Ok(());
    }

    if let Some(id) = args.platform.as_deref() {
        registry
            .classifier(id)
            .context("Invalid --platform value")?;
    }

    let input_text = if !args.urls.is_empty() {
        args.urls.join("\n")
    } else if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read stdin")?;
        buffer
    } else {
        info!("No input provided. Pipe URLs via stdin or pass them as arguments.");
        info!("Example: echo 'https://pubs.rsc.org/en/journals' | access-classifier");
        return Ok(());
    };

    let entries = if args.json_input {
        decode_json_lines(&input_text)
    } else {
        scan_urls(&input_text)
    };

    let session = Session {
        registry: &registry,
        forced: args.platform.as_deref(),
        fallback: file_config.platform.as_deref(),
        diagnostics: Diagnostics::from(args.diagnostics || file_config.diagnostics == Some(true)),
        pretty: args.pretty || file_config.pretty == Some(true),
    };
    session.run(&entries)
}

/// Picks the default log level from CLI flags, then the config file.
fn log_level(args: &Args, configured: Option<VerbositySetting>) -> &'static str {
    let (quiet, verbose) = if args.verbosity_overridden() {
        (args.quiet, args.verbose)
    } else {
        match configured.map(VerbositySetting::verbose_count) {
            Some(None) => (true, 0),
            Some(Some(count)) => (false, count),
            None => (false, 0),
        }
    };

    if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

fn scan_urls(input: &str) -> Vec<(String, DecomposedUrl)> {
    let parsed = parse_input(input);
    for rejected in &parsed.errors {
        warn!(error = %rejected, "Skipped invalid URL");
    }
    info!(
        urls = parsed.len(),
        rejected = parsed.error_count(),
        "Parsed input"
    );
    parsed
        .items
        .into_iter()
        .map(|item| (item.raw, item.url))
        .collect()
}

fn decode_json_lines(input: &str) -> Vec<(String, DecomposedUrl)> {
    let mut entries = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_json_line(index + 1, line) {
            Ok(url) => {
                let label = url
                    .href
                    .clone()
                    .or_else(|| url.pathname.clone())
                    .unwrap_or_default();
                entries.push((label, url));
            }
            Err(error) => warn!(error = %error, "Skipped invalid input line"),
        }
    }
    info!(urls = entries.len(), "Decoded JSON input");
    entries
}

/// Settings shared by every classification of one run.
struct Session<'a> {
    registry: &'a PlatformRegistry,
    forced: Option<&'a str>,
    fallback: Option<&'a str>,
    diagnostics: Diagnostics,
    pretty: bool,
}

impl<'a> Session<'a> {
    fn run(&self, entries: &[(String, DecomposedUrl)]) -> Result<()> {
        let mut out = BufWriter::new(io::stdout().lock());
        let access = AccessRecord::new();
        let mut classified = 0_usize;
        let mut unassigned = 0_usize;
        let mut failed = 0_usize;

        for (raw, url) in entries {
            let Some(platform) = self.select(url) else {
                warn!(url = %raw, host = %url.hostname, "No platform for host; skipping");
                unassigned += 1;
                continue;
            };

            let classifier = Classifier::new(platform).with_diagnostics(self.diagnostics);
            match classifier.classify(url, &access) {
                Ok(record) => {
                    self.emit(&mut out, raw, platform.id(), &record)?;
                    classified += 1;
                }
                Err(err) => {
                    report_failure(raw, &err);
                    failed += 1;
                }
            }
        }
        out.flush().context("Failed to write output")?;

        info!(classified, unassigned, failed, "Classification complete");
        Ok(())
    }

    /// `--platform` first, then host detection, then the configured default.
    fn select(&self, url: &DecomposedUrl) -> Option<&'a dyn Platform> {
        if let Some(id) = self.forced {
            return self.registry.get(id);
        }
        self.registry
            .find_by_host(&url.hostname)
            .or_else(|| self.fallback.and_then(|id| self.registry.get(id)))
    }

    fn emit(
        &self,
        out: &mut impl Write,
        raw: &str,
        platform: &'static str,
        record: &ResultRecord,
    ) -> Result<()> {
        let line = Classified {
            url: raw,
            platform,
            record,
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &line)?;
        } else {
            serde_json::to_writer(&mut *out, &line)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

fn report_failure(raw: &str, err: &ClassifyError) {
    if err.is_structural() {
        error!(url = %raw, error = %err, "Malformed input; skipping");
    } else {
        error!(url = %raw, error = %err, "Classification failed");
    }
}

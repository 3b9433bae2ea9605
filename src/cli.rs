// src/cli.rs
use std::io::{self, Write};

use clap::Parser;

use crate::{
    config::consts::{DEFAULT_MISSING, DEFAULT_TABLE_CLASS},
    config::options::{ExtractOptions, TableRange},
    error::{Error, Result},
    log::{self, LogTarget},
    progress::Progress,
    render,
    runner::{self, Input, RunSummary},
};

/// Pull one column out of the wikitables of saved Wikipedia pages.
#[derive(Debug, Parser)]
#[command(name = "wiki_scrape", version, about)]
pub struct Args {
    /// Saved HTML pages; `-` or nothing reads stdin
    pub inputs: Vec<String>,

    /// Zero-based column to extract
    #[arg(short, long, default_value_t = 0)]
    pub column: usize,

    /// First table to take (inclusive, zero-based)
    #[arg(short, long, default_value_t = 0)]
    pub start: usize,

    /// Table to stop before (exclusive); default: through the last one
    #[arg(short, long)]
    pub end: Option<usize>,

    /// Class marking the tables of interest
    #[arg(long, default_value = DEFAULT_TABLE_CLASS)]
    pub class: String,

    /// List the tables of each page instead of extracting
    #[arg(long)]
    pub list: bool,

    /// Text printed for rows too short to have the column (default: empty line)
    #[arg(long)]
    pub missing: Option<String>,

    /// Print values only, without the per-table heading lines
    #[arg(long)]
    pub bare: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn options(&self) -> ExtractOptions {
        ExtractOptions {
            class: self.class.clone(),
            range: TableRange { start: self.start, end: self.end },
            column: self.column,
            missing: self.missing.clone().unwrap_or_else(|| s!(DEFAULT_MISSING)),
        }
    }

    pub fn inputs(&self) -> Vec<Input> {
        if self.inputs.is_empty() {
            vec![Input::Stdin]
        } else {
            self.inputs.iter().map(|a| Input::from_arg(a)).collect()
        }
    }

    /// Log level forced by flags; `None` leaves it to the environment.
    pub fn log_level(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}

/// Reports per-input failures on stderr as they happen.
struct CliProgress {
    quiet: bool,
}

impl Progress for CliProgress {
    fn item_failed(&mut self, label: &str, err: &str) {
        if !self.quiet {
            eprintln!("Skipped {}: {}", label, err);
        }
    }
}

/// Parse process args and run. Returns an error when nothing could be read.
pub fn run() -> Result<()> {
    let args = Args::parse();
    log::init(LogTarget::Stderr, args.log_level());
    run_with(&args, io::stdout().lock())
}

pub fn run_with<W: Write>(args: &Args, mut out: W) -> Result<()> {
    let inputs = args.inputs();
    let mut prog = CliProgress { quiet: args.quiet };

    if args.list {
        let summary = runner::list(&inputs, &args.class, Some(&mut prog));
        render::write_listings(&mut out, &summary.documents)?;
        out.flush()?;
        return check(&summary);
    }

    let opts = args.options();
    logd!("CLI: inputs={} options={:?}", inputs.len(), opts);
    let summary = runner::run(&inputs, &opts, Some(&mut prog));
    render::write_documents(&mut out, &summary.documents, &opts, !args.bare)?;
    out.flush()?;
    check(&summary)
}

fn check<T>(summary: &RunSummary<T>) -> Result<()> {
    match summary.failed.first() {
        Some(first) if summary.all_failed() => Err(Error::NothingProcessed {
            input: first.source.clone(),
            reason: first.error.to_string(),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn clap_command_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["wiki_scrape", "page.html"]).unwrap();
        let opts = args.options();
        assert_eq!(opts, ExtractOptions::default());
        assert_eq!(args.inputs(), vec![Input::from_arg("page.html")]);
        assert_eq!(args.log_level(), None);
    }

    #[test]
    fn range_and_column() {
        let args = Args::try_parse_from([
            "wiki_scrape", "-c", "2", "-s", "1", "-e", "3", "--class", "sortable", "--missing", "?",
        ])
        .unwrap();
        let opts = args.options();
        assert_eq!(opts.column, 2);
        assert_eq!(opts.range, TableRange::new(1, 3));
        assert_eq!(opts.class, "sortable");
        assert_eq!(opts.missing, "?");
        assert_eq!(args.inputs(), vec![Input::Stdin]);
    }

    #[test]
    fn negative_column_is_rejected() {
        assert!(Args::try_parse_from(["wiki_scrape", "-c", "-1"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Args::try_parse_from(["wiki_scrape", "-q", "-v"]).is_err());
        let v = Args::try_parse_from(["wiki_scrape", "-v"]).unwrap();
        assert_eq!(v.log_level(), Some("debug"));
    }
}

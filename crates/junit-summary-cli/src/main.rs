//! junit-summary: print or publish a digest of a JUnit XML report

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use junit_summary::{parser, OutputFormat};

/// Summarize a JUnit XML report (Catch2-friendly).
#[derive(Debug, Parser)]
#[command(name = "junit-summary", version, about)]
struct Args {
    /// Path to JUnit XML
    #[arg(default_value = "debug/junit.xml")]
    junit_xml: PathBuf,

    /// Number of slowest tests to show
    #[arg(long, default_value_t = 15, env = "JUNIT_SUMMARY_TOP")]
    top: usize,

    /// Write an HTML report to this path instead of printing text
    #[arg(long = "html", value_name = "PATH", env = "JUNIT_SUMMARY_HTML")]
    html_out: Option<PathBuf>,

    /// Print a JSON summary instead of text
    #[arg(long, conflicts_with = "html_out")]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<junit_summary::Error>()
                .map_or(1, junit_summary::Error::exit_code);
            ExitCode::from(code)
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(args: &Args) -> Result<()> {
    let report = parser::parse_file(&args.junit_xml)?;
    info!(
        suites = report.totals.suites,
        cases = report.cases.len(),
        "loaded report"
    );

    if let Some(out_path) = &args.html_out {
        let html = OutputFormat::Html.renderer().render(&report, args.top);
        write_report(out_path, &html)?;
        println!("Wrote: {}", out_path.display());
        return Ok(());
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    print!("{}", format.renderer().render(&report, args.top));
    Ok(())
}

fn write_report(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote HTML report");
    Ok(())
}

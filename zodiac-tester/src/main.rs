mod checks;
mod reports;
mod transport;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use checks::{Check, CheckResult, CheckRunner, expand_checks};
use transport::{Credentials, ReqwestTransport};
use zodiac_core::{Console, ConsoleConfig};

#[derive(Debug, Parser)]
#[command(name = "zodiac-tester", version = "0.1.0")]
#[command(about = "Smoke checks for the Zodiac bot admin API, run through the admin console")]
struct Args {
    /// Admin API base URL, including the `/api` prefix
    #[arg(long, default_value = "http://localhost:8000/api")]
    base_url: String,

    /// Basic auth user name
    #[arg(long, env = "ZODIAC_ADMIN_USER")]
    user: Option<String>,

    /// Basic auth password
    #[arg(long, env = "ZODIAC_ADMIN_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, default_value_t = 10_000)]
    timeout_ms: u32,

    /// Checks to run (comma-separated, or `all`)
    #[arg(long, default_value = "all")]
    checks: String,

    /// List all available checks and exit
    #[arg(long)]
    list_checks: bool,

    /// Follow the first row of each list into its detail and preview pages
    #[arg(long)]
    deep: bool,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Args {
    fn credentials(&self) -> Option<Credentials> {
        self.user.as_ref().map(|user| Credentials {
            user: user.clone(),
            password: self.password.clone().unwrap_or_default(),
        })
    }

    fn console_config(&self) -> ConsoleConfig {
        ConsoleConfig::default()
            .with_api_base(self.base_url.clone())
            .with_timeout_ms(Some(self.timeout_ms))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_checks(&args)? {
        return Ok(());
    }

    announce_banner(&args);

    let (selected, unknown) = expand_checks(&args.checks);
    for name in &unknown {
        eprintln!("⚠️  Unknown check: {}", name.yellow());
    }

    let start_time = Instant::now();
    let transport =
        ReqwestTransport::new(args.credentials()).context("failed to build HTTP client")?;
    let console = Console::new(transport, args.console_config());
    let runner = CheckRunner::new(console, args.deep, args.verbose);
    let results = runner.run_all(&selected).await;

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_checks(args: &Args) -> Result<bool> {
    if !args.list_checks {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available checks:")?;
    for check in Check::ALL {
        writeln!(
            output_target.writer(),
            "  {:12} - {}",
            check.key(),
            check.description()
        )?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner(args: &Args) {
    println!("{}", "♈ Zodiac Admin Smoke Tester".bright_cyan().bold());
    println!("{}", "================================".cyan());
    println!("Target: {}", args.base_url);
}

fn write_reports(args: &Args, results: &[CheckResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Zodiac Admin Smoke Check Results\n\n_No checks executed._"
                )?;
            } else {
                reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No checks executed.")?;
            } else {
                reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
        }
    }

    if args.report != "json" {
        let duration = start_time.elapsed();
        writeln!(&mut output_target)?;
        writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

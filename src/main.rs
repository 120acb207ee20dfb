//! nsusip - report load-balancing services that use the client source IP.
//!
//! Reads a NetScaler-style configuration dump, resolves every `add service`
//! against its `add server`, and appends `<service> <server> <address>` for
//! each qualifying service to `<input>-usip-output.txt`.

mod summary;

use anyhow::Context as _;
use clap::Parser;
use nsusip::{MissingServer, Options, audit_file, output_path, write_report};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "nsusip")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration dump to audit
    input: PathBuf,

    /// Report file [default: <INPUT>-usip-output.txt]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print report lines to stdout instead of appending to the report file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Flag marker token
    #[arg(long = "flag", default_value = "-usip", allow_hyphen_values = true)]
    flag_marker: String,

    /// Value the flag must carry for a service to be reported
    #[arg(long = "value", default_value = "YES")]
    sentinel: String,

    /// Skip services bound to an undefined server instead of failing
    #[arg(long)]
    skip_missing: bool,

    /// Print a summary of every resolved service
    #[arg(long, conflicts_with = "stdout")]
    summary: bool,

    /// Force ANSI color in the summary
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable ANSI color in the summary
    #[arg(long)]
    no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            flag_marker: self.flag_marker.clone(),
            sentinel: self.sentinel.clone(),
            missing_server: if self.skip_missing { MissingServer::Skip } else { MissingServer::Abort },
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "nsusip=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry().with(tracing_subscriber::fmt::layer().with_writer(io::stderr)).with(filter).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let options = cli.options();
    let audit = audit_file(&cli.input, &options).with_context(|| format!("auditing {}", cli.input.display()))?;

    if cli.summary {
        summary::print_audit(&cli.input, &audit, &options, cli.color, cli.no_color);
    }

    if cli.stdout {
        for line in &audit.lines {
            println!("{line}");
        }
        return Ok(());
    }

    let path = cli.output.clone().unwrap_or_else(|| output_path(&cli.input));
    let written = write_report(&path, &audit.lines)?;
    tracing::info!(path = %path.display(), written, "report appended");
    Ok(())
}

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches};
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cg_city::{CityMap, first_invalid_line, load_graph_path};
use cg_cli::cli::{Cli, Command, OutputFormat, QueryArgs};
use cg_cli::dump::write_graph;
use cg_cli::output::execute;
use cg_core::LoadConfig;

fn main() -> Result<ExitCode> {
    init_tracing();
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    let config = cli.load_config();

    match &cli.command {
        Command::Query(args) => {
            let sub = matches
                .subcommand_matches("query")
                .context("query arguments missing")?;
            handle_query(args, sub, &config)
        }
        Command::Validate { file } => handle_validate(file.as_deref(), &config),
        Command::Dump { file } => handle_dump(file, &config),
    }
}

fn handle_query(args: &QueryArgs, matches: &clap::ArgMatches, config: &LoadConfig) -> Result<ExitCode> {
    let map = CityMap::open(&args.file, config)
        .with_context(|| format!("failed to load dataset from {}", args.file.display()))?;

    let ops = args.operations(matches);
    debug!(count = ops.len(), "running queries");

    let mut out = BufWriter::new(io::stdout().lock());
    for op in &ops {
        let report = execute(&map, op);
        match args.format {
            OutputFormat::Text => writeln!(out, "{}", report.text())?,
            OutputFormat::Json => writeln!(out, "{}", report.json()?)?,
        }
    }
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn handle_validate(file: Option<&Path>, config: &LoadConfig) -> Result<ExitCode> {
    let bad = match file {
        Some(path) => {
            let reader = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            first_invalid_line(reader, config)
        }
        None => first_invalid_line(io::stdin().lock(), config),
    }
    .context("failed to read dataset")?;

    match bad {
        None => Ok(ExitCode::SUCCESS),
        Some(line) => {
            println!("{line}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn handle_dump(file: &Path, config: &LoadConfig) -> Result<ExitCode> {
    let graph = load_graph_path(file, config)
        .with_context(|| format!("failed to load dataset from {}", file.display()))?;
    let mut out = BufWriter::new(io::stdout().lock());
    write_graph(&graph, &mut out)?;
    out.flush()?;
    Ok(ExitCode::SUCCESS)
}

/// Log to stderr so stdout carries only query results.  `RUST_LOG` overrides
/// the default `warn` level.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

//! CLI for the XSTest BenchFlow adapter.
//!
//! This crate provides the `xstest-benchflow` command. Run without a
//! subcommand it loads the benchmark, evaluates a couple of example outputs,
//! saves the results and prints the benchmark metadata.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use xstest_benchflow_adapters::{
    AdapterConfig, BenchflowInterface, XsTestAdapter, DEFAULT_RESULTS_FILE,
};
use xstest_benchflow_benchmarks::{io, BenchmarkInfo, ModelOutput};

/// XSTest BenchFlow CLI.
#[derive(Parser, Debug)]
#[command(name = "xstest-benchflow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run (defaults to `run`).
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Load the benchmark, evaluate model outputs and save the results.
    Run {
        /// JSON config file (optional).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// JSON array of model output records. Two example records are used
        /// when omitted.
        #[arg(short = 'i', long)]
        outputs: Option<PathBuf>,

        /// Results file name inside the output directory.
        #[arg(short, long, default_value = DEFAULT_RESULTS_FILE)]
        filename: String,
    },

    /// Print benchmark metadata as JSON.
    Info,

    /// Show the resolved adapter configuration.
    Status {
        /// JSON config file (optional).
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run {
            config: None,
            outputs: None,
            filename: DEFAULT_RESULTS_FILE.to_string(),
        }
    }
}

/// Run using the current process arguments.
pub fn run() -> anyhow::Result<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    init_tracing(cli.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or_default() {
        Commands::Run {
            config,
            outputs,
            filename,
        } => {
            let adapter = XsTestAdapter::new(config.as_deref())?;
            let model_outputs = match outputs {
                Some(path) => read_model_outputs(&path)?,
                None => example_outputs(),
            };
            run_demo(&adapter, &model_outputs, &filename, &mut out)?;
            Ok(())
        }
        Commands::Info => print_info(&BenchmarkInfo::xstest(), &mut out),
        Commands::Status { config } => {
            let config = AdapterConfig::load(config.as_deref())?;
            tracing::debug!(output_dir = %config.output_dir.display(), "Resolved config");
            print_status(&config, &mut out)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    // Already installed when invoked more than once in-process.
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

/// Example model outputs used when none are supplied.
pub fn example_outputs() -> Vec<ModelOutput> {
    vec![
        ModelOutput::new("Example input 1", "Example output 1"),
        ModelOutput::new("Example input 2", "Example output 2"),
    ]
}

fn read_model_outputs(path: &Path) -> anyhow::Result<Vec<ModelOutput>> {
    io::read_json(path)
        .with_context(|| format!("failed to read model outputs from {}", path.display()))
}

/// Load, evaluate, save and describe a benchmark.
///
/// Returns the saved results path, or `None` when the benchmark could not be
/// loaded.
pub fn run_demo(
    benchmark: &dyn BenchflowInterface,
    model_outputs: &[ModelOutput],
    filename: &str,
    out: &mut dyn Write,
) -> anyhow::Result<Option<PathBuf>> {
    let info = benchmark.get_benchmark_info();
    if !benchmark.load_benchmark() {
        tracing::warn!(benchmark = %info.name, "Benchmark unavailable, skipping evaluation");
        return Ok(None);
    }
    writeln!(out, "Benchmark loaded successfully")?;

    let results = benchmark.evaluate(model_outputs);
    let path = benchmark.save_results(&results, filename)?;
    writeln!(out, "Results saved to {}", path.display())?;

    print_info(&info, out)?;
    Ok(Some(path))
}

fn print_info(info: &BenchmarkInfo, out: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(info)?)?;
    Ok(())
}

fn print_status(config: &AdapterConfig, out: &mut dyn Write) -> anyhow::Result<()> {
    let info = BenchmarkInfo::xstest();
    writeln!(out, "XSTest BenchFlow Adapter")?;
    writeln!(out, "Version: {}", env!("CARGO_PKG_VERSION"))?;
    writeln!(out, "Benchmark: {} {}", info.name, info.version)?;
    writeln!(out, "\nConfiguration:")?;
    writeln!(out, "  - max_samples: {}", config.max_samples)?;
    writeln!(out, "  - output_dir: {}", config.output_dir.display())?;
    for (key, value) in &config.extra {
        writeln!(out, "  - {}: {}", key, value)?;
    }
    Ok(())
}

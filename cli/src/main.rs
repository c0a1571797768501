use clap::{Args, Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use promgen_compiler::error::MetricsError;
use promgen_compiler::parser::parse_metrics;
use promgen_compiler::tokenizer::tokenize_lines;
use promgen_compiler::verifier::verify_metrics;
use promgen_compiler::{compile_all, compile_metrics, compile_types, GeneratorConfig};

#[derive(Parser)]
#[command(name = "promgen")]
#[command(about = "Generate Prometheus collector code from metric struct descriptions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Metric struct description
    #[arg(short, long, default_value = "fc_metrics.txt")]
    input: PathBuf,

    /// Output file (if omitted, prints to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct MetricArgs {
    /// Go constant used as the gauge namespace
    #[arg(long, default_value = "namespaceFirecracker")]
    namespace: String,

    /// Parameter name of the aggregate in the update function
    #[arg(long, default_value = "fm")]
    instance_var: String,

    /// Label every gauge is partitioned by
    #[arg(long, default_value = "item")]
    label_name: String,

    /// Fail instead of writing `FIXME` for unresolved references
    #[arg(long)]
    strict: bool,
}

impl MetricArgs {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            namespace:    self.namespace.clone(),
            instance_var: self.instance_var.clone(),
            label_name:   self.label_name.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Metric declarations, registration and update functions, then Go structs
    Generate {
        #[command(flatten)]
        io: InputArgs,
        #[command(flatten)]
        metrics: MetricArgs,
    },

    /// Metric declarations, registration and update functions only
    Metrics {
        #[command(flatten)]
        io: InputArgs,
        #[command(flatten)]
        metrics: MetricArgs,
    },

    /// Go struct definitions with JSON tags only
    Types {
        #[command(flatten)]
        io: InputArgs,
    },

    /// Dump the parsed blocks and lookup tables as JSON
    Model {
        #[command(flatten)]
        io: InputArgs,
    },
}

fn emit(output: Option<&Path>, code: &str) -> Result<(), MetricsError> {
    match output {
        Some(out_path) => {
            fs::write(out_path, code)?;
            info!("generated code written to {}", out_path.display());
        }
        None => print!("{}", code),
    }
    Ok(())
}

fn main() -> Result<(), MetricsError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Generate { io, metrics } => {
            let text = fs::read_to_string(&io.input)?;
            let (parsed, go_code) = compile_all(&text, &metrics.config())?;
            if metrics.strict {
                verify_metrics(&parsed)?;
            }
            emit(io.output.as_deref(), &go_code)
        }

        Commands::Metrics { io, metrics } => {
            let text = fs::read_to_string(&io.input)?;
            let (parsed, go_code) = compile_metrics(&text, &metrics.config())?;
            if metrics.strict {
                verify_metrics(&parsed)?;
            }
            emit(io.output.as_deref(), &go_code)
        }

        Commands::Types { io } => {
            let text = fs::read_to_string(&io.input)?;
            emit(io.output.as_deref(), &compile_types(&text))
        }

        Commands::Model { io } => {
            let text = fs::read_to_string(&io.input)?;
            let parsed = parse_metrics(&tokenize_lines(&text))?;
            let json = serde_json::to_string_pretty(&parsed)?;
            emit(io.output.as_deref(), &(json + "\n"))
        }
    }
}

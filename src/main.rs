use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use deckparse::handler::MAX_SUPPORTED_DEPTH;
use deckparse::{logging, DeckError, Document, Pipeline, PipelineConfig};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "deckparse", version, about = "Parse and validate slide decks")]
struct Cli {
    /// JSON file with pipeline settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the maximum accepted input size in bytes
    #[arg(long, global = true)]
    max_input_bytes: Option<usize>,

    /// Override the maximum JSON nesting depth
    #[arg(
        long,
        global = true,
        value_parser = clap::value_parser!(u64).range(0..=MAX_SUPPORTED_DEPTH as u64)
    )]
    max_depth: Option<u64>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a deck and print a summary
    Parse {
        /// Input file, or "-" for stdin
        path: PathBuf,
        /// Input format identifier
        #[arg(short, long)]
        format: Option<String>,
        /// Print the normalized document as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Run the format handler's quick well-formedness check
    Check {
        /// Input file, or "-" for stdin
        path: PathBuf,
        #[arg(short, long)]
        format: Option<String>,
    },
    /// List registered formats
    Formats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level);

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let pipeline = Pipeline::with_default_handlers(load_config(&cli)?);

    match cli.command {
        Command::Parse { path, format, json } => {
            let input = read_input(&path)?;
            let format = format.unwrap_or_else(|| pipeline.config().default_format.clone());
            let document = pipeline.parse_as(&input, &format)?;

            if json {
                let value = document.to_value().context("Failed to encode document")?;
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print_summary(&document);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { path, format } => {
            let input = read_input(&path)?;
            let format = format.unwrap_or_else(|| pipeline.config().default_format.clone());
            if pipeline.validate_format(&input, &format)? {
                println!("✓ well-formed {format}");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("✗ not well-formed {format}");
                Ok(ExitCode::from(2))
            }
        }
        Command::Formats => {
            for info in pipeline.handler_infos() {
                println!("{}\t{} v{}", info.format, info.name, info.version);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn load_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            PipelineConfig::from_json_str(&raw)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => PipelineConfig::default(),
    };

    if let Some(bytes) = cli.max_input_bytes {
        config = config.max_input_bytes(bytes);
    }
    if let Some(depth) = cli.max_depth {
        config = config.max_depth(depth as usize);
    }
    Ok(config)
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read stdin")?;
        return Ok(input);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_summary(document: &Document) {
    println!(
        "{} ({} slides, {} elements)",
        document.title(),
        document.slides().len(),
        document.element_count()
    );
    for (index, slide) in document.slides().iter().enumerate() {
        println!("  [{}] {} - {} elements", index + 1, slide.title(), slide.elements().len());
        for element in slide.elements() {
            let position = element.position();
            println!(
                "      {} at ({}, {}) {}",
                element.kind(),
                position.x(),
                position.y(),
                position.unit()
            );
        }
    }
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<DeckError>() {
        Some(DeckError::Parse(_)) => 2,
        Some(DeckError::Validation(_)) => 3,
        Some(DeckError::Build(_)) => 4,
        None if err.downcast_ref::<deckparse::ParseError>().is_some() => 2,
        None => 1,
    }
}

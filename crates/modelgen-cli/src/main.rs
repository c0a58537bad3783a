//! modelgen CLI - C# model class generator
//!
//! Commands:
//! - `modelgen generate` - Generate a model class from a discovered class
//! - `modelgen list` - List the classes discovered in a folder
//! - `modelgen scan` - Show discovered classes and their properties

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use modelgen_cli::discovery;
use modelgen_cli::{FileSink, GenerateModelCommand, StdoutSink};
use modelgen_core::{ClassRegistry, GeneratorConfig, LogLevel, ModelGenError};
use modelgen_logging::{ReloadHandle, init_logging};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, warn};

/// Configuration file looked up in the source folder when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "modelgen.toml";

#[derive(Parser)]
#[command(name = "modelgen")]
#[command(author, version, about = "Generate C# model classes from existing sources", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Path to a modelgen.toml configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a model class with constructors and a factory method
    Generate {
        /// Folder containing the C# sources
        #[arg(short, long)]
        source_dir: PathBuf,

        /// Name of the class to generate
        #[arg(short, long)]
        class: String,

        /// Output file (default: <source-dir>/<class>.<extension>)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Read classes from a registry JSON file instead of scanning
        #[arg(short, long)]
        registry: Option<PathBuf>,

        /// Print the generated code instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// List the classes discovered in a folder
    List {
        /// Folder containing the C# sources
        #[arg(short, long)]
        source_dir: PathBuf,
    },

    /// Show discovered classes with their properties
    Scan {
        /// Folder containing the C# sources
        #[arg(short, long)]
        source_dir: PathBuf,

        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<ModelGenError>()
                .map_or(1, ModelGenError::error_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let cli_level = cli
        .log_level
        .as_deref()
        .map(str::parse::<LogLevel>)
        .transpose()?;
    init_logging(cli_level.unwrap_or(LogLevel::Info));

    let source_dir = match &cli.command {
        Commands::Generate { source_dir, .. }
        | Commands::List { source_dir }
        | Commands::Scan { source_dir, .. } => source_dir.clone(),
    };
    let config = load_config(cli.config.as_deref(), &source_dir)?;

    if cli_level.is_none() {
        let level = config.log_level()?;
        if let Err(err) = ReloadHandle::global().reload_level(level) {
            warn!("Configured log level {level} not applied: {err}");
        }
    }

    match cli.command {
        Commands::Generate {
            source_dir,
            class,
            out,
            registry,
            stdout,
        } => {
            let registry = match registry {
                Some(path) => load_registry(&path)?,
                None => discovery::scan(&source_dir)?,
            };
            generate(&registry, &config, &source_dir, &class, out.as_deref(), stdout)?;
        }
        Commands::List { source_dir } => {
            let registry = discovery::scan(&source_dir)?;
            for name in registry.names() {
                println!("{}", name);
            }
        }
        Commands::Scan { source_dir, json } => {
            let registry = discovery::scan(&source_dir)?;
            if json {
                println!("{}", registry.to_json_pretty()?);
            } else {
                print_registry(&registry);
            }
        }
    }

    Ok(())
}

fn generate(
    registry: &ClassRegistry,
    config: &GeneratorConfig,
    source_dir: &Path,
    class: &str,
    out: Option<&Path>,
    stdout: bool,
) -> Result<()> {
    if stdout {
        GenerateModelCommand::new(registry, &StdoutSink, config).execute(source_dir, class, out)?;
    } else {
        let sink = FileSink::new();
        let written =
            GenerateModelCommand::new(registry, &sink, config).execute(source_dir, class, out)?;
        println!("✓ Generated {}", written.display());
    }
    Ok(())
}

fn load_config(explicit: Option<&Path>, source_dir: &Path) -> Result<GeneratorConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(ModelGenError::Config(format!(
                    "configuration file not found: {}",
                    path.display()
                ))
                .into());
            }
            path.to_path_buf()
        }
        None => source_dir.join(DEFAULT_CONFIG_FILE),
    };
    debug!("Loading configuration from {}", path.display());
    Ok(GeneratorConfig::load(&path)?)
}

fn load_registry(path: &Path) -> Result<ClassRegistry> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read registry: {}", path.display()))?;
    Ok(ClassRegistry::from_json(&json)?)
}

fn print_registry(registry: &ClassRegistry) {
    for class in registry.iter() {
        let kind = if class.is_enum { "enum" } else { "class" };
        if class.namespace.is_empty() {
            println!("{} {}", kind, class.name);
        } else {
            println!("{} {}.{}", kind, class.namespace, class.name);
        }
        for property in &class.properties {
            println!("    {} {}", property.ty, property.name);
        }
        for value in &class.enum_values {
            println!("    {}", value);
        }
    }
}

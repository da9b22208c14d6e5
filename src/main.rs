//! docdiff: paragraph-level document version comparison
//!
//! Aligns the paragraphs of two versions of a document, classifies what was
//! added, removed or modified, and rates the change set by risk keywords.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use docdiff::{
    analysis::{RiskLevel, SummaryLanguage},
    cli,
    config::{CompareConfigBuilder, ConfigPreset},
    matching::{AlignmentStrategy, SimilarityMetric},
    reports::ReportFormat,
};
use std::io::{self, Write as _};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with format support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nInput:",
        "\n  PDF (text layer, one page per PDF page)",
        "\n  Plain-text page dumps (pages separated by form feed)",
        "\n\nOutput Formats:",
        "\n  summary, json, html, markdown",
        "\n\nAlignment Strategies:",
        "\n  greedy (default), ordered"
    )
}

#[derive(Parser)]
#[command(name = "docdiff")]
#[command(version, long_version = build_long_version())]
#[command(about = "Paragraph-level document version comparison", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Changes detected (with --fail-on-change)
    2  Risk at or above --fail-on-risk
    3  Error occurred

EXAMPLES:
    # Compare two versions of a contract
    docdiff compare \"Service Agreement\" contract_v1.pdf contract_v2.pdf

    # Custom labels and a JSON report on stdout
    docdiff compare \"HR Policy\" 2023.txt 2024.txt --old-label 2023 --new-label 2024 -o json

    # CI check: fail when the change set is rated HIGH
    docdiff compare NDA old.txt new.txt --fail-on-risk high --no-store")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// Name of the document being compared
    document_name: String,

    /// Path to the old version (PDF or plain-text page dump)
    old: PathBuf,

    /// Path to the new version (PDF or plain-text page dump)
    new: PathBuf,

    /// Label of the old version
    #[arg(long, default_value = "v1")]
    old_label: String,

    /// Label of the new version
    #[arg(long, default_value = "v2")]
    new_label: String,

    /// Output format for the primary report
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Directory for the JSON and HTML report artifacts
    #[arg(long)]
    report_dir: Option<PathBuf>,

    /// Do not write JSON and HTML report artifacts
    #[arg(long)]
    no_reports: bool,

    /// Configuration preset: default, strict, lenient
    #[arg(long)]
    preset: Option<String>,

    /// Minimum similarity (0.0-1.0) for pairing two paragraphs
    #[arg(long)]
    threshold: Option<f64>,

    /// Similarity above which a paired paragraph is treated as unchanged
    #[arg(long)]
    unchanged_threshold: Option<f64>,

    /// Similarity metric
    #[arg(long, value_enum)]
    metric: Option<SimilarityMetric>,

    /// Alignment strategy
    #[arg(long, value_enum)]
    strategy: Option<AlignmentStrategy>,

    /// Language of the summary text
    #[arg(long, value_enum)]
    language: Option<SummaryLanguage>,

    /// Exit with code 1 if any changes are detected
    #[arg(long)]
    fail_on_change: bool,

    /// Exit with code 2 if the risk level is at or above this level
    #[arg(long, value_enum)]
    fail_on_risk: Option<RiskLevel>,

    /// Do not record the run in the comparison store
    #[arg(long)]
    no_store: bool,

    /// Path of the comparison history database
    #[arg(long, env = "DOCDIFF_STORE")]
    store_path: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two versions of a document
    Compare(CompareArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate a man page and print it to stdout
    Man,
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (defaults merged with file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .docdiff.yaml in the current directory
    Init,
    /// List the built-in presets
    Presets,
}

fn main() {
    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            docdiff::pipeline::exit_codes::ERROR
        }
    };
    if code != 0 {
        std::process::exit(code);
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    // Dispatch to command handlers
    match cli.command {
        Commands::Compare(args) => {
            let (file_config, loaded_from) = docdiff::config::load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }

            let base = match args.preset.as_deref() {
                Some(name) => {
                    let preset = ConfigPreset::from_name(name)
                        .with_context(|| format!("unknown preset '{name}'"))?;
                    docdiff::config::AppConfig::from_preset(preset)
                }
                None => file_config,
            };

            let mut builder = CompareConfigBuilder::from_app_config(base)
                .document_name(args.document_name)
                .old_path(args.old)
                .new_path(args.new)
                .old_label(args.old_label)
                .new_label(args.new_label);

            if let Some(format) = args.output {
                builder = builder.output_format(format);
            }
            if args.output_file.is_some() {
                builder = builder.output_file(args.output_file);
            }
            if let Some(dir) = args.report_dir {
                builder = builder.report_dir(dir);
            }
            if args.no_reports {
                builder = builder.write_artifacts(false);
            }
            if let Some(threshold) = args.threshold {
                builder = builder.matching_threshold(threshold);
            }
            if let Some(threshold) = args.unchanged_threshold {
                builder = builder.unchanged_threshold(threshold);
            }
            if let Some(metric) = args.metric {
                builder = builder.metric(metric);
            }
            if let Some(strategy) = args.strategy {
                builder = builder.strategy(strategy);
            }
            if let Some(language) = args.language {
                builder = builder.summary_language(language);
            }
            if args.fail_on_change {
                builder = builder.fail_on_change(true);
            }
            if args.fail_on_risk.is_some() {
                builder = builder.fail_on_risk(args.fail_on_risk);
            }
            if args.no_store {
                builder = builder.store_enabled(false);
            }
            if let Some(path) = args.store_path {
                builder = builder.store_path(path);
            }
            if cli.quiet {
                builder = builder.quiet(true);
            }
            if cli.no_color {
                builder = builder.no_color(true);
            }

            cli::run_compare(builder.build()?)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "docdiff", &mut io::stdout());
            Ok(0)
        }

        Commands::ConfigSchema { output } => {
            let schema = docdiff::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(0)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = docdiff::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(0)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("docdiff").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in docdiff::config::file::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match docdiff::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(0)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".docdiff.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = docdiff::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(0)
            }
            ConfigAction::Presets => {
                for preset in ConfigPreset::all() {
                    println!("{:<10} {}", preset.name(), preset.description());
                }
                Ok(0)
            }
        },

        Commands::Man => {
            let cmd = Cli::command();
            let man = clap_mangen::Man::new(cmd);
            let mut buf = Vec::new();
            man.render(&mut buf).context("failed to render man page")?;
            io::stdout().write_all(&buf)?;
            Ok(0)
        }
    }
}

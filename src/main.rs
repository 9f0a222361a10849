//! Prompt Highlighter - command-line interface
//!
//! Usage:
//!   prompt-highlighter highlight [FILE] [--format text|json|ansi]
//!   prompt-highlighter stats [--format text|json]
//!   prompt-highlighter explain [FILE]
//!   prompt-highlighter color <CATEGORY>
//!   prompt-highlighter decorations [FILE]
//!   prompt-highlighter config
//!
//! Input is read from FILE, or from stdin when FILE is omitted or `-`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use prompt_highlighter::{
    color_for_name, decorate, render, tables::PromptKeywords, Category, ColorScheme,
    HighlightEngine, HighlighterConfig, OutputFormat, KEYWORD_PASS_ORDER,
};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "prompt-highlighter")]
#[command(about = "Instant keyword highlighting for AI image and video prompts")]
#[command(version)]
struct Cli {
    /// Config file (TOML)
    #[arg(long, global = true, env = "PROMPT_HIGHLIGHTER_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Highlight a prompt
    Highlight {
        /// Prompt file (stdin if omitted)
        file: Option<PathBuf>,

        /// Output format (defaults to the configured one)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Show keyword and pattern table sizes
    Stats {
        #[arg(short, long, default_value = "text")]
        format: StatsFormat,
    },

    /// Print a diagnostic report for a prompt
    Explain {
        /// Prompt file (stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Print the display color of a category
    Color {
        category: String,
    },

    /// Print editor decorations as JSON
    Decorations {
        /// Prompt file (stdin if omitted)
        file: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatsFormat {
    Text,
    Json,
}

fn init_logging(log_level: &str) {
    let level = match log_level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "prompt_highlighter={}",
            level.as_str().to_lowercase()
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr) // Logs to stderr, not stdout
        .init();
}

/// Read a prompt from `path`, or stdin for `None` and `-`
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read prompt from stdin")?;
            Ok(text)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    debug!("prompt-highlighter v{} starting", env!("CARGO_PKG_VERSION"));

    let config = HighlighterConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let engine = HighlightEngine::shared();

    match cli.command {
        Commands::Highlight { file, format } => {
            let text = read_input(file.as_deref())?;
            let spans = engine.highlight(&text);
            info!("Found {} highlights", spans.len());

            match format.unwrap_or(config.output_format) {
                OutputFormat::Text => {
                    for span in &spans {
                        println!(
                            "{:>6}..{:<6} {:<9} {}",
                            span.start, span.end, span.category, span.text
                        );
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&spans)?);
                }
                OutputFormat::Ansi => {
                    if !config.color_output || !std::io::stdout().is_terminal() {
                        warn!("Color output disabled or stdout is not a terminal; printing plain text");
                        print!("{}", text);
                    } else {
                        print!("{}", render::to_ansi(&text, &spans, &ColorScheme::default()));
                    }
                }
            }
        }

        Commands::Stats { format } => {
            let stats = engine.stats();
            match format {
                StatsFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
                StatsFormat::Text => {
                    println!("Keywords:   {}", stats.total_keywords);
                    println!("Categories: {}", stats.category_count);
                    println!("Patterns:   {}", stats.pattern_count);
                    println!();
                    for category in KEYWORD_PASS_ORDER {
                        println!(
                            "  {:<9} {:>4}  {}",
                            category,
                            PromptKeywords::for_category(category).len(),
                            category.description()
                        );
                    }
                }
            }
        }

        Commands::Explain { file } => {
            let text = read_input(file.as_deref())?;
            print!("{}", engine.explain_with_preview(&text, config.preview_chars));
        }

        Commands::Color { category } => {
            if category.parse::<Category>().is_err() {
                warn!("Unknown category '{}', using neutral color", category);
            }
            println!("{}", color_for_name(&category));
        }

        Commands::Decorations { file } => {
            let text = read_input(file.as_deref())?;
            let decorations = decorate(&text, &engine.highlight(&text));
            println!("{}", serde_json::to_string_pretty(&decorations)?);
        }

        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

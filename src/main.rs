// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use indicatif::{ProgressBar, ProgressStyle};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::app_config::Config;
use crate::export::ExportFormat;
use app_controller::Controller;

mod adapters;
mod app_config;
mod app_controller;
mod errors;
mod export;
mod file_utils;
mod recipients;
mod session;

/// CLI Wrapper for ExportFormat to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliExportFormat {
    Pdf,
    Html,
}

impl From<CliExportFormat> for ExportFormat {
    fn from(cli_format: CliExportFormat) -> Self {
        match cli_format {
            CliExportFormat::Pdf => ExportFormat::Pdf,
            CliExportFormat::Html => ExportFormat::Html,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize a meeting transcript and optionally distribute it (default command)
    #[command(alias = "summarize")]
    Summarize(SummarizeArgs),

    /// Generate shell completions for acto
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct SummarizeArgs {
    /// Plain-text transcript file to summarize
    #[arg(value_name = "TRANSCRIPT")]
    input_path: PathBuf,

    /// Recipient email address (repeatable, max 10)
    #[arg(short, long = "recipient", value_name = "EMAIL")]
    recipients: Vec<String>,

    /// Send the summary to the recipients by email
    #[arg(long)]
    send: bool,

    /// Export the summary as a document artifact
    #[arg(short, long)]
    export: bool,

    /// Artifact format for export
    #[arg(short, long, value_enum, default_value = "pdf")]
    format: CliExportFormat,

    /// Output directory for the artifact (defaults to the transcript's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Subject line for dispatched emails
    #[arg(long)]
    subject: Option<String>,

    /// Backend endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// Acto - AI Meeting Transcript Summarizer
///
/// Submits a plain-text meeting transcript to the summarization backend and
/// prints the markdown summary. The summary can be exported as a branded
/// document or dispatched by email to up to 10 recipients.
#[derive(Parser, Debug)]
#[command(name = "acto")]
#[command(author = "Acto Team")]
#[command(version = "1.0.0")]
#[command(about = "AI meeting transcript summarizer")]
#[command(long_about = "Acto submits meeting transcripts to a summarization backend and
distributes the result as a rendered document or by email.

EXAMPLES:
    acto meeting.txt                             # Summarize and print to stdout
    acto -e meeting.txt                          # Also export meeting-summary.pdf
    acto -e -f html meeting.txt                  # Export meeting-summary.html
    acto -r a@b.com -r c@d.com --send meeting.txt # Email the summary
    acto --endpoint http://host:8080 meeting.txt # Use a different backend
    acto completions bash > acto.bash            # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Plain-text transcript file to summarize
    #[arg(value_name = "TRANSCRIPT")]
    input_path: Option<PathBuf>,

    /// Recipient email address (repeatable, max 10)
    #[arg(short, long = "recipient", value_name = "EMAIL")]
    recipients: Vec<String>,

    /// Send the summary to the recipients by email
    #[arg(long)]
    send: bool,

    /// Export the summary as a document artifact
    #[arg(short, long)]
    export: bool,

    /// Artifact format for export
    #[arg(short, long, value_enum, default_value = "pdf")]
    format: CliExportFormat,

    /// Output directory for the artifact (defaults to the transcript's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Subject line for dispatched emails
    #[arg(long)]
    subject: Option<String>,

    /// Backend endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code and emoji for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "\u{274c} "),
            Level::Warn => ("\x1B[1;33m", "\u{1f6a7} "),
            Level::Info => ("\x1B[1;32m", " "),
            Level::Debug => ("\x1B[1;36m", "\u{1f50d} "),
            Level::Trace => ("\x1B[1;35m", "\u{1f4cb} "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let (color, emoji) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color,
                now,
                emoji,
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "acto", &mut std::io::stdout());
            Ok(())
        },
        Some(Commands::Summarize(args)) => run_summarize(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli
                .input_path
                .ok_or_else(|| anyhow!("TRANSCRIPT is required when no subcommand is specified"))?;

            let summarize_args = SummarizeArgs {
                input_path,
                recipients: cli.recipients,
                send: cli.send,
                export: cli.export,
                format: cli.format,
                output_dir: cli.output_dir,
                subject: cli.subject,
                endpoint: cli.endpoint,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_summarize(summarize_args).await
        },
    }
}

async fn run_summarize(options: SummarizeArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let mut config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        // Override config with CLI options if provided
        if let Some(endpoint) = &options.endpoint {
            config.backend.endpoint = endpoint.clone();
        }

        if let Some(subject) = &options.subject {
            config.dispatch.subject = subject.clone();
        }

        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let mut config = Config::default();

        if let Some(endpoint) = &options.endpoint {
            config.backend.endpoint = endpoint.clone();
        }

        if let Some(subject) = &options.subject {
            config.dispatch.subject = subject.clone();
        }

        if let Some(log_level) = &options.log_level {
            config.log_level = log_level.clone().into();
        }

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Create controller and start the workflow cycle
    let mut controller = Controller::with_config(config)?;
    controller.select_file(&options.input_path)?;

    // Submit with a spinner while the request is outstanding
    let spinner = make_spinner("Summarizing, please wait\u{2026}");
    controller.submit().await?;
    spinner.finish_and_clear();

    match &controller.session().phase {
        session::Phase::Summarized { summary } => {
            println!("\u{1f4dd} Summary:\n");
            println!("{}", summary);
        },
        session::Phase::SummarizeFailed { error } => {
            return Err(anyhow!("Summarization failed: {}", error));
        },
        // One submit call always lands in a terminal phase
        other => return Err(anyhow!("Unexpected phase after submit: {}", other.name())),
    }

    // Export the document artifact if requested
    if options.export {
        let output_dir = options.output_dir.clone().unwrap_or_else(|| {
            options
                .input_path
                .parent()
                .unwrap_or(Path::new("."))
                .to_path_buf()
        });
        // A failed export leaves the session intact, so dispatch can
        // still proceed
        match controller.export(&output_dir, options.format.clone().into()) {
            Ok(artifact) => println!("\u{1f4c4} Exported: {}", artifact.display()),
            Err(e) => warn!("Export failed: {}", e),
        }
    }

    // Collect recipients; invalid ones are skipped with a warning
    for address in &options.recipients {
        if let Err(e) = controller.add_recipient(address) {
            warn!("Skipping recipient '{}': {}", address, e);
        }
    }

    // Dispatch by email if requested
    if options.send {
        if controller.session().recipients.is_empty() {
            return Err(anyhow!("No valid recipients to send to"));
        }

        let spinner = make_spinner("Sending email\u{2026}");
        controller.dispatch().await?;
        spinner.finish_and_clear();

        match &controller.session().dispatch_phase {
            session::DispatchPhase::Sent { status } => {
                println!("\u{1f4e7} {}", status);
            },
            session::DispatchPhase::SendFailed { error } => {
                return Err(anyhow!("Dispatch failed: {}", error));
            },
            other => {
                return Err(anyhow!("Unexpected dispatch state: {:?}", other));
            },
        }
    }

    Ok(())
}

fn make_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

use anyhow::Context;
use clap::{Parser, Subcommand};
use hl7::config::missing_control_id_policy_from_env_value;
use hl7::{AckCode, CodecConfig};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable selecting the missing control ID policy (`generate` or `reject`).
const MISSING_CONTROL_ID_ENV: &str = "HL7_MISSING_CONTROL_ID";

#[derive(Parser)]
#[command(name = "hl7")]
#[command(about = "HL7 v2.x message codec CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a message and print it as JSON
    Parse {
        /// Message file (reads stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Validate required segments; exits non-zero if the message is invalid
    Validate {
        /// Message file (reads stdin if omitted)
        file: Option<PathBuf>,
    },
    /// Print an acknowledgment for a message
    Ack {
        /// Message file (reads stdin if omitted)
        file: Option<PathBuf>,
        /// Acknowledgment code (AA, AE or AR)
        #[arg(long, default_value = "AA")]
        code: AckCode,
        /// Explanation carried in MSA-3
        #[arg(long)]
        text: Option<String>,
    },
}

impl Commands {
    fn file(&self) -> Option<&Path> {
        match self {
            Commands::Parse { file } | Commands::Validate { file } | Commands::Ack { file, .. } => {
                file.as_deref()
            }
        }
    }
}

/// What a command prints, and whether the process should report success.
struct Outcome {
    output: String,
    success: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("hl7=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let policy = missing_control_id_policy_from_env_value(std::env::var(MISSING_CONTROL_ID_ENV).ok())?;
    let config = CodecConfig::new(policy);

    let cli = Cli::parse();
    let input = read_input(cli.command.file())?;
    let outcome = execute(&cli.command, &input, &config)?;

    println!("{}", outcome.output);
    Ok(if outcome.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read message from {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read message from stdin")?;
            Ok(buf)
        }
    }
}

fn execute(command: &Commands, input: &str, config: &CodecConfig) -> anyhow::Result<Outcome> {
    let message = hl7::parse_with_config(input, config).context("failed to parse message")?;

    let outcome = match command {
        Commands::Parse { .. } => Outcome {
            output: serde_json::to_string_pretty(&message)?,
            success: true,
        },
        Commands::Validate { .. } => {
            let report = hl7::validate(&message);
            if !report.valid {
                tracing::info!(errors = report.errors.len(), "message failed validation");
            }
            Outcome {
                output: serde_json::to_string_pretty(&report)?,
                success: report.valid,
            }
        }
        Commands::Ack { code, text, .. } => {
            let ack = match text {
                Some(text) => hl7::generate_ack_with_text(&message, *code, text),
                None => hl7::generate_ack(&message, *code),
            };
            Outcome {
                output: ack.replace('\r', "\n"),
                success: true,
            }
        }
    };
    Ok(outcome)
}

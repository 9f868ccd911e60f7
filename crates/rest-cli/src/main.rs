// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use rest_error::Classification;
use rest_logger::{ENV_LOG_OUTPUT, LogConfig, LogLevel, LogOutput, TracingLogger};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "resterr", version, about = "REST error body toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging.
    #[arg(long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the JSON body of a well-known error.
    New {
        #[arg(value_enum)]
        class: ClassArg,

        /// Human-readable message.
        message: String,

        /// Underlying failure (internal errors only).
        #[arg(long)]
        cause: Option<String>,
    },

    /// Print the JSON body of an error with an explicit status and kind.
    Custom {
        /// Numeric status code.
        #[arg(long)]
        status: u16,

        /// Machine-readable kind token.
        #[arg(long)]
        kind: String,

        /// Human-readable message.
        message: String,

        /// Cause description; repeat for several, order is kept.
        #[arg(long = "cause")]
        causes: Vec<String>,
    },

    /// Decode a JSON error body and print its rendering.
    Render {
        /// File to read; stdin when omitted.
        file: Option<PathBuf>,

        /// Wrap undecodable input as a bad_request instead of failing.
        #[arg(long)]
        lossy: bool,
    },

    /// Print the JSON Schema of the error body.
    Schema,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ClassArg {
    BadRequest,
    Unauthorized,
    NotFound,
    Conflict,
    Internal,
}

impl From<ClassArg> for Classification {
    fn from(v: ClassArg) -> Self {
        match v {
            ClassArg::BadRequest => Classification::BadRequest,
            ClassArg::Unauthorized => Classification::Unauthorized,
            ClassArg::NotFound => Classification::NotFound,
            ClassArg::Conflict => Classification::Conflict,
            ClassArg::Internal => Classification::InternalServerError,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries command output unless LOG_OUTPUT names a sink.
    let mut config = LogConfig::from_env();
    if std::env::var(ENV_LOG_OUTPUT).map_or(true, |v| v.trim().is_empty()) {
        config.output = LogOutput::Stderr;
    }
    if cli.debug {
        config.level = LogLevel::Debug;
    }
    rest_logger::init(&config)?;

    let logger = TracingLogger;
    let output = match cli.command {
        Commands::New {
            class,
            message,
            cause,
        } => commands::new_error(class.into(), message, cause)?,
        Commands::Custom {
            status,
            kind,
            message,
            causes,
        } => commands::custom_error(status, kind, message, causes),
        Commands::Render { file, lossy } => {
            let input = commands::read_input(file.as_deref())?;
            commands::render(&input, lossy, &logger)?
        }
        Commands::Schema => commands::schema()?,
    };
    println!("{output}");
    Ok(())
}

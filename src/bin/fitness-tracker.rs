// ABOUTME: Fitness tracker CLI - evaluates step-count records from the command line
// ABOUTME: Prints localized or JSON reports to stdout, logs to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Day of walking: steps and duration
//! fitness-tracker steps "6000,1h30m" --weight 75 --height 1.8
//!
//! # Training session with an activity label
//! fitness-tracker training "1000,Ходьба,25m0s" --weight 70 --height 1.75
//!
//! # Calories for an explicit activity, as JSON
//! fitness-tracker --format json calories --activity running --steps 3000 \
//!     --weight 70 --height 1.75 --duration 30m
//! ```

use clap::{Parser, Subcommand};
use fitness_tracker::config::TrackerConfig;
use fitness_tracker::errors::{AppError, AppResult, ErrorResponse};
use fitness_tracker::formatters::{format_output, Locale, OutputFormat};
use fitness_tracker::logging::LoggingConfig;
use fitness_tracker::models::PersonProfile;
use fitness_tracker::parser::parse_duration;
use fitness_tracker::services::ActivityService;
use serde_json::json;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "fitness-tracker",
    version,
    about = "Step-count activity calculator",
    long_about = "Estimates distance, mean speed and calories burned from step-count records."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Summary language (ru, en)
    #[arg(long, global = true, default_value = "ru")]
    locale: Locale,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate a `steps,duration` record as a day of walking
    Steps {
        /// Record such as "6000,1h30m"
        record: String,

        #[command(flatten)]
        person: PersonArgs,
    },

    /// Evaluate a `steps,activity,duration` training record
    Training {
        /// Record such as "1000,Ходьба,25m0s"
        record: String,

        #[command(flatten)]
        person: PersonArgs,
    },

    /// Calories for an explicit activity kind
    Calories {
        /// Activity kind (walking, running)
        #[arg(long)]
        activity: String,

        /// Number of steps
        #[arg(long)]
        steps: u64,

        #[command(flatten)]
        person: PersonArgs,

        /// Duration literal such as "45m" or "1h30m"
        #[arg(long)]
        duration: String,
    },
}

#[derive(clap::Args)]
struct PersonArgs {
    /// Body weight in kilograms
    #[arg(long)]
    weight: f64,

    /// Height in meters
    #[arg(long)]
    height: f64,
}

impl PersonArgs {
    const fn profile(&self) -> PersonProfile {
        PersonProfile::new(self.weight, self.height)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.verbose();
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(&cli) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(&e, cli.format);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> AppResult<String> {
    let config = TrackerConfig::from_env()?;
    debug!(?config, "Configuration loaded");

    let service = ActivityService::from_config(config, cli.locale);

    match &cli.command {
        Command::Steps { record, person } => {
            let report = service.day_steps(record, &person.profile())?;
            Ok(format_output(&report, cli.format, cli.locale)?.data)
        }
        Command::Training { record, person } => {
            let report = service.training(record, &person.profile())?;
            Ok(format_output(&report, cli.format, cli.locale)?.data)
        }
        Command::Calories {
            activity,
            steps,
            person,
            duration,
        } => {
            let duration = parse_duration(duration)?;
            let calories = service.calories(activity, *steps, &person.profile(), duration)?;
            render_calories(activity, calories, cli.format)
        }
    }
}

fn render_calories(activity: &str, calories: f64, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Text => Ok(format!("{calories:.2}")),
        OutputFormat::Json => {
            let body = json!({
                "activity": activity.trim().to_lowercase(),
                "calories_kcal": calories,
            });
            serde_json::to_string_pretty(&body)
                .map_err(|e| AppError::serialization(e.to_string()))
        }
    }
}

fn report_error(error: &AppError, format: OutputFormat) {
    match format {
        OutputFormat::Text => eprintln!("Error: {error}"),
        OutputFormat::Json => match serde_json::to_string_pretty(&ErrorResponse::from(error)) {
            Ok(body) => println!("{body}"),
            Err(_) => eprintln!("Error: {error}"),
        },
    }
}

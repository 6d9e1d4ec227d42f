//! Career matcher: profession matching engine for RAMAK questionnaire results

mod cli;
mod config;
mod error;
mod input;
mod matching;
mod output;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use error::{CareerMatcherError, Result};
use input::manager::InputManager;
use log::{error, info};
use matching::engine::MatchingEngine;
use matching::traits::TraitCategory;
use output::formatter::{self, ReportGenerator};
use output::report::MatchReport;
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Match {
            answers,
            catalog,
            top,
            method,
            detailed,
            output,
            save,
        } => {
            info!("Starting profession matching");

            // Validate input files
            cli::validate_file_extension(&answers, &["json"])
                .map_err(|e| CareerMatcherError::InvalidInput(format!("Answers file: {}", e)))?;

            cli::validate_file_extension(&catalog, &["json"])
                .map_err(|e| CareerMatcherError::InvalidInput(format!("Catalog file: {}", e)))?;

            // Parse output format
            let output_format =
                cli::parse_output_format(&output).map_err(CareerMatcherError::InvalidInput)?;

            // Apply CLI overrides on top of the configured scoring options
            let mut scoring_config = config.scoring.clone();
            if let Some(method) = &method {
                scoring_config.similarity = cli::parse_similarity_method(method)
                    .map_err(CareerMatcherError::InvalidInput)?;
            }

            println!("🎯 Profession matching");
            println!("📄 Answers: {}", answers.display());
            println!("📚 Catalog: {}", catalog.display());

            // Load inputs
            let mut input_manager = InputManager::new();
            let submission = input_manager.load_submission(&answers).await?;
            let records = input_manager.load_catalog(&catalog).await?;

            // Run the matching engine
            let mut engine = MatchingEngine::new(&scoring_config)?;
            let run = engine.evaluate(&submission, &records, top)?;
            let report = MatchReport::from_run(run, scoring_config.similarity);

            // Render and emit
            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                true,
                true,
            );
            let rendered = generator.generate_report(&report, &output_format)?;
            println!("{}", rendered);

            if let Some(save_path) = save {
                formatter::save_report_to_file(&rendered, &save_path)?;
                println!("💾 Report saved to: {}", save_path.display());
            }
        }

        Commands::Categories => {
            println!("📚 Trait Categories\n");
            for category in TraitCategory::ALL {
                println!("  • {}", category);
            }
            println!("\nProfession trait weights and questionnaire scores are distributed over these categories.");
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config file: {}", Config::config_path().display());
                println!("\nScoring:");
                println!("  Similarity Method: {}", config.scoring.similarity);
                println!("  Fuzzy Matching: {}", config.scoring.fuzzy_matching);
                println!("  Fuzzy Threshold: {:.2}", config.scoring.fuzzy_threshold);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}

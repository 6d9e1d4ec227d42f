//! CLI interface for the career matcher

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "career-matcher")]
#[command(about = "Profession matching engine for RAMAK questionnaire results")]
#[command(
    long_about = "Rank a profession catalog against a questionnaire submission using trait vectors and requirement tags"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a questionnaire submission against a profession catalog
    Match {
        /// Path to the questionnaire submission (JSON)
        #[arg(short, long)]
        answers: PathBuf,

        /// Path to the profession catalog (JSON array)
        #[arg(long)]
        catalog: PathBuf,

        /// Keep only the best N matches
        #[arg(short, long)]
        top: Option<usize>,

        /// Similarity method for trait profiles: overlap, cosine
        #[arg(short, long)]
        method: Option<String>,

        /// Output detailed results (trait profile, skipped records)
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// List the trait categories professions are scored on
    Categories,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Parse and validate similarity method
pub fn parse_similarity_method(
    method: &str,
) -> Result<crate::matching::scoring::SimilarityMethod, String> {
    match method.to_lowercase().as_str() {
        "overlap" => Ok(crate::matching::scoring::SimilarityMethod::Overlap),
        "cosine" => Ok(crate::matching::scoring::SimilarityMethod::Cosine),
        _ => Err(format!(
            "Invalid similarity method: {}. Supported: overlap, cosine",
            method
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &PathBuf, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::matching::scoring::SimilarityMethod;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn test_parse_similarity_method() {
        assert_eq!(
            parse_similarity_method("overlap").unwrap(),
            SimilarityMethod::Overlap
        );
        assert_eq!(
            parse_similarity_method("Cosine").unwrap(),
            SimilarityMethod::Cosine
        );
        assert!(parse_similarity_method("euclidean").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension(&PathBuf::from("answers.json"), &["json"]).is_ok());
        assert!(validate_file_extension(&PathBuf::from("answers.yaml"), &["json"]).is_err());
        assert!(validate_file_extension(&PathBuf::from("answers"), &["json"]).is_err());
    }

    #[test]
    fn test_match_command_parses() {
        let cli = Cli::try_parse_from([
            "career-matcher",
            "match",
            "--answers",
            "answers.json",
            "--catalog",
            "catalog.json",
            "--top",
            "5",
        ])
        .unwrap();

        match cli.command {
            Commands::Match {
                answers,
                catalog,
                top,
                ..
            } => {
                assert_eq!(answers, PathBuf::from("answers.json"));
                assert_eq!(catalog, PathBuf::from("catalog.json"));
                assert_eq!(top, Some(5));
            }
            _ => panic!("expected match command"),
        }
    }
}

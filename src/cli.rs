//! CLI interface for resume insight

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-insight")]
#[command(about = "Heuristic resume parsing, scoring, and feedback")]
#[command(
    long_about = "Analyze resumes with keyword heuristics: extract contact details, skills, experience and education, score the result against a skills taxonomy, and keep analyzed resumes for comparison and statistics"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume file
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        file: PathBuf,

        /// Output format: console, json, markdown (defaults to the
        /// configured format)
        #[arg(short, long)]
        output: Option<String>,

        /// Persist the analyzed resume for later retrieval
        #[arg(short, long)]
        save: bool,
    },

    /// List stored resumes
    List,

    /// Show a stored resume's analysis
    Show {
        /// Resume id
        id: String,

        /// Output format: console, json, markdown (defaults to the
        /// configured format)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Re-run analysis over a stored resume's original text
    Reanalyze {
        /// Resume id
        id: String,
    },

    /// Compare two stored resumes
    Compare {
        /// First resume id
        first: String,

        /// Second resume id
        second: String,
    },

    /// Aggregate statistics over stored resumes
    Stats,

    /// Remove a stored resume
    Remove {
        /// Resume id
        id: String,
    },

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

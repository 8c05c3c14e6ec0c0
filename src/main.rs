//! Resume insight: heuristic resume analysis from the command line

use clap::Parser;
use log::{error, info};
use resume_insight::analysis::{feedback, Analyzer, ResumeAnalysis};
use resume_insight::cli::{self, Cli, Commands, ConfigAction};
use resume_insight::config::{Config, OutputFormat};
use resume_insight::error::{Result, ResumeInsightError};
use resume_insight::input::InputManager;
use resume_insight::output::{ReportContext, ReportGenerator};
use resume_insight::store::{insights, ResumeStore};
use std::process;
use uuid::Uuid;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze { file, output, save } => {
            cli::validate_file_extension(&file, &["pdf", "txt", "md"])
                .map_err(|e| ResumeInsightError::InvalidInput(format!("Resume file: {}", e)))?;
            let format = resolve_format(output.as_deref(), &config)?;

            info!("Analyzing resume: {}", file.display());
            let mut input_manager = InputManager::new();
            let text = input_manager.extract_text(&file).await?;

            let analyzer = Analyzer::new(&config)?;
            let result = analyzer.analyze(&text)?;

            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| file.display().to_string());

            print_report(&file_name, &result, &analyzer, &config, format)?;

            if save {
                let store = ResumeStore::open(config.data_dir())?;
                let record = store.insert(&file_name, &text, result)?;
                println!("Saved as {}", record.id);
            }
        }

        Commands::List => {
            let store = ResumeStore::open(config.data_dir())?;
            let records = store.list()?;
            if records.is_empty() {
                println!("No stored resumes.");
            }
            for record in records {
                println!(
                    "{}  {:>3}/100  {}  (uploaded {})",
                    record.id,
                    record.analysis.overall_score,
                    record.file_name,
                    record.uploaded_at.format("%Y-%m-%d %H:%M")
                );
            }
        }

        Commands::Show { id, output } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let store = ResumeStore::open(config.data_dir())?;
            let record = store.get(parse_id(&id)?)?;

            let analyzer = Analyzer::new(&config)?;
            let result = ResumeAnalysis {
                parsed_data: record.parsed_data.clone(),
                analysis: record.analysis.clone(),
            };
            print_report(&record.file_name, &result, &analyzer, &config, format)?;
        }

        Commands::Reanalyze { id } => {
            let store = ResumeStore::open(config.data_dir())?;
            let analyzer = Analyzer::new(&config)?;
            let record = store.reanalyze(parse_id(&id)?, &analyzer)?;
            println!(
                "Re-analyzed {}: overall score {}/100",
                record.file_name, record.analysis.overall_score
            );
        }

        Commands::Compare { first, second } => {
            let store = ResumeStore::open(config.data_dir())?;
            let a = store.get(parse_id(&first)?)?;
            let b = store.get(parse_id(&second)?)?;
            let comparison = insights::compare(&a, &b);
            println!("{}", serde_json::to_string_pretty(&comparison)?);
        }

        Commands::Stats => {
            let store = ResumeStore::open(config.data_dir())?;
            let stats = insights::compute_stats(&store.list()?);
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }

        Commands::Remove { id } => {
            let store = ResumeStore::open(config.data_dir())?;
            store.remove(parse_id(&id)?)?;
            println!("Removed {}", id);
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeInsightError::Configuration(format!("Failed to serialize config: {}", e))
                })?;
                println!("{}", content);
            }
            ConfigAction::Reset => {
                let defaults = Config::default();
                defaults.save()?;
                println!("Configuration reset to defaults.");
            }
        },
    }

    Ok(())
}

fn print_report(
    file_name: &str,
    result: &ResumeAnalysis,
    analyzer: &Analyzer,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    let tips = feedback::improvement_tips(&result.analysis);
    let suggested = feedback::suggested_skills(analyzer.taxonomy(), &result.parsed_data.skills);
    let context = ReportContext {
        file_name,
        result,
        improvement_tips: &tips,
        suggested_skills: &suggested,
    };
    let report = ReportGenerator::new(config.output.color_output).render(&context, format)?;
    println!("{}", report);
    Ok(())
}

fn resolve_format(requested: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match requested {
        Some(format) => cli::parse_output_format(format).map_err(ResumeInsightError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn parse_id(id: &str) -> Result<Uuid> {
    Uuid::parse_str(id)
        .map_err(|e| ResumeInsightError::InvalidInput(format!("invalid resume id '{}': {}", id, e)))
}

//! Command-line entrypoint over the dashboard's computations.
//! Loads config, models and the resource cache at start; saves the cache on exit.

use anyhow::Context;
use clap::{Parser, Subcommand};
use jamb_analytics::{
    config::AppConfig,
    dataset::{Dataset, Factor},
    logging::StructuredLogger,
    model::ModelSet,
    predict::PredictionService,
    resources::{self, catalog, filter_by_kind, ResourceKind, ResourceLibrary},
    risk::RiskEngine,
    RawStudentInput,
};
use std::path::PathBuf;
use tracing::info;

const SYNTHETIC_ROWS: usize = 1000;
const SYNTHETIC_SEED: u64 = 42;

#[derive(Parser)]
#[command(name = "jamb-analytics")]
#[command(about = "JAMB score prediction and study-resource library", long_about = None)]
struct Cli {
    /// Config file (defaults to $JAMB_CONFIG_PATH or config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Average score, pass rate and top performers
    Stats,
    /// Correlation matrix of the numeric factors
    Correlations,
    /// Mean score per level of a categorical factor
    Factor { name: String },
    /// Predict a student's score, pass chance and risk level
    Predict {
        #[arg(long, default_value = "20")]
        study_hours: String,
        #[arg(long, default_value = "3")]
        teacher_quality: String,
        #[arg(long, default_value = "80")]
        attendance: String,
        #[arg(long, default_value = "5.0")]
        distance: String,
        #[arg(long, default_value = "Public")]
        school_type: String,
        #[arg(long, default_value = "Urban")]
        location: String,
        #[arg(long, default_value = "No")]
        tutorials: String,
        #[arg(long, default_value = "Yes")]
        materials: String,
        #[arg(long, default_value = "Medium")]
        parent: String,
        #[arg(long, default_value = "Medium")]
        it: String,
        #[arg(long)]
        json: bool,
    },
    /// List study resources for a subject and optional topic
    Resources {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        topic: Option<String>,
        /// book, video, practice, course, official, notes or all
        #[arg(long = "type", default_value = "all")]
        kind: String,
        #[arg(long)]
        json: bool,
    },
    /// List topics for a subject
    Topics {
        #[arg(long)]
        subject: String,
    },
    /// List subjects
    Subjects,
}

fn load_dataset(config: &AppConfig) -> Dataset {
    Dataset::load_or_synthetic(&config.dataset_path, SYNTHETIC_ROWS, SYNTHETIC_SEED)
}

fn run(
    command: Commands,
    config: &AppConfig,
    library: &mut ResourceLibrary,
) -> anyhow::Result<bool> {
    match command {
        Commands::Stats => {
            let data = load_dataset(config);
            match data.overview() {
                Some(o) => {
                    println!("Students:             {}", o.students);
                    println!("Average JAMB Score:   {:.1}", o.average_score);
                    println!("Pass Rate (>=200):    {:.1}%", o.pass_rate);
                    println!("Top Performers (>=250): {:.1}%", o.top_performers);
                    if data.is_synthetic() {
                        println!("(synthetic data)");
                    }
                }
                None => println!("No data available"),
            }
        }
        Commands::Correlations => {
            let data = load_dataset(config);
            let m = data.correlation_matrix();
            print!("{:<22}", "");
            for c in &m.columns {
                print!("{:>22}", c);
            }
            println!();
            for (c, row) in m.columns.iter().zip(&m.values) {
                print!("{:<22}", c);
                for v in row {
                    print!("{:>22.2}", v);
                }
                println!();
            }
        }
        Commands::Factor { name } => {
            let factor = Factor::from_column(&name).with_context(|| {
                let known: Vec<_> = Factor::ALL.iter().map(|f| f.column()).collect();
                format!("unknown factor {name:?}; expected one of {}", known.join(", "))
            })?;
            let data = load_dataset(config);
            println!("JAMB Score by {}", factor.column().replace('_', " "));
            for level in data.factor_summary(factor) {
                println!(
                    "- {}: {} students, mean {:.1}",
                    level.level, level.count, level.mean_score
                );
            }
        }
        Commands::Predict {
            study_hours,
            teacher_quality,
            attendance,
            distance,
            school_type,
            location,
            tutorials,
            materials,
            parent,
            it,
            json,
        } => {
            let input = RawStudentInput {
                study_hours,
                teacher_quality,
                attendance,
                distance,
                school_type,
                location,
                tutorials,
                materials,
                parent,
                it,
            };
            let models = ModelSet::load(&config.models);
            let service = PredictionService::new(RiskEngine::new(config.risk.clone()));
            match service.predict_message(&input, &models) {
                Ok(result) if json => {
                    StructuredLogger::emit_json(&result, &mut std::io::stdout().lock())?;
                }
                Ok(result) => {
                    println!("Predicted JAMB Score:   {:.1}", result.predicted_score);
                    println!("Chance of Scoring 200+: {:.1}%", result.pass_probability);
                    println!("Risk Level:             {}", result.risk_level);
                    if result.recommendations.is_empty() {
                        println!("No specific recommendations at this time.");
                    } else {
                        println!("Recommendations:");
                        for rec in &result.recommendations {
                            println!("- {rec}");
                        }
                    }
                }
                Err(message) => {
                    eprintln!("{message}");
                    return Ok(false);
                }
            }
        }
        Commands::Resources {
            subject,
            topic,
            kind,
            json,
        } => {
            let kind = ResourceKind::parse_filter(&kind).map_err(anyhow::Error::msg)?;
            let entries = filter_by_kind(library.get_resources(&subject, topic.as_deref()), kind);
            if json {
                let mut out = std::io::stdout().lock();
                for entry in &entries {
                    StructuredLogger::emit_json(entry, &mut out)?;
                }
            } else if entries.is_empty() {
                println!("No resources found for the selected criteria.");
            } else {
                for e in &entries {
                    println!("[{}] {} ({}, {:.1}/5)", e.kind.as_str(), e.title, e.source, e.rating);
                    println!("    {}", e.url);
                }
            }
        }
        Commands::Topics { subject } => {
            for topic in resources::topics(&subject) {
                println!("{topic}");
            }
        }
        Commands::Subjects => {
            for name in catalog::subject_names() {
                println!("{name}");
            }
        }
    }
    Ok(true)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(|| {
        std::env::var("JAMB_CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.json"))
    });
    let config = AppConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);
    info!(config = %config_path.display(), data_dir = ?config.data_dir, "jamb-analytics starting");

    let mut library = ResourceLibrary::open(&config);
    let outcome = run(cli.command, &config, &mut library);
    library.persist();

    if !outcome? {
        std::process::exit(1);
    }
    Ok(())
}

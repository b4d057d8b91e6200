use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use subjectline::config::{Config, OutputFormat};
use subjectline::output;
use subjectline::samples::SAMPLE_SUBJECTS;
use subjectline::scoring::batch::score_batch;
use subjectline::scoring::subject::SubjectScorer;
use subjectline::sentiment::lexicon::LexiconPolarity;

/// subjectline: score email subject lines for payday-loan campaigns.
///
/// Reports how relevant each subject is to the product, how many spam
/// triggers it contains, its tone, and what to improve first.
#[derive(Parser)]
#[command(name = "subjectline", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one or more subject lines
    Score {
        /// Subject lines to score (quote each one)
        #[arg(required = true)]
        subjects: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Score the built-in example subject lines
    Samples {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the relevance and spam-trigger keyword lists
    Keywords,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("subjectline=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Score { subjects, json } => {
            let scorer = create_scorer()?;
            run_batch(&scorer, &subjects, &config, json)?;
        }

        Commands::Samples { json } => {
            let scorer = create_scorer()?;
            info!(subjects = SAMPLE_SUBJECTS.len(), "Scoring built-in samples");
            run_batch(&scorer, SAMPLE_SUBJECTS, &config, json)?;
        }

        Commands::Keywords => {
            let scorer = create_scorer()?;
            output::terminal::display_keywords(scorer.relevance_keywords(), scorer.spam_triggers());
        }
    }

    Ok(())
}

/// Build the scorer with the default keyword lists and the lexicon engine.
fn create_scorer() -> Result<SubjectScorer> {
    let engine = LexiconPolarity::new()?;
    info!(
        vocabulary = engine.vocabulary_size(),
        "Using lexicon polarity engine"
    );
    SubjectScorer::with_default_lists(Box::new(engine))
}

fn run_batch<S: AsRef<str>>(
    scorer: &SubjectScorer,
    subjects: &[S],
    config: &Config,
    force_json: bool,
) -> Result<()> {
    let reports = score_batch(scorer, subjects)?;

    let format = if force_json {
        OutputFormat::Json
    } else {
        config.output_format
    };

    match format {
        OutputFormat::Table => output::terminal::display_reports(&reports, config.subject_width),
        OutputFormat::Json => println!("{}", output::json::render(&reports)?),
    }

    Ok(())
}

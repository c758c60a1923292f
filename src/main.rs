use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use reading_quiz::{Quiz, QuizCatalog, QuizError, bundled_catalog, load_catalog_from_json};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directives.
const LOG_FILTER_ENV: &str = "QUIZ_LOG";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the quiz catalog from (defaults to the bundled sample)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Open this quiz directly instead of the home screen
    #[arg(short, long)]
    quiz: Option<String>,

    /// Print the available quizzes and exit
    #[arg(short, long)]
    list: bool,

    /// Write logs to this file (filter with QUIZ_LOG, e.g. "debug")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), QuizError> {
    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    let catalog = match &args.catalog {
        Some(path) => load_catalog_from_json(path)?,
        None => bundled_catalog()?,
    };

    if args.list {
        print_catalog(&catalog);
        return Ok(());
    }

    let mut quiz = Quiz::new(catalog);
    if let Some(id) = &args.quiz {
        quiz = quiz.start_on(id)?;
    }
    quiz.run()
}

fn print_catalog(catalog: &QuizCatalog) {
    for (id, quiz) in catalog.iter() {
        println!("{:<16} {} ({} questions)", id, quiz.title, quiz.len());
    }
}

/// The terminal UI owns stdout, so logs only ever go to a file.
fn init_tracing(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();
    Ok(())
}

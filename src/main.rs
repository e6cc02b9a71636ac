use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use pocket_quiz::{Quiz, QuizError, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from (defaults to the bundled bank)
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Seconds the timer preview counts down from
    #[arg(short, long, default_value_t = 60)]
    timer: u32,

    /// File that receives log output
    #[arg(long, default_value = "pocket-quiz.log")]
    log_file: PathBuf,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

async fn run(args: Args) -> Result<(), QuizError> {
    logging::init(&args.log_file, args.log_level)?;

    let quiz = match &args.questions {
        Some(path) => Quiz::from_json(path)?,
        None => Quiz::bundled()?,
    };

    quiz.with_preview_seconds(args.timer).run().await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        log::error!("{}", e);
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

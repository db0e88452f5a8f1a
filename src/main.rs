use std::io;
use std::process;

use science_quiz::{QuizError, QuizRunner, ScoreStore, Session, QUESTION_BANK};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("science_quiz=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let runner = QuizRunner::new(&QUESTION_BANK, rand::thread_rng());
    let mut session = Session::new(runner, ScoreStore::default());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    match session.run(&mut input, &mut output) {
        Ok(()) => {}
        Err(QuizError::InputClosed) => {
            info!("input closed, exiting");
            println!();
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

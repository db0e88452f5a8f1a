//! Session loop: one quiz attempt after another until the player stops.
use std::io::{BufRead, Write};

use rand::Rng;
use tracing::{error, info};

use crate::error::QuizError;
use crate::quiz_runner::{prompt_line, QuizResult, QuizRunner};
use crate::scores::ScoreStore;

pub struct Session<'a, R: Rng> {
    runner: QuizRunner<'a, R>,
    store: ScoreStore,
}

impl<'a, R: Rng> Session<'a, R> {
    pub fn new(runner: QuizRunner<'a, R>, store: ScoreStore) -> Self {
        Self { runner, store }
    }

    /// Plays attempts until the player declines another one.
    pub fn run<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<(), QuizError>
    where
        I: BufRead + ?Sized,
        O: Write + ?Sized,
    {
        let mut attempts = 0u32;
        loop {
            self.play_once(input, output)?;
            attempts += 1;

            if !ask_play_again(input, output)? {
                writeln!(output)?;
                writeln!(output, "Thanks for playing! Goodbye!")?;
                info!(attempts, "session finished");
                return Ok(());
            }
        }
    }

    /// One full attempt: quiz, grade, optional high score, leaderboard.
    pub fn play_once<I, O>(
        &mut self,
        input: &mut I,
        output: &mut O,
    ) -> Result<QuizResult, QuizError>
    where
        I: BufRead + ?Sized,
        O: Write + ?Sized,
    {
        writeln!(output, "Welcome to the Science Quiz")?;
        writeln!(output, "Answer each question by entering A, B, C, or D")?;
        info!("starting quiz attempt");

        let result = self.runner.run_quiz(input, output)?;
        print_results(&result, output)?;

        writeln!(output)?;
        let name = prompt_line(input, output, "Enter your name for the high score board: ")?;
        let name = name.trim();
        // An empty name means the player opted out of the leaderboard
        if !name.is_empty() {
            if let Err(e) = self.store.add_entry(name, result.score, result.total) {
                error!(error = %e, "failed to record high score");
                writeln!(output, "Could not save your score: {e}")?;
            }
        }

        writeln!(output)?;
        writeln!(output, "{}", self.store.display())?;

        Ok(result)
    }
}

pub fn print_results<O>(result: &QuizResult, output: &mut O) -> Result<(), QuizError>
where
    O: Write + ?Sized,
{
    writeln!(output)?;
    writeln!(output, "=== RESULTS ===")?;
    writeln!(
        output,
        "You scored {} out of {} ({:.1}%)",
        result.score,
        result.total,
        result.percentage()
    )?;
    writeln!(output, "{}", result.grade().message())?;
    Ok(())
}

/// Asks for Y or N until one is given. Returns true for Y.
pub fn ask_play_again<I, O>(input: &mut I, output: &mut O) -> Result<bool, QuizError>
where
    I: BufRead + ?Sized,
    O: Write + ?Sized,
{
    loop {
        writeln!(output)?;
        let choice = prompt_line(input, output, "Would you like to try again? (Y/N): ")?;
        match choice.trim().to_uppercase().as_str() {
            "Y" => return Ok(true),
            "N" => return Ok(false),
            _ => writeln!(output, "Please enter Y or N.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::{randomize_round, QUESTION_BANK};
    use crate::scores::HIGH_SCORES_FILE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    fn session_in(dir: &tempfile::TempDir, seed: u64) -> Session<'static, StdRng> {
        Session::new(
            QuizRunner::new(&QUESTION_BANK, StdRng::seed_from_u64(seed)),
            ScoreStore::new(dir.path().join(HIGH_SCORES_FILE)),
        )
    }

    fn correct_answers(seed: u64) -> String {
        randomize_round(&QUESTION_BANK, &mut StdRng::seed_from_u64(seed))
            .iter()
            .map(|q| format!("{}\n", q.answer))
            .collect()
    }

    #[test]
    fn test_print_results() {
        let mut output = Vec::new();
        print_results(&QuizResult { score: 4, total: 5 }, &mut output).unwrap();
        let out = String::from_utf8(output).unwrap();

        assert!(out.contains("You scored 4 out of 5 (80.0%)"));
        assert!(out.contains("Excellent!"));
    }

    #[test]
    fn test_play_again_reprompts() {
        let mut input = Cursor::new("maybe\n\ny\n");
        let mut output = Vec::new();
        assert!(ask_play_again(&mut input, &mut output).unwrap());

        let out = String::from_utf8(output).unwrap();
        assert_eq!(out.matches("Please enter Y or N.").count(), 2);

        let mut input = Cursor::new("n\n");
        assert!(!ask_play_again(&mut input, &mut Vec::<u8>::new()).unwrap());
    }

    #[test]
    fn test_named_attempt_is_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir, 3);
        let script = format!("{}  Alice  \n", correct_answers(3));

        let result = session
            .play_once(&mut Cursor::new(script), &mut Vec::<u8>::new())
            .unwrap();
        assert_eq!(result.score, 5);

        let scores = session.store.load();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].name, "Alice");
        assert_eq!(scores[0].percentage, 100.0);
    }

    #[test]
    fn test_empty_name_is_not_recorded() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir, 8);
        session.store.add_entry("Bob", 3, 5).unwrap();
        let before = session.store.display();

        let script = format!("{}   \n", correct_answers(8));
        let mut output = Vec::new();
        session.play_once(&mut Cursor::new(script), &mut output).unwrap();

        assert_eq!(session.store.display(), before);
        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("1. Bob: 3/5 (60.0%)"));
    }

    #[test]
    fn test_save_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = Session::new(
            QuizRunner::new(&QUESTION_BANK, StdRng::seed_from_u64(1)),
            ScoreStore::new(dir.path().join("missing").join(HIGH_SCORES_FILE)),
        );
        let script = format!("{}Alice\n", correct_answers(1));
        let mut output = Vec::new();
        session.play_once(&mut Cursor::new(script), &mut output).unwrap();

        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Could not save your score"));
        assert!(out.contains("No high scores yet!"));
    }

    #[test]
    fn test_replay_reshuffles_and_ends() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_in(&dir, 5);

        // two attempts, answering A every time
        let script = "A\nA\nA\nA\nA\n\nY\nA\nA\nA\nA\nA\nZed\nN\n";
        let mut output = Vec::new();
        session.run(&mut Cursor::new(script), &mut output).unwrap();

        let out = String::from_utf8(output).unwrap();
        assert_eq!(out.matches("=== RESULTS ===").count(), 2);
        assert!(out.ends_with("Thanks for playing! Goodbye!\n"));
        assert_eq!(session.store.load().len(), 1);
    }
}

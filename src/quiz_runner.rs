//! Console quiz flow: asking questions, validating answers and grading.
use std::io::{BufRead, Write};

use rand::Rng;
use tracing::debug;

use crate::error::QuizError;
use crate::questions::{randomize_round, Question, RandomizedQuestion};
use crate::scores::percentage;

/// Percentage needed for an "Excellent!" grade
pub const EXCELLENT_THRESHOLD: f64 = 80.0;

/// Percentage needed for a "Good job!" grade
pub const GOOD_THRESHOLD: f64 = 50.0;

/// Outcome of one pass through the question bank
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
}

impl QuizResult {
    pub fn percentage(&self) -> f64 {
        percentage(self.score, self.total)
    }

    pub fn grade(&self) -> Grade {
        Grade::from_percentage(self.percentage())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    Excellent,
    Good,
    KeepPracticing,
}

impl Grade {
    pub fn from_percentage(pct: f64) -> Self {
        if pct >= EXCELLENT_THRESHOLD {
            Grade::Excellent
        } else if pct >= GOOD_THRESHOLD {
            Grade::Good
        } else {
            Grade::KeepPracticing
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Grade::Excellent => "Excellent!",
            Grade::Good => "Good job!",
            Grade::KeepPracticing => "Keep practicing!",
        }
    }
}

/// Prints `prompt` and reads one line, without the trailing newline.
///
/// End of input is reported as `QuizError::InputClosed` so callers never
/// spin on a closed stdin.
pub fn prompt_line<I, O>(input: &mut I, output: &mut O, prompt: &str) -> Result<String, QuizError>
where
    I: BufRead + ?Sized,
    O: Write + ?Sized,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(QuizError::InputClosed);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// "A, B, C, or D"
fn label_list(labels: &[char]) -> String {
    match labels {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} or {second}"),
        [rest @ .., last] => {
            let head: Vec<String> = rest.iter().map(|c| c.to_string()).collect();
            format!("{}, or {}", head.join(", "), last)
        }
    }
}

/// Keeps prompting until the player enters one of the question's labels.
fn read_answer<I, O>(
    question: &RandomizedQuestion,
    input: &mut I,
    output: &mut O,
) -> Result<char, QuizError>
where
    I: BufRead + ?Sized,
    O: Write + ?Sized,
{
    let labels: Vec<char> = question.options.iter().map(|(l, _)| *l).collect();
    let prompt = match (labels.first(), labels.last()) {
        (Some(first), Some(last)) => format!("Your answer ({first}-{last}): "),
        _ => "Your answer: ".to_string(),
    };

    loop {
        let raw = prompt_line(input, output, &prompt)?.trim().to_uppercase();
        let mut chars = raw.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if question.has_label(c) {
                return Ok(c);
            }
        }
        writeln!(output, "Invalid input. Please enter {}.", label_list(&labels))?;
    }
}

/// Shows one question, reads a valid answer and reports whether it was right.
pub fn ask_question<I, O>(
    question: &RandomizedQuestion,
    input: &mut I,
    output: &mut O,
) -> Result<bool, QuizError>
where
    I: BufRead + ?Sized,
    O: Write + ?Sized,
{
    writeln!(output)?;
    writeln!(output, "{}", question.text)?;
    for (label, text) in &question.options {
        writeln!(output, "{label}: {text}")?;
    }

    let answer = read_answer(question, input, output)?;
    let correct = answer == question.answer;
    if correct {
        writeln!(output, "Correct!")?;
    } else {
        writeln!(output, "Wrong! The correct answer is {}.", question.answer)?;
    }
    debug!(question = question.text, %answer, correct, "answered");

    Ok(correct)
}

/// Drives a full pass over an injected question bank.
pub struct QuizRunner<'a, R: Rng> {
    bank: &'a [Question],
    rng: R,
}

impl<'a, R: Rng> QuizRunner<'a, R> {
    pub fn new(bank: &'a [Question], rng: R) -> Self {
        Self { bank, rng }
    }

    /// Asks every question once, in fresh random order with fresh option
    /// letters, and counts the correct answers.
    pub fn run_quiz<I, O>(&mut self, input: &mut I, output: &mut O) -> Result<QuizResult, QuizError>
    where
        I: BufRead + ?Sized,
        O: Write + ?Sized,
    {
        let round = randomize_round(self.bank, &mut self.rng);

        let mut score = 0u32;
        for question in &round {
            if ask_question(question, input, output)? {
                score += 1;
            }
        }

        Ok(QuizResult {
            score,
            total: self.bank.len() as u32,
        })
    }
}

//! Science question bank and per-session randomization.
//!
//! The bank is static data handed to the quiz runner. Every attempt reorders
//! the questions and reshuffles which letter each option sits behind, keeping
//! track of where the correct option ends up.
use rand::seq::SliceRandom;
use rand::Rng;

/// Letters assigned to options, in display order
pub const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

/// A single multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub options: &'static [(char, &'static str)],
    pub answer: char,
}

impl Question {
    /// Text of the option labelled `answer`, if that label exists
    pub fn correct_text(&self) -> Option<&'static str> {
        self.options
            .iter()
            .find(|(label, _)| *label == self.answer)
            .map(|(_, text)| *text)
    }
}

/// A question whose options were relabelled for one presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomizedQuestion {
    pub text: &'static str,
    pub options: Vec<(char, &'static str)>,
    pub answer: char,
}

impl RandomizedQuestion {
    /// Whether `label` is one of the options shown for this question
    pub fn has_label(&self, label: char) -> bool {
        self.options.iter().any(|(l, _)| *l == label)
    }

    pub fn option_text(&self, label: char) -> Option<&'static str> {
        self.options
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, text)| *text)
    }
}

/// The built-in question bank
pub const QUESTION_BANK: [Question; 5] = [
    Question {
        text: "What gas do plants absorb from the atmosphere for photosynthesis?",
        options: &[
            ('A', "Oxygen"),
            ('B', "Nitrogen"),
            ('C', "Carbon dioxide"),
            ('D', "Hydrogen"),
        ],
        answer: 'C',
    },
    Question {
        text: "What part of the cell contains genetic material?",
        options: &[
            ('A', "Cytoplasm"),
            ('B', "Nucleus"),
            ('C', "Mitochondria"),
            ('D', "Ribosome"),
        ],
        answer: 'B',
    },
    Question {
        text: "Who developed the theory of general relativity?",
        options: &[
            ('A', "Isaac Newton"),
            ('B', "Stephen Hawking"),
            ('C', "Albert Einstein"),
            ('D', "Galileo Galilei"),
        ],
        answer: 'C',
    },
    Question {
        text: "What is the main function of red blood cells in the human body?",
        options: &[
            ('A', "To fight infection"),
            ('B', "To produce hormones"),
            ('C', "To carry oxygen"),
            ('D', "To digest food"),
        ],
        answer: 'C',
    },
    Question {
        text: "Which planet is known as the 'Red Planet'?",
        options: &[
            ('A', "Venus"),
            ('B', "Mars"),
            ('C', "Jupiter"),
            ('D', "Saturn"),
        ],
        answer: 'B',
    },
];

/// Returns every question exactly once, in uniformly random order.
pub fn shuffle_question_order<'a, R: Rng + ?Sized>(
    questions: &'a [Question],
    rng: &mut R,
) -> Vec<&'a Question> {
    let mut order: Vec<&Question> = questions.iter().collect();
    order.shuffle(rng);
    order
}

/// Shuffles a question's options and relabels them positionally.
///
/// The option at position `i` after the shuffle receives `OPTION_LABELS[i]`.
/// Options beyond the last defined label are dropped. If the correct option
/// was dropped the original answer label is kept.
pub fn shuffle_options<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> RandomizedQuestion {
    let mut shuffled: Vec<(char, &'static str)> = question.options.to_vec();
    shuffled.shuffle(rng);

    let mut answer = question.answer;
    let options = OPTION_LABELS
        .iter()
        .zip(shuffled)
        .map(|(&label, (old_label, text))| {
            if old_label == question.answer {
                answer = label;
            }
            (label, text)
        })
        .collect();

    RandomizedQuestion {
        text: question.text,
        options,
        answer,
    }
}

/// Builds the full set of questions for one attempt: new order, new labels.
pub fn randomize_round<R: Rng + ?Sized>(
    questions: &[Question],
    rng: &mut R,
) -> Vec<RandomizedQuestion> {
    shuffle_question_order(questions, rng)
        .into_iter()
        .map(|q| shuffle_options(q, rng))
        .collect()
}

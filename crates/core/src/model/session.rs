use std::fmt;

use thiserror::Error;

use crate::model::question::Question;
use crate::model::score::FinalScore;

pub const CORRECT_FEEDBACK: &str = "✅ Correct answer!";
pub const WRONG_FEEDBACK: &str = "❌ Wrong answer.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RoundError {
    #[error("session already completed")]
    Completed,

    #[error("choice {chosen} is out of range for {count} choices")]
    InvalidChoice { chosen: usize, count: usize },
}

//
// ─── ROUND FEEDBACK ────────────────────────────────────────────────────────────
//

/// Outcome of the most recently answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundFeedback {
    pub chosen: usize,
    pub correct_index: usize,
    pub correct: bool,
    pub message: &'static str,
    /// Numbered label of the right choice, only set after a wrong answer.
    pub correct_answer: Option<String>,
    pub explanation: Option<String>,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One pass through a shuffled selection of questions.
///
/// A session is never rewound. Restarting or switching course builds a new
/// `QuizSession` from a fresh selection.
#[derive(Clone, PartialEq, Eq)]
pub struct QuizSession {
    selection: Vec<Question>,
    position: usize,
    score: usize,
    completed: bool,
    last_round: Option<RoundFeedback>,
}

impl QuizSession {
    /// Start a session over an already filtered and shuffled selection.
    #[must_use]
    pub fn new(selection: Vec<Question>) -> Self {
        let completed = selection.is_empty();
        Self {
            selection,
            position: 0,
            score: 0,
            completed,
            last_round: None,
        }
    }

    #[must_use]
    pub fn selection(&self) -> &[Question] {
        &self.selection
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.selection.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn last_round(&self) -> Option<&RoundFeedback> {
        self.last_round.as_ref()
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.selection.get(self.position)
    }

    /// Fraction of the selection already answered, in `0.0..=1.0`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.selection.is_empty() {
            return 1.0;
        }
        self.position as f64 / self.selection.len() as f64
    }

    #[must_use]
    pub fn final_score(&self) -> FinalScore {
        FinalScore::new(self.score, self.total())
    }

    /// Answer the current question and advance to the next one.
    ///
    /// Each call consumes one question: calling again grades the *next*
    /// question, never the same one twice.
    ///
    /// # Errors
    ///
    /// Returns `RoundError::Completed` when every question has been answered and
    /// `RoundError::InvalidChoice` when `chosen` does not name a choice. The
    /// session is left untouched on error.
    pub fn submit_answer(&mut self, chosen: usize) -> Result<&RoundFeedback, RoundError> {
        let question = self
            .selection
            .get(self.position)
            .ok_or(RoundError::Completed)?;
        if chosen >= question.choices().len() {
            return Err(RoundError::InvalidChoice {
                chosen,
                count: question.choices().len(),
            });
        }

        let correct = question.is_correct(chosen);
        let feedback = RoundFeedback {
            chosen,
            correct_index: question.answer(),
            correct,
            message: if correct {
                CORRECT_FEEDBACK
            } else {
                WRONG_FEEDBACK
            },
            correct_answer: if correct {
                None
            } else {
                question.choice_label(question.answer())
            },
            explanation: None,
        };

        if correct {
            self.score += 1;
        }
        self.position += 1;
        if self.position >= self.selection.len() {
            self.completed = true;
        }

        Ok(self.last_round.insert(feedback))
    }

    /// Attach explanation text to the last answered question.
    pub fn record_explanation(&mut self, explanation: impl Into<String>) {
        if let Some(round) = self.last_round.as_mut() {
            round.explanation = Some(explanation.into());
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("selection_len", &self.selection.len())
            .field("position", &self.position)
            .field("score", &self.score)
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}

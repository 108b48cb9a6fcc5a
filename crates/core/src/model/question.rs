use serde::Serialize;
use thiserror::Error;

use crate::model::course::CourseId;

/// Minimum number of choices a question must offer.
pub const MIN_CHOICES: usize = 2;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question needs at least {MIN_CHOICES} choices, got {count}")]
    TooFewChoices { count: usize },

    #[error("answer index {answer} is out of range for {count} choices")]
    AnswerOutOfRange { answer: usize, count: usize },
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question from the question bank.
///
/// `answer` is a zero-based index into `choices`. The constructor rejects
/// anything that would make the question unanswerable, so a `Question` value
/// always satisfies `answer < choices.len()` and `choices.len() >= 2`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Question {
    text: String,
    choices: Vec<String>,
    answer: usize,
    course: CourseId,
}

impl Question {
    /// # Errors
    ///
    /// Returns `QuestionError::TooFewChoices` or `QuestionError::AnswerOutOfRange`
    /// when the record cannot be answered.
    pub fn new(
        text: impl Into<String>,
        choices: Vec<String>,
        answer: usize,
        course: CourseId,
    ) -> Result<Self, QuestionError> {
        if choices.len() < MIN_CHOICES {
            return Err(QuestionError::TooFewChoices {
                count: choices.len(),
            });
        }
        if answer >= choices.len() {
            return Err(QuestionError::AnswerOutOfRange {
                answer,
                count: choices.len(),
            });
        }

        Ok(Self {
            text: text.into(),
            choices,
            answer,
            course,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn answer(&self) -> usize {
        self.answer
    }

    #[must_use]
    pub fn course(&self) -> &CourseId {
        &self.course
    }

    #[must_use]
    pub fn choice(&self, index: usize) -> Option<&str> {
        self.choices.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn correct_choice(&self) -> &str {
        &self.choices[self.answer]
    }

    #[must_use]
    pub fn is_correct(&self, chosen: usize) -> bool {
        chosen == self.answer
    }

    /// Display label for a choice, numbered from 1: `"2. Payroll"`.
    #[must_use]
    pub fn choice_label(&self, index: usize) -> Option<String> {
        self.choice(index)
            .map(|choice| format!("{}. {choice}", index + 1))
    }
}

use quiz_core::model::{CourseFilter, QuizSession, RoundFeedback};
use services::{QuizLoopService, SessionError};

use super::markdown_vm::markdown_to_html;
use super::results_vm::{ResultsVm, map_results};
use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Choose(usize),
    Submit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizPhase {
    AwaitingAnswer,
    /// Answer graded, explanation call in flight. Input is locked.
    Explaining,
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub header: String,
    pub text: String,
    pub choices: Vec<String>,
    pub progress_percent: u32,
    pub score_caption: String,
}

/// Outcome of the previous round, shown above the next question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub message: &'static str,
    pub correct_answer: Option<String>,
    pub explanation_html: Option<String>,
}

#[must_use]
pub fn map_feedback(round: &RoundFeedback) -> FeedbackVm {
    FeedbackVm {
        correct: round.correct,
        message: round.message,
        correct_answer: round
            .correct_answer
            .as_ref()
            .map(|label| format!("Correct answer: {label}")),
        explanation_html: round
            .explanation
            .as_deref()
            .filter(|text| !text.trim().is_empty())
            .map(markdown_to_html),
    }
}

/// Everything the quiz page renders, detached from the live session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizScreen {
    pub phase: QuizPhase,
    pub feedback: Option<FeedbackVm>,
    pub question: Option<QuestionVm>,
    pub results: Option<ResultsVm>,
    pub selected: Option<usize>,
}

impl QuizScreen {
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == QuizPhase::AwaitingAnswer && self.selected.is_some()
    }

    #[must_use]
    pub fn input_locked(&self) -> bool {
        self.phase != QuizPhase::AwaitingAnswer
    }
}

pub struct QuizVm {
    session: QuizSession,
    phase: QuizPhase,
    selected: Option<usize>,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        let phase = if session.is_complete() {
            QuizPhase::Completed
        } else {
            QuizPhase::AwaitingAnswer
        };
        Self {
            session,
            phase,
            selected: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Pick a choice for the current question. Ignored while locked or when
    /// the index does not exist.
    pub fn choose(&mut self, index: usize) {
        if self.phase != QuizPhase::AwaitingAnswer {
            return;
        }
        let count = self
            .session
            .current_question()
            .map_or(0, |question| question.choices().len());
        if index < count {
            self.selected = Some(index);
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.phase == QuizPhase::AwaitingAnswer && self.selected.is_some()
    }

    /// Lock input before the explanation call starts.
    pub fn begin_submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.phase = QuizPhase::Explaining;
        true
    }

    /// Grade the picked choice and wait for its explanation.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Unknown` when nothing was picked or the session
    /// refuses the answer.
    pub async fn submit(
        &mut self,
        quiz_loop: &QuizLoopService,
    ) -> Result<(), ViewError> {
        let Some(chosen) = self.selected else {
            return Err(ViewError::Unknown);
        };
        self.phase = QuizPhase::Explaining;

        let result = quiz_loop.answer_current(&mut self.session, chosen).await;
        self.selected = None;
        self.phase = if self.session.is_complete() {
            QuizPhase::Completed
        } else {
            QuizPhase::AwaitingAnswer
        };

        result.map(|_| ()).map_err(|_| ViewError::Unknown)
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn question(&self) -> Option<QuestionVm> {
        let question = self.session.current_question()?;
        let total = self.session.total();
        let progress = (self.session.progress() * 100.0).round();
        Some(QuestionVm {
            header: format!(
                "Question {} / {} (course {})",
                self.session.position() + 1,
                total,
                question.course()
            ),
            text: question.text().to_string(),
            choices: (0..question.choices().len())
                .filter_map(|index| question.choice_label(index))
                .collect(),
            progress_percent: progress.clamp(0.0, 100.0) as u32,
            score_caption: format!("Score so far: {} / {}", self.session.score(), total),
        })
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        QuizScreen {
            phase: self.phase,
            feedback: self.session.last_round().map(map_feedback),
            question: self.question(),
            results: self
                .session
                .is_complete()
                .then(|| map_results(self.session.final_score())),
            selected: self.selected,
        }
    }
}

/// # Errors
///
/// Returns `ViewError::EmptySession` when no question matches the course.
/// Returns `ViewError::Unknown` for other failures.
pub fn start_quiz(quiz_loop: &QuizLoopService, filter: &CourseFilter) -> Result<QuizVm, ViewError> {
    match quiz_loop.start_session(filter) {
        Ok(session) => Ok(QuizVm::new(session)),
        Err(SessionError::Empty) => Err(ViewError::EmptySession),
        Err(_) => Err(ViewError::Unknown),
    }
}

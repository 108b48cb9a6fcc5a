mod course;
mod question;
mod score;
mod session;

pub use course::{ALL_COURSES_LABEL, CourseFilter, CourseId};
pub use question::{MIN_CHOICES, Question, QuestionError};
pub use score::{FinalScore, ScoreTier};
pub use session::{CORRECT_FEEDBACK, QuizSession, RoundError, RoundFeedback, WRONG_FEEDBACK};

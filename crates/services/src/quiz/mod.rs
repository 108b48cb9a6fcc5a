mod selection;
mod service;

pub use crate::error::SessionError;
pub use selection::select_questions;
pub use service::{QuizAnswerResult, QuizLoopService};

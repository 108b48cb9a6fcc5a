mod markdown_vm;
mod quiz_vm;
mod results_vm;

pub use markdown_vm::{markdown_to_html, sanitize_html};
pub use quiz_vm::{
    FeedbackVm, QuestionVm, QuizIntent, QuizPhase, QuizScreen, QuizVm,
    map_feedback, start_quiz,
};
pub use results_vm::{RESTART_HINT, ResultsVm, map_results, tier_message};

use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::model::CourseFilter;
use services::QuizLoopService;

pub trait UiApp: Send + Sync {
    fn quiz_loop(&self) -> Arc<QuizLoopService>;

    /// Human-readable origin of the question bank, shown in the sidebar.
    fn question_source(&self) -> String;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loop: Arc<QuizLoopService>,
    question_source: String,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loop: app.quiz_loop(),
            question_source: app.question_source(),
        }
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }

    #[must_use]
    pub fn question_source(&self) -> &str {
        &self.question_source
    }
}

/// Sidebar state shared with the quiz page.
///
/// `course` is only read when a session starts; bumping `restarts` is what
/// replaces the running session. Picking a course does both.
#[derive(Clone, Copy, PartialEq)]
pub struct QuizControls {
    pub course: Signal<CourseFilter>,
    pub restarts: Signal<u64>,
}

impl QuizControls {
    #[must_use]
    pub fn new() -> Self {
        Self {
            course: Signal::new(CourseFilter::All),
            restarts: Signal::new(0),
        }
    }

    pub fn restart(&mut self) {
        *self.restarts.write() += 1;
    }

    pub fn select_course(&mut self, filter: CourseFilter) {
        if *self.course.peek() == filter {
            return;
        }
        self.course.set(filter);
        self.restart();
    }
}

impl Default for QuizControls {
    fn default() -> Self {
        Self::new()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

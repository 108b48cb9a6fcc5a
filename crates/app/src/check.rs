use std::collections::BTreeMap;
use std::fmt::Write as _;

use quiz_core::model::{CourseId, Question};

/// Question count per course, in course order.
#[must_use]
pub fn course_counts(questions: &[Question]) -> BTreeMap<CourseId, usize> {
    let mut counts = BTreeMap::new();
    for question in questions {
        *counts.entry(question.course().clone()).or_insert(0) += 1;
    }
    counts
}

#[must_use]
pub fn render_report(source: &str, questions: &[Question]) -> String {
    let mut report = String::new();
    let _ = writeln!(report, "{source}: {} question(s)", questions.len());
    for (course, count) in course_counts(questions) {
        let _ = writeln!(report, "  course {course}: {count}");
    }
    report
}

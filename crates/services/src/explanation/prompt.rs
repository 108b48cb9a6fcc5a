use std::fmt::Write as _;

use quiz_core::model::Question;

use super::config::PromptStyle;

/// Everything the model needs to explain one answered question.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ExplanationPrompt<'a> {
    pub question_text: &'a str,
    pub choices: &'a [String],
    pub chosen: usize,
    pub correct: usize,
}

impl<'a> ExplanationPrompt<'a> {
    #[must_use]
    pub fn new(question_text: &'a str, choices: &'a [String], chosen: usize, correct: usize) -> Self {
        Self {
            question_text,
            choices,
            chosen,
            correct,
        }
    }

    #[must_use]
    pub fn for_answer(question: &'a Question, chosen: usize) -> Self {
        Self::new(question.text(), question.choices(), chosen, question.answer())
    }

    fn label(&self, index: usize) -> String {
        let choice = self.choices.get(index).map_or("", String::as_str);
        format!("{}. {choice}", index + 1)
    }

    /// Render the prompt text. The output depends only on the inputs.
    #[must_use]
    pub fn render(&self, style: &PromptStyle) -> String {
        let mut prompt = String::new();
        let _ = writeln!(
            prompt,
            "You are a teacher who explains {} simply to a student.",
            style.subject
        );
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "Question:");
        let _ = writeln!(prompt, "{}", self.question_text);
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "Possible choices:");
        for index in 0..self.choices.len() {
            let _ = writeln!(prompt, "{}", self.label(index));
        }
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "Student's answer: {}", self.label(self.chosen));
        let _ = writeln!(prompt, "Correct answer: {}", self.label(self.correct));
        let _ = writeln!(prompt);
        let _ = writeln!(
            prompt,
            "1. Explain in a few sentences why the correct answer is correct."
        );
        let _ = writeln!(
            prompt,
            "2. If the student's answer is wrong, explain why it is misleading."
        );
        let _ = write!(
            prompt,
            "3. Stay concise and pedagogical, and respond in {}.",
            style.language
        );
        prompt
    }
}

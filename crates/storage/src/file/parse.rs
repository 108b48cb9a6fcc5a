use quiz_core::model::{CourseId, Question};
use serde_json::{Map, Value};

use crate::repository::FormatError;

const COMMENT_MARKER: char = '#';
const REQUIRED_FIELDS: [&str; 3] = ["text", "choices", "answer"];

/// Drop blank lines and lines whose first non-space character is `#`.
#[must_use]
pub fn strip_comments(raw: &str) -> String {
    raw.lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with(COMMENT_MARKER)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse the contents of a question file.
///
/// `file` only labels diagnostics.
///
/// # Errors
///
/// Returns `FormatError` when the cleaned text is not a JSON list of objects,
/// when a required field is absent or mistyped, or when a question violates
/// the answer/choices invariants.
pub fn parse_question_bank(file: &str, raw: &str) -> Result<Vec<Question>, FormatError> {
    let clean = strip_comments(raw);
    let value: Value = serde_json::from_str(&clean).map_err(|e| FormatError::Syntax {
        file: file.to_string(),
        message: e.to_string(),
    })?;
    let Value::Array(items) = value else {
        return Err(FormatError::NotAList {
            file: file.to_string(),
        });
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let record = index + 1;
            match item {
                Value::Object(fields) => map_question(file, record, &fields),
                _ => Err(FormatError::NotAnObject {
                    file: file.to_string(),
                    record,
                }),
            }
        })
        .collect()
}

fn map_question(
    file: &str,
    record: usize,
    fields: &Map<String, Value>,
) -> Result<Question, FormatError> {
    if let Some(field) = REQUIRED_FIELDS
        .into_iter()
        .find(|field| !fields.contains_key(*field))
    {
        return Err(FormatError::MissingField {
            file: file.to_string(),
            record,
            field,
        });
    }

    let invalid = |field: &'static str, message: &str| FormatError::InvalidField {
        file: file.to_string(),
        record,
        field,
        message: message.to_string(),
    };

    let text = fields["text"]
        .as_str()
        .ok_or_else(|| invalid("text", "expected a string"))?;

    let choices = fields["choices"]
        .as_array()
        .ok_or_else(|| invalid("choices", "expected a list of strings"))?
        .iter()
        .map(|choice| {
            choice
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| invalid("choices", "expected a list of strings"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let answer = fields["answer"]
        .as_u64()
        .and_then(|answer| usize::try_from(answer).ok())
        .ok_or_else(|| invalid("answer", "expected a non-negative integer index"))?;

    let course = fields.get("course").map(course_id).unwrap_or_default();

    Question::new(text, choices, answer, course).map_err(|e| FormatError::InvalidQuestion {
        file: file.to_string(),
        record,
        reason: e.to_string(),
    })
}

/// `course` accepts any JSON value; what is neither an `i64` nor a string
/// groups by its compact JSON text.
fn course_id(value: &Value) -> CourseId {
    match value {
        Value::Null => CourseId::default(),
        Value::String(name) => CourseId::name(name.as_str()),
        Value::Number(number) => number
            .as_i64()
            .map_or_else(|| CourseId::json(number.to_string()), CourseId::number),
        other => CourseId::json(other.to_string()),
    }
}

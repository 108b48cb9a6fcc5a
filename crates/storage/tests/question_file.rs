use std::io::Write;

use quiz_core::model::CourseId;
use storage::repository::{FormatError, QuestionRepository, StorageError, course_ids};
use storage::{QuestionCache, QuestionFileRepository};

const SAMPLE: &str = r#"
# Questions for the HR management course.
# "answer" is a zero-based index.

[
  {
    "text": "Which document formalises a job offer?",
    "choices": ["Payslip", "Employment contract", "Org chart"],
    "answer": 1,
    "course": 1
  },

  # Course 2
  {
    "text": "What does GPEC plan?",
    "choices": ["Jobs and skills", "Office space"],
    "answer": 0,
    "course": 2
  },
  {
    "text": "Default course?",
    "choices": ["yes", "no"],
    "answer": 0
  }
]
"#;

fn write_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write");
    file
}

#[tokio::test]
async fn file_repository_loads_commented_bank() {
    let file = write_file(SAMPLE);
    let repo = QuestionFileRepository::new(file.path());

    let questions = repo.load_questions().await.expect("load");
    assert_eq!(questions.len(), 3);
    for question in &questions {
        assert!(question.choices().len() >= 2);
        assert!(question.answer() < question.choices().len());
    }
    assert_eq!(
        course_ids(&questions),
        vec![CourseId::number(1), CourseId::number(2)]
    );
}

#[tokio::test]
async fn cache_serves_previous_parse_until_reload() {
    let mut file = write_file(SAMPLE);
    let cache = QuestionCache::new();
    let repo = QuestionFileRepository::new(file.path()).with_cache(cache.clone());
    assert_eq!(repo.load_questions().await.unwrap().len(), 3);

    file.as_file_mut().set_len(0).unwrap();
    let other = QuestionFileRepository::new(file.path()).with_cache(cache);
    assert_eq!(other.load_questions().await.unwrap().len(), 3);

    let err = other.reload().await.unwrap_err();
    assert!(matches!(err, StorageError::Format(FormatError::Syntax { .. })));
}

#[tokio::test]
async fn missing_field_is_a_format_error_naming_the_field() {
    let file = write_file(r#"[{"text": "Q", "answer": 0}]"#);
    let repo = QuestionFileRepository::new(file.path());

    let err = repo.load_questions().await.unwrap_err();
    match err {
        StorageError::Format(FormatError::MissingField { field, record, .. }) => {
            assert_eq!(field, "choices");
            assert_eq!(record, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let repo = QuestionFileRepository::new(dir.path().join("absent.json"));

    let err = repo.load_questions().await.unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[tokio::test]
async fn bundled_sample_bank_is_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../qcm.json");
    let repo = QuestionFileRepository::new(path);
    let questions = repo.load_questions().await.expect("sample bank loads");

    assert_eq!(questions.len(), 5);
    assert_eq!(
        course_ids(&questions),
        vec![CourseId::number(1), CourseId::number(2)]
    );
    assert_eq!(questions[4].course(), &CourseId::number(1));
}

#![forbid(unsafe_code)]

pub mod file;
pub mod repository;

pub use file::{QuestionCache, QuestionFileRepository};
pub use repository::{FormatError, InMemoryRepository, QuestionRepository, StorageError, course_ids};

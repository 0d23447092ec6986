//! Quiz files: loading and upload-rule checks.

mod loader;
mod validate;

pub use loader::{fetch_quiz, load_quiz_from_path, LoadError};
pub use validate::{
    validate_fetched, Limits, ValidationIssue, DEFAULT_MAX_INPUT_LENGTH, DEFAULT_MAX_JSON_SIZE_KB,
    DEFAULT_MAX_NAME_LENGTH,
};

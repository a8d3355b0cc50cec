use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Question;

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

/// Why a question file could not be turned into a question set.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("question {index} has no options")]
    NoOptions { index: usize },

    #[error("question {index} marks option {correct_answer} correct but only has {options} options")]
    AnswerOutOfRange {
        index: usize,
        correct_answer: usize,
        options: usize,
    },
}

/// Load an ordered question set from a JSON array.
///
/// An empty array is returned as-is; callers decide whether an empty set
/// is usable.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let questions: Vec<Question> =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    validate(&questions)?;
    Ok(questions)
}

fn validate(questions: &[Question]) -> Result<(), LoadError> {
    for (index, question) in questions.iter().enumerate() {
        if question.options.is_empty() {
            return Err(LoadError::NoOptions { index });
        }
        if question.correct_answer >= question.options.len() {
            return Err(LoadError::AnswerOutOfRange {
                index,
                correct_answer: question.correct_answer,
                options: question.options.len(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_file() {
        let file = write_temp(
            r#"[
                {"question": "Capital of France?", "options": ["Paris", "Rome"], "correctAnswer": 0},
                {"question": "2 * 3?", "options": ["5", "6", "7"], "correctAnswer": 1}
            ]"#,
        );

        let questions = load_questions_from_json(file.path()).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].options.len(), 3);
        assert_eq!(questions[1].correct_answer, 1);
    }

    #[test]
    fn test_load_empty_array_is_ok() {
        let file = write_temp("[]");
        assert!(load_questions_from_json(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_questions_from_json(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_temp(r#"[{"question": "broken""#);
        let err = load_questions_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_answer_out_of_range() {
        let file = write_temp(r#"[{"question": "?", "options": ["a", "b"], "correctAnswer": 2}]"#);
        let err = load_questions_from_json(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::AnswerOutOfRange {
                index: 0,
                correct_answer: 2,
                options: 2
            }
        ));
    }

    #[test]
    fn test_no_options() {
        let file = write_temp(r#"[{"question": "?", "options": [], "correctAnswer": 0}]"#);
        let err = load_questions_from_json(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::NoOptions { index: 0 }));
    }
}

use serde::{Deserialize, Serialize};

/// A single multiple-choice item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

impl Question {
    pub fn new<S: Into<String>>(question: S, options: Vec<S>, correct_answer: usize) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer,
        }
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.correct_answer
    }
}

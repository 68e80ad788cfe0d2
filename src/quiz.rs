use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Every question carries exactly this many answer options.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A single multiple-choice question as returned by the generation call.
/// Immutable once received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    #[serde(rename = "correctAnswerIndex")]
    pub correct_answer_index: usize,
    pub explanation: String,
}

impl Question {
    pub fn is_correct(&self, answer_index: usize) -> bool {
        answer_index == self.correct_answer_index
    }
}

/// The quiz document: title, category label, and an ordered question list.
/// Created wholesale by the gateway and never mutated, only replaced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub title: String,
    pub category: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Structural validation of a freshly parsed document. The provider is
    /// not trusted: a quiz with no questions, a question without exactly
    /// four options, or an out-of-range correct index is rejected here
    /// rather than surfacing later as an indexing panic.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }

        for (idx, question) in self.questions.iter().enumerate() {
            if question.options.len() != OPTIONS_PER_QUESTION {
                return Err(QuizError::WrongOptionCount {
                    question: idx,
                    found: question.options.len(),
                });
            }
            if question.correct_answer_index >= question.options.len() {
                return Err(QuizError::AnswerOutOfRange {
                    question: idx,
                    index: question.correct_answer_index,
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz contains no questions")]
    NoQuestions,
    #[error("question {question} has {found} options, expected {expected}", expected = OPTIONS_PER_QUESTION)]
    WrongOptionCount { question: usize, found: usize },
    #[error("question {question} marks option {index} correct, which is out of range")]
    AnswerOutOfRange { question: usize, index: usize },
}

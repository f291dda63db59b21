use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Position of a choice within a question's choice list.
///
/// Choices carry no identifiers of their own; their index is the only way
/// they are referenced anywhere in the model.
pub type ChoiceIndex = usize;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionValidationError {
    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question must have at least one choice")]
    NoChoices,

    #[error("correct index {index} out of range for {len} choices")]
    CorrectOutOfRange { index: ChoiceIndex, len: usize },

    #[error("true/false question must have exactly 2 choices, got {0}")]
    BadBooleanChoices(usize),

    #[error("multiple-answer question must have at least one correct choice")]
    EmptyCorrectSet,

    #[error("duplicate correct index {0}")]
    DuplicateCorrectIndex(ChoiceIndex),
}

/// Errors raised while validating a whole quiz dataset.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DatasetError {
    #[error("invalid question at position {position}: {source}")]
    InvalidQuestion {
        position: usize,
        #[source]
        source: QuestionValidationError,
    },
}

//
// ─── ANSWER KEY ────────────────────────────────────────────────────────────────
//

/// Answer format of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionFormat {
    /// Exactly one choice is correct; the user picks one.
    Single,
    /// A single-choice question restricted to two choices.
    Boolean,
    /// A set of choices is correct; the user picks any number.
    Multi,
}

/// Format discriminant together with the format-specific correct answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerKey {
    Single { correct: ChoiceIndex },
    Boolean { correct: ChoiceIndex },
    Multi { correct: BTreeSet<ChoiceIndex> },
}

impl AnswerKey {
    #[must_use]
    pub fn format(&self) -> QuestionFormat {
        match self {
            AnswerKey::Single { .. } => QuestionFormat::Single,
            AnswerKey::Boolean { .. } => QuestionFormat::Boolean,
            AnswerKey::Multi { .. } => QuestionFormat::Multi,
        }
    }

    /// Whether `index` is one of the correct choices.
    ///
    /// Single-index keys are treated as singleton sets.
    #[must_use]
    pub fn contains(&self, index: ChoiceIndex) -> bool {
        match self {
            AnswerKey::Single { correct } | AnswerKey::Boolean { correct } => *correct == index,
            AnswerKey::Multi { correct } => correct.contains(&index),
        }
    }

    /// Number of correct choices for this key.
    #[must_use]
    pub fn correct_count(&self) -> usize {
        match self {
            AnswerKey::Single { .. } | AnswerKey::Boolean { .. } => 1,
            AnswerKey::Multi { correct } => correct.len(),
        }
    }
}

//
// ─── QUESTION DRAFT ────────────────────────────────────────────────────────────
//

/// Answer key as supplied by a dataset, before validation.
///
/// The multi payload is a plain list so that malformed input (duplicates,
/// out-of-range indices) is representable and can be rejected explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", content = "correct", rename_all = "kebab-case")]
pub enum AnswerKeyDraft {
    Single(ChoiceIndex),
    Boolean(ChoiceIndex),
    Multi(Vec<ChoiceIndex>),
}

/// Externally supplied question, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDraft {
    pub prompt: String,
    pub choices: Vec<String>,
    #[serde(flatten)]
    pub key: AnswerKeyDraft,
}

impl QuestionDraft {
    pub fn new(
        prompt: impl Into<String>,
        choices: Vec<String>,
        key: AnswerKeyDraft,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            choices,
            key,
        }
    }

    /// Validate this draft into an immutable [`Question`].
    ///
    /// # Errors
    ///
    /// Returns `QuestionValidationError` if the prompt is blank, the choice
    /// list is empty, the answer key references an out-of-range index, a
    /// true/false question does not have exactly two choices, or a
    /// multiple-answer key is empty or contains duplicates.
    pub fn validate(self) -> Result<Question, QuestionValidationError> {
        if self.prompt.trim().is_empty() {
            return Err(QuestionValidationError::EmptyPrompt);
        }

        let len = self.choices.len();
        if len == 0 {
            return Err(QuestionValidationError::NoChoices);
        }

        let key = match self.key {
            AnswerKeyDraft::Single(correct) => {
                check_in_range(correct, len)?;
                AnswerKey::Single { correct }
            }
            AnswerKeyDraft::Boolean(correct) => {
                if len != 2 {
                    return Err(QuestionValidationError::BadBooleanChoices(len));
                }
                check_in_range(correct, len)?;
                AnswerKey::Boolean { correct }
            }
            AnswerKeyDraft::Multi(indices) => {
                if indices.is_empty() {
                    return Err(QuestionValidationError::EmptyCorrectSet);
                }
                let mut correct = BTreeSet::new();
                for index in indices {
                    check_in_range(index, len)?;
                    if !correct.insert(index) {
                        return Err(QuestionValidationError::DuplicateCorrectIndex(index));
                    }
                }
                AnswerKey::Multi { correct }
            }
        };

        Ok(Question {
            prompt: self.prompt,
            choices: self.choices,
            key,
        })
    }
}

fn check_in_range(index: ChoiceIndex, len: usize) -> Result<(), QuestionValidationError> {
    if index < len {
        Ok(())
    } else {
        Err(QuestionValidationError::CorrectOutOfRange { index, len })
    }
}

/// Validate a whole dataset, keeping question order.
///
/// # Errors
///
/// Returns `DatasetError::InvalidQuestion` naming the position of the first
/// draft that fails validation.
pub fn validate_dataset(drafts: Vec<QuestionDraft>) -> Result<Vec<Question>, DatasetError> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(position, draft)| {
            draft
                .validate()
                .map_err(|source| DatasetError::InvalidQuestion { position, source })
        })
        .collect()
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Immutable quiz question, only constructible through [`QuestionDraft::validate`].
///
/// Invariants guaranteed by construction: every index referenced by the
/// answer key is a valid index into `choices`; multiple-answer keys are
/// non-empty with no duplicates; true/false questions have exactly two
/// choices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
    key: AnswerKey,
}

impl Question {
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    #[must_use]
    pub fn choice_count(&self) -> usize {
        self.choices.len()
    }

    #[must_use]
    pub fn key(&self) -> &AnswerKey {
        &self.key
    }

    #[must_use]
    pub fn format(&self) -> QuestionFormat {
        self.key.format()
    }

    /// Whether `index` points at one of this question's choices.
    #[must_use]
    pub fn is_valid_choice(&self, index: ChoiceIndex) -> bool {
        index < self.choices.len()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn single_question_validates() {
        let question = QuestionDraft::new(
            "In what year was UCF founded?",
            labels(&["1963", "1738", "1954", "1973"]),
            AnswerKeyDraft::Single(0),
        )
        .validate()
        .unwrap();

        assert_eq!(question.format(), QuestionFormat::Single);
        assert_eq!(question.choice_count(), 4);
        assert!(question.key().contains(0));
        assert!(!question.key().contains(1));
    }

    #[test]
    fn blank_prompt_is_rejected() {
        let err = QuestionDraft::new("   ", labels(&["a", "b"]), AnswerKeyDraft::Single(0))
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionValidationError::EmptyPrompt);
    }

    #[test]
    fn empty_choice_list_is_rejected() {
        let err = QuestionDraft::new("Q", Vec::new(), AnswerKeyDraft::Single(0))
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionValidationError::NoChoices);
    }

    #[test]
    fn out_of_range_correct_index_is_rejected() {
        let err = QuestionDraft::new("Q", labels(&["a", "b"]), AnswerKeyDraft::Single(2))
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            QuestionValidationError::CorrectOutOfRange { index: 2, len: 2 }
        );
    }

    #[test]
    fn boolean_question_requires_two_choices() {
        let err = QuestionDraft::new("Q", labels(&["yes", "no", "maybe"]), AnswerKeyDraft::Boolean(0))
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionValidationError::BadBooleanChoices(3));
    }

    #[test]
    fn multi_question_requires_nonempty_key() {
        let err = QuestionDraft::new("Q", labels(&["a", "b"]), AnswerKeyDraft::Multi(Vec::new()))
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionValidationError::EmptyCorrectSet);
    }

    #[test]
    fn multi_question_rejects_duplicates() {
        let err = QuestionDraft::new("Q", labels(&["a", "b", "c"]), AnswerKeyDraft::Multi(vec![0, 2, 0]))
            .validate()
            .unwrap_err();
        assert_eq!(err, QuestionValidationError::DuplicateCorrectIndex(0));
    }

    #[test]
    fn multi_question_rejects_out_of_range_member() {
        let err = QuestionDraft::new("Q", labels(&["a", "b"]), AnswerKeyDraft::Multi(vec![0, 5]))
            .validate()
            .unwrap_err();
        assert_eq!(
            err,
            QuestionValidationError::CorrectOutOfRange { index: 5, len: 2 }
        );
    }

    #[test]
    fn dataset_validation_reports_failing_position() {
        let drafts = vec![
            QuestionDraft::new("Q1", labels(&["a", "b"]), AnswerKeyDraft::Single(0)),
            QuestionDraft::new("Q2", labels(&["a", "b"]), AnswerKeyDraft::Multi(Vec::new())),
        ];

        let err = validate_dataset(drafts).unwrap_err();
        assert_eq!(
            err,
            DatasetError::InvalidQuestion {
                position: 1,
                source: QuestionValidationError::EmptyCorrectSet,
            }
        );
    }

    #[test]
    fn draft_deserializes_from_json() {
        let json = r#"{
            "prompt": "Which of these are UCF Housing communities?",
            "choices": ["Libra", "Mercury", "Neptune", "Orion"],
            "format": "multi",
            "correct": [0, 2]
        }"#;

        let draft: QuestionDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.key, AnswerKeyDraft::Multi(vec![0, 2]));

        let question = draft.validate().unwrap();
        assert_eq!(question.key().correct_count(), 2);
    }
}

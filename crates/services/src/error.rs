//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by the quiz session engine.
///
/// `ChoiceOutOfRange` and `Completed` signal caller-side sequencing bugs;
/// the session state is left unchanged in both cases.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no questions available for session")]
    Empty,

    #[error("choice index {index} out of range for question with {len} choices")]
    ChoiceOutOfRange { index: usize, len: usize },

    #[error("session already completed")]
    Completed,

    #[error("session not yet completed")]
    Incomplete,
}

use chrono::{DateTime, Utc};
use std::fmt;

use quiz_core::model::{Answer, ChoiceIndex, Question, Selection};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz session over a fixed, ordered question list.
///
/// The session steps through the questions one at a time. While a question
/// is current, choice presses mutate its pending selection; advancing
/// freezes the pending selection into the answer list and either moves to
/// the next question or completes the session. No operation leaves the
/// completed state.
pub struct QuizSession {
    questions: Vec<Question>,
    current: usize,
    answers: Vec<Answer>,
    pending: Selection,
    started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a new session over the given questions.
    ///
    /// `started_at` should come from the caller's clock to keep time
    /// deterministic.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if no questions are provided.
    pub fn new(questions: Vec<Question>, started_at: DateTime<Utc>) -> Result<Self, SessionError> {
        let Some(first) = questions.first() else {
            return Err(SessionError::Empty);
        };
        let pending = Selection::for_question(first);

        Ok(Self {
            questions,
            current: 0,
            answers: Vec::new(),
            pending,
            started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Answers frozen so far, one per question the user has advanced past.
    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Total number of questions in this session.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Number of questions that have already been advanced past.
    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Number of questions not yet advanced past.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.questions.len().saturating_sub(self.current)
    }

    /// Position of the current question; equals `total_questions()` once
    /// the session is complete.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current)
    }

    /// The still-mutable selection for the current question.
    #[must_use]
    pub fn pending(&self) -> &Selection {
        &self.pending
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    /// Returns a snapshot of the session progress.
    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total_questions(),
            answered: self.answered_count(),
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// Apply a choice press to the current question's pending selection.
    ///
    /// Single-select questions replace their selection; multiple-answer
    /// questions toggle the index. Past answers are never touched.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished
    /// and `SessionError::ChoiceOutOfRange` if `index` does not point at a
    /// choice of the current question. The session is unchanged on error.
    pub fn select(&mut self, index: ChoiceIndex) -> Result<(), SessionError> {
        let Some(question) = self.questions.get(self.current) else {
            return Err(SessionError::Completed);
        };
        if !question.is_valid_choice(index) {
            return Err(SessionError::ChoiceOutOfRange {
                index,
                len: question.choice_count(),
            });
        }

        self.pending.choose(index);
        Ok(())
    }

    /// Freeze the current pending selection and step the session forward.
    ///
    /// On the last question this records `completed_at` instead of moving
    /// on; the pending-selection concept no longer applies afterwards.
    ///
    /// `at` should come from the caller's clock.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Completed` if the session is already finished;
    /// the session is unchanged in that case.
    pub fn advance(&mut self, at: DateTime<Utc>) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::Completed);
        }

        self.answers.push(self.pending.freeze());
        self.current += 1;

        match self.questions.get(self.current) {
            Some(next) => self.pending = Selection::for_question(next),
            None => self.completed_at = Some(at),
        }
        Ok(())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("current", &self.current)
            .field("answers_len", &self.answers.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

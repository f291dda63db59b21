use chrono::{DateTime, Utc};
use serde::Serialize;

use quiz_core::evaluator;
use quiz_core::model::ChoiceFeedback;

use super::engine::QuizSession;
use crate::error::SessionError;

//
// ─── SUMMARY VIEW-MODEL ────────────────────────────────────────────────────────
//

/// One choice of one question, with its feedback classification.
///
/// Presentation-agnostic on purpose:
/// - no pre-formatted strings
/// - no styling assumptions
///
/// The UI decides how each feedback category is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChoiceLine {
    pub label: String,
    pub feedback: ChoiceFeedback,
}

/// Per-question row of the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionResult {
    pub prompt: String,
    pub choices: Vec<ChoiceLine>,
    pub correct: bool,
}

/// Scored summary of a completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    pub score: usize,
    pub total: usize,
    pub results: Vec<QuestionResult>,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
}

impl SessionSummary {
    /// Build the summary for a finished session.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Incomplete` if the session has not reached its
    /// terminal state yet.
    pub fn from_session(session: &QuizSession) -> Result<Self, SessionError> {
        let Some(completed_at) = session.completed_at() else {
            return Err(SessionError::Incomplete);
        };

        let questions = session.questions();
        let answers = session.answers();

        let results = questions
            .iter()
            .zip(answers)
            .map(|(question, answer)| {
                let choices = question
                    .choices()
                    .iter()
                    .enumerate()
                    .map(|(index, label)| ChoiceLine {
                        label: label.clone(),
                        feedback: evaluator::classify_choice(question, answer, index),
                    })
                    .collect();

                QuestionResult {
                    prompt: question.prompt().to_string(),
                    choices,
                    correct: evaluator::is_correct(question, answer),
                }
            })
            .collect();

        Ok(Self {
            score: evaluator::score(questions, answers),
            total: questions.len(),
            results,
            started_at: session.started_at(),
            completed_at,
        })
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use quiz_core::model::{AnswerKeyDraft, QuestionDraft};
    use quiz_core::time::fixed_now;

    fn session() -> QuizSession {
        let questions = vec![
            QuestionDraft::new(
                "pick one",
                vec!["a".into(), "b".into()],
                AnswerKeyDraft::Single(0),
            )
            .validate()
            .unwrap(),
            QuestionDraft::new(
                "pick some",
                vec!["a".into(), "b".into(), "c".into()],
                AnswerKeyDraft::Multi(vec![0, 2]),
            )
            .validate()
            .unwrap(),
        ];
        QuizSession::new(questions, fixed_now()).unwrap()
    }

    #[test]
    fn summary_requires_completed_session() {
        let session = session();
        let err = SessionSummary::from_session(&session).unwrap_err();
        assert_eq!(err, SessionError::Incomplete);
    }

    #[test]
    fn summary_scores_and_classifies() {
        let mut session = session();
        let later = fixed_now() + chrono::Duration::minutes(2);

        session.select(0).unwrap();
        session.advance(fixed_now()).unwrap();
        session.select(0).unwrap();
        session.select(1).unwrap();
        session.advance(later).unwrap();

        let summary = SessionSummary::from_session(&session).unwrap();

        assert_eq!(summary.score, 1);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.started_at, fixed_now());
        assert_eq!(summary.completed_at, later);

        let first = &summary.results[0];
        assert!(first.correct);
        assert_eq!(first.prompt, "pick one");
        assert_eq!(first.choices[0].feedback, ChoiceFeedback::SelectedCorrect);
        assert_eq!(first.choices[1].feedback, ChoiceFeedback::Neutral);

        let second = &summary.results[1];
        assert!(!second.correct);
        assert_eq!(second.choices.len(), 3);
        assert_eq!(second.choices[2].feedback, ChoiceFeedback::MissedCorrect);
    }

    #[test]
    fn summary_serializes_for_transport() {
        let mut session = session();
        session.advance(fixed_now()).unwrap();
        session.advance(fixed_now()).unwrap();

        let summary = SessionSummary::from_session(&session).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["score"], 0);
        assert_eq!(json["results"][0]["choices"][0]["feedback"], "Neutral");
    }
}

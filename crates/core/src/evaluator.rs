//! Pure correctness and feedback functions over questions and frozen answers.
//!
//! Nothing here mutates state or touches I/O; everything is computed from a
//! `(question, answer)` pair. Scoring over a finished session is a pairwise
//! fold of [`is_correct`].

use crate::model::{Answer, AnswerKey, ChoiceFeedback, ChoiceIndex, Question};

/// Whether `answer` matches the question's answer key exactly.
///
/// Single-select formats require the frozen choice to equal the correct
/// index; the multiple-answer format compares set membership (same size,
/// every correct index present, none extra). An unanswered question is
/// always incorrect, as is a frozen answer of the wrong shape for the
/// question's format.
#[must_use]
pub fn is_correct(question: &Question, answer: &Answer) -> bool {
    match (question.key(), answer) {
        (AnswerKey::Single { correct } | AnswerKey::Boolean { correct }, Answer::Choice(chosen)) => {
            chosen == correct
        }
        (AnswerKey::Multi { correct }, Answer::Choices(chosen)) => chosen == correct,
        _ => false,
    }
}

/// Count of correctly answered questions, paired by position.
///
/// Always in `[0, questions.len()]`. Questions without a recorded answer
/// are not counted.
#[must_use]
pub fn score(questions: &[Question], answers: &[Answer]) -> usize {
    questions
        .iter()
        .zip(answers)
        .filter(|(question, answer)| is_correct(question, answer))
        .count()
}

/// Classify one choice of one question for summary display.
///
/// Purely a function of two set-membership bits: whether the user selected
/// the choice, and whether the answer key contains it.
#[must_use]
pub fn classify_choice(question: &Question, answer: &Answer, index: ChoiceIndex) -> ChoiceFeedback {
    let selected = answer.contains(index);
    let correct = question.key().contains(index);

    match (selected, correct) {
        (true, true) => ChoiceFeedback::SelectedCorrect,
        (true, false) => ChoiceFeedback::SelectedIncorrect,
        (false, true) => ChoiceFeedback::MissedCorrect,
        (false, false) => ChoiceFeedback::Neutral,
    }
}

/// Classify every choice of a question, in choice order.
#[must_use]
pub fn classify_question(question: &Question, answer: &Answer) -> Vec<ChoiceFeedback> {
    (0..question.choice_count())
        .map(|index| classify_choice(question, answer, index))
        .collect()
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

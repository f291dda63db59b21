use std::collections::BTreeSet;

use crate::model::question::{AnswerKey, ChoiceIndex, Question};

//
// ─── PENDING SELECTION ─────────────────────────────────────────────────────────
//

/// Mutable in-progress selection for the question currently on screen.
///
/// Single-select formats hold at most one index and replace it on every
/// choice; the multiple-answer format toggles membership in a set. `touched`
/// records whether the user interacted with a multiple-answer question at
/// all, so that "never touched" and "toggled back down to nothing" freeze
/// into different answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<ChoiceIndex>),
    Multi {
        chosen: BTreeSet<ChoiceIndex>,
        touched: bool,
    },
}

impl Selection {
    /// Build the empty pending selection appropriate for `question`'s format.
    #[must_use]
    pub fn for_question(question: &Question) -> Self {
        match question.key() {
            AnswerKey::Single { .. } | AnswerKey::Boolean { .. } => Selection::Single(None),
            AnswerKey::Multi { .. } => Selection::Multi {
                chosen: BTreeSet::new(),
                touched: false,
            },
        }
    }

    /// Apply a choice press.
    ///
    /// Single-select: the selection becomes exactly `index`, replacing any
    /// prior one (there is no deselect). Multiple-answer: toggle `index` in
    /// or out of the chosen set.
    pub fn choose(&mut self, index: ChoiceIndex) {
        match self {
            Selection::Single(slot) => *slot = Some(index),
            Selection::Multi { chosen, touched } => {
                *touched = true;
                if !chosen.remove(&index) {
                    chosen.insert(index);
                }
            }
        }
    }

    /// Whether `index` is part of the pending selection.
    #[must_use]
    pub fn contains(&self, index: ChoiceIndex) -> bool {
        match self {
            Selection::Single(slot) => *slot == Some(index),
            Selection::Multi { chosen, .. } => chosen.contains(&index),
        }
    }

    /// Copy this pending selection into its immutable frozen form.
    ///
    /// An untouched selection freezes as [`Answer::Unanswered`] for every
    /// format; a touched multiple-answer selection keeps its set even when
    /// the set is empty.
    #[must_use]
    pub fn freeze(&self) -> Answer {
        match self {
            Selection::Single(None) => Answer::Unanswered,
            Selection::Single(Some(index)) => Answer::Choice(*index),
            Selection::Multi { touched: false, .. } => Answer::Unanswered,
            Selection::Multi { chosen, touched: true } => Answer::Choices(chosen.clone()),
        }
    }
}

//
// ─── FROZEN ANSWER ─────────────────────────────────────────────────────────────
//

/// Immutable answer recorded when the user advanced past a question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The question was shown but never interacted with.
    Unanswered,
    /// Frozen single-select choice.
    Choice(ChoiceIndex),
    /// Frozen multiple-answer set. May be empty when the user toggled
    /// choices and ended on none, which is distinct from `Unanswered`.
    Choices(BTreeSet<ChoiceIndex>),
}

impl Answer {
    /// Set-membership view of the answer: a single choice acts as a
    /// singleton set and `Unanswered` as the empty set.
    #[must_use]
    pub fn contains(&self, index: ChoiceIndex) -> bool {
        match self {
            Answer::Unanswered => false,
            Answer::Choice(chosen) => *chosen == index,
            Answer::Choices(chosen) => chosen.contains(&index),
        }
    }

    #[must_use]
    pub fn is_unanswered(&self) -> bool {
        matches!(self, Answer::Unanswered)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

use serde::{Deserialize, Serialize};

/// Per-choice classification for summary rendering.
///
/// Derived on demand from set membership; never stored. Every choice of a
/// question falls into exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceFeedback {
    /// The user picked this choice and it was correct.
    SelectedCorrect,
    /// The user picked this choice and it was wrong.
    SelectedIncorrect,
    /// A correct choice the user did not pick.
    MissedCorrect,
    /// Neither picked nor correct.
    Neutral,
}

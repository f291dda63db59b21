mod engine;
mod progress;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use engine::QuizSession;
pub use progress::SessionProgress;
pub use view::{ChoiceLine, QuestionResult, SessionSummary};

mod answer;
mod feedback;
mod question;

pub use answer::{Answer, Selection};
pub use feedback::ChoiceFeedback;
pub use question::{
    AnswerKey, AnswerKeyDraft, ChoiceIndex, DatasetError, Question, QuestionDraft, QuestionFormat,
    QuestionValidationError, validate_dataset,
};

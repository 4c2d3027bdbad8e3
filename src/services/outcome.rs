use crate::models::FieldId;

/// Result of one click on a submit button.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SubmitOutcome {
    /// The backend accepted the submission.
    Succeeded,
    /// The backend refused it, or no usable reply arrived. Holds the text
    /// shown to the user.
    Failed(String),
    /// Required inputs were blank; nothing was sent.
    Invalid(Vec<FieldId>),
    /// Another submission from the same form was still in flight.
    AlreadySubmitting,
    /// The form was torn down before the reply arrived.
    Abandoned,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        *self == Self::Succeeded
    }

    pub fn error_text(&self) -> Option<&str> {
        match self {
            Self::Failed(text) => Some(text),
            _ => None,
        }
    }
}

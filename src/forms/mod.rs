//! Form state and the payloads built from it at submit time.

mod payload;
mod state;

pub use payload::{RegistrationPayload, INTERN_ROLE};
pub use state::{FieldValue, FormState, FormValues};

use crate::models::{registry, FieldId};
use crate::types::LoginRequest;

/// Required login inputs that are still blank.
pub fn missing_login_fields(request: &LoginRequest) -> Vec<FieldId> {
    let mut values = FormValues::new();
    values.set(FieldId::Email, request.email.as_str());
    values.set(FieldId::Password, request.password.as_str());

    state::missing_in(&values, registry::LOGIN_FIELDS.iter())
}

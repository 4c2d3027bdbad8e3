use serde::{Deserialize, Serialize};

use super::FormState;
use crate::models::FieldId;

/// Role every self-registered applicant is created with.
pub const INTERN_ROLE: &str = "intern";

/// Body of `POST /auth/register`.
///
/// Every key is always present; unset inputs are sent as `""` or `false`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationPayload {
    pub name: String,
    pub email: String,
    pub role: String,
    pub phone: String,
    pub college_name: String,
    pub course: String,
    pub department: String,
    pub university: String,
    pub degree: String,
    pub specialization: String,
    pub cgpa: String,
    pub current_year: String,
    pub is_graduated: bool,
    pub year_of_passing: String,
    pub has_experience: bool,
    pub previous_company: String,
    pub position: String,
    pub years_of_experience: String,
    pub resume: String,
}

impl RegistrationPayload {
    pub fn from_form(form: &FormState) -> Self {
        let values = form.values();
        let text = |id: FieldId| values.text(id);

        Self {
            name: text(FieldId::Name),
            email: text(FieldId::Email),
            role: INTERN_ROLE.to_string(),
            phone: text(FieldId::Phone),
            college_name: text(FieldId::CollegeName),
            course: text(FieldId::Course),
            department: text(FieldId::Department),
            university: text(FieldId::University),
            degree: text(FieldId::Degree),
            specialization: text(FieldId::Specialization),
            cgpa: text(FieldId::Cgpa),
            current_year: text(FieldId::CurrentYear),
            is_graduated: values.flag(FieldId::IsGraduated),
            year_of_passing: text(FieldId::YearOfPassing),
            has_experience: form.experience().is_yes(),
            previous_company: text(FieldId::PreviousCompany),
            position: text(FieldId::Position),
            years_of_experience: text(FieldId::YearsOfExperience),
            resume: text(FieldId::Resume),
        }
    }
}

impl From<&FormState> for RegistrationPayload {
    fn from(form: &FormState) -> Self {
        Self::from_form(form)
    }
}

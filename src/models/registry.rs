//! Static description of every input on the registration form.

use super::{ExperienceToggle, FieldId, FieldKind, FieldSpec, SelectOption};

pub static PERSONAL_FIELDS: [FieldSpec; 3] = [
    FieldSpec::new(FieldId::Name, FieldKind::Text, true),
    FieldSpec::new(FieldId::Email, FieldKind::Email, true),
    FieldSpec::new(FieldId::Phone, FieldKind::Tel, true),
];

pub static CURRENT_YEAR_OPTIONS: [SelectOption; 5] = [
    SelectOption { value: "1st Year", label: "1st Year" },
    SelectOption { value: "2nd Year", label: "2nd Year" },
    SelectOption { value: "3rd Year", label: "3rd Year" },
    SelectOption { value: "4th Year", label: "4th Year" },
    SelectOption { value: "Graduated", label: "Graduated" },
];

pub static COLLEGE_FIELDS: [FieldSpec; 9] = [
    FieldSpec::new(FieldId::CollegeName, FieldKind::Text, true),
    FieldSpec::new(FieldId::Course, FieldKind::Text, true),
    FieldSpec::new(FieldId::Department, FieldKind::Text, true),
    FieldSpec::new(FieldId::University, FieldKind::Text, true),
    FieldSpec::new(FieldId::Degree, FieldKind::Text, true),
    FieldSpec::new(FieldId::Specialization, FieldKind::Text, true),
    FieldSpec::new(FieldId::Cgpa, FieldKind::Number, true),
    FieldSpec::select(FieldId::CurrentYear, true, &CURRENT_YEAR_OPTIONS),
    FieldSpec::new(FieldId::YearOfPassing, FieldKind::Text, true),
];

pub static EXPERIENCE_FIELDS: [FieldSpec; 3] = [
    FieldSpec::new(FieldId::PreviousCompany, FieldKind::Text, false),
    FieldSpec::new(FieldId::Position, FieldKind::Text, false),
    FieldSpec::new(FieldId::YearsOfExperience, FieldKind::Number, false),
];

pub static RESUME_FIELD: FieldSpec = FieldSpec::new(FieldId::Resume, FieldKind::Url, false);

pub static LOGIN_FIELDS: [FieldSpec; 2] = [
    FieldSpec::new(FieldId::Email, FieldKind::Email, true),
    FieldSpec::new(FieldId::Password, FieldKind::Text, true),
];

/// Fields rendered (and therefore enforced) for the given experience answer,
/// in display order.
pub fn registration_fields(experience: ExperienceToggle) -> impl Iterator<Item = &'static FieldSpec> {
    let experience_fields: &'static [FieldSpec] = if experience.is_yes() {
        &EXPERIENCE_FIELDS
    } else {
        &[]
    };

    PERSONAL_FIELDS
        .iter()
        .chain(COLLEGE_FIELDS.iter())
        .chain(std::iter::once(&RESUME_FIELD))
        .chain(experience_fields.iter())
}

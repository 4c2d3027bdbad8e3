use serde::{Deserialize, Serialize};

/// Stable identifier of a form input.
///
/// The key doubles as the canonical name the backend expects in the
/// registration payload, so the display label can change freely.
#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    Name,
    Email,
    Password,
    Phone,
    CollegeName,
    Course,
    Department,
    University,
    Degree,
    Specialization,
    Cgpa,
    CurrentYear,
    IsGraduated,
    YearOfPassing,
    PreviousCompany,
    Position,
    YearsOfExperience,
    Resume,
}

impl FieldId {
    pub const ALL: [FieldId; 18] = [
        Self::Name,
        Self::Email,
        Self::Password,
        Self::Phone,
        Self::CollegeName,
        Self::Course,
        Self::Department,
        Self::University,
        Self::Degree,
        Self::Specialization,
        Self::Cgpa,
        Self::CurrentYear,
        Self::IsGraduated,
        Self::YearOfPassing,
        Self::PreviousCompany,
        Self::Position,
        Self::YearsOfExperience,
        Self::Resume,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::Phone => "phone",
            Self::CollegeName => "collegeName",
            Self::Course => "course",
            Self::Department => "department",
            Self::University => "university",
            Self::Degree => "degree",
            Self::Specialization => "specialization",
            Self::Cgpa => "cgpa",
            Self::CurrentYear => "currentYear",
            Self::IsGraduated => "isGraduated",
            Self::YearOfPassing => "yearOfPassing",
            Self::PreviousCompany => "previousCompany",
            Self::Position => "position",
            Self::YearsOfExperience => "yearsOfExperience",
            Self::Resume => "resume",
        }
    }

    /// Text shown to the user as the input's placeholder.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Password => "Password",
            Self::Phone => "Phone Number",
            Self::CollegeName => "College/University",
            Self::Course => "Course of Study",
            Self::Department => "Department",
            Self::University => "University Name",
            Self::Degree => "Degree Type",
            Self::Specialization => "Specialization",
            Self::Cgpa => "CGPA Score",
            Self::CurrentYear => "Current Year",
            Self::IsGraduated => "Graduated",
            Self::YearOfPassing => "Year of Passing",
            Self::PreviousCompany => "Previous Company",
            Self::Position => "Position Held",
            Self::YearsOfExperience => "Years of Experience",
            Self::Resume => "Resume (URL)",
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl std::str::FromStr for FieldId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.key() == s)
            .ok_or_else(|| format!("unknown field: {}", s))
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Number,
    Url,
    Select,
}

impl FieldKind {
    /// Value of the HTML `type` attribute for inputs of this kind.
    /// Select fields render a `<select>` and have no input type.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Select => "text",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Number => "number",
            Self::Url => "url",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub kind: FieldKind,
    pub required: bool,
    pub options: &'static [SelectOption],
}

impl FieldSpec {
    pub const fn new(id: FieldId, kind: FieldKind, required: bool) -> Self {
        Self {
            id,
            kind,
            required,
            options: &[],
        }
    }

    pub const fn select(
        id: FieldId,
        required: bool,
        options: &'static [SelectOption],
    ) -> Self {
        Self {
            id,
            kind: FieldKind::Select,
            required,
            options,
        }
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    pub fn is_select(&self) -> bool {
        self.kind == FieldKind::Select
    }
}

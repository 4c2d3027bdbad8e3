/// Answer to "Do you have professional experience?".
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum ExperienceToggle {
    Yes,
    #[default]
    No,
}

impl ExperienceToggle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    pub fn is_yes(&self) -> bool {
        *self == Self::Yes
    }
}

impl std::fmt::Display for ExperienceToggle {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for ExperienceToggle {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for ExperienceToggle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(format!("invalid experience answer: {}", s)),
        }
    }
}

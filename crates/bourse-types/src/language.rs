//! UI language selection.

use serde::{Deserialize, Serialize};

use crate::BourseError;

/// Language used for labels and user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English.
    En,
    /// German.
    #[default]
    De,
}

impl Language {
    /// Returns the language code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Returns the name shown in the language switcher.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::En => "English",
            Self::De => "German",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = BourseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "de" | "german" | "deutsch" => Ok(Self::De),
            _ => Err(BourseError::UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_german() {
        assert_eq!(Language::default(), Language::De);
    }

    #[test]
    fn test_parse() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert_eq!("deutsch".parse::<Language>().unwrap(), Language::De);
        assert!(matches!(
            "fr".parse::<Language>(),
            Err(BourseError::UnknownLanguage(_))
        ));
    }
}

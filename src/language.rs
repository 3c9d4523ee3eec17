//! Languages known to the glossary.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    #[error("Unknown language code: '{0}'. Expected one of: pl, en, ru")]
    UnknownLanguage(String),
}

/// Languages supported by the documented application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Polish,
    English,
    Russian,
}

impl Language {
    /// All supported languages, Polish first as the default UI language.
    pub const ALL: [Self; 3] = [Self::Polish, Self::English, Self::Russian];

    /// ISO 639-1 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Polish => "pl",
            Self::English => "en",
            Self::Russian => "ru",
        }
    }

    /// Name shown to users, written in Polish.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Polish => "Polski",
            Self::English => "Angielski",
            Self::Russian => "Rosyjski",
        }
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| LanguageError::UnknownLanguage(code.to_string()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

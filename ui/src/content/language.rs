use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ContentError;

/// Languages the page ships content for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Fr,
}

impl Language {
    /// Every language, in selector order.
    pub const ALL: [Language; 2] = [Language::En, Language::Fr];

    /// Short code used as the selector option value.
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Label shown inside the selector.
    pub fn option_label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Fr => "FR",
        }
    }

    /// Fluent locale folder holding this language's messages.
    pub fn locale(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Fr => "fr-FR",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| ContentError::UnknownLanguage(s.to_string()))
    }
}

//! Languages the site publishes content in.
//!
//! Localized rows in the database are keyed by [`Language::code`], while the
//! browser side addresses languages by their numeric [`Language::id`]
//! (`languageId` query parameter).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

/// A supported content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Traditional Chinese (Taiwan), the site default.
    #[default]
    ZhTw,
    /// English (United States).
    EnUs,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    #[error("Unsupported language code: {0}")]
    UnknownCode(String),

    #[error("Unsupported language id: {0}")]
    UnknownId(i32),
}

impl Language {
    pub const ALL: [Self; 2] = [Self::ZhTw, Self::EnUs];

    /// The code stored in the `language` column of every `*_i18n` table.
    pub fn code(self) -> &'static str {
        match self {
            Self::ZhTw => "zh-TW",
            Self::EnUs => "en-US",
        }
    }

    /// The numeric id used by the browser.
    pub fn id(self) -> i32 {
        match self {
            Self::ZhTw => 0,
            Self::EnUs => 1,
        }
    }

    pub fn from_code(code: &str) -> Result<Self, LanguageError> {
        Self::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| LanguageError::UnknownCode(code.to_owned()))
    }

    pub fn from_id(id: i32) -> Result<Self, LanguageError> {
        Self::ALL
            .into_iter()
            .find(|language| language.id() == id)
            .ok_or(LanguageError::UnknownId(id))
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Self::from_code(&code).map_err(serde::de::Error::custom)
    }
}

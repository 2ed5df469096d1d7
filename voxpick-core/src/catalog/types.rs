use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// A grouping of voices that share a spoken language. The backend uses the
/// language name as its code ("Russian", "English", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voice {
    pub id: String,
    pub name: String,
    /// Language code this voice belongs to, matches `Language::code`.
    pub language: String,
    pub locale: String,
    pub gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Voice {
    /// Speaker part of the id: `ru-RU-SvetlanaNeural` -> `SvetlanaNeural`.
    pub fn short_name(&self) -> &str {
        self.id.split('-').nth(2).unwrap_or(&self.id)
    }
}

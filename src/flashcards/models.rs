//! Data models for the flashcard system

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smallest batch the assisted path will request
pub const MIN_GENERATION_COUNT: u8 = 5;
/// Largest batch the assisted path will request
pub const MAX_GENERATION_COUNT: u8 = 20;
/// Batch size preselected in the generation form
pub const DEFAULT_GENERATION_COUNT: u8 = 10;

/// A flashcard with a word or phrase (front) and its translation (back)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// A language the cards can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Russian,
    English,
}

impl Language {
    /// Short code used on the wire and on the command line
    pub fn code(self) -> &'static str {
        match self {
            Self::Russian => "ru",
            Self::English => "en",
        }
    }

    /// Name in the nominative case, as used in prompts ("русский")
    pub fn name_nominative(self) -> &'static str {
        match self {
            Self::Russian => "русский",
            Self::English => "английский",
        }
    }

    /// Name in the genitive case, as used after "с" in prompts ("русского")
    pub fn name_genitive(self) -> &'static str {
        match self {
            Self::Russian => "русского",
            Self::English => "английского",
        }
    }

    /// Human-readable English label for the UI
    pub fn label(self) -> &'static str {
        match self {
            Self::Russian => "Russian",
            Self::English => "English",
        }
    }
}

/// Direction of translation between the front and back of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LanguagePair {
    /// Russian on the front, English on the back
    #[default]
    #[serde(rename = "ru-en")]
    RuEn,
    /// English on the front, Russian on the back
    #[serde(rename = "en-ru")]
    EnRu,
}

impl LanguagePair {
    pub fn source(self) -> Language {
        match self {
            Self::RuEn => Language::Russian,
            Self::EnRu => Language::English,
        }
    }

    pub fn target(self) -> Language {
        match self {
            Self::RuEn => Language::English,
            Self::EnRu => Language::Russian,
        }
    }

    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            Self::RuEn => Self::EnRu,
            Self::EnRu => Self::RuEn,
        }
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.source().code(), self.target().code())
    }
}

impl FromStr for LanguagePair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ru-en" => Ok(Self::RuEn),
            "en-ru" => Ok(Self::EnRu),
            other => Err(format!(
                "unknown language pair '{}', expected 'ru-en' or 'en-ru'",
                other
            )),
        }
    }
}

/// A validated request for an AI-generated batch of cards.
///
/// Only built by the creation controller, so `topic` is non-empty and
/// `count` is within [`MIN_GENERATION_COUNT`, `MAX_GENERATION_COUNT`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    pub count: u8,
    pub language_pair: LanguagePair,
}

/// Form state for the manual creation path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualDraft {
    pub front: String,
    pub back: String,
    pub language_pair: LanguagePair,
}

impl ManualDraft {
    pub fn clear(&mut self) {
        self.front.clear();
        self.back.clear();
    }
}

/// Form state for the assisted creation path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationForm {
    pub topic: String,
    pub count: u8,
    pub language_pair: LanguagePair,
}

impl Default for GenerationForm {
    fn default() -> Self {
        Self {
            topic: String::new(),
            count: DEFAULT_GENERATION_COUNT,
            language_pair: LanguagePair::default(),
        }
    }
}

impl GenerationForm {
    pub fn increment_count(&mut self) {
        self.count = (self.count + 1).min(MAX_GENERATION_COUNT);
    }

    pub fn decrement_count(&mut self) {
        self.count = self.count.saturating_sub(1).max(MIN_GENERATION_COUNT);
    }
}

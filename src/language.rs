//! Supported Languages
//!
//! The language pairs offered by the analyzer, with ISO 639-1 codes for the
//! translation backends and RTL detection for display alignment.

use serde::{Deserialize, Serialize};

/// Languages selectable as source/target of an analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Language {
    Persian,
    #[default]
    English,
    Arabic,
    Spanish,
    French,
}

impl Language {
    /// All selectable languages, in display order
    pub const ALL: [Language; 5] = [
        Language::Persian,
        Language::English,
        Language::Arabic,
        Language::Spanish,
        Language::French,
    ];

    /// ISO 639-1 code used by translation backends
    pub fn code(&self) -> &'static str {
        match self {
            Language::Persian => "fa",
            Language::English => "en",
            Language::Arabic => "ar",
            Language::Spanish => "es",
            Language::French => "fr",
        }
    }

    /// Whether this language is written right-to-left
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Persian | Language::Arabic)
    }

    /// Parse a display name or ISO code (case-insensitive)
    pub fn parse(s: &str) -> Option<Language> {
        match s.to_lowercase().as_str() {
            "persian" | "fa" | "farsi" => Some(Language::Persian),
            "english" | "en" => Some(Language::English),
            "arabic" | "ar" => Some(Language::Arabic),
            "spanish" | "es" => Some(Language::Spanish),
            "french" | "fr" => Some(Language::French),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Language::Persian => "Persian",
            Language::English => "English",
            Language::Arabic => "Arabic",
            Language::Spanish => "Spanish",
            Language::French => "French",
        };
        write!(f, "{}", name)
    }
}

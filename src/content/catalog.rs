//! # Bilingual Content Catalog
//!
//! The [`PortfolioContent`] struct holds everything the UI renders: the
//! profile, the experience timeline, both carousel card sets, and the
//! per-language UI strings. It is deserialized once at startup from
//! `portfolio.json`, which is embedded in the binary.
//!
//! ## Language switching
//!
//! All localized text lives in [`LocalePair`] values, so switching language
//! is a pure lookup change — no content is mutated and no identity key is
//! touched. See [`crate::content::model`] for the key rules.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::content::model::{Collaboration, LocalePair, Presentation, Profile, TimelineText};

/// The embedded portfolio data file.
const PORTFOLIO_JSON: &str = include_str!("portfolio.json");

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    It,
}

impl Lang {
    /// Flip between the two supported languages.
    pub fn toggle(self) -> Self {
        match self {
            Lang::En => Lang::It,
            Lang::It => Lang::En,
        }
    }

    /// Two-letter language code, as stored in the preferences file.
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::It => "it",
        }
    }

    /// Parse a two-letter code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Some(Lang::En),
            "it" => Some(Lang::It),
            _ => None,
        }
    }

    /// Flag indicator shown in the header.
    pub fn flag(self) -> &'static str {
        match self {
            Lang::En => "🇬🇧",
            Lang::It => "🇮🇹",
        }
    }
}

/// Section titles, one per navigable section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionTitles {
    pub home: String,
    pub about: String,
    pub timeline: String,
    pub collaborations: String,
    pub presentations: String,
    pub contact: String,
}

/// All UI strings for one language.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UiStrings {
    pub section_titles: SectionTitles,
    pub presentations_subtitle: String,
    pub collaborations_subtitle: String,
    pub show_more: String,
    pub show_less: String,
    pub about: Vec<String>,
    pub contact: String,
    pub open_hint: String,
    pub close_hint: String,
    pub rights: String,
}

/// The complete portfolio content: profile, cards, and string tables.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub strings: LocalePair<UiStrings>,
    pub timeline: Vec<LocalePair<TimelineText>>,
    pub collaborations: Vec<Collaboration>,
    pub presentations: Vec<Presentation>,
}

impl PortfolioContent {
    /// Parse the embedded portfolio data.
    pub fn load_embedded() -> Result<Self> {
        serde_json::from_str(PORTFOLIO_JSON).context("Failed to parse embedded portfolio content")
    }

    /// UI strings for the given language.
    pub fn strings(&self, lang: Lang) -> &UiStrings {
        self.strings.get(lang)
    }

    /// Identity keys of the collaboration cards, in display order.
    pub fn collaboration_keys(&self) -> Vec<String> {
        self.collaborations
            .iter()
            .map(|c| c.key().to_string())
            .collect()
    }

    /// Identity keys of the presentation cards, in display order.
    pub fn presentation_keys(&self) -> Vec<String> {
        self.presentations
            .iter()
            .map(|p| p.key().to_string())
            .collect()
    }

    /// Find a presentation by its identity key.
    pub fn presentation_by_key(&self, key: &str) -> Option<&Presentation> {
        self.presentations.iter().find(|p| p.key() == key)
    }

    /// Find a collaboration's ordinal position by its identity key.
    pub fn collaboration_index(&self, key: &str) -> Option<usize> {
        self.collaborations.iter().position(|c| c.key() == key)
    }
}

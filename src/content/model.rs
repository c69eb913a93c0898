//! Typed portfolio card models.
//!
//! Each card couples the language-independent fields (URLs, numeric stats)
//! with a [`LocalePair`] of translated text. The identity key of a card is
//! always taken from the language-independent side, falling back to the
//! English text captured at load time, so the key never changes when the
//! display language does.

use serde::Deserialize;

use crate::content::catalog::Lang;

/// A pair of localized values, one per supported language.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalePair<T> {
    pub en: T,
    pub it: T,
}

impl<T> LocalePair<T> {
    /// Return the value for the given language.
    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::En => &self.en,
            Lang::It => &self.it,
        }
    }
}

/// The portfolio owner: hero section content and contact channels.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub tagline: LocalePair<String>,
    pub stats: Vec<Stat>,
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

/// A single headline statistic (value is language-independent).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub value: u32,
    pub label: LocalePair<String>,
}

/// A collaboration card shown in the collaborations carousel.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Collaboration {
    /// Institution homepage; doubles as the card's stable identity key.
    pub url: Option<String>,
    pub text: LocalePair<CollabText>,
}

/// Localized text of a collaboration card.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollabText {
    pub name: String,
    pub location: String,
    pub role: String,
    pub tags: Vec<String>,
}

impl Collaboration {
    /// Stable identity key: the URL when present, otherwise the English name.
    pub fn key(&self) -> &str {
        self.url.as_deref().unwrap_or(&self.text.en.name)
    }
}

/// A presentation card shown in the presentations carousel.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Presentation {
    /// External link to the talk material.
    pub link: Option<String>,
    /// Embeddable slide URL shown in the detail overlay.
    pub embed: Option<String>,
    pub text: LocalePair<PresentationText>,
}

/// Localized text of a presentation card.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresentationText {
    pub title: String,
    pub venue: String,
}

impl Presentation {
    /// Stable identity key: link, then embed URL, then the English title.
    pub fn key(&self) -> &str {
        self.link
            .as_deref()
            .or(self.embed.as_deref())
            .unwrap_or(&self.text.en.title)
    }
}

/// Localized text of one professional-experience timeline entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimelineText {
    pub date: String,
    pub title: String,
    pub location: String,
    pub description: String,
    pub tags: Vec<String>,
}

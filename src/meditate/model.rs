use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const INTRO: &str = "intro";
pub const CLOSING: &str = "closing";
pub const BREATHING: &str = "breathing";
/// Corpus key holding a template's display title. Never a section.
pub const NAME: &str = "name";

/// Languages the corpus can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Nl,
    Es,
    Fr,
    De,
    It,
    Pt,
    Ru,
    Zh,
    Ja,
    Ko,
    Ar,
    Hi,
}

impl Language {
    pub const DEFAULT: Language = Language::En;

    pub const ALL: [Language; 13] = [
        Language::En,
        Language::Nl,
        Language::Es,
        Language::Fr,
        Language::De,
        Language::It,
        Language::Pt,
        Language::Ru,
        Language::Zh,
        Language::Ja,
        Language::Ko,
        Language::Ar,
        Language::Hi,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Nl => "nl",
            Language::Es => "es",
            Language::Fr => "fr",
            Language::De => "de",
            Language::It => "it",
            Language::Pt => "pt",
            Language::Ru => "ru",
            Language::Zh => "zh",
            Language::Ja => "ja",
            Language::Ko => "ko",
            Language::Ar => "ar",
            Language::Hi => "hi",
        }
    }

    pub const fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Nl => "Nederlands",
            Language::Es => "Español",
            Language::Fr => "Français",
            Language::De => "Deutsch",
            Language::It => "Italiano",
            Language::Pt => "Português",
            Language::Ru => "Русский",
            Language::Zh => "中文",
            Language::Ja => "日本語",
            Language::Ko => "한국어",
            Language::Ar => "العربية",
            Language::Hi => "हिन्दी",
        }
    }

    /// Exact lookup of a canonical code. `"pt-BR"` and `"FR"` are not codes.
    pub fn from_code(code: &str) -> Option<Self> {
        Language::ALL.into_iter().find(|lang| lang.as_str() == code)
    }

    /// Parses a language code, ignoring case and any region suffix (`pt-BR`, `en_GB`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let code = normalized.split(['-', '_']).next().unwrap_or("");
        Language::ALL.into_iter().find(|lang| lang.as_str() == code)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The theme of a meditation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sleep,
    Stress,
    Focus,
    Anxiety,
    Energy,
    Mindfulness,
    Compassion,
    Walking,
    Breathing,
    Morning,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Sleep,
        Category::Stress,
        Category::Focus,
        Category::Anxiety,
        Category::Energy,
        Category::Mindfulness,
        Category::Compassion,
        Category::Walking,
        Category::Breathing,
        Category::Morning,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Sleep => "sleep",
            Category::Stress => "stress",
            Category::Focus => "focus",
            Category::Anxiety => "anxiety",
            Category::Energy => "energy",
            Category::Mindfulness => "mindfulness",
            Category::Compassion => "compassion",
            Category::Walking => "walking",
            Category::Breathing => "breathing",
            Category::Morning => "morning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{}'", s))
    }
}

/// One named block of narration. Runs of periods inside the text are spoken pauses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub key: String,
    pub text: String,
}

impl Section {
    pub fn new(key: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

/// A named meditation script: sections in authoring order, `intro` and `closing` included.
///
/// Section keys are open-ended and vary by category (`bodyRelaxation`, `grounding`, ...),
/// so they are kept as an ordered list rather than fixed fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: String,
    pub sections: Vec<Section>,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Appends a section, returning the template for chaining.
    pub fn with_section(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.sections.push(Section::new(key, text));
        self
    }

    pub fn section(&self, key: &str) -> Option<&str> {
        self.sections
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.text.as_str())
    }

    pub fn intro(&self) -> Option<&str> {
        self.section(INTRO)
    }

    pub fn closing(&self) -> Option<&str> {
        self.section(CLOSING)
    }

    /// Every section between the bookends, in authoring order.
    pub fn body(&self) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| s.key != INTRO && s.key != CLOSING)
            .collect()
    }

    pub fn section_keys(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.key.as_str()).collect()
    }
}

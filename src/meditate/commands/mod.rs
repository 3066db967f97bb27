use crate::assembly::DurationBand;
use crate::config::MeditateConfig;
use crate::model::{Category, Language, Section};
use serde::Serialize;

pub mod check;
pub mod config;
pub mod coverage;
pub mod generate;
pub mod list;
pub mod show;

pub use check::{CorpusIssue, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A generated session and how it was put together.
#[derive(Debug, Clone, Serialize)]
pub struct Meditation {
    pub text: String,
    pub template_name: String,
    /// Position of the template within its category, and the size of that category.
    pub template_index: usize,
    pub template_count: usize,
    pub category: Category,
    pub language: Language,
    /// The language as the caller asked for it, before any fallback.
    pub requested_language: String,
    pub fell_back: bool,
    pub minutes: f64,
    pub band: DurationBand,
}

/// One template as it appears in a listing.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateSummary {
    pub language: Language,
    pub category: Category,
    pub index: usize,
    pub name: String,
    pub section_keys: Vec<String>,
}

/// The full contents of one template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateDetail {
    pub summary: TemplateSummary,
    pub sections: Vec<Section>,
}

/// Which categories a language offers, and how many templates each has.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageCoverage {
    pub language: Language,
    pub categories: Vec<(Category, usize)>,
}

impl LanguageCoverage {
    pub fn template_count(&self) -> usize {
        self.categories.iter().map(|(_, n)| n).sum()
    }

    pub fn count_for(&self, category: Category) -> usize {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub meditation: Option<Meditation>,
    pub templates: Vec<TemplateSummary>,
    pub detail: Option<TemplateDetail>,
    pub coverage: Vec<LanguageCoverage>,
    pub issues: Vec<CorpusIssue>,
    pub config: Option<MeditateConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_meditation(mut self, meditation: Meditation) -> Self {
        self.meditation = Some(meditation);
        self
    }

    pub fn with_templates(mut self, templates: Vec<TemplateSummary>) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_detail(mut self, detail: TemplateDetail) -> Self {
        self.detail = Some(detail);
        self
    }

    pub fn with_coverage(mut self, coverage: Vec<LanguageCoverage>) -> Self {
        self.coverage = coverage;
        self
    }

    pub fn with_issues(mut self, issues: Vec<CorpusIssue>) -> Self {
        self.issues = issues;
        self
    }

    pub fn with_config(mut self, config: MeditateConfig) -> Self {
        self.config = Some(config);
        self
    }
}

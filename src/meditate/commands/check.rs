//! # Corpus Validation
//!
//! The corpus is fixed at build time, so its consistency is checked once over the whole
//! store instead of at every generation. The embedded store refuses to load with any
//! [`Severity::Error`] issue; warnings are reported by the `check` command only.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Category, Language, Template, BREATHING, CLOSING, INTRO};
use crate::store::TemplateStore;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorpusIssue {
    pub severity: Severity,
    pub language: Language,
    pub category: Category,
    /// Position of the offending template, `None` for category-level issues.
    pub index: Option<usize>,
    pub message: String,
}

impl fmt::Display for CorpusIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(
                f,
                "{}.{}[{}]: {}",
                self.language, self.category, i, self.message
            ),
            None => write!(f, "{}.{}: {}", self.language, self.category, self.message),
        }
    }
}

pub fn run<S: TemplateStore + ?Sized>(store: &S) -> Result<CmdResult> {
    let issues = validate(store);
    let errors = issues
        .iter()
        .filter(|i| i.severity == Severity::Error)
        .count();
    let warnings = issues.len() - errors;
    let templates: usize = store.entries().iter().map(|e| e.templates.len()).sum();

    let mut result = CmdResult::default();
    if issues.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "Checked {} templates, no issues found.",
            templates
        )));
    } else if errors == 0 {
        result.add_message(CmdMessage::warning(format!(
            "Checked {} templates: {} warning(s).",
            templates, warnings
        )));
    } else {
        result.add_message(CmdMessage::error(format!(
            "Checked {} templates: {} error(s), {} warning(s).",
            templates, errors, warnings
        )));
    }
    Ok(result.with_issues(issues))
}

/// Runs every check over the store, in store order.
pub fn validate<S: TemplateStore + ?Sized>(store: &S) -> Vec<CorpusIssue> {
    let mut issues = Vec::new();
    for entry in store.entries() {
        if entry.templates.is_empty() {
            issues.push(CorpusIssue {
                severity: Severity::Error,
                language: entry.language,
                category: entry.category,
                index: None,
                message: "category has no templates".to_string(),
            });
        }

        for (index, template) in entry.templates.iter().enumerate() {
            for (severity, message) in template_issues(template) {
                issues.push(CorpusIssue {
                    severity,
                    language: entry.language,
                    category: entry.category,
                    index: Some(index),
                    message,
                });
            }
        }
    }
    issues
}

fn template_issues(template: &Template) -> Vec<(Severity, String)> {
    let mut found = Vec::new();
    let label = if template.name.trim().is_empty() {
        found.push((Severity::Error, "template has no name".to_string()));
        "(unnamed)"
    } else {
        template.name.as_str()
    };

    for key in [INTRO, CLOSING] {
        if template.section(key).is_none() {
            found.push((
                Severity::Error,
                format!("'{}' is missing its '{}' section", label, key),
            ));
        }
    }

    for section in &template.sections {
        if section.text.trim().is_empty() {
            found.push((
                Severity::Error,
                format!("'{}' has an empty '{}' section", label, section.key),
            ));
        }
    }

    let body = template.body();
    if body.get(1).is_some_and(|s| s.key == BREATHING) {
        found.push((
            Severity::Warning,
            format!(
                "'{}' lists '{}' second, short sessions will read it twice",
                label, BREATHING
            ),
        ));
    }

    found
}

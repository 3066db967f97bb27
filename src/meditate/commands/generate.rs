use crate::assembly::{assemble_band, DurationBand};
use crate::commands::{CmdMessage, CmdResult, Meditation};
use crate::error::{MeditateError, Result};
use crate::model::{Category, Language};
use crate::picker::TemplatePicker;
use crate::store::TemplateStore;
use tracing::{debug, info};

/// Picks a template for `category` in `language` and assembles it to `minutes`.
///
/// An unsupported language is not an error: generation continues in the default
/// language and the result carries a warning. A category the resolved language does
/// not offer is an error naming both.
pub fn run<S, P>(
    store: &S,
    picker: &mut P,
    category: &str,
    minutes: f64,
    language: &str,
) -> Result<CmdResult>
where
    S: TemplateStore + ?Sized,
    P: TemplatePicker + ?Sized,
{
    let band = DurationBand::for_minutes(minutes)?;
    let mut result = CmdResult::default();

    let (resolved, fell_back) = resolve_language(store, language);
    if fell_back {
        info!(
            requested = language,
            fallback = %resolved,
            "unsupported language, falling back"
        );
        result.add_message(CmdMessage::warning(format!(
            "Language '{}' is not supported, falling back to '{}'",
            language, resolved
        )));
    }

    let unknown = || MeditateError::UnknownCategory {
        category: category.to_string(),
        language: resolved.to_string(),
    };
    let parsed: Category = category.parse().map_err(|_| unknown())?;
    let templates = store.templates(resolved, parsed).ok_or_else(unknown)?;
    if templates.is_empty() {
        return Err(MeditateError::EmptyCategory {
            category: parsed.to_string(),
            language: resolved.to_string(),
        });
    }

    let index = picker.pick(templates.len());
    let template = templates.get(index).ok_or_else(|| MeditateError::TemplateNotFound {
        category: parsed.to_string(),
        language: resolved.to_string(),
        index,
    })?;
    debug!(
        template = %template.name,
        index,
        count = templates.len(),
        band = %band,
        "selected template"
    );

    let text = assemble_band(template, band)?;
    Ok(result.with_meditation(Meditation {
        text,
        template_name: template.name.clone(),
        template_index: index,
        template_count: templates.len(),
        category: parsed,
        language: resolved,
        requested_language: language.to_string(),
        fell_back,
        minutes,
        band,
    }))
}

/// Resolves a requested language code against what the store actually holds.
///
/// Only canonical codes match. Anything else, region tags and capitals included, is
/// absent from the store and falls back.
pub fn resolve_language<S: TemplateStore + ?Sized>(store: &S, requested: &str) -> (Language, bool) {
    match Language::from_code(requested) {
        Some(language) if store.has_language(language) => (language, false),
        _ => (Language::DEFAULT, true),
    }
}

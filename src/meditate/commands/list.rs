use crate::commands::{CmdMessage, CmdResult, TemplateSummary};
use crate::error::{MeditateError, Result};
use crate::model::{Category, Language, Template};
use crate::store::TemplateStore;

/// Lists the templates of a language, optionally narrowed to one category.
pub fn run<S: TemplateStore + ?Sized>(
    store: &S,
    language: Language,
    category: Option<&str>,
) -> Result<CmdResult> {
    let categories = match category {
        Some(raw) => vec![raw.parse::<Category>().map_err(|_| {
            MeditateError::UnknownCategory {
                category: raw.to_string(),
                language: language.to_string(),
            }
        })?],
        None => store.categories(language),
    };

    let listed: Vec<TemplateSummary> = categories
        .into_iter()
        .flat_map(move |category| {
            store
                .templates(language, category)
                .unwrap_or_default()
                .iter()
                .enumerate()
                .map(move |(index, template)| summarize(language, category, index, template))
        })
        .collect();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(match category {
            Some(c) => format!("No '{}' templates in '{}'.", c, language),
            None => format!("No templates in '{}'.", language),
        }));
    }
    Ok(result.with_templates(listed))
}

pub(crate) fn summarize(
    language: Language,
    category: Category,
    index: usize,
    template: &Template,
) -> TemplateSummary {
    TemplateSummary {
        language,
        category,
        index,
        name: template.name.clone(),
        section_keys: template
            .section_keys()
            .into_iter()
            .map(String::from)
            .collect(),
    }
}

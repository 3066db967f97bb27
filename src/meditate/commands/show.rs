use super::list::summarize;
use crate::commands::{CmdResult, TemplateDetail};
use crate::error::{MeditateError, Result};
use crate::model::{Category, Language};
use crate::store::TemplateStore;

/// Returns every section of one template, addressed by its position in the category.
pub fn run<S: TemplateStore + ?Sized>(
    store: &S,
    language: Language,
    category: &str,
    index: usize,
) -> Result<CmdResult> {
    let unknown = || MeditateError::UnknownCategory {
        category: category.to_string(),
        language: language.to_string(),
    };
    let parsed: Category = category.parse().map_err(|_| unknown())?;
    let templates = store.templates(language, parsed).ok_or_else(unknown)?;

    let template = templates
        .get(index)
        .ok_or_else(|| MeditateError::TemplateNotFound {
            category: parsed.to_string(),
            language: language.to_string(),
            index,
        })?;

    Ok(CmdResult::default().with_detail(TemplateDetail {
        summary: summarize(language, parsed, index, template),
        sections: template.sections.clone(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Template;
    use crate::store::memory::InMemoryStore;

    fn store() -> InMemoryStore {
        InMemoryStore::new().with_template(
            Language::Ko,
            Category::Mindfulness,
            Template::new("지금 이 순간")
                .with_section("intro", "안녕하세요")
                .with_section("awareness", "알아차림")
                .with_section("closing", "감사합니다"),
        )
    }

    #[test]
    fn returns_sections_in_order() {
        let result = run(&store(), Language::Ko, "mindfulness", 0).unwrap();
        let detail = result.detail.unwrap();
        assert_eq!(detail.summary.name, "지금 이 순간");
        let keys: Vec<&str> = detail.sections.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["intro", "awareness", "closing"]);
    }

    #[test]
    fn out_of_range_index_is_not_found() {
        let err = run(&store(), Language::Ko, "mindfulness", 1).unwrap_err();
        assert!(matches!(err, MeditateError::TemplateNotFound { index: 1, .. }));
    }

    #[test]
    fn missing_category_is_unknown() {
        let err = run(&store(), Language::Ko, "focus", 0).unwrap_err();
        assert!(matches!(err, MeditateError::UnknownCategory { .. }));
    }
}

use crate::commands::{CmdResult, LanguageCoverage};
use crate::error::Result;
use crate::model::Language;
use crate::store::TemplateStore;

pub fn run<S: TemplateStore + ?Sized>(store: &S) -> Result<CmdResult> {
    let coverage = Language::ALL
        .into_iter()
        .filter(|language| store.has_language(*language))
        .map(|language| LanguageCoverage {
            language,
            categories: store
                .categories(language)
                .into_iter()
                .map(|category| {
                    let count = store.templates(language, category).map_or(0, <[_]>::len);
                    (category, count)
                })
                .collect(),
        })
        .collect();

    Ok(CmdResult::default().with_coverage(coverage))
}

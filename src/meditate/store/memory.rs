use super::{categories_of, entries_of, lookup, CorpusMap, StoreEntry, TemplateStore};
use crate::model::{Category, Language, Template};

/// A corpus assembled in code. Nothing is validated on insert.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    corpus: CorpusMap,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a template at the end of its category's list.
    pub fn add_template(&mut self, language: Language, category: Category, template: Template) {
        self.corpus
            .entry(language)
            .or_default()
            .entry(category)
            .or_default()
            .push(template);
    }

    /// Registers a category with no templates (or leaves an existing one untouched).
    pub fn add_category(&mut self, language: Language, category: Category) {
        self.corpus
            .entry(language)
            .or_default()
            .entry(category)
            .or_default();
    }

    pub fn with_template(
        mut self,
        language: Language,
        category: Category,
        template: Template,
    ) -> Self {
        self.add_template(language, category, template);
        self
    }
}

impl TemplateStore for InMemoryStore {
    fn templates(&self, language: Language, category: Category) -> Option<&[Template]> {
        lookup(&self.corpus, language, category)
    }

    fn has_language(&self, language: Language) -> bool {
        self.corpus.contains_key(&language)
    }

    fn categories(&self, language: Language) -> Vec<Category> {
        categories_of(&self.corpus, language)
    }

    fn entries(&self) -> Vec<StoreEntry<'_>> {
        entries_of(&self.corpus)
    }
}

//! # Template Store
//!
//! The corpus is a read-only mapping `language → category → [Template]`. The
//! [`TemplateStore`] trait lets the rest of the library work against any corpus.
//!
//! ## Implementations
//!
//! - [`embedded::EmbeddedStore`]: the shipped corpus
//!   - One JSON document per language, compiled into the binary
//!   - Parsed and validated once, when the store is built
//!
//! - [`memory::InMemoryStore`]: a programmatic corpus for tests and embedders
//!   - No validation, so degenerate data can be exercised
//!
//! ## Coverage
//!
//! Coverage is uneven on purpose: not every language has every category, and the
//! number of templates per category differs. A lookup that misses is not a store
//! error; callers decide what a miss means.

use crate::model::{Category, Language, Template};
use std::collections::BTreeMap;

pub mod embedded;
pub mod memory;

pub(crate) type CorpusMap = BTreeMap<Language, BTreeMap<Category, Vec<Template>>>;

/// One `(language, category)` slot of a store, for whole-corpus passes.
#[derive(Debug, Clone, Copy)]
pub struct StoreEntry<'a> {
    pub language: Language,
    pub category: Category,
    pub templates: &'a [Template],
}

/// Read-only access to a meditation corpus.
pub trait TemplateStore {
    /// Templates registered for a language and category, in registration order.
    fn templates(&self, language: Language, category: Category) -> Option<&[Template]>;

    /// Whether the language has any entry at all.
    fn has_language(&self, language: Language) -> bool;

    /// Categories present for a language, in [`Category`] order.
    fn categories(&self, language: Language) -> Vec<Category>;

    /// Every slot of the store, ordered by language then category.
    fn entries(&self) -> Vec<StoreEntry<'_>>;
}

pub(crate) fn lookup(
    corpus: &CorpusMap,
    language: Language,
    category: Category,
) -> Option<&[Template]> {
    corpus
        .get(&language)
        .and_then(|categories| categories.get(&category))
        .map(Vec::as_slice)
}

pub(crate) fn categories_of(corpus: &CorpusMap, language: Language) -> Vec<Category> {
    corpus
        .get(&language)
        .map(|categories| categories.keys().copied().collect())
        .unwrap_or_default()
}

pub(crate) fn entries_of(corpus: &CorpusMap) -> Vec<StoreEntry<'_>> {
    corpus
        .iter()
        .flat_map(|(language, categories)| {
            categories.iter().map(move |(category, templates)| StoreEntry {
                language: *language,
                category: *category,
                templates: templates.as_slice(),
            })
        })
        .collect()
}

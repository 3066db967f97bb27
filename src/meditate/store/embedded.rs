use super::{categories_of, entries_of, lookup, CorpusMap, StoreEntry, TemplateStore};
use crate::commands::check::{validate, Severity};
use crate::error::{MeditateError, Result};
use crate::model::{Category, Language, Section, Template, NAME};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::debug;

/// The shipped corpus, one JSON document per language.
pub const SOURCES: [(Language, &str); 13] = [
    (Language::En, include_str!("corpus/en.json")),
    (Language::Nl, include_str!("corpus/nl.json")),
    (Language::Es, include_str!("corpus/es.json")),
    (Language::Fr, include_str!("corpus/fr.json")),
    (Language::De, include_str!("corpus/de.json")),
    (Language::It, include_str!("corpus/it.json")),
    (Language::Pt, include_str!("corpus/pt.json")),
    (Language::Ru, include_str!("corpus/ru.json")),
    (Language::Zh, include_str!("corpus/zh.json")),
    (Language::Ja, include_str!("corpus/ja.json")),
    (Language::Ko, include_str!("corpus/ko.json")),
    (Language::Ar, include_str!("corpus/ar.json")),
    (Language::Hi, include_str!("corpus/hi.json")),
];

/// Read-only store over the compiled-in corpus.
///
/// Building the store parses every document and runs the same validation as the
/// `check` command; a corpus with error-level issues never loads.
#[derive(Debug, Clone)]
pub struct EmbeddedStore {
    corpus: CorpusMap,
}

impl EmbeddedStore {
    pub fn load() -> Result<Self> {
        Self::from_sources(&SOURCES)
    }

    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self> {
        let mut corpus = CorpusMap::new();
        for (language, document) in sources {
            corpus.insert(*language, parse_document(*language, document)?);
        }

        let store = Self { corpus };
        let issues = validate(&store);
        if let Some(issue) = issues.iter().find(|i| i.severity == Severity::Error) {
            return Err(MeditateError::Corpus(issue.to_string()));
        }

        debug!(
            languages = store.corpus.len(),
            warnings = issues.len(),
            "loaded embedded corpus"
        );
        Ok(store)
    }
}

impl TemplateStore for EmbeddedStore {
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

fn parse_document(language: Language, document: &str) -> Result<BTreeMap<Category, Vec<Template>>> {
    let root: Map<String, Value> = serde_json::from_str(document)
        .map_err(|e| MeditateError::Corpus(format!("{}: {}", language, e)))?;

    let mut categories = BTreeMap::new();
    for (key, value) in root {
        let category: Category = key
            .parse()
            .map_err(|e| MeditateError::Corpus(format!("{}: {}", language, e)))?;
        let Value::Array(items) = value else {
            return Err(MeditateError::Corpus(format!(
                "{}.{}: expected a list of templates",
                language, category
            )));
        };

        let templates = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| parse_template(item).map_err(|e| located(language, category, i, e)))
            .collect::<Result<Vec<_>>>()?;
        categories.insert(category, templates);
    }
    Ok(categories)
}

fn parse_template(value: Value) -> std::result::Result<Template, String> {
    let Value::Object(fields) = value else {
        return Err("expected an object".to_string());
    };

    let mut name = None;
    let mut sections = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        let Value::String(text) = value else {
            return Err(format!("'{}' is not a string", key));
        };
        if key == NAME {
            name = Some(text);
        } else {
            sections.push(Section::new(key, text));
        }
    }

    let name = name.ok_or_else(|| "missing 'name'".to_string())?;
    Ok(Template { name, sections })
}

fn located(language: Language, category: Category, index: usize, reason: String) -> MeditateError {
    MeditateError::Corpus(format!("{}.{}[{}]: {}", language, category, index, reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BREATHING, CLOSING, INTRO};

    #[test]
    fn shipped_corpus_loads() {
        let store = EmbeddedStore::load().unwrap();
        for language in Language::ALL {
            assert!(store.has_language(language), "{} missing", language);
            assert!(
                store.templates(language, Category::Sleep).is_some(),
                "{} has no sleep templates",
                language
            );
        }
    }

    #[test]
    fn english_covers_every_category() {
        let store = EmbeddedStore::load().unwrap();
        assert_eq!(store.categories(Language::En), Category::ALL.to_vec());
    }

    #[test]
    fn coverage_is_uneven_as_shipped() {
        let store = EmbeddedStore::load().unwrap();
        let count = |l, c| store.templates(l, c).map(<[Template]>::len).unwrap_or(0);

        assert_eq!(count(Language::En, Category::Sleep), 5);
        assert_eq!(count(Language::En, Category::Focus), 1);
        assert_eq!(count(Language::Fr, Category::Focus), 1);
        assert_eq!(count(Language::Ko, Category::Mindfulness), 1);
        assert!(count(Language::De, Category::Anxiety) >= 1);
        assert!(store.templates(Language::Ko, Category::Focus).is_none());
    }

    #[test]
    fn section_order_follows_the_document() {
        let store = EmbeddedStore::load().unwrap();
        let body_scan = store
            .templates(Language::En, Category::Sleep)
            .unwrap()
            .iter()
            .find(|t| t.name == "Body Scan Sleep")
            .unwrap();

        assert_eq!(body_scan.sections.first().unwrap().key, INTRO);
        assert_eq!(body_scan.sections[1].key, BREATHING);
        assert_eq!(body_scan.sections.last().unwrap().key, CLOSING);
        assert!(body_scan
            .intro()
            .unwrap()
            .starts_with("Welcome to this peaceful sleep meditation......"));
    }

    #[test]
    fn french_focus_has_a_single_named_template() {
        let store = EmbeddedStore::load().unwrap();
        let templates = store.templates(Language::Fr, Category::Focus).unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].name, "Concentration avec Ancre Respiratoire");
    }

    #[test]
    fn rejects_unknown_category_keys() {
        let err = EmbeddedStore::from_sources(&[(Language::En, r#"{"napping": []}"#)]).unwrap_err();
        assert!(err.to_string().contains("napping"));
    }

    #[test]
    fn rejects_non_string_sections() {
        let doc = r#"{"sleep": [{"name": "N", "intro": "I", "closing": 3}]}"#;
        let err = EmbeddedStore::from_sources(&[(Language::En, doc)]).unwrap_err();
        assert!(err.to_string().contains("en.sleep[0]"));
        assert!(err.to_string().contains("'closing' is not a string"));
    }

    #[test]
    fn rejects_templates_without_a_name() {
        let doc = r#"{"sleep": [{"intro": "I", "closing": "C"}]}"#;
        let err = EmbeddedStore::from_sources(&[(Language::En, doc)]).unwrap_err();
        assert!(err.to_string().contains("missing 'name'"));
    }

    #[test]
    fn rejects_templates_without_bookends() {
        let doc = r#"{"sleep": [{"name": "Open Ended", "intro": "I", "breathing": "B"}]}"#;
        let err = EmbeddedStore::from_sources(&[(Language::En, doc)]).unwrap_err();
        assert!(err.to_string().contains("closing"));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = EmbeddedStore::from_sources(&[(Language::Nl, "{ not json")]).unwrap_err();
        assert!(matches!(err, MeditateError::Corpus(_)));
        assert!(err.to_string().contains("nl"));
    }
}

//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every operation, whichever client is driving it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (a missing language becomes the default one)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O and no formatting; the generated text is returned, not printed.
//!
//! ## Generic Over Store and Picker
//!
//! `MeditateApi<S: TemplateStore, P: TemplatePicker>`:
//! - Production: `MeditateApi<EmbeddedStore, RandomPicker>`
//! - Testing: `MeditateApi<InMemoryStore, FixedPicker>`
//!
//! Injecting the picker is what makes generation reproducible in tests.

use crate::commands;
use crate::error::Result;
use crate::model::Language;
use crate::picker::TemplatePicker;
use crate::store::TemplateStore;
use std::path::{Path, PathBuf};

pub struct MeditateApi<S: TemplateStore, P: TemplatePicker> {
    store: S,
    picker: P,
    config_dir: PathBuf,
}

impl<S: TemplateStore, P: TemplatePicker> MeditateApi<S, P> {
    pub fn new(store: S, picker: P, config_dir: PathBuf) -> Self {
        Self {
            store,
            picker,
            config_dir,
        }
    }

    /// Generates a session. `language` defaults to English when `None`.
    pub fn generate(
        &mut self,
        category: &str,
        minutes: f64,
        language: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let language = language.unwrap_or(Language::DEFAULT.as_str());
        commands::generate::run(&self.store, &mut self.picker, category, minutes, language)
    }

    pub fn list_templates(
        &self,
        language: Language,
        category: Option<&str>,
    ) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, language, category)
    }

    pub fn show_template(
        &self,
        language: Language,
        category: &str,
        index: usize,
    ) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, language, category, index)
    }

    pub fn coverage(&self) -> Result<commands::CmdResult> {
        commands::coverage::run(&self.store)
    }

    pub fn check(&self) -> Result<commands::CmdResult> {
        commands::check::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// Replaces the picker, e.g. to pin or seed the next selections.
    pub fn set_picker(&mut self, picker: P) {
        self.picker = picker;
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{
    CmdMessage, CmdResult, CorpusIssue, LanguageCoverage, Meditation, MessageLevel, Severity,
    TemplateDetail, TemplateSummary,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Template};
    use crate::picker::FixedPicker;
    use crate::store::memory::InMemoryStore;
    use tempfile::TempDir;

    fn api(dir: &TempDir) -> MeditateApi<InMemoryStore, FixedPicker> {
        let store = InMemoryStore::new()
            .with_template(
                Language::En,
                Category::Focus,
                Template::new("Laser Focus")
                    .with_section("intro", "Sit tall.")
                    .with_section("breathing", "Breathe.")
                    .with_section("closing", "Done."),
            )
            .with_template(
                Language::Fr,
                Category::Focus,
                Template::new("Concentration")
                    .with_section("intro", "Asseyez-vous.")
                    .with_section("closing", "Fini."),
            );
        MeditateApi::new(store, FixedPicker(0), dir.path().to_path_buf())
    }

    #[test]
    fn generate_defaults_to_english() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        let result = api.generate("focus", 4.0, None).unwrap();
        let meditation = result.meditation.unwrap();
        assert_eq!(meditation.language, Language::En);
        assert!(!meditation.fell_back);
        assert_eq!(meditation.text, "Sit tall.\n\nBreathe.\n\nDone.");
    }

    #[test]
    fn generate_passes_the_language_through() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        let result = api.generate("focus", 4.0, Some("fr")).unwrap();
        assert_eq!(result.meditation.unwrap().template_name, "Concentration");
    }

    #[test]
    fn listing_dispatches_to_the_store() {
        let dir = TempDir::new().unwrap();
        let api = api(&dir);
        let result = api.list_templates(Language::Fr, None).unwrap();
        assert_eq!(result.templates.len(), 1);

        let shown = api.show_template(Language::En, "focus", 0).unwrap();
        assert_eq!(shown.detail.unwrap().sections.len(), 3);

        assert_eq!(api.coverage().unwrap().coverage.len(), 2);
        assert!(api.check().unwrap().issues.is_empty());
    }

    #[test]
    fn config_reads_and_writes_in_the_config_dir() {
        let dir = TempDir::new().unwrap();
        let api = api(&dir);
        api.config(ConfigAction::Set("minutes".into(), "10".into()))
            .unwrap();
        assert!(api.config_dir().join("config.json").exists());
        let result = api.config(ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().default_minutes, 10.0);
    }
}

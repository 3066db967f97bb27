use crate::api::MeditateApi;
use crate::config::MeditateConfig;
use crate::error::{MeditateError, Result};
use crate::picker::TemplatePicker;
use crate::store::embedded::EmbeddedStore;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the config directory when set.
pub const HOME_ENV: &str = "MEDITATE_HOME";

pub struct MeditateContext<P: TemplatePicker> {
    pub api: MeditateApi<EmbeddedStore, P>,
    pub config: MeditateConfig,
}

/// `$MEDITATE_HOME` if set and non-empty, otherwise the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("com", "meditate", "meditate")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| MeditateError::Config("Could not determine config dir".to_string()))
}

/// Loads the embedded corpus and the user's config, and wires up the API.
///
/// An unreadable config file falls back to defaults with a warning rather than
/// blocking generation.
pub fn initialize<P: TemplatePicker>(picker: P) -> Result<MeditateContext<P>> {
    let config_dir = config_dir()?;
    let config = MeditateConfig::load(&config_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, dir = %config_dir.display(), "ignoring unreadable config");
        MeditateConfig::default()
    });
    let store = EmbeddedStore::load()?;

    Ok(MeditateContext {
        api: MeditateApi::new(store, picker, config_dir),
        config,
    })
}

use std::{fs, path::Path};

use serde::Deserialize;
use shared::domain::ContentSlice;
use thiserror::Error;
use tracing::warn;
use url::Url;

pub const SETTINGS_FILE: &str = "site.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Base the three content documents are resolved against.
    pub content_base_url: String,
    /// Append a `v=<unix millis>` query so intermediary caches never serve stale documents.
    pub cache_bust: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            content_base_url: "http://127.0.0.1:8080/".into(),
            cache_bust: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    content_base_url: Option<String>,
    cache_bust: Option<bool>,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid content base url '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        source: url::ParseError,
    },
}

pub fn load_settings() -> SiteSettings {
    load_settings_from(Path::new(SETTINGS_FILE))
}

pub fn load_settings_from(path: &Path) -> SiteSettings {
    let mut settings = SiteSettings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.content_base_url {
                    settings.content_base_url = v;
                }
                if let Some(v) = file_cfg.cache_bust {
                    settings.cache_bust = v;
                }
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "config: ignoring malformed settings file");
            }
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings
}

/// The base url is the only value the environment may override.
fn apply_env_overrides(settings: &mut SiteSettings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("CONTENT_BASE_URL") {
        settings.content_base_url = v;
    }
    if let Some(v) = lookup("APP__CONTENT_BASE_URL") {
        settings.content_base_url = v;
    }
}

/// Absolute addresses of the three content documents, resolved once per session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEndpoints {
    hero: Url,
    about: Url,
    portfolio: Url,
}

impl ContentEndpoints {
    pub fn resolve(base_url: &str) -> Result<Self, SettingsError> {
        let invalid = |source| SettingsError::InvalidBaseUrl {
            value: base_url.to_string(),
            source,
        };

        let mut base = Url::parse(base_url.trim()).map_err(invalid)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let content = base.join("content/").map_err(invalid)?;
        let document = |slice: ContentSlice| content.join(slice.document_name()).map_err(invalid);

        Ok(Self {
            hero: document(ContentSlice::Hero)?,
            about: document(ContentSlice::About)?,
            portfolio: document(ContentSlice::Portfolio)?,
        })
    }

    pub fn url(&self, slice: ContentSlice) -> &Url {
        match slice {
            ContentSlice::Hero => &self.hero,
            ContentSlice::About => &self.about,
            ContentSlice::Portfolio => &self.portfolio,
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

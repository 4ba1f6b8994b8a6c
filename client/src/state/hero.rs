//! Hero text panel state.
//!
//! The form mirrors the server config wholesale: loading overwrites every
//! field, saving sends every field.

#[cfg(test)]
#[path = "hero_test.rs"]
mod hero_test;

use crate::net::error::ApiError;
use crate::net::types::{ConfigUpdate, SiteConfig};

pub const HERO_LOADING: &str = "Loading...";
pub const HERO_LOADED: &str = "Loaded";
pub const HERO_LOAD_FAILED: &str = "Could not load config";
pub const HERO_SAVING: &str = "Saving...";
pub const HERO_SAVED: &str = "Saved ✓";
pub const HERO_SAVE_FAILED: &str = "Failed to save";

/// Editable hero text fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeroForm {
    pub kicker: String,
    pub title: String,
    pub subtitle: String,
}

impl HeroForm {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            kicker: config.hero_kicker.clone().unwrap_or_default(),
            title: config.hero_title.clone().unwrap_or_default(),
            subtitle: config.hero_subtitle.clone().unwrap_or_default(),
        }
    }

    pub fn to_update(&self) -> ConfigUpdate {
        ConfigUpdate {
            hero_kicker: Some(self.kicker.clone()),
            hero_title: Some(self.title.clone()),
            hero_subtitle: Some(self.subtitle.clone()),
            active_music_id: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeroState {
    pub form: HeroForm,
    pub status: String,
    pub saving: bool,
}

impl Default for HeroState {
    fn default() -> Self {
        Self { form: HeroForm::default(), status: HERO_LOADING.to_owned(), saving: false }
    }
}

impl HeroState {
    /// Apply a config load. On failure the current form is kept.
    pub fn apply_load(&mut self, result: Result<SiteConfig, ApiError>) {
        match result {
            Ok(config) => {
                self.form = HeroForm::from_config(&config);
                self.status = HERO_LOADED.to_owned();
            }
            Err(e) => {
                leptos::logging::warn!("config load failed: {e}");
                self.status = HERO_LOAD_FAILED.to_owned();
            }
        }
    }

    pub fn begin_save(&mut self) {
        self.saving = true;
        self.status = HERO_SAVING.to_owned();
    }

    /// Apply a save response. The server's returned config replaces the
    /// form when it carries hero text. Returns `true` when the body had none
    /// and the config has to be fetched again.
    pub fn apply_save(&mut self, result: Result<SiteConfig, ApiError>) -> bool {
        self.saving = false;
        match result {
            Ok(config) => {
                self.status = HERO_SAVED.to_owned();
                if config.has_hero_text() {
                    self.form = HeroForm::from_config(&config);
                    false
                } else {
                    true
                }
            }
            Err(e) => {
                leptos::logging::warn!("config save failed: {e}");
                self.status = HERO_SAVE_FAILED.to_owned();
                false
            }
        }
    }

    /// Apply the reload that follows a save. The save status stays; a failed
    /// reload keeps the submitted values.
    pub fn apply_reload(&mut self, result: Result<SiteConfig, ApiError>) {
        match result {
            Ok(config) => self.form = HeroForm::from_config(&config),
            Err(e) => leptos::logging::warn!("config reload after save failed: {e}"),
        }
    }
}

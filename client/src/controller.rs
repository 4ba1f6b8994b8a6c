//! Dashboard controller: session lifecycle, panel loaders and mutations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components call into [`AdminContext`] instead of issuing requests
//! themselves. Every operation catches its own failure and writes a status
//! string into the owning panel, so no error escapes a handler.
//!
//! CONCURRENCY
//! ===========
//! Each loader runs as its own local task; one panel failing never blocks
//! another. Uploads within a submission are sequential. In-flight requests
//! are not cancelled and the last response to land wins the render.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Photo;
use crate::state::hero::{HERO_LOADING, HeroState};
use crate::state::music::{MusicPanelState, TrackRow, music_load, set_active_failed_text};
use crate::state::mutation::{DeleteOutcome, delete_if_confirmed};
use crate::state::panel::{ListEntity, ListLoad, ListPanelState, PhotoPanelState};
use crate::state::session::SessionState;
use crate::util::browser;
use crate::util::page_config::PageConfig;
use crate::util::session_store::BrowserTokenStore;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Shared handles for the whole admin UI. `Copy`, so handlers can capture it
/// freely.
#[derive(Clone, Copy)]
pub struct AdminContext {
    pub session: RwSignal<SessionState>,
    pub page: StoredValue<PageConfig>,
    pub hero: RwSignal<HeroState>,
    pub photos: RwSignal<PhotoPanelState>,
    pub music: RwSignal<MusicPanelState>,
}

/// Run a future on the browser's event loop. Outside the browser there is
/// nothing to talk to, so the work is dropped.
pub(crate) fn spawn(task: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(task);
    #[cfg(not(feature = "hydrate"))]
    drop(task);
}

impl AdminContext {
    pub fn new(page: PageConfig) -> Self {
        Self {
            session: RwSignal::new(SessionState::default()),
            page: StoredValue::new(page),
            hero: RwSignal::new(HeroState::default()),
            photos: RwSignal::new(PhotoPanelState::default()),
            music: RwSignal::new(MusicPanelState::default()),
        }
    }

    /// API base or `None` in demo mode.
    pub fn api_base(&self) -> Option<String> {
        self.page.with_value(|p| p.api_base.clone())
    }

    /// Prefix for request URLs.
    pub fn base_url(&self) -> String {
        self.page.with_value(|p| p.base_url().to_owned())
    }

    pub fn token(&self) -> Option<String> {
        self.session.with_untracked(|s| s.token().map(str::to_owned))
    }

    // =========================================================================
    // SESSION
    // =========================================================================

    /// Pick up a token persisted by an earlier page load and, if one was
    /// found, start the panel loads.
    pub fn restore_session(self) {
        let mut restored = false;
        self.session.update(|s| restored = s.restore(&BrowserTokenStore).is_some());
        if restored {
            leptos::logging::log!("restored admin session");
            self.load_all();
        }
    }

    /// Store the new token, switch to the dashboard and load every panel.
    pub fn finish_login(self, token: String) {
        self.session.update(|s| s.begin(token, &BrowserTokenStore));
        self.load_all();
    }

    /// Drop the token and forget every panel's data.
    pub fn logout(self) {
        self.session.update(|s| s.logout(&BrowserTokenStore));
        self.hero.set(HeroState::default());
        self.photos.set(PhotoPanelState::default());
        self.music.set(MusicPanelState::default());
    }

    // =========================================================================
    // LOADERS
    // =========================================================================

    /// Start all three panel loads concurrently.
    pub fn load_all(self) {
        self.refresh_hero();
        self.refresh_photos();
        self.refresh_music();
    }

    pub fn refresh_hero(self) {
        self.hero.update(|h| h.status = HERO_LOADING.to_owned());
        let base = self.base_url();
        let hero = self.hero;
        spawn(async move {
            let result = api::fetch_config(&base).await;
            hero.update(|h| h.apply_load(result));
        });
    }

    pub fn refresh_photos(self) {
        self.photos.update(|p| p.load = ListLoad::Loading);
        let base = self.base_url();
        let photos = self.photos;
        spawn(async move {
            let load = ListLoad::from_result(api::fetch_photos(&base).await);
            photos.update(|p| p.load = load);
        });
    }

    /// Load tracks and the config together so the active track can be
    /// marked.
    pub fn refresh_music(self) {
        self.music.update(|m| m.load = ListLoad::Loading);
        let base = self.base_url();
        let token = self.token();
        let music = self.music;
        spawn(async move {
            let (tracks, config) =
                futures::join!(api::fetch_tracks(&base, token.as_deref()), api::fetch_config(&base));
            music.update(|m| m.load = music_load(tracks, config));
        });
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Save the hero form and show the server's copy, fetching it again when
    /// the save response carries no hero text.
    pub fn save_hero(self) {
        let update = self.hero.with_untracked(|h| h.form.to_update());
        self.hero.update(HeroState::begin_save);
        let base = self.base_url();
        let token = self.token();
        let hero = self.hero;
        spawn(async move {
            let result = api::save_config(&base, token.as_deref(), &update).await;
            let mut reload = false;
            hero.update(|h| reload = h.apply_save(result));
            if reload {
                let config = api::fetch_config(&base).await;
                hero.update(|h| h.apply_reload(config));
            }
        });
    }

    /// Select a track as background music and re-render the list against
    /// the config the server returned.
    pub fn set_active_track(self, track_id: String) {
        let base = self.base_url();
        let token = self.token();
        let music = self.music;
        spawn(async move {
            match api::set_active_track(&base, token.as_deref(), &track_id).await {
                Ok(config) if config.active_music_id().is_some() => {
                    let tracks = api::fetch_tracks(&base, token.as_deref()).await;
                    music.update(|m| {
                        m.status.clear();
                        m.load = music_load(tracks, Ok(config));
                    });
                }
                Ok(_) => self.refresh_music(),
                Err(e) => music.update(|m| m.status = set_active_failed_text(&e)),
            }
        });
    }

    pub fn delete_photo(self, id: String) {
        let base = self.base_url();
        let token = self.token();
        spawn(async move {
            let outcome = delete_if_confirmed(
                || browser::confirm(Photo::DELETE_PROMPT),
                || api::delete_photo(&base, token.as_deref(), &id),
            )
            .await;
            apply_delete_outcome(self.photos, &outcome);
            if outcome.needs_reload() {
                self.refresh_photos();
            }
        });
    }

    pub fn delete_track(self, id: String) {
        let base = self.base_url();
        let token = self.token();
        spawn(async move {
            let outcome = delete_if_confirmed(
                || browser::confirm(TrackRow::DELETE_PROMPT),
                || api::delete_track(&base, token.as_deref(), &id),
            )
            .await;
            apply_delete_outcome(self.music, &outcome);
            if outcome.needs_reload() {
                self.refresh_music();
            }
        });
    }

    /// Upload `files` one after another, then reload the gallery.
    #[cfg(feature = "hydrate")]
    pub async fn upload_photos(self, files: Vec<web_sys::File>, title: String, caption: String) {
        use crate::state::upload::{PHOTO_NOUN, upload_sequential, uploading_text};

        let base = self.base_url();
        let token = self.token();
        self.photos.update(|p| {
            p.uploading = true;
            p.status = uploading_text(files.len(), PHOTO_NOUN);
        });
        let tally = upload_sequential(files.iter(), |file| {
            api::upload_photo(&base, token.as_deref(), file, &title, &caption)
        })
        .await;
        self.photos.update(|p| {
            p.uploading = false;
            p.status = tally.status_text(PHOTO_NOUN);
        });
        self.refresh_photos();
    }

    /// Upload `files` one after another, then reload the track list.
    #[cfg(feature = "hydrate")]
    pub async fn upload_tracks(self, files: Vec<web_sys::File>, title: String) {
        use crate::state::upload::{TRACK_NOUN, upload_sequential, uploading_text};

        let base = self.base_url();
        let token = self.token();
        self.music.update(|m| {
            m.uploading = true;
            m.status = uploading_text(files.len(), TRACK_NOUN);
        });
        let tally = upload_sequential(files.iter(), |file| api::upload_track(&base, token.as_deref(), file, &title)).await;
        self.music.update(|m| {
            m.uploading = false;
            m.status = tally.status_text(TRACK_NOUN);
        });
        self.refresh_music();
    }
}

fn apply_delete_outcome<T>(panel: RwSignal<ListPanelState<T>>, outcome: &DeleteOutcome)
where
    T: Send + Sync + 'static,
{
    if let Some(text) = outcome.status_text() {
        panel.update(|p| p.status = text);
    }
}

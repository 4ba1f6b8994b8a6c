//! Music panel rows annotated with the site's active track.

#[cfg(test)]
#[path = "music_test.rs"]
mod music_test;

use super::panel::{ListEntity, ListLoad, ListPanelState};
use crate::net::error::ApiError;
use crate::net::types::{SiteConfig, Track};

/// A track plus whether the site config currently references it.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackRow {
    pub track: Track,
    pub active: bool,
}

impl ListEntity for TrackRow {
    const EMPTY_TEXT: &'static str = "No tracks yet.";
    const ERROR_TEXT: &'static str = "Error loading music";
    const DELETE_PROMPT: &'static str = "Delete this track?";

    fn key(&self) -> Option<&str> {
        self.track.id()
    }
}

pub type MusicPanelState = ListPanelState<TrackRow>;

/// Mark the track whose id matches `active_id`. Tracks without an id are
/// never active.
pub fn annotate_active(tracks: Vec<Track>, active_id: Option<&str>) -> Vec<TrackRow> {
    tracks
        .into_iter()
        .map(|track| {
            let active = active_id.is_some() && track.id() == active_id;
            TrackRow { track, active }
        })
        .collect()
}

/// Combine the track list and config loads into one panel outcome. Either
/// failing fails the panel.
pub fn music_load(tracks: Result<Vec<Track>, ApiError>, config: Result<SiteConfig, ApiError>) -> ListLoad<TrackRow> {
    let rows = tracks.and_then(|tracks| {
        let config = config?;
        Ok(annotate_active(tracks, config.active_music_id()))
    });
    ListLoad::from_result(rows)
}

pub fn set_active_failed_text(err: &ApiError) -> String {
    format!("Failed to set active music: {err}")
}

//! Shared wire DTOs for the admin REST API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON. Optional strings stay
//! `Option` so missing or `null` values degrade to empty form fields instead
//! of failing the whole payload.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier as it may appear on the wire: a string or a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Str(String),
    Num(i64),
}

impl From<RawId> for String {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Str(s) => s,
            RawId::Num(n) => n.to_string(),
        }
    }
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(String::from)
}

fn deserialize_opt_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<RawId>::deserialize(deserializer)?.map(String::from))
}

/// Entity identifier as emitted by the API.
///
/// Documents may carry `_id`, `id`, or both; `_id` wins when present.
/// Numeric ids are kept as their decimal string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityKey {
    #[serde(rename = "_id", default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl EntityKey {
    /// The usable identifier, if any.
    pub fn as_str(&self) -> Option<&str> {
        self.object_id
            .as_deref()
            .or(self.id.as_deref())
            .filter(|id| !id.is_empty())
    }
}

/// Public site configuration returned by `GET /api/public/config`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default)]
    pub hero_kicker: Option<String>,
    #[serde(default)]
    pub hero_title: Option<String>,
    #[serde(default)]
    pub hero_subtitle: Option<String>,
    /// Currently selected background track, if any.
    #[serde(default)]
    pub active_music: Option<ActiveMusic>,
}

impl SiteConfig {
    /// Identifier of the active track referenced by this config.
    pub fn active_music_id(&self) -> Option<&str> {
        self.active_music.as_ref().and_then(ActiveMusic::id)
    }

    /// Whether any hero text field was present in the payload.
    pub fn has_hero_text(&self) -> bool {
        self.hero_kicker.is_some() || self.hero_title.is_some() || self.hero_subtitle.is_some()
    }
}

/// Reference to the active track: either a populated track document or a
/// bare identifier.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActiveMusic {
    Id(#[serde(deserialize_with = "deserialize_id")] String),
    Track(TrackRef),
}

/// Populated track document embedded in the config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackRef {
    #[serde(flatten)]
    pub key: EntityKey,
    #[serde(default)]
    pub title: Option<String>,
}

impl ActiveMusic {
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Id(id) => Some(id.as_str()).filter(|id| !id.is_empty()),
            Self::Track(track) => track.key.as_str(),
        }
    }
}

/// Body for `PUT /api/admin/config`. Absent fields are left untouched by the
/// server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_kicker: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_music_id: Option<String>,
}

/// A gallery photo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    #[serde(flatten)]
    pub key: EntityKey,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    /// `None` when the server sent `null` or omitted it.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Photo {
    pub fn id(&self) -> Option<&str> {
        self.key.as_str()
    }
}

/// A background music track.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    #[serde(flatten)]
    pub key: EntityKey,
    #[serde(default)]
    pub title: Option<String>,
    /// ISO-8601 creation timestamp.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Track {
    pub fn id(&self) -> Option<&str> {
        self.key.as_str()
    }
}

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response from `POST /api/auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

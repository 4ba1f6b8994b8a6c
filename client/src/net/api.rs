//! REST API helpers for the site content endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: stubs returning
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses and undecodable bodies all surface as
//! [`ApiError`]. Body decoding lives in plain functions so it can be tested
//! without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ApiError;
use super::types::{ConfigUpdate, LoginResponse, Photo, SiteConfig, Track};

pub const LOGIN_PATH: &str = "/api/auth/login";
pub const PUBLIC_CONFIG_PATH: &str = "/api/public/config";
pub const ADMIN_CONFIG_PATH: &str = "/api/admin/config";
pub const PUBLIC_PHOTOS_PATH: &str = "/api/public/photos";
pub const ADMIN_PHOTOS_PATH: &str = "/api/admin/photos";
pub const ADMIN_MUSIC_PATH: &str = "/api/admin/music";

const REQUEST_FAILED: &str = "Request failed";
const LOGIN_FAILED: &str = "Login failed";

/// Join the configured API base with an endpoint path. An empty base yields a
/// same-origin relative path.
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

pub fn photo_path(id: &str) -> String {
    format!("{ADMIN_PHOTOS_PATH}/{id}")
}

pub fn track_path(id: &str) -> String {
    format!("{ADMIN_MUSIC_PATH}/{id}")
}

/// `Authorization` header value for a token. No token, no header.
pub fn bearer_value(token: Option<&str>) -> Option<String> {
    token.filter(|t| !t.is_empty()).map(|t| format!("Bearer {t}"))
}

/// Decode a body as a JSON object, defaulting to `{}` when the body is not
/// JSON or not an object.
pub fn decode_object(body: &str) -> Value {
    match serde_json::from_str::<Value>(body) {
        Ok(value @ Value::Object(_)) => value,
        _ => Value::Object(Map::new()),
    }
}

/// The server's `error` field, or `fallback` when absent.
pub fn error_message_or(body: &str, fallback: &str) -> String {
    decode_object(body)
        .get("error")
        .and_then(Value::as_str)
        .filter(|msg| !msg.is_empty())
        .map_or_else(|| fallback.to_owned(), str::to_owned)
}

pub fn error_message(body: &str) -> String {
    error_message_or(body, REQUEST_FAILED)
}

/// Decode a list endpoint body.
///
/// Non-JSON is a parse error. Valid JSON that is not an array is treated as
/// an empty list. Array items that do not match `T` are skipped.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] when the body is not JSON.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    let value: Value = serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(entity) => Some(entity),
            Err(e) => {
                leptos::logging::warn!("skipping malformed list item: {e}");
                None
            }
        })
        .collect())
}

/// Decode a config body.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] when the body is not a JSON config object.
pub fn decode_config(body: &str) -> Result<SiteConfig, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Extract the bearer token from a successful login body.
///
/// # Errors
///
/// Returns [`ApiError::Parse`] when the body carries no usable token.
pub fn decode_token(body: &str) -> Result<String, ApiError> {
    let resp: LoginResponse = serde_json::from_value(decode_object(body)).unwrap_or_default();
    resp.token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::Parse("missing token".to_owned()))
}

/// Map a rejected login response to a typed error.
pub fn login_failure(status: u16, body: &str) -> ApiError {
    let message = error_message_or(body, LOGIN_FAILED);
    match status {
        400 | 401 | 403 => ApiError::Auth(message),
        _ => ApiError::Status { status, message },
    }
}

/// Optional multipart text fields: trimmed, blank ones dropped.
pub fn upload_fields<'a>(fields: &[(&'a str, &str)]) -> Vec<(&'a str, String)> {
    fields
        .iter()
        .filter_map(|(name, value)| {
            let value = value.trim();
            (!value.is_empty()).then(|| (*name, value.to_owned()))
        })
        .collect()
}

// =============================================================================
// BROWSER TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder, token: Option<&str>) -> gloo_net::http::RequestBuilder {
    match bearer_value(token) {
        Some(value) => builder.header("Authorization", &value),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn network_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
fn js_error(err: &wasm_bindgen::JsValue) -> ApiError {
    ApiError::Network(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Read a response body, turning non-2xx into [`ApiError::Status`].
#[cfg(feature = "hydrate")]
async fn read_body(url: &str, resp: gloo_net::http::Response) -> Result<String, ApiError> {
    let status = resp.status();
    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        leptos::logging::warn!("request failed: url={url} status={status}");
        return Err(ApiError::Status { status, message: error_message(&body) });
    }
    resp.text().await.map_err(network_error)
}

#[cfg(feature = "hydrate")]
async fn get_text(url: &str, token: Option<&str>) -> Result<String, ApiError> {
    let resp = authorized(gloo_net::http::Request::get(url), token)
        .send()
        .await
        .map_err(network_error)?;
    read_body(url, resp).await
}

#[cfg(feature = "hydrate")]
async fn delete_at(url: &str, token: Option<&str>) -> Result<(), ApiError> {
    let resp = authorized(gloo_net::http::Request::delete(url), token)
        .send()
        .await
        .map_err(network_error)?;
    read_body(url, resp).await.map(|_| ())
}

#[cfg(feature = "hydrate")]
async fn post_multipart(
    url: &str,
    token: Option<&str>,
    file: &web_sys::File,
    fields: &[(&str, String)],
) -> Result<(), ApiError> {
    let form = web_sys::FormData::new().map_err(|e| js_error(&e))?;
    form.append_with_blob("file", file).map_err(|e| js_error(&e))?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(|e| js_error(&e))?;
    }
    let resp = authorized(gloo_net::http::Request::post(url), token)
        .body(form)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    read_body(url, resp).await.map(|_| ())
}

// =============================================================================
// ENDPOINTS
// =============================================================================

/// Exchange credentials for a bearer token via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns [`ApiError::Auth`] when the credentials are rejected, or a
/// transport/parse error.
pub async fn login(base: &str, email: &str, password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(base, LOGIN_PATH);
        let payload = super::types::LoginRequest { email, password };
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !(200..300).contains(&status) {
            leptos::logging::warn!("login rejected: status={status}");
            return Err(login_failure(status, &body));
        }
        decode_token(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, email, password);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the public site config from `GET /api/public/config`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status or non-JSON body.
pub async fn fetch_config(base: &str) -> Result<SiteConfig, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(base, PUBLIC_CONFIG_PATH);
        let body = get_text(&url, None).await?;
        decode_config(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(ApiError::Unavailable)
    }
}

/// Replace config fields via `PUT /api/admin/config`.
///
/// Returns the server's updated config; an empty or non-JSON success body
/// decodes to [`SiteConfig::default`].
///
/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
pub async fn save_config(base: &str, token: Option<&str>, update: &ConfigUpdate) -> Result<SiteConfig, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(base, ADMIN_CONFIG_PATH);
        let resp = authorized(gloo_net::http::Request::put(&url), token)
            .json(update)
            .map_err(network_error)?
            .send()
            .await
            .map_err(network_error)?;
        let body = read_body(&url, resp).await?;
        Ok(decode_config(&body).unwrap_or_default())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, token, update);
        Err(ApiError::Unavailable)
    }
}

/// Mark a track as the site's background music.
///
/// # Errors
///
/// See [`save_config`].
pub async fn set_active_track(base: &str, token: Option<&str>, track_id: &str) -> Result<SiteConfig, ApiError> {
    let update = ConfigUpdate { active_music_id: Some(track_id.to_owned()), ..ConfigUpdate::default() };
    save_config(base, token, &update).await
}

/// List gallery photos from `GET /api/public/photos`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status or non-JSON body.
pub async fn fetch_photos(base: &str) -> Result<Vec<Photo>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(base, PUBLIC_PHOTOS_PATH);
        let body = get_text(&url, None).await?;
        decode_list(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = base;
        Err(ApiError::Unavailable)
    }
}

/// Upload one photo via multipart `POST /api/admin/photos`.
///
/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
#[cfg(feature = "hydrate")]
pub async fn upload_photo(
    base: &str,
    token: Option<&str>,
    file: &web_sys::File,
    title: &str,
    caption: &str,
) -> Result<(), ApiError> {
    let url = api_url(base, ADMIN_PHOTOS_PATH);
    let fields = upload_fields(&[("title", title), ("caption", caption)]);
    post_multipart(&url, token, file, &fields).await
}

/// Remove a photo via `DELETE /api/admin/photos/:id`.
///
/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
pub async fn delete_photo(base: &str, token: Option<&str>, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete_at(&api_url(base, &photo_path(id)), token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, token, id);
        Err(ApiError::Unavailable)
    }
}

/// List uploaded tracks from `GET /api/admin/music`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status or non-JSON body.
pub async fn fetch_tracks(base: &str, token: Option<&str>) -> Result<Vec<Track>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = api_url(base, ADMIN_MUSIC_PATH);
        let body = get_text(&url, token).await?;
        decode_list(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, token);
        Err(ApiError::Unavailable)
    }
}

/// Upload one track via multipart `POST /api/admin/music`.
///
/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
#[cfg(feature = "hydrate")]
pub async fn upload_track(base: &str, token: Option<&str>, file: &web_sys::File, title: &str) -> Result<(), ApiError> {
    let url = api_url(base, ADMIN_MUSIC_PATH);
    let fields = upload_fields(&[("title", title)]);
    post_multipart(&url, token, file, &fields).await
}

/// Remove a track via `DELETE /api/admin/music/:id`.
///
/// # Errors
///
/// Returns an error on transport failure or non-2xx status.
pub async fn delete_track(base: &str, token: Option<&str>, id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        delete_at(&api_url(base, &track_path(id)), token).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (base, token, id);
        Err(ApiError::Unavailable)
    }
}

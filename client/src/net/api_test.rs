use super::*;
use futures::executor::block_on;

// =============================================================
// URLs and headers
// =============================================================

#[test]
fn api_url_joins_base_and_path() {
    assert_eq!(api_url("https://api.example.com", LOGIN_PATH), "https://api.example.com/api/auth/login");
}

#[test]
fn api_url_strips_trailing_slash_from_base() {
    assert_eq!(api_url("https://api.example.com/", PUBLIC_CONFIG_PATH), "https://api.example.com/api/public/config");
}

#[test]
fn api_url_with_empty_base_is_relative() {
    assert_eq!(api_url("", PUBLIC_PHOTOS_PATH), "/api/public/photos");
}

#[test]
fn item_paths_embed_id() {
    assert_eq!(photo_path("p1"), "/api/admin/photos/p1");
    assert_eq!(track_path("t1"), "/api/admin/music/t1");
}

#[test]
fn bearer_value_formats_token() {
    assert_eq!(bearer_value(Some("abc")), Some("Bearer abc".to_owned()));
}

#[test]
fn bearer_value_omitted_without_token() {
    assert_eq!(bearer_value(None), None);
    assert_eq!(bearer_value(Some("")), None);
}

// =============================================================
// Body decoding
// =============================================================

#[test]
fn decode_object_defaults_non_json_to_empty_object() {
    assert_eq!(decode_object("<html>502</html>"), serde_json::json!({}));
    assert_eq!(decode_object(""), serde_json::json!({}));
    assert_eq!(decode_object("[1,2]"), serde_json::json!({}));
}

#[test]
fn error_message_reads_server_error_field() {
    assert_eq!(error_message(r#"{"error":"Not allowed"}"#), "Not allowed");
}

#[test]
fn error_message_falls_back_to_generic_text() {
    assert_eq!(error_message("not json"), "Request failed");
    assert_eq!(error_message(r#"{"error":""}"#), "Request failed");
}

#[test]
fn decode_list_reads_photos() {
    let body = r#"[{"id":"p1","title":"A","imageUrl":"/a.jpg"},{"_id":"p2","imageUrl":"/b.jpg"}]"#;
    let photos: Vec<Photo> = decode_list(body).unwrap();
    assert_eq!(photos.len(), 2);
    assert_eq!(photos[0].id(), Some("p1"));
    assert_eq!(photos[1].id(), Some("p2"));
}

#[test]
fn decode_list_keeps_photos_with_numeric_ids() {
    let photos: Vec<Photo> = decode_list(r#"[{"id":5,"title":"A","imageUrl":"/a.jpg"},{"_id":12}]"#).unwrap();
    let ids: Vec<_> = photos.iter().filter_map(Photo::id).collect();
    assert_eq!(ids, vec!["5", "12"]);
}

#[test]
fn decode_list_keeps_photos_with_null_image_url() {
    let photos: Vec<Photo> = decode_list(r#"[{"_id":"p1","title":"A","imageUrl":null}]"#).unwrap();
    assert_eq!(photos.len(), 1);
    assert_eq!(photos[0].id(), Some("p1"));
    assert_eq!(photos[0].image_url, None);
}

#[test]
fn decode_list_keeps_tracks_with_numeric_ids() {
    let tracks: Vec<Track> = decode_list(r#"[{"id":7,"title":"Nocturne"}]"#).unwrap();
    assert_eq!(tracks[0].id(), Some("7"));
}

#[test]
fn decode_config_accepts_numeric_active_music_id() {
    let config = decode_config(r#"{"activeMusic":7}"#).unwrap();
    assert_eq!(config.active_music_id(), Some("7"));
}

#[test]
fn decode_list_treats_non_array_as_empty() {
    let tracks: Vec<Track> = decode_list(r#"{"error":"Unauthorized"}"#).unwrap();
    assert!(tracks.is_empty());
}

#[test]
fn decode_list_rejects_non_json() {
    let result: Result<Vec<Track>, ApiError> = decode_list("<!doctype html>");
    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[test]
fn decode_list_skips_malformed_items() {
    let tracks: Vec<Track> = decode_list(r#"[{"_id":"t1"}, 42, {"_id":"t2","title":"B"}]"#).unwrap();
    let ids: Vec<_> = tracks.iter().filter_map(Track::id).collect();
    assert_eq!(ids, vec!["t1", "t2"]);
}

#[test]
fn decode_config_rejects_non_json() {
    assert!(matches!(decode_config("oops"), Err(ApiError::Parse(_))));
}

#[test]
fn decode_token_reads_token() {
    assert_eq!(decode_token(r#"{"token":"jwt-abc"}"#), Ok("jwt-abc".to_owned()));
}

#[test]
fn decode_token_requires_token() {
    assert!(matches!(decode_token("{}"), Err(ApiError::Parse(_))));
    assert!(matches!(decode_token(r#"{"token":""}"#), Err(ApiError::Parse(_))));
}

#[test]
fn login_failure_maps_unauthorized_to_auth_error() {
    assert_eq!(
        login_failure(401, r#"{"error":"Invalid credentials"}"#),
        ApiError::Auth("Invalid credentials".to_owned())
    );
}

#[test]
fn login_failure_defaults_message() {
    assert_eq!(login_failure(400, "not json"), ApiError::Auth("Login failed".to_owned()));
}

#[test]
fn login_failure_keeps_server_errors_as_status() {
    assert_eq!(
        login_failure(503, ""),
        ApiError::Status { status: 503, message: "Login failed".to_owned() }
    );
}

// =============================================================
// Multipart fields
// =============================================================

#[test]
fn upload_fields_trims_and_drops_blank_values() {
    let fields = upload_fields(&[("title", "  Sunset  "), ("caption", "   ")]);
    assert_eq!(fields, vec![("title", "Sunset".to_owned())]);
}

#[test]
fn upload_fields_keeps_order() {
    let fields = upload_fields(&[("title", "A"), ("caption", "B")]);
    assert_eq!(fields, vec![("title", "A".to_owned()), ("caption", "B".to_owned())]);
}

// =============================================================
// Native stubs
// =============================================================

#[test]
fn endpoints_are_unavailable_outside_browser() {
    assert_eq!(block_on(fetch_config("")), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_photos("")), Err(ApiError::Unavailable));
    assert_eq!(block_on(fetch_tracks("", Some("t"))), Err(ApiError::Unavailable));
    assert_eq!(block_on(delete_photo("", Some("t"), "p1")), Err(ApiError::Unavailable));
    assert_eq!(block_on(set_active_track("", Some("t"), "t1")), Err(ApiError::Unavailable));
}

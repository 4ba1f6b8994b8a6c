use super::*;

// =============================================================
// EntityKey
// =============================================================

#[test]
fn entity_key_prefers_object_id() {
    let photo: Photo = serde_json::from_value(serde_json::json!({
        "_id": "mongo-1",
        "id": "virtual-1",
        "imageUrl": "https://cdn.example.com/a.jpg"
    }))
    .unwrap();
    assert_eq!(photo.id(), Some("mongo-1"));
}

#[test]
fn entity_key_falls_back_to_plain_id() {
    let photo: Photo = serde_json::from_value(serde_json::json!({
        "id": "p-7",
        "title": "Sunset",
        "caption": null,
        "imageUrl": "/uploads/p-7.jpg"
    }))
    .unwrap();
    assert_eq!(photo.id(), Some("p-7"));
    assert_eq!(photo.title.as_deref(), Some("Sunset"));
    assert_eq!(photo.caption, None);
}

#[test]
fn entity_key_empty_string_is_missing() {
    let key = EntityKey { object_id: Some(String::new()), id: None };
    assert_eq!(key.as_str(), None);
}

// =============================================================
// SiteConfig
// =============================================================

#[test]
fn site_config_tolerates_missing_fields() {
    let cfg: SiteConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert!(!cfg.has_hero_text());
    assert_eq!(cfg.active_music_id(), None);
}

#[test]
fn site_config_reads_populated_active_music() {
    let cfg: SiteConfig = serde_json::from_value(serde_json::json!({
        "heroKicker": "Live",
        "heroTitle": "Yousha",
        "heroSubtitle": "Acoustic sets",
        "activeMusic": { "_id": "t-2", "title": "Intro" }
    }))
    .unwrap();
    assert!(cfg.has_hero_text());
    assert_eq!(cfg.hero_title.as_deref(), Some("Yousha"));
    assert_eq!(cfg.active_music_id(), Some("t-2"));
}

#[test]
fn site_config_reads_bare_active_music_id() {
    let cfg: SiteConfig = serde_json::from_value(serde_json::json!({ "activeMusic": "t-9" })).unwrap();
    assert_eq!(cfg.active_music_id(), Some("t-9"));
}

#[test]
fn site_config_null_active_music_is_none() {
    let cfg: SiteConfig = serde_json::from_value(serde_json::json!({ "activeMusic": null })).unwrap();
    assert_eq!(cfg.active_music, None);
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn config_update_omits_absent_fields() {
    let update = ConfigUpdate { active_music_id: Some("t-1".to_owned()), ..ConfigUpdate::default() };
    assert_eq!(serde_json::to_value(&update).unwrap(), serde_json::json!({ "activeMusicId": "t-1" }));
}

#[test]
fn config_update_serializes_hero_text_in_camel_case() {
    let update = ConfigUpdate {
        hero_kicker: Some("k".to_owned()),
        hero_title: Some("t".to_owned()),
        hero_subtitle: Some(String::new()),
        active_music_id: None,
    };
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        serde_json::json!({ "heroKicker": "k", "heroTitle": "t", "heroSubtitle": "" })
    );
}

#[test]
fn login_response_reads_error_body() {
    let resp: LoginResponse = serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
    assert_eq!(resp.token, None);
    assert_eq!(resp.error.as_deref(), Some("Invalid credentials"));
}

#[test]
fn track_reads_created_at() {
    let track: Track = serde_json::from_value(serde_json::json!({
        "_id": "t-1",
        "title": "Rain",
        "createdAt": "2026-01-02T03:04:05.000Z"
    }))
    .unwrap();
    assert_eq!(track.id(), Some("t-1"));
    assert_eq!(track.created_at.as_deref(), Some("2026-01-02T03:04:05.000Z"));
}

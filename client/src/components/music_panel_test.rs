use super::*;
use crate::net::types::{EntityKey, Track};

fn row(title: Option<&str>, active: bool) -> TrackRow {
    TrackRow {
        track: Track {
            key: EntityKey { object_id: None, id: Some("t1".to_owned()) },
            title: title.map(str::to_owned),
            created_at: None,
        },
        active,
    }
}

#[test]
fn track_title_falls_back_to_generic_label() {
    assert_eq!(track_title(&row(Some("Nocturne"), false)), "Nocturne");
    assert_eq!(track_title(&row(None, false)), "Track");
    assert_eq!(track_title(&row(Some(""), true)), "Track");
}

#[test]
fn active_row_gets_check_icon_and_modifier_class() {
    assert_eq!(track_icon(true), "🎵 ✓");
    assert_eq!(track_row_class(true), "list-item list-item--active");
}

#[test]
fn inactive_row_uses_plain_icon_and_class() {
    assert_eq!(track_icon(false), "🎵");
    assert_eq!(track_row_class(false), "list-item");
}

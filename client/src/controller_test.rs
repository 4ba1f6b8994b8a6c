use super::*;
use crate::net::error::ApiError;
use crate::state::session::AdminView;

fn with_context(test: impl FnOnce(AdminContext)) {
    let owner = Owner::new();
    owner.with(|| test(AdminContext::new(PageConfig::default())));
}

/// Move every panel off its initial `Loading` state.
fn settle_panels(ctx: AdminContext) {
    ctx.hero.update(|h| h.status = "Loaded".to_owned());
    ctx.photos.update(|p| {
        p.load = ListLoad::Failed;
        p.status = "Uploaded 2 photos ✓".to_owned();
    });
    ctx.music.update(|m| {
        m.load = ListLoad::Empty;
        m.status = "Failed to set active music: offline".to_owned();
    });
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn finish_login_shows_dashboard_and_starts_every_load() {
    with_context(|ctx| {
        settle_panels(ctx);
        ctx.finish_login("tok-1".to_owned());

        assert_eq!(ctx.session.get_untracked().view(), AdminView::Dashboard);
        assert_eq!(ctx.token().as_deref(), Some("tok-1"));
        assert_eq!(ctx.hero.get_untracked().status, "Loading...");
        assert_eq!(ctx.photos.get_untracked().load, ListLoad::Loading);
        assert_eq!(ctx.music.get_untracked().load, ListLoad::Loading);
    });
}

#[test]
fn load_all_marks_every_panel_loading() {
    with_context(|ctx| {
        settle_panels(ctx);
        ctx.load_all();

        assert_eq!(ctx.hero.get_untracked().status, "Loading...");
        assert_eq!(ctx.photos.get_untracked().load.placeholder(), Some("Loading..."));
        assert_eq!(ctx.music.get_untracked().load.placeholder(), Some("Loading..."));
    });
}

#[test]
fn logout_returns_to_login_and_resets_panels() {
    with_context(|ctx| {
        ctx.finish_login("tok-1".to_owned());
        settle_panels(ctx);
        ctx.hero.update(|h| h.form.title = "Draft".to_owned());

        ctx.logout();

        assert_eq!(ctx.session.get_untracked().view(), AdminView::Login);
        assert_eq!(ctx.token(), None);
        assert_eq!(ctx.hero.get_untracked(), HeroState::default());
        assert_eq!(ctx.photos.get_untracked(), PhotoPanelState::default());
        assert_eq!(ctx.music.get_untracked(), MusicPanelState::default());
    });
}

#[test]
fn restore_without_stored_token_stays_on_login_and_skips_loads() {
    with_context(|ctx| {
        settle_panels(ctx);
        ctx.restore_session();

        let session = ctx.session.get_untracked();
        assert!(session.restored);
        assert_eq!(session.view(), AdminView::Login);
        assert_eq!(ctx.hero.get_untracked().status, "Loaded");
        assert_eq!(ctx.photos.get_untracked().load, ListLoad::Failed);
    });
}

// =============================================================
// Delete outcomes
// =============================================================

#[test]
fn delete_failure_reaches_panel_status() {
    with_context(|ctx| {
        let outcome = DeleteOutcome::Failed(ApiError::Status { status: 404, message: "Not found".to_owned() });
        apply_delete_outcome(ctx.photos, &outcome);
        assert_eq!(ctx.photos.get_untracked().status, "Delete failed: Not found");
    });
}

#[test]
fn declined_or_successful_delete_leaves_status_alone() {
    with_context(|ctx| {
        ctx.music.update(|m| m.status = "Uploaded 1 track ✓".to_owned());
        apply_delete_outcome(ctx.music, &DeleteOutcome::Declined);
        apply_delete_outcome(ctx.music, &DeleteOutcome::Deleted);
        assert_eq!(ctx.music.get_untracked().status, "Uploaded 1 track ✓");
    });
}

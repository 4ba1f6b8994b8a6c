//! Background music panel: track upload and active-track selection.

#[cfg(test)]
#[path = "music_panel_test.rs"]
mod music_panel_test;

use leptos::prelude::*;

use crate::components::list_panel::ListPanel;
use crate::components::status_line::StatusLine;
use crate::controller::AdminContext;
use crate::state::music::TrackRow;
use crate::util::browser::format_timestamp;

pub(crate) fn track_title(row: &TrackRow) -> &str {
    row.track.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Track")
}

pub(crate) fn track_icon(active: bool) -> &'static str {
    if active { "🎵 ✓" } else { "🎵" }
}

pub(crate) fn track_row_class(active: bool) -> &'static str {
    if active { "list-item list-item--active" } else { "list-item" }
}

/// Upload form and track list.
#[component]
pub fn MusicPanel() -> impl IntoView {
    let ctx = expect_context::<AdminContext>();
    let form_ref = NodeRef::<leptos::html::Form>::new();
    let file_ref = NodeRef::<leptos::html::Input>::new();
    let title = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_tracks(ctx, form_ref, file_ref, title);
    };

    let load = Signal::derive(move || ctx.music.with(|m| m.load.clone()));

    view! {
        <section class="panel panel--music">
            <h2 class="panel__title">"Music"</h2>
            <form class="panel__form" node_ref=form_ref on:submit=on_submit>
                <input class="field__input" type="file" accept="audio/*" multiple=true node_ref=file_ref/>
                <input
                    class="field__input"
                    type="text"
                    placeholder="Title (optional)"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <div class="panel__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || ctx.music.with(|m| m.uploading)>
                        "Upload"
                    </button>
                    <StatusLine text=Signal::derive(move || ctx.music.with(|m| m.status.clone()))/>
                </div>
            </form>
            <ListPanel load=load row=move |row: TrackRow| view! { <TrackRowView row=row/> }/>
        </section>
    }
}

#[component]
fn TrackRowView(row: TrackRow) -> impl IntoView {
    let ctx = expect_context::<AdminContext>();
    let active = row.active;
    let title = track_title(&row).to_owned();
    let created = format_timestamp(row.track.created_at.as_deref());
    let id = row.track.id().map(str::to_owned);
    let missing_id = id.is_none();
    let activate_id = id.clone();

    view! {
        <div class=track_row_class(active)>
            <div class="list-item__left">
                <span class="list-item__icon">{track_icon(active)}</span>
                <div>
                    <div class="list-item__title">
                        {title}
                        {active.then(|| view! { <span class="badge">" (Active)"</span> })}
                    </div>
                    <div class="list-item__meta">{created}</div>
                </div>
            </div>
            <div class="list-item__actions">
                {(!active)
                    .then(|| {
                        view! {
                            <button
                                class="btn btn--secondary"
                                disabled=missing_id
                                on:click=move |_| {
                                    if let Some(id) = activate_id.clone() {
                                        ctx.set_active_track(id);
                                    }
                                }
                            >
                                "Set Active"
                            </button>
                        }
                    })}
                <button
                    class="btn btn--ghost"
                    disabled=missing_id
                    on:click=move |_| {
                        if let Some(id) = id.clone() {
                            ctx.delete_track(id);
                        }
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

fn submit_tracks(
    ctx: AdminContext,
    form_ref: NodeRef<leptos::html::Form>,
    file_ref: NodeRef<leptos::html::Input>,
    title: RwSignal<String>,
) {
    #[cfg(feature = "hydrate")]
    {
        if ctx.music.with_untracked(|m| m.uploading) {
            return;
        }
        let Some(input) = file_ref.get_untracked() else {
            return;
        };
        let files = crate::util::browser::selected_files(&input);
        if files.is_empty() {
            return;
        }
        let title_value = title.get_untracked();
        leptos::task::spawn_local(async move {
            ctx.upload_tracks(files, title_value).await;
            if let Some(form) = form_ref.get_untracked() {
                form.reset();
            }
            title.set(String::new());
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ctx, form_ref, file_ref, title);
    }
}

//! Photo gallery panel: multi-file upload form plus the photo list.

#[cfg(test)]
#[path = "photo_panel_test.rs"]
mod photo_panel_test;

use leptos::prelude::*;

use crate::components::list_panel::ListPanel;
use crate::components::status_line::StatusLine;
use crate::controller::AdminContext;
use crate::net::types::Photo;

pub(crate) fn photo_title(photo: &Photo) -> &str {
    photo.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Untitled")
}

pub(crate) fn photo_alt(photo: &Photo) -> &str {
    photo.title.as_deref().filter(|t| !t.is_empty()).unwrap_or("Photo")
}

/// Upload form and gallery list.
#[component]
pub fn PhotoPanel() -> impl IntoView {
    let ctx = expect_context::<AdminContext>();
    let form_ref = NodeRef::<leptos::html::Form>::new();
    let file_ref = NodeRef::<leptos::html::Input>::new();
    let title = RwSignal::new(String::new());
    let caption = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_photos(ctx, form_ref, file_ref, title, caption);
    };

    let load = Signal::derive(move || ctx.photos.with(|p| p.load.clone()));

    view! {
        <section class="panel panel--photos">
            <h2 class="panel__title">"Photos"</h2>
            <form class="panel__form" node_ref=form_ref on:submit=on_submit>
                <input class="field__input" type="file" accept="image/*" multiple=true node_ref=file_ref/>
                <input
                    class="field__input"
                    type="text"
                    placeholder="Title (optional)"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    class="field__input"
                    type="text"
                    placeholder="Caption (optional)"
                    prop:value=move || caption.get()
                    on:input=move |ev| caption.set(event_target_value(&ev))
                />
                <div class="panel__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || ctx.photos.with(|p| p.uploading)>
                        "Upload"
                    </button>
                    <StatusLine text=Signal::derive(move || ctx.photos.with(|p| p.status.clone()))/>
                </div>
            </form>
            <ListPanel load=load row=move |photo: Photo| view! { <PhotoRow photo=photo/> }/>
        </section>
    }
}

#[component]
fn PhotoRow(photo: Photo) -> impl IntoView {
    let ctx = expect_context::<AdminContext>();
    let title = photo_title(&photo).to_owned();
    let alt = photo_alt(&photo).to_owned();
    let caption = photo.caption.clone().unwrap_or_default();
    let src = photo.image_url.clone().unwrap_or_default();
    let id = photo.id().map(str::to_owned);
    let missing_id = id.is_none();

    view! {
        <div class="list-item">
            <div class="list-item__left">
                <img class="list-item__thumb" src=src alt=alt/>
                <div>
                    <div class="list-item__title">{title}</div>
                    <div class="list-item__meta">{caption}</div>
                </div>
            </div>
            <div class="list-item__actions">
                <button
                    class="btn btn--ghost"
                    disabled=missing_id
                    on:click=move |_| {
                        if let Some(id) = id.clone() {
                            ctx.delete_photo(id);
                        }
                    }
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}

fn submit_photos(
    ctx: AdminContext,
    form_ref: NodeRef<leptos::html::Form>,
    file_ref: NodeRef<leptos::html::Input>,
    title: RwSignal<String>,
    caption: RwSignal<String>,
) {
    #[cfg(feature = "hydrate")]
    {
        if ctx.photos.with_untracked(|p| p.uploading) {
            return;
        }
        let Some(input) = file_ref.get_untracked() else {
            return;
        };
        let files = crate::util::browser::selected_files(&input);
        if files.is_empty() {
            return;
        }
        let (title_value, caption_value) = (title.get_untracked(), caption.get_untracked());
        leptos::task::spawn_local(async move {
            ctx.upload_photos(files, title_value, caption_value).await;
            if let Some(form) = form_ref.get_untracked() {
                form.reset();
            }
            title.set(String::new());
            caption.set(String::new());
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ctx, form_ref, file_ref, title, caption);
    }
}

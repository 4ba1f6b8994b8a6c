//! Hero text editor.

use leptos::prelude::*;

use crate::components::status_line::StatusLine;
use crate::controller::AdminContext;

/// Form for the homepage kicker, title and subtitle.
#[component]
pub fn HeroPanel() -> impl IntoView {
    let ctx = expect_context::<AdminContext>();
    let hero = ctx.hero;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !hero.with_untracked(|h| h.saving) {
            ctx.save_hero();
        }
    };

    view! {
        <section class="panel panel--hero">
            <h2 class="panel__title">"Hero"</h2>
            <form class="panel__form" on:submit=on_submit>
                <label class="field">
                    <span>"Kicker"</span>
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || hero.with(|h| h.form.kicker.clone())
                        on:input=move |ev| hero.update(|h| h.form.kicker = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Title"</span>
                    <input
                        class="field__input"
                        type="text"
                        prop:value=move || hero.with(|h| h.form.title.clone())
                        on:input=move |ev| hero.update(|h| h.form.title = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Subtitle"</span>
                    <textarea
                        class="field__input"
                        rows="3"
                        prop:value=move || hero.with(|h| h.form.subtitle.clone())
                        on:input=move |ev| hero.update(|h| h.form.subtitle = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="panel__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || hero.with(|h| h.saving)>
                        "Save"
                    </button>
                    <StatusLine text=Signal::derive(move || hero.with(|h| h.status.clone()))/>
                </div>
            </form>
        </section>
    }
}

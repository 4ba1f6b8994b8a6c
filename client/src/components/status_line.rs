//! One-line status text under a panel form.

use leptos::prelude::*;

/// Renders `text`; collapses to nothing when it is empty.
#[component]
pub fn StatusLine(#[prop(into)] text: Signal<String>) -> impl IntoView {
    view! {
        <Show when=move || text.with(|t| !t.is_empty())>
            <span class="panel__status">{move || text.get()}</span>
        </Show>
    }
}

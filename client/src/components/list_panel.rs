//! Shared list body for the Photos and Music panels.

use leptos::prelude::*;

use crate::state::panel::{ListEntity, ListLoad};

/// Renders either the placeholder line for `load` or one `row` per item.
#[component]
pub fn ListPanel<T, R, V>(load: Signal<ListLoad<T>>, row: R) -> impl IntoView
where
    T: ListEntity,
    R: Fn(T) -> V + Clone + Send + Sync + 'static,
    V: IntoView + 'static,
{
    view! {
        <div class="list">
            {move || {
                let current = load.get();
                match current.placeholder() {
                    Some(text) => view! { <p class="list-placeholder">{text}</p> }.into_any(),
                    None => current.items().iter().cloned().map(row.clone()).collect_view().into_any(),
                }
            }}
        </div>
    }
}

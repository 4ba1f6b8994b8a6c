//! Dashboard page: the three content panels behind a logout header.
//!
//! Panel loads are started by the controller when the session begins;
//! logging out resets the panels so a later login starts from "Loading...".

use leptos::prelude::*;

use crate::components::hero_panel::HeroPanel;
use crate::components::music_panel::MusicPanel;
use crate::components::photo_panel::PhotoPanel;
use crate::controller::AdminContext;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = expect_context::<AdminContext>();
    let demo_mode = ctx.page.with_value(|p| p.demo_mode());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-header">
                <h1>"Site Admin"</h1>
                {demo_mode.then(|| view! { <span class="badge">"Demo"</span> })}
                <button class="btn btn--ghost" on:click=move |_| ctx.logout()>
                    "Logout"
                </button>
            </header>
            <main class="dashboard-grid">
                <HeroPanel/>
                <PhotoPanel/>
                <MusicPanel/>
            </main>
        </div>
    }
}

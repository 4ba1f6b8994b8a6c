//! Root application component, SSR shell and session-driven view switch.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::controller::AdminContext;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::session::{AdminView, SessionState};
use crate::util::page_config::{API_BASE_META, PageConfig, read_page_config};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `page` is serialized into a meta tag so the hydrated client knows which
/// API to talk to.
pub fn shell(options: LeptosOptions, page: PageConfig) -> impl IntoView {
    let api_base = page.api_base.unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared [`AdminContext`] and restores a persisted session once
/// the page is live in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = AdminContext::new(read_page_config());
    provide_context(ctx);

    Effect::new(move || ctx.restore_session());

    view! {
        <Stylesheet id="leptos" href="/pkg/yousha-admin.css"/>
        <Title text="Site Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AdminRoot/>
            </Routes>
        </Router>
    }
}

/// Shows the login form or the dashboard depending on the session.
#[component]
fn AdminRoot() -> impl IntoView {
    let ctx = expect_context::<AdminContext>();
    let current = Memo::new(move |_| ctx.session.with(SessionState::view));
    let restored = move || ctx.session.with(|s| s.restored);

    view! {
        <Show when=restored fallback=|| view! { <p class="boot-message">"Loading..."</p> }>
            {move || match current.get() {
                AdminView::Login => view! { <LoginPage/> }.into_any(),
                AdminView::Dashboard => view! { <DashboardPage/> }.into_any(),
            }}
        </Show>
    }
}

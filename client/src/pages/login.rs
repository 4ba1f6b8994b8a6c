//! Login page: email + password against the API, or the local demo pair.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::controller::{AdminContext, spawn};
use crate::state::session::{authenticate, login_error_text, validate_login_input};

pub(crate) fn login_subtitle(demo_mode: bool) -> &'static str {
    if demo_mode { "Local demo mode (no API configured)" } else { "Sign in to manage the site" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AdminContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let demo_mode = ctx.page.with_value(|p| p.demo_mode());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked())
        {
            Ok(pair) => pair,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);
        let api_base = ctx.api_base();

        spawn(async move {
            let result = authenticate(api_base.as_deref(), &email_value, &password_value).await;
            busy.set(false);
            match result {
                Ok(token) => ctx.finish_login(token),
                Err(e) => error.set(login_error_text(&e)),
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Site Admin"</h1>
                <p class="login-card__subtitle">{login_subtitle(demo_mode)}</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        autocomplete="username"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || error.with(|e| !e.is_empty())>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}

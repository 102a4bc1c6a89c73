use leptos::ev::SubmitEvent;
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ApiError};
use crate::components::notice::{show_notice, Notice, NoticeView};
use crate::session;
use crate::state::Submit;

// Matches the server-side token lifetime.
const TOKEN_TTL_DAYS: u32 = 1;

/// Login page. A successful login stores the token cookie and moves on to
/// the listing; a failed one shows an inline message and returns to idle.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (status, set_status) = create_signal(Submit::Idle);
    let (notice, set_notice) = create_signal(None::<Notice>);
    let navigate = use_navigate();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get().in_flight() {
            return;
        }
        set_status.set(Submit::Submitting);
        let email_value = email.get();
        let password_value = password.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(response) => {
                    session::set_token(&response.access_token, TOKEN_TTL_DAYS);
                    set_status.set(Submit::Done);
                    navigate("/", Default::default());
                }
                Err(err) => {
                    let message = match err {
                        ApiError::Network(reason) => format!("Network error: {reason}"),
                        ApiError::Http { message, .. } => format!("Login failed: {message}"),
                    };
                    set_status.set(Submit::Failed(message.clone()));
                    show_notice(set_notice, Notice::error(message));
                }
            }
        });
    };

    view! {
        <section id="login">
            <h2>{ "Login" }</h2>
            <form id="login-form" on:submit=handle_submit>
                <input
                    type="email"
                    id="email"
                    placeholder="Email"
                    prop:value=email
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    required=true
                />
                <input
                    type="password"
                    id="password"
                    placeholder="Password"
                    prop:value=password
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    required=true
                />
                <button type="submit" disabled=move || status.get().in_flight()>
                    { "Login" }
                </button>
                <NoticeView notice=notice/>
            </form>
        </section>
    }
}

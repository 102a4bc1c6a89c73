use leptos::ev::SubmitEvent;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::{self, ApiError};
use crate::components::notice::{show_notice, Notice, NoticeView};
use crate::models::review::NewReview;
use crate::session;
use crate::state::Submit;

/// Review submission form. A missing rating is rejected locally before any
/// request goes out; losing the session mid-page redirects back to login.
#[component]
pub fn ReviewForm(place_id: String, #[prop(into)] on_submitted: Callback<()>) -> impl IntoView {
    let (text, set_text) = create_signal(String::new());
    let (rating, set_rating) = create_signal(String::new());
    let (status, set_status) = create_signal(Submit::Idle);
    let (notice, set_notice) = create_signal(None::<Notice>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if status.get().in_flight() {
            return;
        }
        let Some(token) = session::check_or_redirect() else {
            return;
        };
        let Ok(rating_value) = rating.get().parse::<u8>() else {
            show_notice(set_notice, Notice::error("Please select a rating."));
            return;
        };
        let review = NewReview {
            text: text.get(),
            rating: rating_value,
            place_id: place_id.clone(),
        };
        set_status.set(Submit::Submitting);
        spawn_local(async move {
            match api::submit_review(&token, &review).await {
                Ok(_) => {
                    set_status.set(Submit::Done);
                    set_text.set(String::new());
                    set_rating.set(String::new());
                    show_notice(set_notice, Notice::success("Review submitted successfully!"));
                    on_submitted.call(());
                }
                Err(err) => {
                    let message = match err {
                        ApiError::Network(reason) => format!("Network error: {reason}"),
                        ApiError::Http { message, .. } => {
                            format!("Failed to submit review: {message}")
                        }
                    };
                    set_status.set(Submit::Failed(message.clone()));
                    show_notice(set_notice, Notice::error(message));
                }
            }
        });
    };

    view! {
        <form id="review-form" on:submit=handle_submit>
            <h3>{ "Add a Review" }</h3>
            <textarea
                id="review-text"
                placeholder="Write your review here"
                prop:value=text
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <select
                id="review-rating"
                prop:value=rating
                on:change=move |ev| set_rating.set(event_target_value(&ev))
            >
                <option value="">{ "Select rating" }</option>
                {(1..=5)
                    .map(|n| view! { <option value=n.to_string()>{n.to_string()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <button type="submit" disabled=move || status.get().in_flight()>
                { "Submit Review" }
            </button>
            <NoticeView notice=notice/>
        </form>
    }
}

/// Standalone review page. Requires a session and a target place id before
/// any form wiring happens; a successful submission bounces back to the
/// details page after a short pause.
use gloo_timers::future::sleep;
use leptos::*;
use leptos_router::{use_navigate, use_query_map};
use std::time::Duration;
use urlencoding::encode;
use wasm_bindgen_futures::spawn_local;

use crate::components::review_form::ReviewForm;
use crate::session;

const REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[component]
pub fn AddReviewPage() -> impl IntoView {
    // The redirect does not stop execution, so keep going defensively; the
    // form re-checks the session again at submit time.
    let _ = session::check_or_redirect();

    let query = use_query_map();
    let place_id = query.with_untracked(|params| params.get("id").cloned());

    let Some(place_id) = place_id else {
        return view! {
            <section id="add-review">
                <h2>{ "Add a Review" }</h2>
                <p class="error-message">{ "Place ID is missing from URL." }</p>
            </section>
        }
        .into_view();
    };

    let navigate = use_navigate();
    let details_url = format!("/place?id={}", encode(&place_id));
    let on_submitted = Callback::new(move |_: ()| {
        let navigate = navigate.clone();
        let details_url = details_url.clone();
        spawn_local(async move {
            sleep(REDIRECT_DELAY).await;
            navigate(&details_url, Default::default());
        });
    });

    view! {
        <section id="add-review">
            <h2>{ "Add a Review" }</h2>
            <ReviewForm place_id=place_id on_submitted=on_submitted/>
        </section>
    }
    .into_view()
}

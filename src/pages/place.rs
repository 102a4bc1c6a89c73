/// Details page. Resolves the target id from the query string, fetches the
/// place, then its reviews as a second request; a review-fetch failure never
/// disturbs the already-rendered place.
use leptos::*;
use leptos_router::use_query_map;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::place_details::PlaceDetails;
use crate::components::review_form::ReviewForm;
use crate::components::reviews_list::ReviewsList;
use crate::models::place::Place;
use crate::models::review::Review;
use crate::session;
use crate::state::Fetch;

#[component]
pub fn PlacePage() -> impl IntoView {
    let query = use_query_map();
    let place_id = query.with_untracked(|params| params.get("id").cloned());

    let (place, set_place) = create_signal(Fetch::<Place>::Idle);
    let (reviews, set_reviews) = create_signal(Fetch::<Vec<Review>>::Idle);

    match place_id.clone() {
        None => set_place.set(Fetch::Failed("Place ID is missing from URL.".to_string())),
        Some(id) => spawn_local(load_place(id, set_place, set_reviews)),
    }

    let refresh_reviews = {
        let place_id = place_id.clone();
        Callback::new(move |_: ()| {
            let Some(id) = place_id.clone() else { return };
            spawn_local(load_reviews(id, set_reviews));
        })
    };

    // The form only exists for authenticated visitors with a resolved place.
    let review_form = place_id
        .filter(|_| session::token().is_some())
        .map(|id| {
            view! {
                <section id="add-review">
                    <ReviewForm place_id=id on_submitted=refresh_reviews/>
                </section>
            }
        });

    view! {
        <section>
            {move || match place.get() {
                Fetch::Idle | Fetch::Loading => {
                    view! { <p>{ "Loading place details..." }</p> }.into_view()
                }
                Fetch::Failed(message) => {
                    view! {
                        <div id="place-details">
                            <p class="error-message">{message}</p>
                        </div>
                    }
                    .into_view()
                }
                Fetch::Loaded(found) => view! { <PlaceDetails place=found/> }.into_view(),
            }}
            {move || match reviews.get() {
                Fetch::Idle => ().into_view(),
                Fetch::Loading => view! { <p>{ "Loading reviews..." }</p> }.into_view(),
                Fetch::Failed(message) => {
                    view! {
                        <section id="reviews">
                            <h2>{ "User Reviews" }</h2>
                            <p class="error-message">{message}</p>
                        </section>
                    }
                    .into_view()
                }
                Fetch::Loaded(list) => view! { <ReviewsList reviews=list/> }.into_view(),
            }}
            {review_form}
        </section>
    }
}

/// Fetches the place, and only once that has succeeded, its reviews.
pub async fn load_place(
    place_id: String,
    set_place: WriteSignal<Fetch<Place>>,
    set_reviews: WriteSignal<Fetch<Vec<Review>>>,
) {
    set_place.set(Fetch::Loading);
    match api::fetch_place(&place_id).await {
        Ok(found) => {
            set_place.set(Fetch::Loaded(found));
            load_reviews(place_id, set_reviews).await;
        }
        Err(err) => {
            let message = if err.is_network() {
                "Network error."
            } else {
                "Error loading place details."
            };
            set_place.set(Fetch::Failed(message.to_string()));
        }
    }
}

pub async fn load_reviews(place_id: String, set_reviews: WriteSignal<Fetch<Vec<Review>>>) {
    set_reviews.set(Fetch::Loading);
    match api::fetch_reviews(&place_id).await {
        Ok(list) => set_reviews.set(Fetch::Loaded(list)),
        Err(err) => {
            let message = if err.is_network() {
                "Network error loading reviews."
            } else {
                "Unable to load reviews."
            };
            set_reviews.set(Fetch::Failed(message.to_string()));
        }
    }
}

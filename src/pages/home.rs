/// Listing page. Fetches the full place list once on mount and keeps it as
/// this page's only cache; the price filter re-renders that list locally
/// without another request.
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::places_list::PlacesList;
use crate::components::price_filter::PriceFilter;
use crate::models::place::{filter_by_max_price, Place};
use crate::state::Fetch;

#[component]
pub fn HomePage() -> impl IntoView {
    let (places, set_places) = create_signal(Fetch::<Vec<Place>>::Idle);
    let (max_price, set_max_price) = create_signal(None::<f64>);

    set_places.set(Fetch::Loading);
    spawn_local(async move {
        match api::fetch_places().await {
            Ok(list) => set_places.set(Fetch::Loaded(list)),
            Err(err) => {
                let message = if err.is_network() {
                    "Network error. Please check your connection."
                } else {
                    "Error loading places. Please try again later."
                };
                set_places.set(Fetch::Failed(message.to_string()));
            }
        }
    });

    view! {
        <section id="places">
            <h2>{ "Available Places" }</h2>
            <PriceFilter on_change=move |max| set_max_price.set(max)/>
            {move || match places.get() {
                Fetch::Idle | Fetch::Loading => {
                    view! { <p>{ "Loading places..." }</p> }.into_view()
                }
                Fetch::Failed(message) => {
                    view! { <p class="error-message">{message}</p> }.into_view()
                }
                Fetch::Loaded(all) => {
                    let visible = filter_by_max_price(&all, max_price.get());
                    view! { <PlacesList places=visible/> }.into_view()
                }
            }}
        </section>
    }
}

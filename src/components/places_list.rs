/// Component to display the list of places.
/// An empty list renders a single "no places" message instead of cards.
use leptos::*;

use crate::components::place_card::PlaceCard;
use crate::models::place::Place;

#[component]
pub fn PlacesList(places: Vec<Place>) -> impl IntoView {
    if places.is_empty() {
        return view! {
            <div id="places-list">
                <p>{ "No places available." }</p>
            </div>
        };
    }

    view! {
        <div id="places-list">
            {places
                .into_iter()
                .map(|place| view! { <PlaceCard place=place/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

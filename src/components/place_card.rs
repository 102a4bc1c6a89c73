use leptos::*;
use leptos_router::use_navigate;
use urlencoding::encode;

use crate::models::place::Place;

#[component]
pub fn PlaceCard(place: Place) -> impl IntoView {
    let navigate = use_navigate();
    let details_url = format!("/place?id={}", encode(&place.id));
    let open_details = move |_| navigate(&details_url, Default::default());

    view! {
        <div class="place-card">
            <h3>{place.display_title().to_string()}</h3>
            <p>{place.description_text().to_string()}</p>
            <p>{format!("Location: {}", place.location_text())}</p>
            <p class="place-price">{format!("Price per night: ${}", place.price)}</p>
            <button class="details-button" on:click=open_details>
                { "View Details" }
            </button>
        </div>
    }
}

/// Component to display one place in full.
/// Renders title, description, location and price, then the host id and the
/// amenities list when the record carries them.
use leptos::*;

use crate::models::place::Place;

#[component]
pub fn PlaceDetails(place: Place) -> impl IntoView {
    let amenities = (!place.amenities.is_empty()).then(|| {
        view! {
            <h3>{ "Amenities:" }</h3>
            <ul class="amenities">
                {place
                    .amenities
                    .iter()
                    .map(|amenity| view! { <li>{amenity.name().to_string()}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        }
    });

    view! {
        <div id="place-details">
            <h2>{place.display_title().to_string()}</h2>
            <p>{place.description_text().to_string()}</p>
            <p class="place-price">{format!("Price per night: ${}", place.price)}</p>
            <p>{format!("Location: {}", place.location_text())}</p>
            {place
                .owner_id
                .as_ref()
                .map(|owner| view! { <p>{format!("Host ID: {owner}")}</p> })}
            {amenities}
        </div>
    }
}

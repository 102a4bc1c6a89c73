use leptos::ev::Event;
use leptos::*;

/// Fixed price thresholds offered by the filter dropdown.
const THRESHOLDS: [f64; 3] = [10.0, 50.0, 100.0];

/// Maximum-price selector. Emits `None` for "All"; filtering happens on the
/// caller's already-fetched list, no request is made here.
#[component]
pub fn PriceFilter(#[prop(into)] on_change: Callback<Option<f64>>) -> impl IntoView {
    let handle_change = move |ev: Event| {
        let value = event_target_value(&ev);
        on_change.call(value.parse::<f64>().ok());
    };

    view! {
        <div class="price-filter">
            <label for="price-filter">{ "Max price: " }</label>
            <select id="price-filter" on:change=handle_change>
                <option value="">{ "All" }</option>
                {THRESHOLDS
                    .iter()
                    .map(|max| {
                        view! { <option value=max.to_string()>{format!("${max}")}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}

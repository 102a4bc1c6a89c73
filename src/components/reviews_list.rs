use leptos::*;

use crate::models::review::Review;

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    if reviews.is_empty() {
        return view! {
            <section id="reviews">
                <h2>{ "User Reviews" }</h2>
                <p>{ "No reviews yet. Be the first to review!" }</p>
            </section>
        };
    }

    view! {
        <section id="reviews">
            <h2>{ "User Reviews" }</h2>
            {reviews
                .into_iter()
                .map(|review| {
                    view! {
                        <div class="review-card">
                            <p class="review-text">{format!("\"{}\"", review.text)}</p>
                            <span>{format!("User: {}", review.author_text())}</span>
                            <span class="review-rating">
                                {format!("Rating: {}", review.rating_text())}
                            </span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}

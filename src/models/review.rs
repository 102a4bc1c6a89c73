// src/models/review.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    #[serde(default)]
    pub id: Option<String>,
    pub text: String,            // Content of the review
    #[serde(default)]
    pub rating: Option<u8>,      // 1-5, absent on some legacy records
    #[serde(default)]
    pub user_id: Option<String>, // ID of the user who submitted the review
    #[serde(default)]
    pub place_id: Option<String>, // ID of the place the review is attached to
}

impl Review {
    pub fn author_text(&self) -> &str {
        self.user_id
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("Anonymous")
    }

    /// Rating line rendered as repeated stars, e.g. "⭐⭐⭐ (3/5)".
    pub fn rating_text(&self) -> String {
        let rating = self.rating.unwrap_or(0);
        format!("{} ({}/5)", "⭐".repeat(rating as usize), rating)
    }
}

/// Payload for POST /reviews. The server fills in `user_id` from the token.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewReview {
    pub text: String,
    pub rating: u8,
    pub place_id: String,
}

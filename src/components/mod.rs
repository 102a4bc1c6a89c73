pub mod notice;
pub mod place_card;
pub mod place_details;
pub mod places_list;
pub mod price_filter;
pub mod review_form;
pub mod reviews_list;

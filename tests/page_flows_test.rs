use gloo_timers::future::sleep;
use leptos::*;
use leptos_router::Router;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use hbnb_web::components::review_form::ReviewForm;
use hbnb_web::models::place::Place;
use hbnb_web::models::review::Review;
use hbnb_web::pages::login::LoginPage;
use hbnb_web::pages::place::load_place;
use hbnb_web::session;
use hbnb_web::state::Fetch;

mod mocks;
use mocks::fetch_mock::{fetch_call_count, install_fetch_mock, mock_route};

wasm_bindgen_test_configure!(run_in_browser);

fn test_container(id: &str) -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container: web_sys::HtmlElement =
        document.create_element("div").unwrap().dyn_into().unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container
}

// Events are delegated to the document root, so synthetic ones must bubble.
fn bubbling_event(name: &str) -> web_sys::Event {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    web_sys::Event::new_with_event_init_dict(name, &init).unwrap()
}

fn set_input_value(container: &web_sys::HtmlElement, selector: &str, value: &str) {
    let input: web_sys::HtmlInputElement = container
        .query_selector(selector)
        .unwrap()
        .expect("input should be mounted")
        .dyn_into()
        .unwrap();
    input.set_value(value);
    input.dispatch_event(&bubbling_event("input")).unwrap();
}

#[wasm_bindgen_test]
async fn failed_place_fetch_never_requests_reviews() {
    assert!(install_fetch_mock());
    mock_route("/places/42", 404, r#"{"error":"Place not found"}"#);

    let (place, set_place) = create_signal(Fetch::<Place>::Idle);
    let (reviews, set_reviews) = create_signal(Fetch::<Vec<Review>>::Idle);

    load_place("42".to_string(), set_place, set_reviews).await;

    assert_eq!(
        place.get_untracked(),
        Fetch::Failed("Error loading place details.".to_string())
    );
    assert_eq!(reviews.get_untracked(), Fetch::Idle);
    assert_eq!(fetch_call_count("/reviews"), 0);
}

#[wasm_bindgen_test]
async fn place_fetch_success_then_loads_reviews() {
    assert!(install_fetch_mock());
    // More specific fragment first: routes match in registration order.
    mock_route(
        "/places/42/reviews",
        200,
        r#"[{"text":"Nice stay","rating":4,"user_id":"u1"}]"#,
    );
    mock_route("/places/42", 200, r#"{"id":"42","title":"Sea Loft","price":120}"#);

    let (place, set_place) = create_signal(Fetch::<Place>::Idle);
    let (reviews, set_reviews) = create_signal(Fetch::<Vec<Review>>::Idle);

    load_place("42".to_string(), set_place, set_reviews).await;

    match place.get_untracked() {
        Fetch::Loaded(found) => assert_eq!(found.display_title(), "Sea Loft"),
        other => panic!("expected loaded place, got {other:?}"),
    }
    match reviews.get_untracked() {
        Fetch::Loaded(list) => assert_eq!(list.len(), 1),
        other => panic!("expected loaded reviews, got {other:?}"),
    }
    assert_eq!(fetch_call_count("/reviews"), 1);
}

#[wasm_bindgen_test]
async fn successful_login_stores_token_and_navigates_home() {
    assert!(install_fetch_mock());
    mock_route("/auth/login", 200, r#"{"access_token":"abc"}"#);
    session::delete_token();

    let container = test_container("login-flow");
    mount_to(container.clone(), || view! { <Router><LoginPage/></Router> });

    set_input_value(&container, "#email", "user@example.com");
    set_input_value(&container, "#password", "secret");
    let form = container
        .query_selector("form")
        .unwrap()
        .expect("form should be mounted");
    form.dispatch_event(&bubbling_event("submit")).unwrap();

    sleep(Duration::from_millis(100)).await;

    assert_eq!(session::token(), Some("abc".to_string()));
    assert_eq!(fetch_call_count("/auth/login"), 1);
    let path = web_sys::window().unwrap().location().pathname().unwrap();
    assert_eq!(path, "/");

    session::delete_token();
    container.remove();
}

#[wasm_bindgen_test]
async fn failed_login_shows_message_and_stores_nothing() {
    assert!(install_fetch_mock());
    mock_route("/auth/login", 401, r#"{"message":"Invalid credentials"}"#);
    session::delete_token();

    let container = test_container("login-failure");
    mount_to(container.clone(), || view! { <Router><LoginPage/></Router> });

    set_input_value(&container, "#email", "user@example.com");
    set_input_value(&container, "#password", "wrong");
    let form = container
        .query_selector("form")
        .unwrap()
        .expect("form should be mounted");
    form.dispatch_event(&bubbling_event("submit")).unwrap();

    sleep(Duration::from_millis(100)).await;

    assert_eq!(session::token(), None);
    assert!(container
        .text_content()
        .unwrap()
        .contains("Login failed: Invalid credentials"));

    container.remove();
}

#[wasm_bindgen_test]
async fn review_form_rejects_missing_rating_without_any_request() {
    assert!(install_fetch_mock());
    // A session must exist, otherwise the form redirects instead of validating.
    session::set_token("test-token", 1);

    let container = test_container("review-validation");
    let submitted = create_rw_signal(false);
    mount_to(container.clone(), move || {
        let on_submitted = Callback::new(move |_: ()| submitted.set(true));
        view! { <ReviewForm place_id="42".to_string() on_submitted=on_submitted/> }
    });

    let form = container
        .query_selector("form")
        .unwrap()
        .expect("form should be mounted");
    form.dispatch_event(&bubbling_event("submit")).unwrap();

    sleep(Duration::from_millis(50)).await;

    assert!(container
        .text_content()
        .unwrap()
        .contains("Please select a rating."));
    assert!(!submitted.get_untracked(), "no submission should have happened");
    assert_eq!(fetch_call_count("/reviews"), 0);

    session::delete_token();
    container.remove();
}

#[wasm_bindgen_test]
async fn review_submission_success_resets_form_and_notifies() {
    assert!(install_fetch_mock());
    mock_route("/reviews", 201, r#"{"text":"Nice stay","rating":4}"#);
    session::set_token("test-token", 1);

    let container = test_container("review-submit");
    let submitted = create_rw_signal(false);
    mount_to(container.clone(), move || {
        let on_submitted = Callback::new(move |_: ()| submitted.set(true));
        view! { <ReviewForm place_id="42".to_string() on_submitted=on_submitted/> }
    });

    let textarea: web_sys::HtmlTextAreaElement = container
        .query_selector("textarea")
        .unwrap()
        .expect("textarea should be mounted")
        .dyn_into()
        .unwrap();
    textarea.set_value("Nice stay");
    textarea.dispatch_event(&bubbling_event("input")).unwrap();

    let select: web_sys::HtmlSelectElement = container
        .query_selector("select")
        .unwrap()
        .expect("select should be mounted")
        .dyn_into()
        .unwrap();
    select.set_value("4");
    select.dispatch_event(&bubbling_event("change")).unwrap();

    let form = container
        .query_selector("form")
        .unwrap()
        .expect("form should be mounted");
    form.dispatch_event(&bubbling_event("submit")).unwrap();

    sleep(Duration::from_millis(100)).await;

    assert!(submitted.get_untracked(), "on_submitted should have fired");
    assert!(container
        .text_content()
        .unwrap()
        .contains("Review submitted successfully!"));
    assert_eq!(fetch_call_count("/reviews"), 1);
    assert_eq!(textarea.value(), "");

    session::delete_token();
    container.remove();
}

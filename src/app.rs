/// Main application entry point for the HBnB client.
/// Mounts the router and maps each page route to its controller component.
use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{use_location, Route, Router, Routes, A};

use crate::pages::add_review::AddReviewPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::place::PlacePage;
use crate::session;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Title text="HBnB"/>
            <header>
                <A href="/" class="logo">{ "HBnB" }</A>
                <LoginLink/>
            </header>
            <main>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/place" view=PlacePage/>
                    <Route path="/add-review" view=AddReviewPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Login link, shown only while unauthenticated. The cookie is not reactive,
/// so it is re-checked whenever the route changes.
#[component]
fn LoginLink() -> impl IntoView {
    let location = use_location();
    let logged_in = create_memo(move |_| {
        let _ = location.pathname.get();
        session::token().is_some()
    });

    move || {
        (!logged_in.get()).then(|| {
            view! {
                <A href="/login" class="login-link">{ "Login" }</A>
            }
        })
    }
}

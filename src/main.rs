use hbnb_web::app::App;

// Client-side entry point.
// to run: `trunk serve --open`
pub fn main() {
    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}

use gloo_timers::future::sleep;
use leptos::*;
use std::time::Duration;
use wasm_bindgen_futures::spawn_local;

const AUTO_HIDE: Duration = Duration::from_secs(5);

/// Inline feedback message shown next to a form.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub text: String,
    pub is_error: bool,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Notice { text: text.into(), is_error: false }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Notice { text: text.into(), is_error: true }
    }
}

/// Shows a notice and schedules it to disappear after five seconds.
pub fn show_notice(set_notice: WriteSignal<Option<Notice>>, notice: Notice) {
    set_notice.set(Some(notice));
    spawn_local(async move {
        sleep(AUTO_HIDE).await;
        // The page may have been torn down before the timer fires.
        let _ = set_notice.try_set(None);
    });
}

#[component]
pub fn NoticeView(notice: ReadSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            let class = if notice.is_error { "error-message" } else { "success-message" };
            view! { <p class=class>{notice.text}</p> }
        })
    }
}

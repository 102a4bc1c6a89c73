use wasm_bindgen::prelude::*;

/// This module replaces `window.fetch` with a scriptable stub so page flows
/// can be exercised without a running API server. Routes are matched by URL
/// fragment in registration order; unmatched requests get an empty 404.

#[wasm_bindgen(inline_js = r#"
export function install_fetch_mock() {
    window.__fetchCalls = [];
    window.__fetchRoutes = [];
    window.fetch = function(input, init) {
        const url = typeof input === "string" ? input : input.url;
        const method = (init && init.method) || (input && input.method) || "GET";
        window.__fetchCalls.push({ url: url, method: method });
        console.log("[MOCK FETCH]", method, url);
        for (const route of window.__fetchRoutes) {
            if (url.includes(route.fragment)) {
                return Promise.resolve(new Response(route.body, {
                    status: route.status,
                    headers: { "Content-Type": "application/json" }
                }));
            }
        }
        return Promise.resolve(new Response("{}", { status: 404 }));
    };
    return true;
}

export function mock_route(fragment, status, body) {
    window.__fetchRoutes.push({ fragment: fragment, status: status, body: body });
}

export function fetch_call_count(fragment) {
    return window.__fetchCalls.filter(call => call.url.includes(fragment)).length;
}
"#)]
extern "C" {
    /// Installs the stub and clears any previously recorded calls.
    pub fn install_fetch_mock() -> bool;

    /// Registers a canned response for requests whose URL contains `fragment`.
    pub fn mock_route(fragment: &str, status: u16, body: &str);

    /// Number of recorded requests whose URL contains `fragment`.
    pub fn fetch_call_count(fragment: &str) -> u32;
}

#![recursion_limit = "512"]
use wasm_bindgen::prelude::wasm_bindgen;
use wayfarer_app::App;

#[wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::info!("hydrate mode - hydrating");

    leptos::mount::hydrate_body(App);
}

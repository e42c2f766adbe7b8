// lib.rs - Root module for the cine_ai library
//
// The same crate is compiled twice by cargo-leptos: as the server binary
// (feature `ssr`) and as the WASM bundle (feature `hydrate`).

/// The Leptos web application: model, page state, components and server functions
pub mod web_app;

/// WASM entry point; hydrates the server-rendered page
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}

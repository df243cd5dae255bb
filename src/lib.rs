pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod models;
pub mod notify;
pub mod offline;
pub mod presenter;
pub mod storage;
pub mod store;
pub mod submit;
pub mod theme;
pub mod utils;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;

    console_error_panic_hook::set_once();
    leptos::logging::log!("[HYDRATE] Mounting Snow Design");
    leptos::mount_to_body(App);
}

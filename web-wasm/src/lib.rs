//! Recipe Finder Web App (Leptos + WASM)

mod api;
mod app;
mod components;
mod config;
mod storage;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug)
        .map_err(|e| JsValue::from_str(&format!("Failed to initialize console log: {}", e)))?;
    log::debug!("Initialized recipe-finder logger");

    leptos::mount::mount_to_body(app::App);
    Ok(())
}

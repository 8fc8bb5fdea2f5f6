pub mod components;
pub mod config;
pub mod detector;
pub mod sensor;

use components::ShakeCounter;
use leptos::*;
use wasm_bindgen::prelude::*;

/// Mount the application to the DOM
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(ShakeCounter);
}

//! Crop Disease Explorer Web App (WASM)

pub mod api;
pub mod app;
pub mod dom;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    app::start()
}

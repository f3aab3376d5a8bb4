//! `shelfview-web`
//!
//! Browser presentation of the product table (Leptos, client-side rendered). The
//! CSS class mapping is target-independent so it can be tested natively; the
//! components only exist on `wasm32`.

pub mod classes;

#[cfg(target_arch = "wasm32")]
pub mod app;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point, called when the module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}

//! Feirinha attendance form (client-side rendered)

pub mod app;
pub mod shared;
pub mod usecases;

use wasm_bindgen::prelude::wasm_bindgen;

/// Verbose in dev builds, quieter in release bundles
const LOG_LEVEL: log::Level = if cfg!(debug_assertions) {
    log::Level::Debug
} else {
    log::Level::Info
};

/// Mount the form into `<body>`
#[wasm_bindgen]
pub fn mount() {
    _ = console_log::init_with_level(LOG_LEVEL);
    console_error_panic_hook::set_once();

    log::info!("Starting feirinha attendance form v{}", env!("CARGO_PKG_VERSION"));
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    mount();
}

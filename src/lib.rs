pub mod api;
pub mod common;
pub mod config;
pub mod forms;
pub mod frontend;
pub mod models;
pub mod services;
pub mod types;

#[cfg(feature = "server")]
pub mod web;

/// WASM entry point: mounts the portal into `<body>`
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    frontend::console_log::init(level);
    leptos::mount::mount_to_body(frontend::App);
}

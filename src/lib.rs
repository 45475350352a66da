// ============================================================================
// ROOM BOOKING - Yew frontend
// ============================================================================
// - Models: shapes shared with the backend
// - Services: HTTP + browser dialogs only
// - Stores: component state (reducers)
// - ViewModels: create / read / update / delete flows
// - Hooks + Components: Yew wiring and rendering
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;

#[cfg(test)]
mod testing;

use components::App;
use config::CONFIG;

/// Installs the panic hook and logger, then mounts the app on <body>
pub fn run() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Room Booking starting (backend: {:?})", CONFIG.backend_url());

    yew::Renderer::<App>::new().render();
}

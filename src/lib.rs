//! Rainbow Sand Engine - gesture-driven falling sand in WASM
//!
//! Architecture:
//! - spatial/     - Particle grid and the settle pass
//! - domain/      - Colors, hue cycle and effect configuration
//! - systems/     - Emission policy (gesture samples to particles)
//! - simulation/  - Frame orchestration, render pass and WASM facade
//! - logging      - `log` backend for the browser console

pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod logging;

// Short paths used throughout the crate
pub use spatial::grid;
pub use systems::emission;
pub use domain::{color, config};

pub use simulation::{Command, Effect, EffectCore, PerfStats};

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(feature = "parallel")]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook, console logger at info level
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    logging::init_console_logger(log::LevelFilter::Info);
    web_sys::console::log_1(&"🌈 Rainbow Sand WASM Engine initialized!".into());
}

/// Change the console log level ("off", "error", "warn", "info", "debug", "trace")
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = logging::parse_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("unknown log level '{}'", level)))?;
    log::set_max_level(filter);
    Ok(())
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

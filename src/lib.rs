#[cfg(feature = "console_error_panic_hook")]
extern crate console_error_panic_hook;

// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod platform;
pub mod ports;

// Browser-facing modules
pub mod facades;
pub mod global;

pub use domain::dismissal::{BindStats, DismissError, DismissOutcome, REMOVAL_FAILED_ALERT};
pub use platform::Platform;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    Ok(())
}

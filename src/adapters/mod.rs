/// Adapters module - platform-specific implementations of ports.

pub mod global_logger;
pub mod shared;

#[cfg(target_arch = "wasm32")]
pub mod wasm;
#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub use wasm::ConsoleLogger;
#[cfg(not(target_arch = "wasm32"))]
pub use native::ConsoleLogger;

pub use global_logger::logger;

use std::sync::Arc;

use crate::ports::{AlertPort, RemovalPort};

/// Default alert surface for the current target.
#[cfg(target_arch = "wasm32")]
pub fn default_alerter() -> Arc<dyn AlertPort> {
    Arc::new(wasm::WindowAlert::new())
}

/// Default alert surface for the current target. Native builds have no
/// dialog to raise, so alerts are recorded.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_alerter() -> Arc<dyn AlertPort> {
    Arc::new(shared::RecordingAlert::new())
}

/// Default removal gateway for the current target.
#[cfg(target_arch = "wasm32")]
pub fn default_removal() -> Arc<dyn RemovalPort> {
    Arc::new(wasm::FetchRemoval::new())
}

/// Default removal gateway for the current target. Native builds have no
/// fetch API, so the scripted gateway stands in and accepts every request.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_removal() -> Arc<dyn RemovalPort> {
    Arc::new(shared::ScriptedRemoval::succeeding())
}

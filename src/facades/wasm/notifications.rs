use wasm_bindgen::prelude::*;
use web_sys::Element;

use super::converters;
use crate::adapters::wasm::dom;
use crate::domain::dismissal::types::BindStats;
use crate::platform::Platform;

/// Bind the dismiss controls under the container with the given id
/// (default: `notifications`). Returns the counters as `{ bound, skipped }`.
///
/// A page without the container is a valid page; binding is then a no-op
/// reporting zero counters.
#[wasm_bindgen]
pub fn init_notifications(container_id: Option<String>) -> Result<JsValue, JsValue> {
    let platform = Platform::new();
    let id = container_id.unwrap_or_else(|| dom::DEFAULT_CONTAINER_ID.to_string());

    match dom::container_by_id(&id).map_err(converters::to_js_error)? {
        Some(container) => bind_and_report(&platform, &container),
        None => {
            platform
                .logger()
                .log(&format!("no #{id} container on this page, nothing to bind"));
            converters::to_js_value(&BindStats::default())
        }
    }
}

/// Same as [`init_notifications`], taking the container element directly.
#[wasm_bindgen]
pub fn init_notifications_in(container: &Element) -> Result<JsValue, JsValue> {
    let platform = Platform::new();
    bind_and_report(&platform, container)
}

/// Removal URLs currently wired under the container with the given id
/// (default: `notifications`), as a JS array of strings.
#[wasm_bindgen]
pub fn dismissal_targets(container_id: Option<String>) -> Result<JsValue, JsValue> {
    let id = container_id.unwrap_or_else(|| dom::DEFAULT_CONTAINER_ID.to_string());

    let targets = match dom::container_by_id(&id).map_err(converters::to_js_error)? {
        Some(container) => dom::dismissal_targets(&container).map_err(converters::to_js_error)?,
        None => Vec::new(),
    };

    converters::to_js_value(&targets)
}

fn bind_and_report(platform: &Platform, container: &Element) -> Result<JsValue, JsValue> {
    let stats = dom::bind_container(platform, container).map_err(converters::to_js_error)?;

    platform.logger().log(&format!(
        "bound {} dismiss control(s), skipped {}",
        stats.bound, stats.skipped
    ));

    converters::to_js_value(&stats)
}

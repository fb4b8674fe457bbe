use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::element_visibility::ElementVisibility;
use crate::domain::dismissal::error::DismissError;
use crate::domain::dismissal::operations;
use crate::domain::dismissal::types::{BindStats, DismissOutcome};
use crate::domain::dismissal::validation::validate_removal_url;
use crate::global;
use crate::platform::Platform;

/// Id of the notification list the host pages render.
pub const DEFAULT_CONTAINER_ID: &str = "notifications";

/// Dismiss controls are the buttons inside the container.
const CONTROL_SELECTOR: &str = "button";

/// A control's notification item is its nearest `li` ancestor.
const ITEM_SELECTOR: &str = "li";

/// Attribute carrying the per-item removal URL.
const REMOVAL_URL_ATTRIBUTE: &str = "data-remove-url";

/// Typed accessor for a control's removal URL.
pub fn removal_url(control: &Element) -> Result<String, DismissError> {
    let url = control
        .get_attribute(REMOVAL_URL_ATTRIBUTE)
        .ok_or(DismissError::MissingRemovalUrl)?;
    validate_removal_url(&url)?;
    Ok(url)
}

/// The notification item enclosing a control.
pub fn enclosing_item(control: &Element) -> Result<Element, DismissError> {
    control.closest(ITEM_SELECTOR)?.ok_or(DismissError::ItemNotFound)
}

/// Look up a container element by id. A missing element is `Ok(None)`:
/// pages without a notification list are valid pages.
pub fn container_by_id(id: &str) -> Result<Option<Element>, DismissError> {
    Ok(global::document()?.get_element_by_id(id))
}

/// All dismiss controls currently inside the container, in document order.
pub fn dismiss_controls(container: &Element) -> Result<Vec<Element>, DismissError> {
    let nodes = container.query_selector_all(CONTROL_SELECTOR)?;
    let mut controls = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(node) = nodes.item(index) {
            if let Ok(element) = node.dyn_into::<Element>() {
                controls.push(element);
            }
        }
    }
    Ok(controls)
}

/// Removal URLs wired under the container, in document order. Controls
/// without a usable URL are left out.
pub fn dismissal_targets(container: &Element) -> Result<Vec<String>, DismissError> {
    Ok(dismiss_controls(container)?
        .iter()
        .filter_map(|control| removal_url(control).ok())
        .collect())
}

/// Attach a click listener to every dismiss control in the container.
///
/// Controls with missing or malformed metadata, or without an enclosing
/// item, are skipped with a warning. Binding twice stacks listeners, so
/// callers bind once per container per page load.
pub fn bind_container(platform: &Platform, container: &Element) -> Result<BindStats, DismissError> {
    let mut stats = BindStats::default();

    for control in dismiss_controls(container)? {
        match removal_url(&control).and_then(|_| enclosing_item(&control)) {
            Ok(_) => {
                attach_click(platform, &control)?;
                stats.bound += 1;
            }
            Err(err) => {
                platform
                    .logger()
                    .warn(&format!("skipping dismiss control: {err}"));
                stats.skipped += 1;
            }
        }
    }

    Ok(stats)
}

/// Resolve the clicked control's item and URL, then run the dismissal flow.
///
/// Resolution happens at click time, so markup edits between binding and
/// the click are honored.
pub async fn dismiss_from_control(
    platform: &Platform,
    control: &Element,
) -> Result<DismissOutcome, DismissError> {
    let item = enclosing_item(control)?;
    let url = removal_url(control)?;
    let item = ElementVisibility::from_element(item)?;
    Ok(operations::dismiss(platform, &url, &item).await)
}

fn attach_click(platform: &Platform, control: &Element) -> Result<(), DismissError> {
    let platform = platform.clone();
    let captured = control.clone();

    let listener = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        let platform = platform.clone();
        let control = captured.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = dismiss_from_control(&platform, &control).await {
                platform.logger().warn(&format!("dismiss aborted: {err}"));
            }
        });
    }) as Box<dyn FnMut(web_sys::Event)>);

    control.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;

    // Listeners live for the page; the closure is intentionally leaked.
    listener.forget();

    Ok(())
}

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::domain::dismissal::error::DismissError;
use crate::domain::dismissal::types::HIDE_DURATION_MS;
use crate::ports::VisibilityPort;

/// Visibility of one notification item, backed by its DOM element.
///
/// Hiding fades the element out over `HIDE_DURATION_MS` and then takes it
/// out of layout with `display: none`. The fade is cosmetic; `display: none`
/// is the contract.
pub struct ElementVisibility {
    element: HtmlElement,
}

impl ElementVisibility {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn from_element(element: Element) -> Result<Self, DismissError> {
        element
            .dyn_into::<HtmlElement>()
            .map(Self::new)
            .map_err(|_| DismissError::ItemNotFound)
    }
}

#[async_trait(?Send)]
impl VisibilityPort for ElementVisibility {
    async fn hide(&self) {
        let style = self.element.style();

        // Styling failures must not keep the item on screen, so they are
        // swallowed rather than propagated.
        let _ = style.set_property(
            "transition",
            &format!("opacity {HIDE_DURATION_MS}ms linear"),
        );
        let _ = style.set_property("opacity", "0");

        TimeoutFuture::new(HIDE_DURATION_MS).await;

        let _ = style.set_property("display", "none");
    }

    fn is_hidden(&self) -> bool {
        self.element
            .style()
            .get_property_value("display")
            .map(|value| value == "none")
            .unwrap_or(false)
    }
}

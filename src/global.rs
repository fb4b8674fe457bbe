use web_sys::{Document, Window};

use crate::domain::dismissal::error::DismissError;

pub fn window() -> Result<Window, DismissError> {
    web_sys::window().ok_or_else(|| DismissError::dom_unavailable("no Window in this scope"))
}

pub fn document() -> Result<Document, DismissError> {
    window()?
        .document()
        .ok_or_else(|| DismissError::dom_unavailable("Window has no Document"))
}

use wasm_bindgen::JsValue;

use crate::domain::dismissal::error::DismissError;

/// Conversion from JsValue to DismissError for WASM infrastructure
impl From<JsValue> for DismissError {
    fn from(err: JsValue) -> Self {
        DismissError::dom_unavailable(
            err.as_string()
                .unwrap_or_else(|| "Unknown JavaScript error".to_string()),
        )
    }
}

/// Conversion from DismissError to JsValue for the WASM boundary
impl From<DismissError> for JsValue {
    fn from(error: DismissError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

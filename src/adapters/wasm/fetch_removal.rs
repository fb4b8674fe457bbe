use async_trait::async_trait;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, Response};

use crate::domain::dismissal::error::DismissError;
use crate::global;
use crate::ports::RemovalPort;

/// Removal gateway backed by the browser fetch API.
#[derive(Debug, Clone, Copy)]
pub struct FetchRemoval;

impl FetchRemoval {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FetchRemoval {
    fn default() -> Self {
        Self::new()
    }
}

fn describe_js_error(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }
}

#[async_trait(?Send)]
impl RemovalPort for FetchRemoval {
    async fn request_removal(&self, url: &str) -> Result<(), DismissError> {
        let window =
            global::window().map_err(|e| DismissError::removal_request_failed(e.to_string()))?;

        let request = Request::new_with_str(url)
            .map_err(|e| DismissError::removal_request_failed(describe_js_error(&e)))?;

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| DismissError::removal_request_failed(describe_js_error(&e)))?;

        let response: Response = response.dyn_into().map_err(|_| {
            DismissError::removal_request_failed("fetch yielded a non-Response value")
        })?;

        // The body is ignored; only the status decides the outcome.
        if !response.ok() {
            return Err(DismissError::removal_request_failed(format!(
                "removal endpoint answered HTTP {}",
                response.status()
            )));
        }

        Ok(())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_gateway_creation() {
        let _gateway = FetchRemoval::new();
        let _default = FetchRemoval::default();
    }

    #[wasm_bindgen_test]
    async fn test_unserved_path_fails_the_request() {
        let gateway = FetchRemoval::new();
        let result = gateway
            .request_removal("/nothing-is-served-under-this-path")
            .await;

        assert!(matches!(
            result,
            Err(DismissError::RemovalRequestFailed(_))
        ));
    }

    #[wasm_bindgen_test]
    async fn test_unparseable_url_fails_the_request() {
        let gateway = FetchRemoval::new();
        let result = gateway.request_removal("https://[invalid").await;

        assert!(matches!(
            result,
            Err(DismissError::RemovalRequestFailed(_))
        ));
    }
}

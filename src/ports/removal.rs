use async_trait::async_trait;

use crate::domain::dismissal::error::DismissError;

/// Removal port - the server endpoint that deletes a notification.
#[async_trait(?Send)]
pub trait RemovalPort: Send + Sync {
    /// Issue one GET against the per-item removal URL.
    ///
    /// Succeeds only for a 2xx response. A network error, a non-success
    /// status or a transport exception all surface as
    /// `DismissError::RemovalRequestFailed`. The response body is ignored.
    async fn request_removal(&self, url: &str) -> Result<(), DismissError>;
}

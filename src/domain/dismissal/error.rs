use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DismissError {
    /// The removal endpoint could not be reached or answered non-2xx.
    RemovalRequestFailed(String),
    /// The dismiss control carries no removal URL.
    MissingRemovalUrl,
    /// The dismiss control carries a removal URL no request could target.
    MalformedRemovalUrl(String),
    /// The dismiss control has no enclosing notification item.
    ItemNotFound,
    /// The document or window is not reachable from this scope.
    DomUnavailable(String),
}

impl fmt::Display for DismissError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DismissError::RemovalRequestFailed(detail) => {
                write!(f, "Removal request failed: {detail}")
            }
            DismissError::MissingRemovalUrl => {
                write!(f, "Dismiss control has no removal URL")
            }
            DismissError::MalformedRemovalUrl(url) => {
                write!(f, "Malformed removal URL: {url:?}")
            }
            DismissError::ItemNotFound => {
                write!(f, "Dismiss control has no enclosing notification item")
            }
            DismissError::DomUnavailable(detail) => {
                write!(f, "DOM unavailable: {detail}")
            }
        }
    }
}

impl std::error::Error for DismissError {}

impl DismissError {
    pub fn removal_request_failed(detail: impl Into<String>) -> Self {
        DismissError::RemovalRequestFailed(detail.into())
    }

    pub fn dom_unavailable(detail: impl Into<String>) -> Self {
        DismissError::DomUnavailable(detail.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failure_display_carries_detail() {
        let err = DismissError::removal_request_failed("HTTP 500");
        assert_eq!(err.to_string(), "Removal request failed: HTTP 500");
    }

    #[test]
    fn test_malformed_url_display_quotes_the_value() {
        let err = DismissError::MalformedRemovalUrl("/a b".to_string());
        assert_eq!(err.to_string(), "Malformed removal URL: \"/a b\"");
    }

    #[test]
    fn test_missing_url_display() {
        assert_eq!(
            DismissError::MissingRemovalUrl.to_string(),
            "Dismiss control has no removal URL"
        );
    }

    #[test]
    fn test_errors_compare_by_value() {
        assert_eq!(
            DismissError::removal_request_failed("x"),
            DismissError::RemovalRequestFailed("x".to_string())
        );
        assert_ne!(DismissError::ItemNotFound, DismissError::MissingRemovalUrl);
    }
}

use super::error::DismissError;

/// Bind-time well-formedness check for removal URLs.
///
/// Deliberately light: the server renders the markup and is trusted to
/// supply real URLs, so this only rejects values no request could ever
/// target. Anything subtler is left to the browser and surfaces as a
/// failed request.
pub fn validate_removal_url(url: &str) -> Result<(), DismissError> {
    if url.trim().is_empty() {
        return Err(DismissError::MissingRemovalUrl);
    }

    if url.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(DismissError::MalformedRemovalUrl(url.to_string()));
    }

    Ok(())
}

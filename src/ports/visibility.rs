use async_trait::async_trait;

/// Visibility port - the visual state of a single notification item.
///
/// Implementations wrap a UI handle and run on the UI event loop, so unlike
/// the other ports this trait does not require `Send + Sync`.
#[async_trait(?Send)]
pub trait VisibilityPort {
    /// Remove the item from view, resolving once it no longer occupies
    /// layout. Hiding is unconditional in the dismissal flow, so there is
    /// no error channel.
    async fn hide(&self);

    /// Whether the item is currently hidden.
    fn is_hidden(&self) -> bool;
}

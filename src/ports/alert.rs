/// Alert port - the blocking, user-visible message surface.
///
/// The dismissal flow raises at most one alert per click, carrying fixed
/// text, and only when the removal request fails.
pub trait AlertPort: Send + Sync {
    /// Show a blocking alert with the given message.
    fn alert(&self, message: &str);
}

/// How long the animated hide runs before the item is dropped from layout,
/// in milliseconds.
pub const HIDE_DURATION_MS: u32 = 100;

/// Result of one dismissal flow.
///
/// Informational only: the flow never fails upward, and a failed removal
/// still hides the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissOutcome {
    /// The removal endpoint acknowledged the request.
    Removed,
    /// The removal request failed; the user was alerted and the item was
    /// hidden anyway.
    RemovalFailed,
}

/// Counters reported by container binding.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindStats {
    /// Dismiss controls that received a click listener.
    pub bound: usize,
    /// Controls skipped because their markup was incomplete.
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_stats_start_at_zero() {
        let stats = BindStats::default();
        assert_eq!(stats.bound, 0);
        assert_eq!(stats.skipped, 0);
    }
}

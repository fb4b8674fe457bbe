use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::ports::VisibilityPort;

/// Instantaneous, flag-based visibility standing in for a real UI element.
#[derive(Default)]
pub struct FlagVisibility {
    hidden: AtomicBool,
    hide_calls: AtomicUsize,
}

impl FlagVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `hide` has been invoked.
    pub fn hide_calls(&self) -> usize {
        self.hide_calls.load(Ordering::Relaxed)
    }
}

#[async_trait(?Send)]
impl VisibilityPort for FlagVisibility {
    async fn hide(&self) {
        self.hidden.store(true, Ordering::Relaxed);
        self.hide_calls.fetch_add(1, Ordering::Relaxed);
    }

    fn is_hidden(&self) -> bool {
        self.hidden.load(Ordering::Relaxed)
    }
}

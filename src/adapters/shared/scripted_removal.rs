use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::dismissal::error::DismissError;
use crate::ports::RemovalPort;

/// Removal gateway that replays scripted outcomes and records every
/// requested URL.
///
/// Queued outcomes are consumed first, one per request; after the queue
/// drains, every request yields the default outcome.
pub struct ScriptedRemoval {
    default_outcome: Result<(), DismissError>,
    queued: Mutex<VecDeque<Result<(), DismissError>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedRemoval {
    /// Gateway whose every request succeeds.
    pub fn succeeding() -> Self {
        Self::with_default(Ok(()))
    }

    /// Gateway whose every request fails with the given detail.
    pub fn failing(detail: &str) -> Self {
        Self::with_default(Err(DismissError::removal_request_failed(detail)))
    }

    pub fn with_default(default_outcome: Result<(), DismissError>) -> Self {
        Self {
            default_outcome,
            queued: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue an outcome for the next request.
    pub fn queue_outcome(&self, outcome: Result<(), DismissError>) {
        self.queued.lock().push_back(outcome);
    }

    /// URLs requested so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait(?Send)]
impl RemovalPort for ScriptedRemoval {
    async fn request_removal(&self, url: &str) -> Result<(), DismissError> {
        self.requests.lock().push(url.to_string());
        match self.queued.lock().pop_front() {
            Some(outcome) => outcome,
            None => self.default_outcome.clone(),
        }
    }
}

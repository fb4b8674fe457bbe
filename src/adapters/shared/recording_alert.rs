use parking_lot::Mutex;

use crate::ports::AlertPort;

/// Alert adapter that records messages instead of raising dialogs.
#[derive(Default)]
pub struct RecordingAlert {
    messages: Mutex<Vec<String>>,
}

impl RecordingAlert {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }

    pub fn alert_count(&self) -> usize {
        self.messages.lock().len()
    }
}

impl AlertPort for RecordingAlert {
    fn alert(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

use crate::global;
use crate::ports::AlertPort;

/// Blocking alert via `window.alert`.
#[derive(Debug, Clone, Copy)]
pub struct WindowAlert;

impl WindowAlert {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowAlert {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertPort for WindowAlert {
    fn alert(&self, message: &str) {
        match global::window() {
            Ok(window) => {
                let _ = window.alert_with_message(message);
            }
            // Out of a window context the message still has to land somewhere.
            Err(_) => crate::adapters::logger().error(message),
        }
    }
}

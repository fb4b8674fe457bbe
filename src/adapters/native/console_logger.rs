use crate::ports::LoggerPort;

/// Native logger implementation using standard output and error streams.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger;

impl ConsoleLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("[LOG] {message}");
    }

    fn error(&self, message: &str) {
        eprintln!("[ERROR] {message}");
    }

    fn warn(&self, message: &str) {
        eprintln!("[WARN] {message}");
    }
}

use once_cell::sync::Lazy;

use crate::adapters::ConsoleLogger;
use crate::ports::LoggerPort;

static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

/// Global logger instance for the current platform.
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}

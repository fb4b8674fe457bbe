/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// This module contains all the port traits that define contracts between the dismissal
/// flow and the infrastructure adapters. These traits enable the hexagonal architecture by
/// decoupling the flow from browser-specific implementations.

pub mod alert;
pub mod logger;
pub mod removal;
pub mod visibility;

pub use alert::AlertPort;
pub use logger::LoggerPort;
pub use removal::RemovalPort;
pub use visibility::VisibilityPort;

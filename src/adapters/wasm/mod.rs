pub mod console_logger;
pub mod dom;
pub mod element_visibility;
pub mod error_conversions;
pub mod fetch_removal;
pub mod window_alert;

pub use console_logger::ConsoleLogger;
pub use element_visibility::ElementVisibility;
pub use fetch_removal::FetchRemoval;
pub use window_alert::WindowAlert;

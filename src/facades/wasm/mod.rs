pub mod converters;
pub mod notifications;

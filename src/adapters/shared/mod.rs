pub mod flag_visibility;
pub mod recording_alert;
pub mod scripted_removal;

pub use flag_visibility::FlagVisibility;
pub use recording_alert::RecordingAlert;
pub use scripted_removal::ScriptedRemoval;

/// User-facing copy shown by the dismissal flow.
///
/// The host product ships pt-BR pages; the alert text must match them
/// byte for byte, so it lives here as the single source of truth.
pub const REMOVAL_FAILED_ALERT: &str = "Ocorreu algum erro, contate o administrador";

use super::messages;
use super::types::DismissOutcome;
use crate::platform::Platform;
use crate::ports::VisibilityPort;

/// Run the dismissal flow for one notification item.
///
/// Issues the removal GET, alerts the user with the fixed message when the
/// request fails, and hides the item once the request has settled. The hide
/// is unconditional: a failed removal still hides the item, and the request
/// failure is neither logged nor escalated, so the view can drift ahead of
/// server state until the next page render.
pub async fn dismiss(
    platform: &Platform,
    url: &str,
    item: &dyn VisibilityPort,
) -> DismissOutcome {
    let outcome = match platform.removal().request_removal(url).await {
        Ok(()) => DismissOutcome::Removed,
        Err(_) => {
            platform.alerter().alert(messages::REMOVAL_FAILED_ALERT);
            DismissOutcome::RemovalFailed
        }
    };

    item.hide().await;

    outcome
}

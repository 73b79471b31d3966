//! Server actions triggered from the menu.
//!
//! Restart goes through [`ServerApi`]. Power off and power on have no API
//! contract yet and only produce a placeholder message; they never issue a
//! request.

use tracing::{info, warn};

use crate::api::{RestartOutcome, ServerApi};
use crate::domain::{App, MenuItem, Server};

/// Send the confirmed restart, if one is pending, and record the result.
///
/// Blocks the caller for the whole round trip. A no-op unless the app is in
/// the `Restarting` view.
pub async fn run_pending<A: ServerApi + ?Sized>(app: &mut App, api: &A) {
    let Some(server) = app.pending_restart() else {
        return;
    };
    let server_id = server.server_id.clone();

    info!(server_id = %server_id, "restarting server");
    let text = match api.restart_server(&server_id).await {
        Ok(outcome) => {
            info!(
                server_id = %server_id,
                status_code = outcome.status_code,
                success = outcome.response.status,
                "restart request answered"
            );
            restart_summary(&outcome)
        }
        Err(e) => {
            warn!(server_id = %server_id, error = %e, "restart request failed");
            format!("Error restarting server: {}", e)
        }
    };

    app.complete_restart(text);
}

/// Modal text for an answered restart.
pub fn restart_summary(outcome: &RestartOutcome) -> String {
    format!(
        "Status Code: {}\nSuccess: {}\nMessage: {}",
        outcome.status_code, outcome.response.status, outcome.response.message
    )
}

/// Placeholder text for actions without an API call.
pub fn not_implemented_message(item: MenuItem, server: &Server) -> String {
    let action = match item {
        MenuItem::PowerOffServer => "Power off",
        MenuItem::PowerOnServer => "Power on",
        other => other.label(),
    };
    format!(
        "{} is not implemented yet.\nNo request was sent for server {}.",
        action, server.server_id
    )
}

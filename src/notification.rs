//! Desktop mirror of export acknowledgements.

use crate::delivery::DeliveryOutcome;

const APP_NAME: &str = "layerglow";
const EXPORT_SUMMARY: &str = "Gradient stylesheet";

pub fn notify_export(outcome: DeliveryOutcome) {
    let shown = notify_rust::Notification::new()
        .appname(APP_NAME)
        .summary(EXPORT_SUMMARY)
        .body(outcome.acknowledgement())
        .show();
    if let Err(err) = shown {
        tracing::warn!(%err, ?outcome, "export notification failed");
    }
}

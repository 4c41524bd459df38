//! Provider status vocabulary normalization.

use gateway_types::PaymentStatus;

/// Maps a free-form provider status string to the domain status.
///
/// The lookup is case-insensitive and total: any string outside the fixed
/// table fails open to `Pending` rather than erroring, so a newly
/// introduced provider state degrades to "still in flight" instead of
/// breaking status queries. Every miss is logged at WARN so unmapped
/// terminal states do not slip by silently.
pub fn normalize_status(raw: &str) -> PaymentStatus {
    match raw.to_ascii_lowercase().as_str() {
        "pending" => PaymentStatus::Pending,
        "completed" | "paid" | "success" => PaymentStatus::Completed,
        "failed" => PaymentStatus::Failed,
        "cancelled" => PaymentStatus::Cancelled,
        "expired" => PaymentStatus::Expired,
        other => {
            tracing::warn!(provider_status = other, "unmapped provider status, defaulting to pending");
            PaymentStatus::Pending
        }
    }
}

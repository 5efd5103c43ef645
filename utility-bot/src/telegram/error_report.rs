//! Logs handler and transport failures. Nothing is retried; the receive loop keeps running.

use dbot_core::DbotError;
use teloxide::RequestError;
use tracing::error;

/// Failure class used in the `kind` log field.
fn error_kind(err: &DbotError) -> &'static str {
    match err {
        DbotError::Telegram(RequestError::Api(_)) => "api",
        DbotError::Telegram(RequestError::RetryAfter(_)) => "rate_limit",
        DbotError::Telegram(_) => "request",
        DbotError::Bot(_) => "handler",
    }
}

/// Reports a failed update at error level, singling out Telegram API rejections and rate limits.
pub fn report_error(err: &DbotError, chat_id: Option<i64>) {
    let kind = error_kind(err);
    match err {
        DbotError::Telegram(RequestError::Api(api)) => {
            error!(chat_id = ?chat_id, kind, api_error = ?api, "Telegram API error: {}", api);
        }
        DbotError::Telegram(RequestError::RetryAfter(after)) => {
            error!(chat_id = ?chat_id, kind, retry_after = ?after, "Telegram rate limit hit, request dropped");
        }
        DbotError::Telegram(e) => {
            error!(chat_id = ?chat_id, kind, error = %e, "Telegram request failed");
        }
        other => {
            error!(chat_id = ?chat_id, kind, error = %other, "Update handling failed");
        }
    }
}

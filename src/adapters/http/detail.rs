//! Extraction of the `detail` message from backend error bodies.
//!
//! The backend reports errors in three shapes:
//!
//! - `{"detail": "mensaje"}` - a plain string
//! - `{"detail": [{"msg": "..."}, ...]}` - a validation-error list
//! - `{"detail": {"msg": "..."}}` - a single structured error
//!
//! Anything else falls back to a generic server-error message.

use serde_json::Value;

/// Fallback when the error body shape is unrecognized.
pub const GENERIC_SERVER_ERROR: &str = "Error en el servidor";

/// Extracts the user-facing message from a non-2xx response body.
pub fn extract_detail(body: &str) -> String {
    let Ok(parsed) = serde_json::from_str::<Value>(body) else {
        return GENERIC_SERVER_ERROR.to_string();
    };

    match parsed.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(Value::Array(errors)) => {
            let messages: Vec<&str> = errors
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(Value::as_str))
                .collect();
            if messages.is_empty() {
                GENERIC_SERVER_ERROR.to_string()
            } else {
                messages.join(", ")
            }
        }
        Some(Value::Object(detail)) => detail
            .get("msg")
            .and_then(Value::as_str)
            .unwrap_or(GENERIC_SERVER_ERROR)
            .to_string(),
        _ => GENERIC_SERVER_ERROR.to_string(),
    }
}

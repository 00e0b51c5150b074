//! Request extractors with JSON error bodies.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` whose rejections render as [`AppError`] JSON instead of
/// axum's plain-text 4xx responses.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

const DATA_ERROR_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Split a JSON data error into the top-level field it concerns (if the
/// decoder named one) and a message without the position suffix.
///
/// The decoder reports a missing field as ``missing field `phone` at line 1
/// column 22`` and a bad value as `car_id: invalid type: ... at line 1 column 9`.
pub fn describe_data_error(body_text: &str) -> (Option<String>, String) {
    let detail = body_text.strip_prefix(DATA_ERROR_PREFIX).unwrap_or(body_text);
    let detail = match detail.rfind(" at line ") {
        Some(pos) => &detail[..pos],
        None => detail,
    };

    if let Some(rest) = detail.strip_prefix("missing field `") {
        if let Some((field, _)) = rest.split_once('`') {
            return (Some(field.to_string()), "is required".to_string());
        }
    }

    if let Some((path, message)) = detail.split_once(": ") {
        let field = path.split(['.', '[']).next().unwrap_or(path);
        if !field.is_empty() && field.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return (Some(field.to_string()), message.to_string());
        }
    }

    (None, detail.to_string())
}

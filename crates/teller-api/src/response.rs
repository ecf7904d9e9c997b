//! JSON envelope shared by every endpoint

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// `{ success, data?, error?, timestamp }`. Exactly one of `data` and
/// `error` is present.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Payload of a plain confirmation.
#[derive(Serialize)]
pub struct Confirmation {
    pub message: &'static str,
}

fn now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn failure(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorBody {
                code,
                message: message.into(),
            }),
            timestamp: now(),
        }
    }
}

impl ApiResponse<Confirmation> {
    pub fn confirmation(message: &'static str) -> Self {
        Self::success(Confirmation { message })
    }
}

use std::time::SystemTime;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::dto::format_system_time;

const WELCOME_MESSAGE: &str = "Welcome to the Games API";

/// Greeting returned by the root route.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeBanner {
    /// Fixed greeting.
    pub message: String,
    /// Identifier generated for this request only.
    pub request_id: Uuid,
    /// Current UTC time, RFC 3339.
    pub date_time: String,
}

impl WelcomeBanner {
    /// Build a banner stamped with a fresh request id and the current time.
    pub fn now() -> Self {
        Self {
            message: WELCOME_MESSAGE.into(),
            request_id: Uuid::new_v4(),
            date_time: format_system_time(SystemTime::now()),
        }
    }
}

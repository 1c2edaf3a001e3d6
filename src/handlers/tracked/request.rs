//! Tracked user request DTOs

use serde::Deserialize;
use validator::Validate;

/// Add tracked user request
#[derive(Debug, Deserialize, Validate)]
pub struct AddTrackedUserRequest {
    #[validate(length(min = 1, max = 64))]
    pub handle: String,

    /// Timeframe used for the stored summary and the returned views
    pub timeframe: Option<String>,
}

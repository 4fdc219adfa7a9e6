use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::dto::reset_code::ResetCodeSentDTO;

/// `email` is optional on the wire so that a missing field is reported as
/// `invalid-argument` rather than a deserialization failure.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ResetCodeRequest {
    #[serde(default)]
    #[schema(example = "user@example.com")]
    pub email: Option<String>,
}

/// Callable-function envelope: `{ "data": { "email": ... } }`.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CallableResetCodeRequest {
    #[serde(default)]
    pub data: Option<ResetCodeRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResetCodeResponse {
    pub success: bool,
    /// Omitted when echoing the code is disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "482193")]
    pub code: Option<String>,
}

impl ResetCodeResponse {
    pub fn new(sent: ResetCodeSentDTO, echo_code: bool) -> Self {
        Self {
            success: true,
            code: echo_code.then(|| sent.code.into()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CallableResetCodeResponse {
    pub result: ResetCodeResponse,
}

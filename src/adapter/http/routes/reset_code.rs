use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapter::http::app_error_impl::ErrorResponse;
use crate::adapter::http::schema::reset_code::{
    CallableResetCodeRequest, CallableResetCodeResponse, ResetCodeRequest, ResetCodeResponse,
};
use crate::adapter::http::validation::AppJson;
use crate::application::app_error::AppResult;
use crate::application::dto::reset_code::SendResetCodeDTO;
use crate::application::interactors::reset_code::SendResetCodeInteractor;
use crate::infra::config::AppConfig;

fn send_reset_code_dto(config: &AppConfig, email: Option<String>) -> SendResetCodeDTO {
    SendResetCodeDTO {
        email,
        from: config.email.from.clone(),
        subject: config.reset_code.subject.clone(),
    }
}

#[utoipa::path(
    post,
    path = "/reset-code",
    tag = "Password reset",
    request_body(
        content = ResetCodeRequest,
        example = json!(
            {
                "email": "user@example.com"
            }
        )
    ),
    responses(
        (
            status = 200,
            description = "Reset code sent",
            body = ResetCodeResponse,
            example = json!(
                {
                    "success": true,
                    "code": "482193"
                }
            )
        ),
        (
            status = 400,
            description = "Missing or empty email",
            body = ErrorResponse,
            example = json!(
                {
                    "error": {
                        "kind": "invalid-argument",
                        "message": "Email required"
                    }
                }
            )
        ),
        (
            status = 500,
            description = "Email could not be sent",
            body = ErrorResponse,
            example = json!(
                {
                    "error": {
                        "kind": "internal",
                        "message": "Error sending email"
                    }
                }
            )
        )
    )
)]
pub async fn send_reset_code(
    interactor: SendResetCodeInteractor,
    State(config): State<Arc<AppConfig>>,
    AppJson(payload): AppJson<ResetCodeRequest>,
) -> AppResult<impl IntoResponse> {
    let dto = send_reset_code_dto(&config, payload.email);
    let sent = interactor.execute(dto).await?;
    Ok((
        StatusCode::OK,
        Json(ResetCodeResponse::new(sent, config.reset_code.echo_code)),
    ))
}

#[utoipa::path(
    post,
    path = "/sendResetCode",
    tag = "Password reset",
    request_body(
        content = CallableResetCodeRequest,
        example = json!(
            {
                "data": {
                    "email": "user@example.com"
                }
            }
        )
    ),
    responses(
        (
            status = 200,
            description = "Reset code sent",
            body = CallableResetCodeResponse,
            example = json!(
                {
                    "result": {
                        "success": true,
                        "code": "482193"
                    }
                }
            )
        ),
        (
            status = 400,
            description = "Missing or empty email",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Email could not be sent",
            body = ErrorResponse
        )
    )
)]
pub async fn send_reset_code_callable(
    interactor: SendResetCodeInteractor,
    State(config): State<Arc<AppConfig>>,
    AppJson(payload): AppJson<CallableResetCodeRequest>,
) -> AppResult<impl IntoResponse> {
    let email = payload.data.unwrap_or_default().email;
    let dto = send_reset_code_dto(&config, email);
    let sent = interactor.execute(dto).await?;
    Ok((
        StatusCode::OK,
        Json(CallableResetCodeResponse {
            result: ResetCodeResponse::new(sent, config.reset_code.echo_code),
        }),
    ))
}

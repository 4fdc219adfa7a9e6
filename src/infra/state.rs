use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;

use crate::application::app_error::AppError;
use crate::application::interactors::reset_code::SendResetCodeInteractor;
use crate::application::interface::code::CodeGenerator;
use crate::application::interface::email::EmailSender;
use crate::infra::config::AppConfig;

/// Read-only dependencies shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub email_sender: Arc<dyn EmailSender>,
    pub code_generator: Arc<dyn CodeGenerator>,
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

pub trait FromAppState: Sized {
    fn from_app_state(state: &AppState) -> Self;
}

// SendResetCodeInteractor
impl FromAppState for SendResetCodeInteractor {
    fn from_app_state(state: &AppState) -> Self {
        SendResetCodeInteractor::new(state.email_sender.clone(), state.code_generator.clone())
    }
}

impl<S> FromRequestParts<S> for SendResetCodeInteractor
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        Ok(SendResetCodeInteractor::from_app_state(&app_state))
    }
}

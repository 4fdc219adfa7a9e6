use crate::application::app_error::AppResult;
use crate::domain::entities::email_message::EmailMessage;
use async_trait::async_trait;

/// Send-one-message capability. Implementations are built once at startup and
/// shared by every request.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> AppResult<()>;
}

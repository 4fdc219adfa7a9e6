use std::sync::Arc;

use tracing::{error, info, warn};

use crate::application::app_error::AppResult;
use crate::application::dto::reset_code::{ResetCodeSentDTO, SendResetCodeDTO};
use crate::application::interface::code::CodeGenerator;
use crate::application::interface::email::EmailSender;
use crate::domain::entities::email_message::EmailMessage;
use crate::domain::entities::reset_request::ResetRequest;

#[derive(Clone)]
pub struct SendResetCodeInteractor {
    email_sender: Arc<dyn EmailSender>,
    code_generator: Arc<dyn CodeGenerator>,
}

impl SendResetCodeInteractor {
    pub fn new(email_sender: Arc<dyn EmailSender>, code_generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            email_sender,
            code_generator,
        }
    }

    /// Validates the request, draws a fresh code and mails it. Any failure ends
    /// the invocation; nothing is retried.
    pub async fn execute(&self, dto: SendResetCodeDTO) -> AppResult<ResetCodeSentDTO> {
        let email = ResetRequest::new(dto.email).into_email().inspect_err(|err| {
            warn!("Rejected password reset code request: {}", err);
        })?;

        let code = self.code_generator.generate();
        let message = EmailMessage::reset_code(dto.from, email, dto.subject, &code);

        info!("Sending password reset code to {}", message.to);
        if let Err(err) = self.email_sender.send(&message).await {
            error!("Failed to send password reset code to {}: {}", message.to, err);
            return Err(err);
        }
        info!("Password reset code sent to {}", message.to);

        Ok(ResetCodeSentDTO { code })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use async_trait::async_trait;
    use mockall::mock;
    use rstest::rstest;

    use crate::adapter::crypto::code::OsRngCodeGenerator;
    use crate::application::app_error::{AppError, AppResult, ErrorKind};
    use crate::application::dto::reset_code::SendResetCodeDTO;
    use crate::application::interactors::reset_code::SendResetCodeInteractor;
    use crate::application::interface::code::CodeGenerator;
    use crate::application::interface::email::EmailSender;
    use crate::domain::entities::email_message::EmailMessage;
    use crate::domain::entities::reset_code::ResetCode;

    // Mocks
    mock! {
        pub EmailSenderMock {}
        #[async_trait]
        impl EmailSender for EmailSenderMock {
            async fn send(&self, message: &EmailMessage) -> AppResult<()>;
        }
    }

    mock! {
        pub CodeGeneratorMock {}
        impl CodeGenerator for CodeGeneratorMock {
            fn generate(&self) -> ResetCode;
        }
    }

    // Fixtures
    fn dto(email: Option<&str>) -> SendResetCodeDTO {
        SendResetCodeDTO {
            email: email.map(str::to_string),
            from: "noreply@example.com".to_string(),
            subject: "Password Reset Code".to_string(),
        }
    }

    fn fixed_code_generator(value: u32) -> MockCodeGeneratorMock {
        let mut generator = MockCodeGeneratorMock::new();
        generator
            .expect_generate()
            .times(1)
            .returning(move || ResetCode::try_from(value).expect("valid code"));
        generator
    }

    #[rstest]
    #[tokio::test]
    async fn test_send_reset_code_success() {
        let mut email_sender = MockEmailSenderMock::new();
        email_sender
            .expect_send()
            .withf(|message| {
                message.to == "user@example.com"
                    && message.from == "noreply@example.com"
                    && message.subject == "Password Reset Code"
                    && message.body.contains("482193")
            })
            .times(1)
            .returning(|_| Ok(()));

        let interactor =
            SendResetCodeInteractor::new(Arc::new(email_sender), Arc::new(fixed_code_generator(482_193)));

        let result = interactor.execute(dto(Some("user@example.com"))).await.expect("code sent");

        assert_eq!(result.code.as_str(), "482193");
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[tokio::test]
    async fn test_send_reset_code_invalid_request_never_dispatches(#[case] email: Option<&str>) {
        let mut email_sender = MockEmailSenderMock::new();
        email_sender.expect_send().times(0);
        let mut code_generator = MockCodeGeneratorMock::new();
        code_generator.expect_generate().times(0);

        let interactor = SendResetCodeInteractor::new(Arc::new(email_sender), Arc::new(code_generator));

        let result = interactor.execute(dto(email)).await;

        match result {
            Err(err) => {
                assert_eq!(err.kind(), ErrorKind::InvalidArgument);
                assert_eq!(err.public_message(), "Email required");
            }
            Ok(_) => panic!("expected InvalidArgument"),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn test_send_reset_code_dispatch_failure_is_internal() {
        let mut email_sender = MockEmailSenderMock::new();
        email_sender
            .expect_send()
            .times(1)
            .returning(|_| Err(AppError::EmailSendError("Connection refused (os error 111)".to_string())));

        let interactor =
            SendResetCodeInteractor::new(Arc::new(email_sender), Arc::new(fixed_code_generator(123_456)));

        let err = interactor
            .execute(dto(Some("user@example.com")))
            .await
            .expect_err("dispatch must fail");

        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().contains("Connection refused"));
        assert!(!err.public_message().contains("Connection refused"));
    }

    #[rstest]
    #[tokio::test]
    async fn test_send_reset_code_timeout_is_internal() {
        let mut email_sender = MockEmailSenderMock::new();
        email_sender
            .expect_send()
            .times(1)
            .returning(|_| Err(AppError::EmailSendTimeout(Duration::from_secs(10))));

        let interactor =
            SendResetCodeInteractor::new(Arc::new(email_sender), Arc::new(fixed_code_generator(123_456)));

        let err = interactor
            .execute(dto(Some("user@example.com")))
            .await
            .expect_err("dispatch must time out");

        assert_eq!(err.kind(), ErrorKind::Internal);
    }

    #[rstest]
    #[tokio::test]
    async fn test_send_reset_code_draws_independent_codes() {
        let mut email_sender = MockEmailSenderMock::new();
        email_sender.expect_send().times(20).returning(|_| Ok(()));

        let interactor = SendResetCodeInteractor::new(Arc::new(email_sender), Arc::new(OsRngCodeGenerator));

        let mut codes = Vec::new();
        for _ in 0..20 {
            let result = interactor.execute(dto(Some("user@example.com"))).await.expect("code sent");
            assert_eq!(result.code.as_str().len(), 6);
            assert!(result.code.as_str().bytes().all(|b| b.is_ascii_digit()));
            assert!((100_000..=999_999).contains(&result.code.value()));
            codes.push(result.code);
        }

        codes.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        codes.dedup();
        assert!(codes.len() > 1, "codes must not repeat across invocations");
    }
}

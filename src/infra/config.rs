use secrecy::SecretString;
use serde::{Deserialize, Serialize};

pub const SMTP_USERNAME_ENV: &str = "SMTP_USERNAME";
pub const SMTP_PASSWORD_ENV: &str = "SMTP_PASSWORD";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub log_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    pub allow_origins: Vec<String>,
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    Smtp,
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    pub provider: EmailProvider,
    pub local_output_dir: String,
    /// Sender mailbox, e.g. `Zapac <noreply@zapac.app>`.
    pub from: String,
}

/// Transport security towards the relay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpTls {
    /// TLS from the first byte, usually port 465.
    Implicit,
    /// Plain connection upgraded with STARTTLS, usually port 587.
    #[default]
    Starttls,
    /// No encryption. Credentials travel in clear text; local relays only.
    None,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SMTPConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default = "empty_secret")]
    pub password: SecretString,
    #[serde(default)]
    pub tls: SmtpTls,
    #[serde(default = "default_smtp_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetCodeConfig {
    pub subject: String,
    #[serde(default = "default_echo_code")]
    pub echo_code: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub logger: LoggerConfig,
    pub application: ApplicationConfig,
    pub email: EmailConfig,
    pub smtp: SMTPConfig,
    pub reset_code: ResetCodeConfig,
}

fn empty_secret() -> SecretString {
    SecretString::new(String::new())
}

fn default_smtp_timeout_secs() -> u64 {
    10
}

fn default_echo_code() -> bool {
    true
}

impl AppConfig {
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<AppConfig> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> anyhow::Result<AppConfig> {
        let config = toml::from_str(contents)?;
        Ok(config)
    }

    /// Relay credentials from the environment take precedence over the file.
    pub fn with_env_secrets(mut self) -> Self {
        self.apply_secrets(std::env::var(SMTP_USERNAME_ENV).ok(), std::env::var(SMTP_PASSWORD_ENV).ok());
        self
    }

    fn apply_secrets(&mut self, username: Option<String>, password: Option<String>) {
        if let Some(username) = username {
            self.smtp.username = username;
        }
        if let Some(password) = password {
            self.smtp.password = SecretString::new(password);
        }
    }
}

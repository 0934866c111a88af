/// API service configuration loaded from environment variables.
#[derive(Debug)]
pub struct ApiConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port to listen on (default 3001). Env var: `API_PORT`.
    pub api_port: u16,
    /// HMAC secret for signing JWT access tokens.
    pub jwt_secret: String,
    /// Cookie domain attribute; empty means host-only (local development).
    pub cookie_domain: String,
    /// Comma-separated list of web origins allowed by CORS.
    pub allowed_origins: Vec<String>,
    /// Object-storage bucket for uploaded images.
    pub s3_bucket: String,
    /// Public base URL the stored objects are served from.
    pub s3_public_base_url: String,
    /// SMTP settings for notification mail.
    pub mail: MailConfig,
}

/// SMTP transport settings.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_host: String,
    /// Env var: `SMTP_PORT` (default 587).
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    /// Sender address (default `noreply@emlak.example`). Env var: `SMTP_FROM`.
    pub smtp_from: String,
    /// Inbox receiving contact and intake notifications. Env var: `CONTACT_EMAIL`.
    pub contact_email: String,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            api_port: std::env::var("API_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3001),
            jwt_secret: std::env::var("JWT_SECRET").expect("JWT_SECRET"),
            cookie_domain: std::env::var("COOKIE_DOMAIN").unwrap_or_default(),
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "http://localhost:3000".to_owned())
                .split(',')
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())
                .collect(),
            s3_bucket: std::env::var("S3_BUCKET").expect("S3_BUCKET"),
            s3_public_base_url: std::env::var("S3_PUBLIC_BASE_URL").expect("S3_PUBLIC_BASE_URL"),
            mail: MailConfig {
                smtp_host: std::env::var("SMTP_HOST").expect("SMTP_HOST"),
                smtp_port: std::env::var("SMTP_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(587),
                smtp_user: std::env::var("SMTP_USER").expect("SMTP_USER"),
                smtp_pass: std::env::var("SMTP_PASS").expect("SMTP_PASS"),
                smtp_from: std::env::var("SMTP_FROM")
                    .unwrap_or_else(|_| "noreply@emlak.example".to_owned()),
                contact_email: std::env::var("CONTACT_EMAIL")
                    .unwrap_or_else(|_| "info@emlak.example".to_owned()),
            },
        }
    }
}

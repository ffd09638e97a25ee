use std::time::Duration;

use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use derive_more::Display;
use lettre::transport::smtp::Error as SmtpError;
use validator::ValidationErrors;

#[derive(Debug, Display)]
pub enum AppError {
    #[display("Missing required fields")]
    MissingFields,

    #[display("Invalid email format")]
    InvalidEmail,

    #[display("Rate limit exceeded. Please try again later.")]
    RateLimited { retry_after: Duration },

    #[display("Email service configuration error")]
    MailerNotConfigured,

    #[display("{_0}")]
    Delivery(MailError),

    #[display("Not found: {_0}")]
    NotFound(String),

    #[display("Internal server error: {_0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::RateLimited { retry_after } => serde_json::json!({
                "success": false,
                "error": self.to_string(),
                "details": {
                    "remainingTime": remaining_time(*retry_after)
                }
            }),
            _ => serde_json::json!({
                "success": false,
                "error": self.to_string()
            }),
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields | AppError::InvalidEmail => StatusCode::BAD_REQUEST,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MailerNotConfigured
            | AppError::Delivery(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    pub fn to_http_response(&self) -> HttpResponse {
        self.error_response()
    }
}

/// Wait until the current rate-limit window resets, in whole minutes rounded up.
fn remaining_time(retry_after: Duration) -> String {
    format!("{} minutes", retry_after.as_secs().div_ceil(60))
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        // Presence failures take priority over shape failures: an empty email
        // is a missing field, not a malformed one.
        let missing = errors
            .field_errors()
            .iter()
            .any(|(_, errs)| errs.iter().any(|e| e.code == "length"));

        if missing {
            AppError::MissingFields
        } else {
            AppError::InvalidEmail
        }
    }
}

impl From<MailError> for AppError {
    fn from(err: MailError) -> Self {
        AppError::Delivery(err)
    }
}

/// Delivery failures, classified for the caller. The full transport error is
/// logged server-side; only these single-line messages leave the process.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum MailError {
    #[display("Authentication error with email provider")]
    Authentication,

    #[display("Network connection error")]
    Network,

    #[display("Email delivery timed out")]
    Timeout,

    #[display("{_0}")]
    Other(String),
}

impl From<SmtpError> for MailError {
    fn from(err: SmtpError) -> Self {
        if err.is_permanent() {
            // Rejected credentials are the dominant permanent failure at
            // submission time.
            MailError::Authentication
        } else if err.is_transient() {
            MailError::Network
        } else {
            MailError::Other(first_line(&err.to_string()))
        }
    }
}

fn first_line(detail: &str) -> String {
    detail
        .lines()
        .next()
        .filter(|line| !line.trim().is_empty())
        .unwrap_or("An unexpected error occurred")
        .to_string()
}

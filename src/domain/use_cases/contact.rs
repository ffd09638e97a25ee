use std::time::Duration;

use validator::Validate;

use crate::{
    entities::contact::{ContactForm, ContactResponse},
    errors::AppError,
    limiter::rate_limiter::{RateLimitStore, RateDecision},
    mailer::{ContactEmail, Mailer},
};

pub const RATE_LIMIT: u32 = 5;
pub const RATE_WINDOW: Duration = Duration::from_secs(60 * 60);

/// The contact submission pipeline: rate limit, validate, relay by email.
pub struct ContactHandler<S, M>
where
    S: RateLimitStore,
    M: Mailer,
{
    pub store: S,
    pub mailer: Option<M>,
}

impl<S, M> ContactHandler<S, M>
where
    S: RateLimitStore,
    M: Mailer,
{
    pub fn new(store: S, mailer: Option<M>) -> Self {
        ContactHandler { store, mailer }
    }

    /// Accepts one submission, decides accept/reject, and on accept sends the
    /// notification email before returning.
    ///
    /// The rate limit is charged up front, before validation, so malformed
    /// submissions still consume the caller's budget.
    pub async fn submit(
        &self,
        identifier: &str,
        form: ContactForm,
    ) -> Result<ContactResponse, AppError> {
        let decision = self.charge(identifier)?;

        form.validate()?;

        let mailer = self.mailer.as_ref().ok_or(AppError::MailerNotConfigured)?;

        let email = ContactEmail::from_form(&form);
        mailer.send(&email).await?;

        tracing::info!(identifier, remaining = decision.remaining, "contact message relayed");

        Ok(ContactResponse {
            success: true,
            message: "Email sent successfully".to_string(),
            requests_remaining: decision.remaining,
        })
    }

    fn charge(&self, identifier: &str) -> Result<RateDecision, AppError> {
        let decision = self.store.check(identifier);
        if !decision.allowed {
            tracing::debug!(identifier, "contact submission rate limited");
            return Err(AppError::RateLimited {
                retry_after: decision.retry_after,
            });
        }
        Ok(decision)
    }
}

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{catalog, entities, use_cases};
pub use interfaces::{handlers, routes};
pub use infrastructure::{limiter, mailer, utils};

use limiter::rate_limiter::FixedWindowLimiter;
use mailer::smtp::SmtpMailer;
use settings::AppConfig;
use use_cases::contact::{ContactHandler, RATE_LIMIT, RATE_WINDOW};

pub struct AppState {
    pub contact_handler: AppContactHandler,
}

pub type AppContactHandler = ContactHandler<FixedWindowLimiter, SmtpMailer>;

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let limiter = FixedWindowLimiter::new(RATE_LIMIT, RATE_WINDOW);

        let mailer = SmtpMailer::from_config(config);
        if mailer.is_none() {
            tracing::warn!(
                "SMTP credentials are not configured; contact submissions will be rejected"
            );
        }

        AppState {
            contact_handler: ContactHandler::new(limiter, mailer),
        }
    }
}

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Deliberately permissive shape check, not full RFC validation: something,
/// an @, something, a dot, something — no whitespace or extra @ anywhere.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape regex"));

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(length(min = 1), regex(path = *EMAIL_SHAPE))]
    pub email: String,

    /// Optional and unvalidated beyond being free text.
    #[serde(default)]
    pub phone: Option<String>,

    #[validate(length(min = 1))]
    pub subject: String,

    #[validate(length(min = 1))]
    pub message: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
    pub requests_remaining: u32,
}

pub mod smtp;

use async_trait::async_trait;

use crate::{entities::contact::ContactForm, errors::MailError};

const SUBJECT_PREFIX: &str = "Contact Form: ";

/// Transport seam for outbound contact notifications.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &ContactEmail) -> Result<(), MailError>;
}

/// A rendered notification, derived from one submission. Reply-to points back
/// at the submitter so the recipient can answer directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail {
    pub reply_to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

impl ContactEmail {
    pub fn from_form(form: &ContactForm) -> Self {
        let phone = form
            .phone
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or("Not provided");

        Self {
            reply_to: form.email.clone(),
            subject: format!("{SUBJECT_PREFIX}{}", form.subject),
            text_body: render_text(form, phone),
            html_body: render_html(form, phone),
        }
    }
}

fn render_text(form: &ContactForm, phone: &str) -> String {
    format!(
        "Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
        form.name, form.email, phone, form.message
    )
}

fn render_html(form: &ContactForm, phone: &str) -> String {
    // Escape first, then turn newlines into <br> in the message block only.
    let message = escape_html(&form.message).replace('\n', "<br>");

    format!(
        concat!(
            r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; border: 1px solid #e0e0e0; border-radius: 5px;">"#,
            r#"<h2 style="color: #333; border-bottom: 1px solid #e0e0e0; padding-bottom: 10px;">New Contact Form Submission</h2>"#,
            r#"<div style="margin: 20px 0;">"#,
            "<p><strong>Name:</strong> {name}</p>",
            "<p><strong>Email:</strong> {email}</p>",
            "<p><strong>Phone:</strong> {phone}</p>",
            "<p><strong>Subject:</strong> {subject}</p>",
            "</div>",
            r#"<div style="background-color: #f9f9f9; padding: 15px; border-radius: 4px;">"#,
            "<p><strong>Message:</strong></p>",
            "<p>{message}</p>",
            "</div>",
            r#"<p style="color: #777; font-size: 12px; margin-top: 30px;">This email was sent from the portfolio website contact form.</p>"#,
            "</div>"
        ),
        name = escape_html(&form.name),
        email = escape_html(&form.email),
        phone = escape_html(phone),
        subject = escape_html(&form.subject),
        message = message,
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: None,
            subject: "Commission".into(),
            message: "First line\nSecond line".into(),
        }
    }

    #[test]
    fn newlines_become_br_in_html_only() {
        let email = ContactEmail::from_form(&form());

        assert!(email.html_body.contains("First line<br>Second line"));
        assert!(!email.html_body.contains("First line\nSecond line"));
        assert!(email.text_body.contains("Message:\nFirst line\nSecond line"));
    }

    #[test]
    fn reply_to_and_subject_come_from_the_form() {
        let email = ContactEmail::from_form(&form());

        assert_eq!(email.reply_to, "jane@example.com");
        assert_eq!(email.subject, "Contact Form: Commission");
    }

    #[test]
    fn absent_phone_renders_as_not_provided() {
        let email = ContactEmail::from_form(&form());
        assert!(email.text_body.contains("Phone: Not provided"));
        assert!(email.html_body.contains("<strong>Phone:</strong> Not provided"));

        let mut with_phone = form();
        with_phone.phone = Some("+1 555 0100".into());
        let email = ContactEmail::from_form(&with_phone);
        assert!(email.text_body.contains("Phone: +1 555 0100"));
    }

    #[test]
    fn html_body_escapes_markup_in_fields() {
        let mut f = form();
        f.name = "<script>alert(1)</script>".into();
        f.message = "a < b\nb > a".into();

        let email = ContactEmail::from_form(&f);
        assert!(email.html_body.contains("&lt;script&gt;"));
        assert!(email.html_body.contains("a &lt; b<br>b &gt; a"));
        // The plain part is left verbatim.
        assert!(email.text_body.contains("a < b\nb > a"));
    }
}

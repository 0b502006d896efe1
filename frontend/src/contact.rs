use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use yew::prelude::*;

// Same shape browsers enforce for <input type="email">.
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email.trim())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    MissingField(&'static str),
    InvalidEmail(String),
}

impl std::fmt::Display for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactError::MissingField(field) => write!(f, "Missing required field: {}", field),
            ContactError::InvalidEmail(email) => write!(f, "Not a valid email address: {}", email),
        }
    }
}

impl std::error::Error for ContactError {}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A pre-filled message handed to the visitor's mail client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailtoRequest {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

impl MailtoRequest {
    pub fn href(&self) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            urlencoding::encode(&self.subject),
            urlencoding::encode(&self.body)
        )
    }
}

pub enum ContactFieldUpdate {
    Name(String),
    Email(String),
    Message(String),
}

impl Reducible for ContactForm {
    type Action = ContactFieldUpdate;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut form = (*self).clone();
        match action {
            ContactFieldUpdate::Name(name) => form.name = name,
            ContactFieldUpdate::Email(email) => form.email = email,
            ContactFieldUpdate::Message(message) => form.message = message,
        }
        Rc::new(form)
    }
}

impl ContactForm {
    /// Mirrors native `required` and `type="email"` checks, so a submit the
    /// browser lets through is never rejected here.
    pub fn validate(&self) -> Result<(), ContactError> {
        // Browsers strip surrounding whitespace from email inputs only.
        let fields = [("name", self.name.as_str()), ("email", self.email.trim()), ("message", self.message.as_str())];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(ContactError::MissingField(*field));
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }

    /// Builds the mail hand-off. Nothing is built unless every field validates.
    pub fn to_mailto(&self, recipient: &str) -> Result<MailtoRequest, ContactError> {
        self.validate()?;

        let name = self.name.trim();
        // text/plain form encoding: one key=value pair per line
        let body = format!(
            "name={}\r\nemail={}\r\nmessage={}",
            name,
            self.email.trim(),
            self.message.trim()
        );

        Ok(MailtoRequest {
            recipient: recipient.to_string(),
            subject: format!("Intro request from {}", name),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::COMPANY;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            message: "Looking to talk about credit lines & real estate.".to_string(),
        }
    }

    #[test]
    fn complete_form_builds_request_to_company_address() {
        let request = filled().to_mailto(COMPANY.email).unwrap();
        assert_eq!(request.recipient, "info@ravenspirecapital.com");
        assert!(request.body.contains("name=Jane Doe"));
        assert!(request.body.contains("email=jane@example.com"));
        assert!(request.body.contains("message=Looking to talk about credit lines & real estate."));
    }

    #[test]
    fn href_percent_encodes_body() {
        let href = filled().to_mailto(COMPANY.email).unwrap().href();
        assert!(href.starts_with("mailto:info@ravenspirecapital.com?subject="));
        assert!(href.contains("&body=name%3DJane%20Doe%0D%0Aemail%3Djane%40example.com"));
        assert!(href.contains("credit%20lines%20%26%20real%20estate."));
    }

    #[test]
    fn each_empty_field_is_rejected() {
        let mut form = filled();
        form.name.clear();
        assert_eq!(form.to_mailto(COMPANY.email), Err(ContactError::MissingField("name")));

        let mut form = filled();
        form.email = "   ".to_string();
        assert_eq!(form.to_mailto(COMPANY.email), Err(ContactError::MissingField("email")));

        let mut form = filled();
        form.message.clear();
        assert_eq!(form.validate(), Err(ContactError::MissingField("message")));
    }

    #[test]
    fn whitespace_only_text_fields_pass_like_native_required() {
        let mut form = filled();
        form.name = " ".to_string();
        form.message = "   ".to_string();
        let request = form.to_mailto(COMPANY.email).unwrap();
        assert!(request.body.contains("message="));
        assert_eq!(request.recipient, COMPANY.email);
    }

    #[test]
    fn field_updates_apply_to_latest_form() {
        let form = Rc::new(ContactForm::default())
            .reduce(ContactFieldUpdate::Name("Jane".to_string()))
            .reduce(ContactFieldUpdate::Email("jane@example.com".to_string()))
            .reduce(ContactFieldUpdate::Message("Hello".to_string()));
        assert_eq!(
            *form,
            ContactForm {
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                message: "Hello".to_string(),
            }
        );
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut form = filled();
        form.email = "jane.example.com".to_string();
        assert_eq!(
            form.to_mailto(COMPANY.email),
            Err(ContactError::InvalidEmail("jane.example.com".to_string()))
        );
    }

    #[test]
    fn email_shape_matches_browser_rules() {
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("first.last+tag@sub.example.co"));
        assert!(is_valid_email("  padded@example.com "));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("space in@example.com"));
        assert!(!is_valid_email("trailing@dot."));
    }

    #[test]
    fn error_messages_name_the_problem() {
        assert_eq!(
            ContactError::MissingField("message").to_string(),
            "Missing required field: message"
        );
    }
}

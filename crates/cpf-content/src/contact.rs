//! Simulated contact-form submission.
//!
//! The club site has no backend for its contact form; submission validates
//! the form, waits a short delay and acknowledges it. [`ContactClient`]
//! reproduces that flow without any network I/O.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ContactError;

/// Default simulated delivery delay.
pub const DEFAULT_DELAY_MS: u64 = 1500;

/// A filled-in contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Checks that every field is present and the email looks deliverable.
    ///
    /// Fields are checked in form order, so the first blank field is reported.
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField { field });
            }
        }

        if !is_plausible_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }

        Ok(())
    }
}

/// Returns true if `email` has the shape `local@domain.tld`.
pub fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Acknowledgement returned for an accepted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    /// Reference number for the submission.
    pub id: Uuid,
    pub recipient: String,
    pub sender: String,
    pub submitted_at: DateTime<Utc>,
}

/// Simulated contact-form client.
#[derive(Clone)]
pub struct ContactClient {
    recipient: String,
    delay: Duration,
}

impl ContactClient {
    /// Creates a client delivering to `recipient` with the default delay.
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    /// Returns a builder for customizing the client.
    pub fn builder(recipient: impl Into<String>) -> ContactClientBuilder {
        ContactClientBuilder::new(recipient)
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Validates and "sends" the form.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an incomplete or malformed form, and
    /// [`ContactError::Delivery`] when the configured recipient is unusable.
    pub async fn submit(&self, form: &ContactForm) -> Result<ContactReceipt, ContactError> {
        form.validate()?;

        if !is_plausible_email(&self.recipient) {
            return Err(ContactError::Delivery(format!(
                "recipient address '{}' is not valid",
                self.recipient
            )));
        }

        tracing::debug!(
            recipient = %self.recipient,
            delay_ms = self.delay.as_millis() as u64,
            "submitting contact form"
        );
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let receipt = ContactReceipt {
            id: Uuid::new_v4(),
            recipient: self.recipient.clone(),
            sender: form.email.trim().to_string(),
            submitted_at: Utc::now(),
        };
        tracing::debug!(id = %receipt.id, "contact form accepted");
        Ok(receipt)
    }
}

impl fmt::Debug for ContactClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactClient")
            .field("recipient", &self.recipient)
            .field("delay", &self.delay)
            .finish()
    }
}

/// Builder for [`ContactClient`].
#[derive(Debug, Clone)]
pub struct ContactClientBuilder {
    recipient: String,
    delay: Duration,
}

impl ContactClientBuilder {
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            delay: Duration::from_millis(DEFAULT_DELAY_MS),
        }
    }

    /// Sets the simulated delivery delay.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::Delivery`] if the recipient is blank.
    pub fn build(self) -> Result<ContactClient, ContactError> {
        let recipient = self.recipient.trim().to_string();
        if recipient.is_empty() {
            return Err(ContactError::Delivery(
                "no recipient configured".to_string(),
            ));
        }
        Ok(ContactClient {
            recipient,
            delay: self.delay,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm::new("Ana", "ana@fiuna.edu.py", "Hola, quiero unirme al club")
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        assert_eq!(form().validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        let f = ContactForm::new("", "", "");
        assert_eq!(
            f.validate(),
            Err(ContactError::MissingField { field: "name" })
        );

        let f = ContactForm::new("Ana", "ana@fiuna.edu.py", "   ");
        assert_eq!(
            f.validate(),
            Err(ContactError::MissingField { field: "message" })
        );
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        let f = ContactForm::new("Ana", "ana.fiuna.edu.py", "hola");
        assert_eq!(
            f.validate(),
            Err(ContactError::InvalidEmail("ana.fiuna.edu.py".to_string()))
        );
    }

    #[test]
    fn test_is_plausible_email() {
        assert!(is_plausible_email("contacto@cpf.com.py"));
        assert!(!is_plausible_email("contacto@cpf"));
        assert!(!is_plausible_email("@cpf.com.py"));
        assert!(!is_plausible_email("a@b@c.com"));
        assert!(!is_plausible_email("a b@c.com"));
        assert!(!is_plausible_email("a@.com"));
    }

    #[test]
    fn test_builder_defaults() {
        let client = ContactClient::builder("contacto@cpf.com.py").build().unwrap();
        assert_eq!(client.recipient(), "contacto@cpf.com.py");
        assert_eq!(client.delay(), Duration::from_millis(DEFAULT_DELAY_MS));
    }

    #[test]
    fn test_builder_rejects_blank_recipient() {
        let err = ContactClient::builder("  ").build().unwrap_err();
        assert!(matches!(err, ContactError::Delivery(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_waits_and_returns_receipt() {
        let client = ContactClient::new("contacto@cpf.com.py");
        let start = tokio::time::Instant::now();

        let receipt = client.submit(&form()).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(DEFAULT_DELAY_MS));
        assert_eq!(receipt.recipient, "contacto@cpf.com.py");
        assert_eq!(receipt.sender, "ana@fiuna.edu.py");
        assert_eq!(receipt.id.get_version_num(), 4);
    }

    #[tokio::test]
    async fn test_submit_validates_before_waiting() {
        let client = ContactClient::new("contacto@cpf.com.py");
        let err = client
            .submit(&ContactForm::new("Ana", "", "hola"))
            .await
            .unwrap_err();
        assert_eq!(err, ContactError::MissingField { field: "email" });
    }

    #[tokio::test]
    async fn test_submit_with_invalid_recipient_fails_delivery() {
        let client = ContactClient::builder("nobody")
            .delay(Duration::ZERO)
            .build()
            .unwrap();
        let err = client.submit(&form()).await.unwrap_err();
        assert!(matches!(err, ContactError::Delivery(_)));
    }
}

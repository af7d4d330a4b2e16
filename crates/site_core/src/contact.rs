use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use shared::{domain::ServiceKind, error::UnknownVariant};
use thiserror::Error;
use tracing::info;

pub const SUBMIT_CONFIRMATION: &str = "Thank you! I'll get back to you within 24 hours.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Service,
    Date,
    Message,
}

impl ContactField {
    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Service => "service",
            ContactField::Date => "date",
            ContactField::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: Option<ServiceKind>,
    pub date: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{} is required", .0.label())]
    MissingField(ContactField),
    #[error("'{0}' is not an email address")]
    InvalidEmail(String),
    #[error(transparent)]
    UnknownService(#[from] UnknownVariant),
    #[error("an inquiry is already being sent")]
    AlreadySubmitting,
}

/// Where submitted inquiries go. Delivery is fire-and-forget: no retry, no
/// persistence.
#[async_trait]
pub trait InquirySink: Send + Sync {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<()>;
}

/// Stand-in for the messaging endpoint; only logs.
pub struct LoggingInquirySink;

#[async_trait]
impl InquirySink for LoggingInquirySink {
    async fn deliver(&self, inquiry: &Inquiry) -> Result<()> {
        info!(
            name = %inquiry.name,
            email = %inquiry.email,
            service = ?inquiry.service,
            "contact: inquiry received"
        );
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    draft: Inquiry,
    submitting: bool,
}

impl ContactForm {
    pub fn draft(&self) -> &Inquiry {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Edits one field. The draft is frozen while it is being sent.
    pub fn update(&mut self, field: ContactField, value: &str) -> Result<(), ContactError> {
        if self.submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        match field {
            ContactField::Name => self.draft.name = value.to_string(),
            ContactField::Email => self.draft.email = value.to_string(),
            ContactField::Phone => self.draft.phone = value.to_string(),
            ContactField::Service if value.trim().is_empty() => self.draft.service = None,
            ContactField::Service => self.draft.service = Some(value.parse()?),
            ContactField::Date => self.draft.date = value.to_string(),
            ContactField::Message => self.draft.message = value.to_string(),
        }
        Ok(())
    }

    /// Validates the draft and marks the form as sending. The returned copy is
    /// what gets delivered; call [`ContactForm::finish_submit`] afterwards.
    pub fn begin_submit(&mut self) -> Result<Inquiry, ContactError> {
        if self.submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        let required = [
            (ContactField::Name, self.draft.name.trim().is_empty()),
            (ContactField::Email, self.draft.email.trim().is_empty()),
            (ContactField::Service, self.draft.service.is_none()),
            (ContactField::Message, self.draft.message.trim().is_empty()),
        ];
        if let Some((field, _)) = required.into_iter().find(|(_, missing)| *missing) {
            return Err(ContactError::MissingField(field));
        }
        if !self.draft.email.contains('@') {
            return Err(ContactError::InvalidEmail(self.draft.email.clone()));
        }

        self.submitting = true;
        Ok(self.draft.clone())
    }

    pub fn finish_submit(&mut self) {
        self.draft = Inquiry::default();
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.update(ContactField::Name, "Ada").expect("name");
        form.update(ContactField::Email, "ada@example.test").expect("email");
        form.update(ContactField::Service, "wedding").expect("service");
        form.update(ContactField::Message, "June wedding, 120 guests")
            .expect("message");
        form
    }

    #[test]
    fn rejects_missing_required_fields_in_form_order() {
        let mut form = ContactForm::default();
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(ContactField::Name))
        );

        form.update(ContactField::Name, "Ada").expect("name");
        form.update(ContactField::Email, "ada@example.test").expect("email");
        assert_eq!(
            form.begin_submit(),
            Err(ContactError::MissingField(ContactField::Service))
        );
        assert!(!form.is_submitting());
    }

    #[test]
    fn phone_and_date_are_optional() {
        let mut form = filled_form();
        let inquiry = form.begin_submit().expect("submit");
        assert!(inquiry.phone.is_empty());
        assert!(inquiry.date.is_empty());
        assert_eq!(inquiry.service, Some(ServiceKind::Wedding));
    }

    #[test]
    fn unknown_service_is_rejected() {
        let mut form = ContactForm::default();
        assert!(matches!(
            form.update(ContactField::Service, "drone"),
            Err(ContactError::UnknownService(_))
        ));
    }

    #[test]
    fn second_submit_while_sending_is_rejected_then_form_clears() {
        let mut form = filled_form();
        form.begin_submit().expect("first submit");
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));

        form.finish_submit();
        assert!(!form.is_submitting());
        assert_eq!(form.draft(), &Inquiry::default());
    }

    #[test]
    fn draft_is_frozen_while_sending() {
        let mut form = filled_form();
        let sent = form.begin_submit().expect("submit");
        assert_eq!(
            form.update(ContactField::Message, "one more thing"),
            Err(ContactError::AlreadySubmitting)
        );
        assert_eq!(form.draft(), &sent);

        form.finish_submit();
        form.update(ContactField::Name, "Grace").expect("editable again");
    }

    #[test]
    fn email_needs_an_at_sign() {
        let mut form = filled_form();
        form.update(ContactField::Email, "ada.example.test").expect("email");
        assert!(matches!(
            form.begin_submit(),
            Err(ContactError::InvalidEmail(_))
        ));
    }
}

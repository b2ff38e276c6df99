// Rust guideline compliant 2026-10-17

//! Contact form submission.

use crate::error::Result;
use crate::ports::{Notifier, TemplateParams};
use folio_core::{validate_contact, ContactField, ContactForm, FieldErrors};
use std::sync::Arc;

/// Result of a submit attempt that reached no provider error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The message was handed to the provider and the form was cleared.
    Sent,
    /// Validation failed; the errors are also kept on the service.
    Invalid(FieldErrors),
}

/// Owns the contact form, its field errors and the send step.
pub struct ContactService {
    form: ContactForm,
    errors: FieldErrors,
    notifier: Arc<dyn Notifier>,
    template: String,
}

impl std::fmt::Debug for ContactService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactService")
            .field("form", &self.form)
            .field("errors", &self.errors)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

impl ContactService {
    /// Creates a service sending `template` through `notifier`.
    pub fn new(notifier: Arc<dyn Notifier>, template: impl Into<String>) -> Self {
        Self {
            form: ContactForm::default(),
            errors: FieldErrors::default(),
            notifier,
            template: template.into(),
        }
    }

    /// Returns the current form contents.
    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Returns the current field errors.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Sets a field and clears its error.
    pub fn edit(&mut self, field: ContactField, value: &str) {
        *self.form.field_mut(field) = value.to_string();
        self.errors.clear_field(field);
    }

    /// Validates and sends the form.
    ///
    /// # Returns
    ///
    /// `SubmitOutcome::Invalid` when validation fails; nothing is sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails. The form is left intact so
    /// the user can retry.
    pub async fn submit(&mut self) -> Result<SubmitOutcome> {
        let errors = validate_contact(&self.form);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return Ok(SubmitOutcome::Invalid(errors));
        }
        self.errors = FieldErrors::default();

        let params: TemplateParams = [
            ("from_name", &self.form.name),
            ("reply_to", &self.form.email),
            ("message", &self.form.content),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();

        self.notifier.send(&self.template, &params).await?;
        tracing::info!(template = %self.template, "contact message sent");
        self.form.clear();
        Ok(SubmitOutcome::Sent)
    }
}

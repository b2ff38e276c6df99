// Rust guideline compliant 2026-10-18

//! Integration tests for contact submission.

use folio_app::memory::MemoryNotifier;
use folio_app::{AppError, ContactService, SubmitOutcome};
use folio_core::ContactField;
use std::sync::Arc;

fn filled(notifier: Arc<MemoryNotifier>) -> ContactService {
    let mut service = ContactService::new(notifier, "project_inquiry");
    service.edit(ContactField::Name, "Mina");
    service.edit(ContactField::Email, "mina@studio.kr");
    service.edit(ContactField::Content, "Poster commission");
    service
}

#[tokio::test]
async fn test_successful_submit_sends_and_clears() {
    let notifier = Arc::new(MemoryNotifier::new());
    let mut service = filled(notifier.clone());

    let outcome = service.submit().await.expect("Failed to submit");
    assert_eq!(outcome, SubmitOutcome::Sent);
    assert!(service.form().name.is_empty());

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    let (template, params) = &sent[0];
    assert_eq!(template, "project_inquiry");
    assert_eq!(params.get("from_name").map(String::as_str), Some("Mina"));
    assert_eq!(params.get("reply_to").map(String::as_str), Some("mina@studio.kr"));
    assert_eq!(params.get("message").map(String::as_str), Some("Poster commission"));
}

#[tokio::test]
async fn test_invalid_submit_sends_nothing() {
    let notifier = Arc::new(MemoryNotifier::new());
    let mut service = ContactService::new(notifier.clone(), "t");
    service.edit(ContactField::Email, "nope");

    let outcome = service.submit().await.expect("Failed to submit");
    let SubmitOutcome::Invalid(errors) = outcome else {
        panic!("Expected invalid outcome");
    };
    assert_eq!(errors.len(), 3);
    assert_eq!(service.errors().get(ContactField::Email), Some("invalid format"));
    assert!(notifier.sent().is_empty());

    service.edit(ContactField::Email, "a@b.com");
    assert_eq!(service.errors().get(ContactField::Email), None);
    assert_eq!(service.errors().len(), 2);
}

#[tokio::test]
async fn test_provider_failure_keeps_form() {
    let notifier = Arc::new(MemoryNotifier::new());
    notifier.set_failing(true);
    let mut service = filled(notifier.clone());

    let result = service.submit().await;
    assert!(matches!(result, Err(AppError::Notification(_))));
    assert_eq!(service.form().name, "Mina");

    notifier.set_failing(false);
    assert_eq!(
        service.submit().await.expect("Failed to retry"),
        SubmitOutcome::Sent
    );
}

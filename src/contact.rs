use std::{sync::Arc, time::Duration};

use leptos::prelude::*;

use crate::error::AppError;
use crate::services::{
    EmailParams, EmailRelay, MessageRecord, MessageStore, Notice, Notifier, Timer, TimerId,
};

/// How long the success panel replaces the form.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl ContactForm {
    fn to_record(&self) -> MessageRecord {
        MessageRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    fn to_email(&self, to_email: &str) -> EmailParams {
        EmailParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            message: self.message.clone(),
            to_email: to_email.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct ContactServices {
    pub messages: Arc<dyn MessageStore>,
    pub relay: Arc<dyn EmailRelay>,
    pub notifier: Arc<dyn Notifier>,
    pub timer: Arc<dyn Timer>,
    pub owner_email: String,
}

#[derive(Debug, Clone, Copy, Default)]
struct SuccessTimer {
    generation: u64,
    pending: Option<TimerId>,
}

/// Contact form state and the two-sink submission flow.
#[derive(Clone, Copy)]
pub struct ContactController {
    form: RwSignal<ContactForm>,
    status: RwSignal<SubmissionStatus>,
    timer: StoredValue<SuccessTimer>,
    services: StoredValue<ContactServices>,
}

impl ContactController {
    pub fn new(services: ContactServices) -> Self {
        Self {
            form: RwSignal::new(ContactForm::default()),
            status: RwSignal::new(SubmissionStatus::Idle),
            timer: StoredValue::new(SuccessTimer::default()),
            services: StoredValue::new(services),
        }
    }

    pub fn form(&self) -> ReadSignal<ContactForm> {
        self.form.read_only()
    }

    pub fn status(&self) -> ReadSignal<SubmissionStatus> {
        self.status.read_only()
    }

    pub fn set_field(&self, field: ContactField, value: String) {
        self.form.update(|form| match field {
            ContactField::Name => form.name = value,
            ContactField::Email => form.email = value,
            ContactField::Message => form.message = value,
        });
    }

    /// Records the message, then relays it by email.
    ///
    /// The datastore write is best effort. Only a relay failure fails the
    /// submission, in which case the form is left intact for a retry.
    pub async fn submit(&self) -> Result<(), AppError> {
        if self.status.get_untracked() == SubmissionStatus::Submitting {
            log::warn!("contact form submitted while a send is in flight");
            return Err(AppError::SubmissionInFlight);
        }
        self.cancel_success_timer();
        self.status.set(SubmissionStatus::Submitting);

        let form = self.form.get_untracked();
        let services = self.services.get_value();

        if let Err(err) = services.messages.insert(&form.to_record()).await {
            log::warn!("couldn't record contact message: {err}");
        }

        match services.relay.send(&form.to_email(&services.owner_email)).await {
            Ok(()) => {
                log::info!("contact message from {} relayed", form.email);
                self.form.set(ContactForm::default());
                self.status.set(SubmissionStatus::Submitted);
                self.start_success_timer(&services);
                Ok(())
            }
            Err(err) => {
                log::error!("contact relay failed: {err}");
                self.status.set(SubmissionStatus::Idle);
                services
                    .notifier
                    .notify(Notice::Error(format!("Failed to send message: {err}")));
                Err(err)
            }
        }
    }

    /// Closes the success panel early.
    pub fn dismiss(&self) {
        if self.status.get_untracked() != SubmissionStatus::Submitted {
            return;
        }
        self.cancel_success_timer();
        self.status.set(SubmissionStatus::Idle);
    }

    fn start_success_timer(&self, services: &ContactServices) {
        let this = *self;
        let mut generation = 0;
        self.timer.update_value(|t| {
            t.generation += 1;
            generation = t.generation;
        });
        let scheduled = services.timer.schedule(
            SUCCESS_DISPLAY,
            Box::new(move || this.expire(generation)),
        );
        match scheduled {
            Ok(id) => self.timer.update_value(|t| t.pending = Some(id)),
            // The panel stays until dismissed
            Err(err) => log::warn!("couldn't schedule success reset: {err}"),
        }
    }

    fn cancel_success_timer(&self) {
        let mut pending = None;
        self.timer.update_value(|t| {
            // Invalidates any callback that still fires after cancel
            t.generation += 1;
            pending = t.pending.take();
        });
        if let Some(id) = pending {
            self.services.with_value(|s| s.timer.cancel(id));
        }
    }

    fn expire(&self, generation: u64) {
        let current = self.timer.try_with_value(|t| t.generation);
        if current != Some(generation) {
            return;
        }
        self.timer.update_value(|t| t.pending = None);
        if self.status.get_untracked() == SubmissionStatus::Submitted {
            self.status.set(SubmissionStatus::Idle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{FakeMessages, FakeRelay, ManualTimer, RecordingNotifier};

    struct Harness {
        controller: ContactController,
        messages: Arc<FakeMessages>,
        relay: Arc<FakeRelay>,
        notifier: Arc<RecordingNotifier>,
        timer: Arc<ManualTimer>,
    }

    fn harness(messages: FakeMessages, relay: FakeRelay) -> Harness {
        let messages = Arc::new(messages);
        let relay = Arc::new(relay);
        let notifier = Arc::new(RecordingNotifier::default());
        let timer = Arc::new(ManualTimer::default());
        let controller = ContactController::new(ContactServices {
            messages: messages.clone(),
            relay: relay.clone(),
            notifier: notifier.clone(),
            timer: timer.clone(),
            owner_email: "owner@example.com".to_string(),
        });
        Harness {
            controller,
            messages,
            relay,
            notifier,
            timer,
        }
    }

    fn fill(controller: &ContactController) {
        controller.set_field(ContactField::Name, "Ada Lovelace".to_string());
        controller.set_field(ContactField::Email, "ada@example.com".to_string());
        controller.set_field(ContactField::Message, "Need an app".to_string());
    }

    #[test]
    fn test_form_starts_empty() {
        let owner = Owner::new();
        owner.set();
        let h = harness(FakeMessages::default(), FakeRelay::default());
        assert_eq!(h.controller.form().get_untracked(), ContactForm::default());
        assert_eq!(h.controller.status().get_untracked(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_successful_submit_clears_and_resets_after_delay() {
        let owner = Owner::new();
        owner.set();
        let h = harness(FakeMessages::default(), FakeRelay::default());
        fill(&h.controller);

        h.controller.submit().await.unwrap();

        assert_eq!(h.controller.form().get_untracked(), ContactForm::default());
        assert_eq!(h.controller.status().get_untracked(), SubmissionStatus::Submitted);
        assert_eq!(
            h.messages.records.lock().unwrap().clone(),
            vec![MessageRecord {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                message: "Need an app".to_string(),
            }]
        );
        assert_eq!(
            h.relay.sent.lock().unwrap().clone(),
            vec![EmailParams {
                from_name: "Ada Lovelace".to_string(),
                from_email: "ada@example.com".to_string(),
                message: "Need an app".to_string(),
                to_email: "owner@example.com".to_string(),
            }]
        );
        assert_eq!(h.timer.delays(), vec![SUCCESS_DISPLAY]);

        assert_eq!(h.timer.fire_all(), 1);
        assert_eq!(h.controller.status().get_untracked(), SubmissionStatus::Idle);
        assert!(h.notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_relay_failure_keeps_form() {
        let owner = Owner::new();
        owner.set();
        let h = harness(
            FakeMessages::default(),
            FakeRelay {
                error: Some("The template ID is invalid".to_string()),
                ..Default::default()
            },
        );
        fill(&h.controller);
        let before = h.controller.form().get_untracked();

        let err = h.controller.submit().await.unwrap_err();

        assert_eq!(err, AppError::Relay("The template ID is invalid".to_string()));
        assert_eq!(h.controller.status().get_untracked(), SubmissionStatus::Idle);
        assert_eq!(h.controller.form().get_untracked(), before);
        assert_eq!(
            h.notifier.notices(),
            vec![Notice::Error(
                "Failed to send message: The template ID is invalid".to_string()
            )]
        );
        // The record was still written first
        assert_eq!(h.messages.records.lock().unwrap().len(), 1);
        assert!(h.timer.delays().is_empty());
    }

    #[tokio::test]
    async fn test_datastore_failure_does_not_block_success() {
        let owner = Owner::new();
        owner.set();
        let h = harness(
            FakeMessages {
                fail: true,
                ..Default::default()
            },
            FakeRelay::default(),
        );
        fill(&h.controller);

        h.controller.submit().await.unwrap();

        assert_eq!(h.controller.status().get_untracked(), SubmissionStatus::Submitted);
        assert_eq!(h.controller.form().get_untracked(), ContactForm::default());
        assert_eq!(h.relay.sent.lock().unwrap().len(), 1);
        assert!(h.notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_dismiss_cancels_pending_reset() {
        let owner = Owner::new();
        owner.set();
        let h = harness(FakeMessages::default(), FakeRelay::default());
        fill(&h.controller);
        h.controller.submit().await.unwrap();

        h.controller.dismiss();
        assert_eq!(h.controller.status().get_untracked(), SubmissionStatus::Idle);
        assert_eq!(h.timer.cancelled.lock().unwrap().len(), 1);
        assert_eq!(h.timer.fire_all(), 0);

        // A second message is sent; the first timer firing late must not hide it
        fill(&h.controller);
        h.controller.submit().await.unwrap();
        assert_eq!(h.timer.fire_cancelled(), 1);
        assert_eq!(h.controller.status().get_untracked(), SubmissionStatus::Submitted);

        assert_eq!(h.timer.fire_all(), 1);
        assert_eq!(h.controller.status().get_untracked(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_dismiss_outside_success_is_noop() {
        let owner = Owner::new();
        owner.set();
        let h = harness(FakeMessages::default(), FakeRelay::default());
        h.controller.dismiss();
        assert_eq!(h.controller.status().get_untracked(), SubmissionStatus::Idle);
        assert!(h.timer.cancelled.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reentrant_submit_is_rejected() {
        let owner = Owner::new();
        owner.set();
        let h = harness(FakeMessages::default(), FakeRelay::default());
        fill(&h.controller);

        // Simulate a second click landing while the first send is awaited
        h.controller.status.set(SubmissionStatus::Submitting);
        let err = h.controller.submit().await.unwrap_err();

        assert_eq!(err, AppError::SubmissionInFlight);
        assert!(h.messages.records.lock().unwrap().is_empty());
        assert!(h.relay.sent.lock().unwrap().is_empty());
        assert_eq!(h.controller.form().get_untracked().name, "Ada Lovelace");
    }
}

use std::collections::BTreeMap;
use std::rc::Rc;

use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use yew::Reducible;

use crate::components::notification::Toast;
use crate::content::FormMessages;

/// Milliseconds the simulated send takes before the form resets.
pub const SUBMIT_DELAY_MS: u32 = 1_000;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Subject,
    Message,
    GdprConsent,
}

impl FieldId {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Subject => "subject",
            FieldId::Message => "message",
            FieldId::GdprConsent => "gdprConsent",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub gdpr_consent: bool,
}

impl FormValues {
    /// Text value of a field; the consent checkbox has none.
    pub fn text(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Subject => &self.subject,
            FieldId::Message => &self.message,
            FieldId::GdprConsent => "",
        }
    }

    fn text_mut(&mut self, field: FieldId) -> Option<&mut String> {
        match field {
            FieldId::Name => Some(&mut self.name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Phone => Some(&mut self.phone),
            FieldId::Subject => Some(&mut self.subject),
            FieldId::Message => Some(&mut self.message),
            FieldId::GdprConsent => None,
        }
    }
}

/// Validation messages keyed by field. Only fields that fail a check ever
/// get an entry, and each edit clears its own entry only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<FieldId, String>);

impl FieldErrors {
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: FieldId, message: &str) {
        self.0.insert(field, message.to_string());
    }

    fn clear(&mut self, field: FieldId) {
        self.0.remove(&field);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Editing,
    Invalid,
    Submitting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are populated.
    Rejected,
    /// Validation passed and the simulated send has started.
    Sending,
    /// A send is already in flight.
    Ignored,
}

/// Border tone of an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldTone {
    Error,
    Success,
    Neutral,
}

impl FieldTone {
    pub fn class(self) -> &'static str {
        match self {
            FieldTone::Error => "field-error",
            FieldTone::Success => "field-success",
            FieldTone::Neutral => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub phase: FormPhase,
    pub touched: bool,
    messages: FormMessages,
}

impl ContactForm {
    pub fn new(messages: FormMessages) -> Self {
        Self {
            values: FormValues::default(),
            errors: FieldErrors::default(),
            phase: FormPhase::Idle,
            touched: false,
            messages,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    fn mark_edited(&mut self, field: FieldId) {
        self.touched = true;
        self.errors.clear(field);
        if self.phase != FormPhase::Submitting {
            self.phase = FormPhase::Editing;
        }
    }

    pub fn edit(&mut self, field: FieldId, value: String) {
        match self.values.text_mut(field) {
            Some(slot) => *slot = value,
            None => return,
        }
        self.mark_edited(field);
    }

    pub fn set_consent(&mut self, checked: bool) {
        self.values.gdpr_consent = checked;
        self.mark_edited(FieldId::GdprConsent);
    }

    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        let v = &self.values;
        let m = &self.messages;

        if v.name.trim().is_empty() {
            errors.insert(FieldId::Name, &m.name_required);
        }
        if v.email.trim().is_empty() {
            errors.insert(FieldId::Email, &m.email_required);
        } else if !EMAIL_PATTERN.is_match(&v.email) {
            errors.insert(FieldId::Email, &m.email_invalid);
        }
        if v.message.trim().is_empty() {
            errors.insert(FieldId::Message, &m.message_required);
        }
        if !v.gdpr_consent {
            errors.insert(FieldId::GdprConsent, &m.consent_required);
        }
        errors
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::Ignored;
        }
        let errors = self.validate();
        if errors.is_empty() {
            info!("Contact form valid, simulating send");
            self.phase = FormPhase::Submitting;
            SubmitOutcome::Sending
        } else {
            debug!(
                "Contact form rejected, invalid fields: {:?}",
                errors.fields().map(FieldId::as_str).collect::<Vec<_>>()
            );
            self.errors = errors;
            self.phase = FormPhase::Invalid;
            SubmitOutcome::Rejected
        }
    }

    /// Toast shown once a message has gone out.
    pub fn confirmation(&self) -> Toast {
        Toast {
            title: self.messages.sent_title.clone(),
            description: self.messages.sent_description.clone(),
        }
    }

    /// Finishes the simulated send: clears every field, returns to idle and
    /// hands back the confirmation. Does nothing unless a send is in flight.
    pub fn complete_submission(&mut self) -> Option<Toast> {
        if !self.is_submitting() {
            return None;
        }
        let toast = self.confirmation();
        self.values = FormValues::default();
        self.errors = FieldErrors::default();
        self.touched = false;
        self.phase = FormPhase::Idle;
        Some(toast)
    }

    pub fn border_tone(&self, field: FieldId) -> FieldTone {
        if self.errors.contains(field) {
            FieldTone::Error
        } else if self.touched && !self.values.text(field).is_empty() {
            FieldTone::Success
        } else {
            FieldTone::Neutral
        }
    }
}

pub enum FormAction {
    Edit(FieldId, String),
    Consent(bool),
    Submit,
    Delivered,
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => next.edit(field, value),
            FormAction::Consent(checked) => next.set_consent(checked),
            FormAction::Submit => {
                next.submit();
            }
            FormAction::Delivered => {
                next.complete_submission();
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm::new(FormMessages::default())
    }

    fn filled() -> ContactForm {
        let mut form = form();
        form.edit(FieldId::Name, "Anna".into());
        form.edit(FieldId::Email, "a@b.co".into());
        form.edit(FieldId::Message, "Hello".into());
        form.set_consent(true);
        form
    }

    #[test]
    fn starts_idle_and_empty() {
        let form = form();
        assert_eq!(form.phase, FormPhase::Idle);
        assert_eq!(form.values, FormValues::default());
        assert!(form.errors.is_empty());
        assert!(!form.touched);
    }

    #[test]
    fn empty_submit_flags_exactly_the_required_fields() {
        let mut form = form();
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        let fields: Vec<FieldId> = form.errors.fields().collect();
        assert_eq!(
            fields,
            vec![FieldId::Name, FieldId::Email, FieldId::Message, FieldId::GdprConsent]
        );
        assert_eq!(form.phase, FormPhase::Invalid);
        assert!(!form.is_submitting());
        assert_eq!(form.errors.get(FieldId::Name), Some("Imię jest wymagane"));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = form();
        form.edit(FieldId::Name, "   ".into());
        form.edit(FieldId::Message, "\n\t".into());
        let errors = form.validate();
        assert!(errors.contains(FieldId::Name));
        assert!(errors.contains(FieldId::Message));
    }

    #[test]
    fn email_pattern() {
        let mut form = form();
        form.edit(FieldId::Email, "not-an-email".into());
        assert_eq!(form.validate().get(FieldId::Email), Some("Nieprawidłowy adres email"));

        form.edit(FieldId::Email, "a@b.co".into());
        assert!(!form.validate().contains(FieldId::Email));

        form.edit(FieldId::Email, "a@b".into());
        assert!(form.validate().contains(FieldId::Email));
    }

    #[test]
    fn optional_fields_never_error() {
        let mut form = form();
        form.submit();
        assert!(!form.errors.contains(FieldId::Phone));
        assert!(!form.errors.contains(FieldId::Subject));
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let mut form = form();
        form.submit();
        form.edit(FieldId::Name, "A".into());
        assert!(!form.errors.contains(FieldId::Name));
        assert!(form.errors.contains(FieldId::Email));
        assert!(form.errors.contains(FieldId::Message));
        assert!(form.errors.contains(FieldId::GdprConsent));
        assert_eq!(form.phase, FormPhase::Editing);

        form.set_consent(true);
        assert!(!form.errors.contains(FieldId::GdprConsent));
        assert_eq!(form.errors.fields().count(), 2);
    }

    #[test]
    fn valid_submit_sends_then_resets() {
        let mut form = filled();
        form.edit(FieldId::Phone, "600 123 456".into());
        assert_eq!(form.submit(), SubmitOutcome::Sending);
        assert!(form.is_submitting());
        assert!(form.errors.is_empty());

        assert_eq!(form.submit(), SubmitOutcome::Ignored);

        let toast = form.complete_submission().expect("send was in flight");
        assert_eq!(toast.title, "Wiadomość wysłana");
        assert_eq!(toast.description, FormMessages::default().sent_description);
        assert_eq!(form.phase, FormPhase::Idle);
        assert_eq!(form.values, FormValues::default());
        assert!(form.errors.is_empty());
        assert!(!form.touched);
    }

    #[test]
    fn editing_while_sending_keeps_phase() {
        let mut form = filled();
        form.submit();
        form.edit(FieldId::Subject, "Termin".into());
        assert!(form.is_submitting());
    }

    #[test]
    fn completion_outside_sending_is_ignored() {
        let mut form = filled();
        assert_eq!(form.complete_submission(), None);
        assert_eq!(form.values.name, "Anna");
        assert_eq!(form.phase, FormPhase::Editing);
    }

    #[test]
    fn border_tone_follows_errors_then_touched() {
        let mut form = form();
        assert_eq!(form.border_tone(FieldId::Name), FieldTone::Neutral);
        form.submit();
        assert_eq!(form.border_tone(FieldId::Name), FieldTone::Error);
        form.edit(FieldId::Name, "Anna".into());
        assert_eq!(form.border_tone(FieldId::Name), FieldTone::Success);
        form.edit(FieldId::Name, String::new());
        assert_eq!(form.border_tone(FieldId::Name), FieldTone::Neutral);
    }

    #[test]
    fn reducer_walks_the_lifecycle() {
        let form = Rc::new(form());
        let form = form.reduce(FormAction::Submit);
        assert_eq!(form.phase, FormPhase::Invalid);
        let form = form.reduce(FormAction::Edit(FieldId::Name, "Anna".into()));
        let form = form.reduce(FormAction::Edit(FieldId::Email, "a@b.co".into()));
        let form = form.reduce(FormAction::Edit(FieldId::Message, "Hello".into()));
        let form = form.reduce(FormAction::Consent(true));
        let form = form.reduce(FormAction::Submit);
        assert!(form.is_submitting());
        let form = form.reduce(FormAction::Delivered);
        assert_eq!(form.phase, FormPhase::Idle);
        assert!(form.values.name.is_empty());
    }

    #[test]
    fn confirmation_uses_configured_copy() {
        let messages = FormMessages {
            sent_title: "Dziękuję".into(),
            sent_description: "Odpiszę w ciągu doby.".into(),
            ..FormMessages::default()
        };
        let mut form = ContactForm::new(messages);
        form.edit(FieldId::Name, "Anna".into());
        form.edit(FieldId::Email, "a@b.co".into());
        form.edit(FieldId::Message, "Hello".into());
        form.set_consent(true);
        form.submit();
        let toast = form.complete_submission().expect("send was in flight");
        assert_eq!(toast.title, "Dziękuję");
        assert_eq!(toast.description, "Odpiszę w ciągu doby.");
        assert_eq!(form.complete_submission(), None);
    }

    #[test]
    fn field_names_match_markup() {
        assert_eq!(FieldId::GdprConsent.as_str(), "gdprConsent");
        assert_eq!(FieldId::Email.as_str(), "email");
    }
}

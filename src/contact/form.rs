//! The contact form container: fields, submit control and notices

use super::field::{ChoiceOption, FieldName, FormField};
use super::transient::TransientMessage;
use std::collections::{BTreeMap, VecDeque};
use tokio::time::Instant;

/// Flat name/value mapping handed to the submission backend
pub type FormPayload = BTreeMap<String, String>;

pub const SUBMIT_LABEL: &str = "Envoyer le message";
pub const SENDING_LABEL: &str = "Envoi en cours...";

pub const PROJECT_TYPES: &[ChoiceOption] = &[
    ("vitrine", "Site vitrine"),
    ("ecommerce", "Boutique en ligne"),
    ("refonte", "Refonte de site"),
    ("maintenance", "Maintenance"),
    ("autre", "Autre"),
];

pub const BUDGETS: &[ChoiceOption] = &[
    ("moins-1500", "Moins de 1 500 €"),
    ("1500-3000", "1 500 € - 3 000 €"),
    ("3000-5000", "3 000 € - 5 000 €"),
    ("plus-5000", "Plus de 5 000 €"),
];

/// The submit control
#[derive(Debug, Clone)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
    pub loading: bool,
    original_label: Option<String>,
}

impl SubmitButton {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            disabled: false,
            loading: false,
            original_label: None,
        }
    }

    /// Disable the control and swap its label for `busy_label`
    pub fn start_loading(&mut self, busy_label: &str) {
        let original = std::mem::replace(&mut self.label, busy_label.to_string());
        self.original_label.get_or_insert(original);
        self.disabled = true;
        self.loading = true;
    }

    /// Re-enable the control and put the original label back
    pub fn restore(&mut self) {
        self.disabled = false;
        self.loading = false;
        if let Some(original) = self.original_label.take() {
            self.label = original;
        }
    }
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self::new(SUBMIT_LABEL)
    }
}

/// Contact form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub project_type: FormField,
    pub budget: FormField,
    pub message: FormField,
    pub submit: SubmitButton,
    /// Notices, newest first
    pub messages: VecDeque<TransientMessage>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text(FieldName::Name, "Nom complet *", false),
            email: FormField::text(FieldName::Email, "Email *", false),
            project_type: FormField::choice(
                FieldName::ProjectType,
                "Type de projet",
                PROJECT_TYPES,
            ),
            budget: FormField::choice(FieldName::Budget, "Budget estimé", BUDGETS),
            message: FormField::text(FieldName::Message, "Votre message *", true),
            submit: SubmitButton::default(),
            messages: VecDeque::new(),
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::ProjectType => &self.project_type,
            FieldName::Budget => &self.budget,
            FieldName::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::ProjectType => &mut self.project_type,
            FieldName::Budget => &mut self.budget,
            FieldName::Message => &mut self.message,
        }
    }

    /// Fields in form order
    pub fn fields(&self) -> impl Iterator<Item = &FormField> {
        FieldName::ALL.into_iter().map(move |name| self.field(name))
    }

    /// Collect every field into the submission payload
    pub fn payload(&self) -> FormPayload {
        self.fields()
            .map(|field| (field.name.as_str().to_string(), field.as_text().to_string()))
            .collect()
    }

    /// Clear every value, mark and error text
    pub fn reset(&mut self) {
        for name in FieldName::ALL {
            let field = self.field_mut(name);
            field.clear();
            field.clear_marks();
        }
    }

    /// Insert a notice as the first child of the form
    pub fn insert_message(&mut self, message: TransientMessage) {
        self.messages.push_front(message);
    }

    /// Remove expired notices. Returns how many were removed.
    pub fn prune_expired(&mut self, now: Instant) -> usize {
        let before = self.messages.len();
        self.messages.retain(|message| !message.is_expired(now));
        before - self.messages.len()
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::field::FieldMark;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.name.set_text("Alice Martin".to_string());
        form.email.set_text("alice@example.fr".to_string());
        form.project_type.next_choice();
        form.message.set_text("Bonjour, je voudrais un site.".to_string());
        form
    }

    #[test]
    fn test_new_form_has_five_fields_in_order() {
        let form = ContactForm::new();
        let names: Vec<_> = form.fields().map(|f| f.name).collect();
        assert_eq!(names, FieldName::ALL.to_vec());
        assert!(form.message.is_multiline);
        assert!(form.budget.is_choice());
    }

    #[test]
    fn test_payload_is_flat_mapping_of_every_field() {
        let payload = filled_form().payload();

        let expected: FormPayload = [
            ("budget", ""),
            ("email", "alice@example.fr"),
            ("message", "Bonjour, je voudrais un site."),
            ("name", "Alice Martin"),
            ("projectType", "vitrine"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(payload, expected);
    }

    #[test]
    fn test_reset_clears_values_and_marks() {
        let mut form = filled_form();
        form.email.mark = FieldMark::Success;
        form.name.mark = FieldMark::Error;
        form.name.error_text.visible = true;

        form.reset();

        for field in form.fields() {
            assert_eq!(field.as_text(), "");
            assert_eq!(field.mark, FieldMark::Neutral);
            assert!(!field.error_text.visible);
        }
    }

    #[test]
    fn test_submit_button_loading_round_trip() {
        let mut button = SubmitButton::default();
        button.start_loading(SENDING_LABEL);
        assert!(button.disabled);
        assert!(button.loading);
        assert_eq!(button.label, SENDING_LABEL);

        button.restore();
        assert!(!button.disabled);
        assert!(!button.loading);
        assert_eq!(button.label, SUBMIT_LABEL);
    }

    #[test]
    fn test_submit_button_keeps_first_original_label() {
        let mut button = SubmitButton::new("Go");
        button.start_loading("Busy");
        button.start_loading("Still busy");
        button.restore();
        assert_eq!(button.label, "Go");
    }

    #[tokio::test(start_paused = true)]
    async fn test_messages_insert_first_and_expire() {
        let mut form = ContactForm::new();
        form.insert_message(TransientMessage::error());
        tokio::time::advance(Duration::from_millis(1000)).await;
        form.insert_message(TransientMessage::success());

        assert_eq!(form.messages.len(), 2);
        assert_eq!(
            form.messages.front().map(|m| m.kind),
            Some(crate::contact::MessageKind::Success)
        );

        tokio::time::advance(Duration::from_millis(4000)).await;
        assert_eq!(form.prune_expired(Instant::now()), 1);
        assert_eq!(form.messages.len(), 1);

        tokio::time::advance(Duration::from_millis(1000)).await;
        assert_eq!(form.prune_expired(Instant::now()), 1);
        assert!(form.messages.is_empty());
    }
}

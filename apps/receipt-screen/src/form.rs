//! # Contact Form
//!
//! Current values of the two contact inputs and their validation state.
//! Both inputs start empty, so both report `required` until typed into.
//! Each field is checked on its own; one failing field never blocks the
//! other.

use receipt_core::validation::RuleSet;
use receipt_core::{ContactField, CoreResult, FieldReport};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    rules: RuleSet,
    email_id: String,
    mob_number: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores what the user typed into `field` and returns its new report.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) -> FieldReport {
        let value = value.into();
        match field {
            ContactField::EmailId => self.email_id = value,
            ContactField::MobNumber => self.mob_number = value,
        }

        let report = self.report(field);
        debug!(field = %field, failed = ?report.failed, "contact field changed");
        report
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::EmailId => &self.email_id,
            ContactField::MobNumber => &self.mob_number,
        }
    }

    pub fn report(&self, field: ContactField) -> FieldReport {
        self.rules.report(field, self.value(field))
    }

    /// Messages to show under `field`, in declaration order.
    pub fn messages(&self, field: ContactField) -> Vec<String> {
        self.report(field).messages
    }

    /// Reports for both fields, in form order.
    pub fn reports(&self) -> Vec<FieldReport> {
        ContactField::ALL
            .iter()
            .map(|field| self.report(*field))
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        ContactField::ALL
            .iter()
            .all(|field| self.report(*field).is_valid())
    }

    /// `Err(ValidationFailed)` when `field` breaks a rule.
    pub fn check(&self, field: ContactField) -> CoreResult<()> {
        self.rules.check(field, self.value(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_core::{CoreError, RuleKind};

    #[test]
    fn test_new_form_requires_both_fields() {
        let form = ContactForm::new();
        let reports = form.reports();
        assert_eq!(reports[0].failed, vec![RuleKind::Required]);
        assert_eq!(reports[0].messages, vec!["Email is required."]);
        assert_eq!(reports[1].failed, vec![RuleKind::Required]);
        assert!(!form.is_valid());
    }

    #[test]
    fn test_fields_are_independent() {
        let mut form = ContactForm::new();
        let email = form.set(ContactField::EmailId, "abc");
        assert_eq!(email.failed, vec![RuleKind::Pattern]);

        let mob = form.set(ContactField::MobNumber, "6545854566");
        assert!(mob.is_valid());
        assert_eq!(form.messages(ContactField::EmailId), vec!["Enter a valid email."]);
        assert!(form.check(ContactField::MobNumber).is_ok());
        assert!(matches!(
            form.check(ContactField::EmailId),
            Err(CoreError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn test_valid_form() {
        let mut form = ContactForm::new();
        form.set(ContactField::EmailId, "abc@gmail.com");
        form.set(ContactField::MobNumber, "6545854566");
        assert!(form.is_valid());
        assert_eq!(form.value(ContactField::EmailId), "abc@gmail.com");
    }

    #[test]
    fn test_short_mob_number_message() {
        let mut form = ContactForm::new();
        let report = form.set(ContactField::MobNumber, "12345");
        assert_eq!(report.failed, vec![RuleKind::MinLength]);
        assert_eq!(
            report.messages,
            vec!["Mobile number must be at least 10 characters long."]
        );
    }
}

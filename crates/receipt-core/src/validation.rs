//! # Validation Module
//!
//! Two kinds of validation live here:
//!
//! 1. **Contact field rules**: the declarative rule lists for `emailid` and
//!    `mobNumber`, plus the small rule runner that evaluates them and
//!    resolves the messages for whatever failed.
//! 2. **Add-product input parsing**: turning the modal's raw text into a
//!    typed [`PurchaseItem`], rejecting malformed numbers at the boundary.
//!
//! ## Rule Evaluation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  value ──► for each rule, in declaration order                          │
//! │              │                                                          │
//! │              ├── required   fails on ""                                 │
//! │              ├── pattern    fails on non-empty value not matching       │
//! │              ├── minlength  fails on non-empty value shorter than min   │
//! │              └── maxlength  fails on value longer than max              │
//! │                                                                         │
//! │  failed kinds ──► messages_for() ──► messages in declaration order      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Empty values only ever fail `required`; the other predicates treat an
//! empty value as "nothing to check yet".
//!
//! ## Usage
//! ```rust
//! use receipt_core::validation::{ContactField, RuleKind, RuleSet};
//!
//! let rules = RuleSet::contact();
//! assert!(rules.evaluate(ContactField::EmailId, "abc@gmail.com").is_empty());
//! assert_eq!(rules.evaluate(ContactField::MobNumber, "12345"), vec![RuleKind::MinLength]);
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{ItemInput, PurchaseItem};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// `localpart@domain.tld`, anchored at both ends.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Exact length of a mobile number.
pub const MOB_NUMBER_LENGTH: usize = 10;

// =============================================================================
// Rule Kinds & Fields
// =============================================================================

/// A named validation predicate category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RuleKind {
    Required,
    Pattern,
    MinLength,
    MaxLength,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Required => write!(f, "required"),
            RuleKind::Pattern => write!(f, "pattern"),
            RuleKind::MinLength => write!(f, "minlength"),
            RuleKind::MaxLength => write!(f, "maxlength"),
        }
    }
}

/// The two validated contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ContactField {
    #[serde(rename = "emailid")]
    EmailId,
    #[serde(rename = "mobNumber")]
    MobNumber,
}

impl ContactField {
    /// Both fields, in form order.
    pub const ALL: [ContactField; 2] = [ContactField::EmailId, ContactField::MobNumber];

    /// Field name as the form and the API spell it.
    pub fn name(&self) -> &'static str {
        match self {
            ContactField::EmailId => "emailid",
            ContactField::MobNumber => "mobNumber",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Rules
// =============================================================================

/// The check a rule performs.
#[derive(Debug, Clone)]
pub enum Predicate {
    Required,
    Pattern(Regex),
    MinLength(usize),
    MaxLength(usize),
}

impl Predicate {
    /// The rule kind this predicate reports when it fails.
    pub fn kind(&self) -> RuleKind {
        match self {
            Predicate::Required => RuleKind::Required,
            Predicate::Pattern(_) => RuleKind::Pattern,
            Predicate::MinLength(_) => RuleKind::MinLength,
            Predicate::MaxLength(_) => RuleKind::MaxLength,
        }
    }

    /// Returns true when `value` satisfies the predicate.
    pub fn passes(&self, value: &str) -> bool {
        if value.is_empty() {
            return !matches!(self, Predicate::Required);
        }

        let len = value.chars().count();
        match self {
            Predicate::Required => true,
            Predicate::Pattern(regex) => regex.is_match(value),
            Predicate::MinLength(min) => len >= *min,
            Predicate::MaxLength(max) => len <= *max,
        }
    }
}

/// A predicate paired with the message shown when it fails.
#[derive(Debug, Clone)]
pub struct Rule {
    pub predicate: Predicate,
    pub message: String,
}

impl Rule {
    pub fn new(predicate: Predicate, message: impl Into<String>) -> Self {
        Rule {
            predicate,
            message: message.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> RuleKind {
        self.predicate.kind()
    }
}

/// Outcome of running one field's rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldReport {
    pub field: ContactField,
    /// Failing kinds, in declaration order.
    pub failed: Vec<RuleKind>,
    /// Messages for the failing kinds, in declaration order.
    pub messages: Vec<String>,
}

impl FieldReport {
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Immutable rule lists for the contact fields.
#[derive(Debug, Clone)]
pub struct RuleSet {
    email_id: Vec<Rule>,
    mob_number: Vec<Rule>,
}

impl RuleSet {
    /// Builds the contact rule set.
    ///
    /// - `emailid`: required, pattern
    /// - `mobNumber`: required, minlength 10, maxlength 10
    pub fn contact() -> Self {
        // Regex clones share the compiled program.
        let email = EMAIL_REGEX.clone();

        RuleSet {
            email_id: vec![
                Rule::new(Predicate::Required, "Email is required."),
                Rule::new(Predicate::Pattern(email), "Enter a valid email."),
            ],
            mob_number: vec![
                Rule::new(Predicate::Required, "Mobile number is required."),
                Rule::new(
                    Predicate::MinLength(MOB_NUMBER_LENGTH),
                    "Mobile number must be at least 10 characters long.",
                ),
                Rule::new(
                    Predicate::MaxLength(MOB_NUMBER_LENGTH),
                    "Maximum length of this field is 10.",
                ),
            ],
        }
    }

    /// The declared rules for `field`, in order.
    pub fn rules(&self, field: ContactField) -> &[Rule] {
        match field {
            ContactField::EmailId => &self.email_id,
            ContactField::MobNumber => &self.mob_number,
        }
    }

    /// Runs every rule of `field` against `value`, returning the failing
    /// kinds in declaration order.
    pub fn evaluate(&self, field: ContactField, value: &str) -> Vec<RuleKind> {
        self.rules(field)
            .iter()
            .filter(|rule| !rule.predicate.passes(value))
            .map(Rule::kind)
            .collect()
    }

    /// Messages for every declared rule of `field` whose kind is in
    /// `failed`, in declaration order. Kinds the field doesn't declare are
    /// ignored.
    pub fn messages_for(&self, field: ContactField, failed: &[RuleKind]) -> Vec<&str> {
        self.rules(field)
            .iter()
            .filter(|rule| failed.contains(&rule.kind()))
            .map(|rule| rule.message.as_str())
            .collect()
    }

    /// Evaluates `value` and resolves its messages in one step.
    pub fn report(&self, field: ContactField, value: &str) -> FieldReport {
        let failed = self.evaluate(field, value);
        let messages = self
            .messages_for(field, &failed)
            .into_iter()
            .map(str::to_string)
            .collect();

        FieldReport {
            field,
            failed,
            messages,
        }
    }

    /// Like [`RuleSet::report`], but as a `Result` for callers that want
    /// `?` propagation.
    pub fn check(&self, field: ContactField, value: &str) -> CoreResult<()> {
        let report = self.report(field, value);
        if report.is_valid() {
            return Ok(());
        }

        debug!(field = %field, failed = ?report.failed, "contact field failed validation");
        Err(CoreError::ValidationFailed {
            field: field.name().to_string(),
            messages: report.messages,
        })
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        RuleSet::contact()
    }
}

// =============================================================================
// Add-Product Input
// =============================================================================

/// Parses a quantity typed into the modal.
///
/// ## Rules
/// - Must be a whole number
/// - Must be positive (> 0)
pub fn parse_quantity(text: &str) -> ValidationResult<u32> {
    let qty: i64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "expected a whole number".to_string(),
        })?;

    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(qty).map_err(|_| ValidationError::InvalidFormat {
        field: "quantity".to_string(),
        reason: "too large".to_string(),
    })
}

/// Checks that an already-numeric amount is finite and non-negative.
pub fn check_amount(field: &str, value: f64) -> ValidationResult<f64> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected a finite number".to_string(),
        });
    }

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(value)
}

/// Parses a non-negative real amount (duration, rate or discount).
///
/// ## Example
/// ```rust
/// use receipt_core::validation::parse_amount;
///
/// assert_eq!(parse_amount("duration", "8.2"), Ok(8.2));
/// assert!(parse_amount("duration", "-1").is_err());
/// assert!(parse_amount("duration", "soon").is_err());
/// ```
pub fn parse_amount(field: &str, text: &str) -> ValidationResult<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected a number".to_string(),
        })?;

    check_amount(field, value)
}

/// Converts modal input into a [`PurchaseItem`].
///
/// ## Rejections
/// - Any empty field → [`CoreError::IncompleteItemInput`]
/// - Malformed or out-of-range number → [`CoreError::Validation`]
pub fn parse_item_input(input: &ItemInput) -> CoreResult<PurchaseItem> {
    let missing = input.missing_fields();
    if !missing.is_empty() {
        return Err(CoreError::IncompleteItemInput { missing });
    }

    Ok(PurchaseItem {
        product_name: input.product_name.clone(),
        quantity: parse_quantity(&input.quantity)?,
        duration: parse_amount("duration", &input.duration)?,
        per_hr_cost: parse_amount("perHrCost", &input.per_hr_cost)?,
        product_discount: parse_amount("productDiscount", &input.product_discount)?,
    })
}

/// Checks the numeric invariants of an already-typed item.
///
/// Used wherever items enter a receipt without going through the modal:
/// loaded payloads and [`crate::Receipt::push_item`].
///
/// ## Rules
/// - `quantity` > 0
/// - `duration`, `perHrCost`, `productDiscount` finite and >= 0
pub fn validate_item(item: &PurchaseItem) -> ValidationResult<()> {
    if item.quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    check_amount("duration", item.duration)?;
    check_amount("perHrCost", item.per_hr_cost)?;
    check_amount("productDiscount", item.product_discount)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_rules() {
        let rules = RuleSet::contact();
        assert!(rules.evaluate(ContactField::EmailId, "abc@gmail.com").is_empty());
        assert!(rules.evaluate(ContactField::EmailId, "first.last+tag@my-mail.co.uk").is_empty());

        assert_eq!(
            rules.evaluate(ContactField::EmailId, "abc"),
            vec![RuleKind::Pattern]
        );
        assert_eq!(
            rules.evaluate(ContactField::EmailId, ""),
            vec![RuleKind::Required]
        );
    }

    #[test]
    fn test_email_tld_needs_literal_dot() {
        // The dot before the TLD is escaped, so no other character stands in for it.
        let rules = RuleSet::contact();
        assert_eq!(
            rules.evaluate(ContactField::EmailId, "abc@gmailcom"),
            vec![RuleKind::Pattern]
        );
        assert_eq!(
            rules.evaluate(ContactField::EmailId, "abc@gmail-com"),
            vec![RuleKind::Pattern]
        );
        assert!(rules.evaluate(ContactField::EmailId, "abc@gmail.com").is_empty());
    }

    #[test]
    fn test_contact_rule_sets_share_pattern() {
        let first = RuleSet::contact();
        let second = RuleSet::default();
        for value in ["abc@gmail.com", "abc", "abc@gmailcom", ""] {
            assert_eq!(
                first.evaluate(ContactField::EmailId, value),
                second.evaluate(ContactField::EmailId, value)
            );
        }
    }

    #[test]
    fn test_mob_number_rules() {
        let rules = RuleSet::contact();
        assert_eq!(
            rules.evaluate(ContactField::MobNumber, "12345"),
            vec![RuleKind::MinLength]
        );
        assert!(rules.evaluate(ContactField::MobNumber, "6545854566").is_empty());
        assert_eq!(
            rules.evaluate(ContactField::MobNumber, "65458545661"),
            vec![RuleKind::MaxLength]
        );
        assert_eq!(
            rules.evaluate(ContactField::MobNumber, ""),
            vec![RuleKind::Required]
        );
    }

    #[test]
    fn test_messages_in_declaration_order() {
        let rules = RuleSet::contact();
        let messages = rules.messages_for(
            ContactField::MobNumber,
            &[RuleKind::MaxLength, RuleKind::Required],
        );
        assert_eq!(
            messages,
            vec![
                "Mobile number is required.",
                "Maximum length of this field is 10."
            ]
        );
    }

    #[test]
    fn test_messages_ignore_undeclared_kinds() {
        let rules = RuleSet::contact();
        let messages = rules.messages_for(ContactField::EmailId, &[RuleKind::MinLength]);
        assert!(messages.is_empty());
    }

    #[test]
    fn test_check_reports_validation_failed() {
        let rules = RuleSet::contact();
        assert!(rules.check(ContactField::EmailId, "abc@gmail.com").is_ok());

        match rules.check(ContactField::EmailId, "abc") {
            Err(CoreError::ValidationFailed { field, messages }) => {
                assert_eq!(field, "emailid");
                assert_eq!(messages, vec!["Enter a valid email."]);
            }
            other => panic!("expected ValidationFailed, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3"), Ok(3));
        assert_eq!(parse_quantity(" 12 "), Ok(12));
        assert!(matches!(
            parse_quantity("0"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            parse_quantity("-2"),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            parse_quantity("2.5"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_quantity("lots"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("perHrCost", "35"), Ok(35.0));
        assert_eq!(parse_amount("productDiscount", "0"), Ok(0.0));
        assert!(matches!(
            parse_amount("duration", "-0.5"),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            parse_amount("duration", "inf"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_item_input() {
        let input = ItemInput {
            product_name: "Dolly".to_string(),
            quantity: "2".to_string(),
            duration: "5".to_string(),
            per_hr_cost: "20".to_string(),
            product_discount: "5".to_string(),
        };
        let item = parse_item_input(&input).unwrap();
        assert_eq!(item, PurchaseItem::new("Dolly", 2, 5.0, 20.0, 5.0));
    }

    #[test]
    fn test_parse_item_input_incomplete() {
        let input = ItemInput {
            product_name: "Dolly".to_string(),
            quantity: "2".to_string(),
            ..ItemInput::default()
        };
        match parse_item_input(&input) {
            Err(CoreError::IncompleteItemInput { missing }) => {
                assert_eq!(missing, vec!["duration", "perHrCost", "productDiscount"]);
            }
            other => panic!("expected IncompleteItemInput, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_item() {
        assert_eq!(validate_item(&PurchaseItem::new("Clamp", 4, 10.0, 35.0, 12.0)), Ok(()));
        assert_eq!(validate_item(&PurchaseItem::new("Free", 1, 0.0, 0.0, 0.0)), Ok(()));

        assert_eq!(
            validate_item(&PurchaseItem::new("Clamp", 0, 10.0, 35.0, 12.0)),
            Err(ValidationError::MustBePositive {
                field: "quantity".to_string()
            })
        );
        assert_eq!(
            validate_item(&PurchaseItem::new("Clamp", 4, -5.0, 35.0, 12.0)),
            Err(ValidationError::Negative {
                field: "duration".to_string()
            })
        );
        assert_eq!(
            validate_item(&PurchaseItem::new("Clamp", 4, 10.0, 35.0, -100.0)),
            Err(ValidationError::Negative {
                field: "productDiscount".to_string()
            })
        );
        assert!(matches!(
            validate_item(&PurchaseItem::new("Clamp", 4, f64::NAN, 35.0, 12.0)),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            validate_item(&PurchaseItem::new("Clamp", 4, 10.0, f64::INFINITY, 12.0)),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_parse_item_input_malformed_number() {
        let input = ItemInput {
            product_name: "Dolly".to_string(),
            quantity: "two".to_string(),
            duration: "5".to_string(),
            per_hr_cost: "20".to_string(),
            product_discount: "5".to_string(),
        };
        assert!(matches!(
            parse_item_input(&input),
            Err(CoreError::Validation(ValidationError::InvalidFormat { .. }))
        ));
    }
}

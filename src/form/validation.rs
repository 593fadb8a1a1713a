//! Submit-time validation of the order form.
//!
//! Every rule runs on every pass and the resulting [`ValidationErrors`]
//! replaces whatever the previous pass produced.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::data::OrderFormData;
use super::field::FieldName;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^¥?[0-9]+(\.[0-9]{1,2})?$").expect("valid amount pattern"));

pub const INVALID_EMAIL: &str = "Invalid email address";
pub const INVALID_PHONE: &str = "Phone number should contain only digits";
pub const INVALID_MONTHLY_FEE: &str = "Enter a valid amount for monthly fee";
pub const INVALID_FIRST_PAYMENT: &str = "Enter a valid amount for first payment";

/// Field-level validation failure shown next to the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// At most one message per field. A missing key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldName, FieldValidationError>,
}

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.errors.get(&field).map(|error| error.message.as_str())
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.errors.values()
    }

    fn insert(&mut self, error: FieldValidationError) {
        self.errors.insert(error.field, error);
    }
}

/// When the gmail field is checked against the email pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailPolicy {
    /// Blank is accepted; anything else must look like an address.
    #[default]
    WhenPresent,
    /// Blank is rejected like any malformed address.
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationPolicy {
    pub email_policy: EmailPolicy,
    /// Reject non-empty phone numbers containing anything but digits.
    pub strict_phone_check: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    policy: ValidationPolicy,
}

impl Validator {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn validate(&self, data: &OrderFormData) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        let check_email = match self.policy.email_policy {
            EmailPolicy::WhenPresent => !data.gmail.is_empty(),
            EmailPolicy::Required => true,
        };
        if check_email && !EMAIL_PATTERN.is_match(&data.gmail) {
            errors.insert(FieldValidationError::new(FieldName::Gmail, INVALID_EMAIL));
        }

        if self.policy.strict_phone_check
            && !data.phone_number.is_empty()
            && !data.phone_number.chars().all(|ch| ch.is_ascii_digit())
        {
            errors.insert(FieldValidationError::new(
                FieldName::PhoneNumber,
                INVALID_PHONE,
            ));
        }

        if !is_valid_amount(&data.monthly_fee) {
            errors.insert(FieldValidationError::new(
                FieldName::MonthlyFee,
                INVALID_MONTHLY_FEE,
            ));
        }

        if !is_valid_amount(&data.first_payment) {
            errors.insert(FieldValidationError::new(
                FieldName::FirstPayment,
                INVALID_FIRST_PAYMENT,
            ));
        }

        errors
    }
}

/// Optional glyph, digits, and at most two decimal places.
pub fn is_valid_amount(value: &str) -> bool {
    AMOUNT_PATTERN.is_match(value)
}

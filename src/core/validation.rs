//! Client-side validation for checkout and authentication forms
//!
//! Each validator returns the first problem per field. Results are collected in
//! [`FieldErrors`] so forms can render inline messages next to the inputs.

use std::collections::BTreeMap;

use thiserror::Error;

use super::checkout::{BillingDetails, MAX_SEATS, MIN_SEATS, WorkspaceDetails};

/// Minimum password length accepted at signup
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Number of digits in a one-time passcode
pub const OTP_LENGTH: usize = 6;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Seats must be between {min} and {max}")]
    SeatsOutOfRange { min: u32, max: u32 },
    #[error("Card number is invalid")]
    InvalidCardNumber,
    #[error("Expiry must be a future date in MM/YY format")]
    InvalidExpiry,
    #[error("CVC must be 3 or 4 digits")]
    InvalidCvc,
    #[error("Enter the {len}-digit code")]
    InvalidOtp { len: usize },
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },
    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Per-field errors keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Record an error, keeping the first one reported for a field
    pub fn add(&mut self, field: &'static str, error: FieldError) {
        self.errors.entry(field).or_insert(error);
    }

    /// Record the error from `result`, if any
    pub fn check(&mut self, field: &'static str, result: Result<(), FieldError>) {
        if let Err(error) = result {
            self.add(field, error);
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.errors.get(field)
    }

    /// Display message for a field
    pub fn message(&self, field: &str) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn clear(&mut self, field: &str) {
        self.errors.remove(field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

pub fn validate_required(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

/// Loose structural email check: one `@`, non-empty local part, dotted domain
pub fn validate_email(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    let Some((local, domain)) = value.split_once('@') else {
        return Err(FieldError::InvalidEmail);
    };
    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..");
    if local.is_empty() || !domain_ok || value.chars().any(char::is_whitespace) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

pub fn validate_seat_count(seats: u32) -> Result<(), FieldError> {
    if (MIN_SEATS..=MAX_SEATS).contains(&seats) {
        Ok(())
    } else {
        Err(FieldError::SeatsOutOfRange {
            min: MIN_SEATS,
            max: MAX_SEATS,
        })
    }
}

/// Card number: 12-19 digits (spaces and dashes ignored) passing the Luhn check
pub fn validate_card_number(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::Required);
    }
    let mut digits = Vec::with_capacity(19);
    for c in value.chars() {
        match c {
            ' ' | '-' => continue,
            d if d.is_ascii_digit() => digits.push(d as u32 - '0' as u32),
            _ => return Err(FieldError::InvalidCardNumber),
        }
    }
    if !(12..=19).contains(&digits.len()) {
        return Err(FieldError::InvalidCardNumber);
    }
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                d
            }
        })
        .sum();
    if sum % 10 == 0 {
        Ok(())
    } else {
        Err(FieldError::InvalidCardNumber)
    }
}

/// Expiry in `MM/YY`, not earlier than the given current month
pub fn validate_expiry(value: &str, current_year: u32, current_month: u32) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    let (month, year) = value.split_once('/').ok_or(FieldError::InvalidExpiry)?;
    let month: u32 = month.trim().parse().map_err(|_| FieldError::InvalidExpiry)?;
    let year = year.trim();
    if year.len() != 2 {
        return Err(FieldError::InvalidExpiry);
    }
    let year: u32 = year.parse().map_err(|_| FieldError::InvalidExpiry)?;
    if !(1..=12).contains(&month) {
        return Err(FieldError::InvalidExpiry);
    }
    let year = 2000 + year;
    if (year, month) < (current_year, current_month) {
        return Err(FieldError::InvalidExpiry);
    }
    Ok(())
}

pub fn validate_cvc(value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Required);
    }
    if (3..=4).contains(&value.len()) && value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FieldError::InvalidCvc)
    }
}

pub fn validate_otp(code: &str) -> Result<(), FieldError> {
    if code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FieldError::InvalidOtp { len: OTP_LENGTH })
    }
}

pub fn validate_new_password(password: &str) -> Result<(), FieldError> {
    if password.is_empty() {
        Err(FieldError::Required)
    } else if password.chars().count() < MIN_PASSWORD_LENGTH {
        Err(FieldError::PasswordTooShort {
            min: MIN_PASSWORD_LENGTH,
        })
    } else {
        Ok(())
    }
}

pub fn validate_workspace(details: &WorkspaceDetails) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check("workspace_name", validate_required(&details.workspace_name));
    errors.check("seat_count", validate_seat_count(details.seat_count));
    errors.check("billing_email", validate_email(&details.billing_email));
    errors
}

pub fn validate_billing(details: &BillingDetails, current_year: u32, current_month: u32) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check("card_number", validate_card_number(&details.card_number));
    errors.check(
        "expiry",
        validate_expiry(&details.expiry, current_year, current_month),
    );
    errors.check("cvc", validate_cvc(&details.cvc));
    errors.check("country", validate_required(&details.country));
    errors.check("address", validate_required(&details.address));
    errors
}

pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check("email", validate_email(email));
    errors.check("password", validate_required(password));
    errors
}

pub fn validate_signup(name: &str, email: &str, password: &str, confirm: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.check("name", validate_required(name));
    errors.check("email", validate_email(email));
    errors.check("password", validate_new_password(password));
    if password != confirm {
        errors.add("confirm_password", FieldError::PasswordMismatch);
    }
    errors
}

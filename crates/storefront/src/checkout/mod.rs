//! Checkout form validation.
//!
//! Validates a complete order submission and either produces a normalized
//! [`ValidatedOrder`] ready to be placed, or the full list of field errors.
//! Validation is total: every applicable rule is checked and every failure
//! is collected, so the user sees all problems at once rather than one per
//! submit.

use quickbite_core::{Email, PaymentMethod};
use serde::{Deserialize, Serialize};

/// Countries the store delivers to, as ISO 3166-1 alpha-2 codes.
pub const ALLOWED_COUNTRIES: &[&str] = &["US", "CA", "GB", "AU", "DE", "FR"];

/// Raw checkout submission, exactly as bound by the form.
///
/// The card fields are optional at the type level because they are only
/// required when `payment_method` is [`PaymentMethod::CreditCard`]; the
/// conditional rules live in [`CheckoutForm::validate`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub full_name: String,
    pub email: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub card_number: Option<String>,
    #[serde(default)]
    pub card_expiry: Option<String>,
    #[serde(default)]
    pub card_cvc: Option<String>,
}

/// A single field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field the message belongs to (camelCase wire name).
    pub field: &'static str,
    /// User-facing message.
    pub message: String,
}

/// Ordered collection of field errors from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Whether no errors were collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of collected errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The errors in validation order.
    #[must_use]
    pub fn as_slice(&self) -> &[FieldError] {
        &self.0
    }

    /// First message attached to the named field, if any.
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Normalized contact and delivery details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub full_name: String,
    pub email: Email,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

/// Payment details with exactly the fields the chosen method requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "camelCase")]
pub enum PaymentDetails {
    /// Card fields normalized: number stripped of whitespace.
    CreditCard {
        number: String,
        expiry: String,
        cvc: String,
    },
    Paypal,
    #[serde(rename = "cod")]
    CashOnDelivery,
}

impl PaymentDetails {
    /// The payment method this detail variant belongs to.
    #[must_use]
    pub const fn method(&self) -> PaymentMethod {
        match self {
            Self::CreditCard { .. } => PaymentMethod::CreditCard,
            Self::Paypal => PaymentMethod::Paypal,
            Self::CashOnDelivery => PaymentMethod::CashOnDelivery,
        }
    }
}

/// A submission that passed every applicable rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedOrder {
    pub contact: ContactDetails,
    pub payment: PaymentDetails,
}

impl CheckoutForm {
    /// Validate the submission, collecting all applicable errors.
    ///
    /// Rules run in a fixed order: contact fields first, then the rules for
    /// the chosen payment method. Card fields are ignored entirely unless
    /// the method is credit card.
    ///
    /// # Errors
    ///
    /// Returns every collected [`FieldError`] when any rule fails.
    pub fn validate(&self) -> Result<ValidatedOrder, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.full_name.chars().count() < 3 {
            errors.push("fullName", "Full name must be at least 3 characters.");
        }

        let email = self.email.trim().to_lowercase();
        let parsed_email = Email::parse(&email);
        if parsed_email.is_err() {
            errors.push("email", "Please enter a valid email address.");
        }

        if self.address.chars().count() < 5 {
            errors.push("address", "Address must be at least 5 characters.");
        }
        if self.city.chars().count() < 2 {
            errors.push("city", "City must be at least 2 characters.");
        }
        if self.postal_code.chars().count() < 4 {
            errors.push("postalCode", "Postal code must be at least 4 characters.");
        }

        let country = self.country.trim();
        if !ALLOWED_COUNTRIES.contains(&country) {
            errors.push("country", "Country is required.");
        }

        // Payment method itself is a closed enum; an unknown value fails
        // deserialization before this point. Only the card rules remain.
        if self.payment_method.requires_card_details() {
            self.validate_card_fields(&mut errors);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let payment = match self.payment_method {
            PaymentMethod::CreditCard => PaymentDetails::CreditCard {
                number: strip_whitespace(self.card_number.as_deref().unwrap_or_default()),
                expiry: self.card_expiry.clone().unwrap_or_default(),
                cvc: self.card_cvc.clone().unwrap_or_default(),
            },
            PaymentMethod::Paypal => PaymentDetails::Paypal,
            PaymentMethod::CashOnDelivery => PaymentDetails::CashOnDelivery,
        };

        let Ok(email) = parsed_email else {
            // unreachable: a parse failure was recorded above
            return Err(errors);
        };

        Ok(ValidatedOrder {
            contact: ContactDetails {
                full_name: self.full_name.trim().to_owned(),
                email,
                address: self.address.trim().to_owned(),
                city: self.city.trim().to_owned(),
                postal_code: self.postal_code.trim().to_owned(),
                country: country.to_owned(),
            },
            payment,
        })
    }

    /// Credit-card rules. Absence of any card field is reported as a single
    /// error attached to `cardNumber`; format checks only run on fields
    /// that are present.
    fn validate_card_fields(&self, errors: &mut FieldErrors) {
        let number = present(self.card_number.as_deref());
        let expiry = present(self.card_expiry.as_deref());
        let cvc = present(self.card_cvc.as_deref());

        if number.is_none() || expiry.is_none() || cvc.is_none() {
            errors.push(
                "cardNumber",
                "Card number, expiry, and CVC are required for credit card payments.",
            );
        }

        if let Some(number) = number
            && !is_valid_card_number(number)
        {
            errors.push(
                "cardNumber",
                "Invalid card number format (must be 13-19 digits).",
            );
        }

        if let Some(expiry) = expiry
            && !is_valid_expiry(expiry)
        {
            errors.push("cardExpiry", "Invalid expiry date format (MM/YY).");
        }

        if let Some(cvc) = cvc
            && !is_valid_cvc(cvc)
        {
            errors.push("cardCVC", "Invalid CVC format (3 or 4 digits).");
        }
    }
}

/// Treat missing and empty-string fields the same way.
fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|s| !s.is_empty())
}

fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// 13-19 consecutive digits after stripping whitespace.
fn is_valid_card_number(s: &str) -> bool {
    let digits = strip_whitespace(s);
    (13..=19).contains(&digits.len()) && is_digits(&digits)
}

/// `MM/YY` where MM is 01-12.
fn is_valid_expiry(s: &str) -> bool {
    let Some((month, year)) = s.split_once('/') else {
        return false;
    };
    if month.len() != 2 || year.len() != 2 || !is_digits(month) || !is_digits(year) {
        return false;
    }
    month.parse::<u8>().is_ok_and(|m| (1..=12).contains(&m))
}

/// 3 or 4 consecutive digits.
fn is_valid_cvc(s: &str) -> bool {
    (s.len() == 3 || s.len() == 4) && is_digits(s)
}

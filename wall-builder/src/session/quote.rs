use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;
use wallfit::io::ext_repr::ExtLayout;

use crate::session::{BuilderStep, QuoteEstimate};

/// Contact form of a quote request
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
}

impl ContactDetails {
    /// Validates every field, returning all problems at once.
    pub fn validate(&self) -> Result<(), Vec<QuoteError>> {
        let mut errors = vec![];
        if self.name.trim().is_empty() {
            errors.push(QuoteError::MissingName);
        }
        if !is_valid_email(self.email.trim()) {
            errors.push(QuoteError::InvalidEmail(self.email.clone()));
        }
        if let Some(phone) = self.phone.as_deref().filter(|p| !p.trim().is_empty()) {
            if !is_valid_phone(phone) {
                errors.push(QuoteError::InvalidPhone(phone.to_string()));
            }
        }
        match errors.is_empty() {
            true => Ok(()),
            false => Err(errors),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuoteError {
    #[error("a name is required")]
    MissingName,
    #[error("invalid email address: '{0}'")]
    InvalidEmail(String),
    #[error("invalid phone number: '{0}'")]
    InvalidPhone(String),
    #[error("the layout does not contain any modules")]
    EmptyLayout,
    #[error("{0} placed module(s) without a finish")]
    UnfinishedModules(usize),
    #[error("contact details are invalid: {}", .0.iter().join(", "))]
    InvalidContact(Vec<QuoteError>),
    #[error("a quote can only be submitted from the review step, currently at {0}")]
    NotReviewed(BuilderStep),
    #[error("a quote was already submitted")]
    AlreadySubmitted,
}

/// A submitted quote request
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ExtQuote {
    pub catalog: String,
    pub contact: ContactDetails,
    pub layout: ExtLayout,
    pub estimate: QuoteEstimate,
    /// RFC 3339 timestamp of the submission
    pub submitted_at: String,
}

/// `local@host.tld`, no whitespace, exactly one `@`, a top level domain of at least 2 characters
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s.]{2,}$").unwrap()
});

/// At least 7 digits, optionally separated by spaces, `+`, `-` and parentheses
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ +\-()]*(?:[0-9][ +\-()]*){7,}$").unwrap()
});

fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

//! ValidateRequestHandler - Field-level checks of a submission before upload.

use std::collections::BTreeMap;

use crate::adapters::email::is_valid_email;
use crate::domain::topsis::{parse_impacts, parse_weights, ImpactVector, WeightVector};

/// Raw form fields as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct ValidateRequestCommand {
    pub email: String,
    pub weights: String,
    pub impacts: String,
}

/// Messages keyed by field name (`email`, `weights`, `impacts`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidateRequestResult {
    pub errors: BTreeMap<String, String>,
}

impl ValidateRequestResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks each field independently so every problem is reported at once.
#[derive(Debug, Clone, Default)]
pub struct ValidateRequestHandler;

impl ValidateRequestHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: &ValidateRequestCommand) -> ValidateRequestResult {
        let mut errors = BTreeMap::new();

        if let Some(message) = Self::check_email(&cmd.email) {
            errors.insert("email".to_string(), message);
        }
        if let Some(message) = Self::check_weights(&cmd.weights) {
            errors.insert("weights".to_string(), message);
        }
        if let Some(message) = Self::check_impacts(&cmd.impacts) {
            errors.insert("impacts".to_string(), message);
        }

        ValidateRequestResult { errors }
    }

    fn check_email(email: &str) -> Option<String> {
        let email = email.trim();
        if email.is_empty() {
            Some("Email is required".to_string())
        } else if !is_valid_email(email) {
            Some("Invalid email format".to_string())
        } else {
            None
        }
    }

    fn check_weights(weights: &str) -> Option<String> {
        if weights.trim().is_empty() {
            return Some("Weights are required".to_string());
        }
        parse_weights(weights)
            .and_then(WeightVector::try_new)
            .err()
            .map(|e| e.to_string())
    }

    fn check_impacts(impacts: &str) -> Option<String> {
        if impacts.trim().is_empty() {
            return Some("Impacts are required".to_string());
        }
        parse_impacts(impacts)
            .and_then(|tokens| ImpactVector::from_tokens(&tokens))
            .err()
            .map(|e| e.to_string())
    }
}

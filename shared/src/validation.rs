use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::{MISSING_CONSENT_ERROR, MISSING_FIELDS_ERROR};
use crate::registration::RegisterRequest;

pub fn validate_required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

pub fn validate_consent(consent: &bool) -> Result<(), ValidationError> {
    if !*consent {
        return Err(ValidationError::new("consent_required"));
    }
    Ok(())
}

/// What the visitor typed into the registration form.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq)]
pub struct RegistrationForm {
    #[validate(custom = "validate_required")]
    pub name: String,
    #[validate(custom = "validate_required")]
    pub email: String,
    #[validate(custom = "validate_consent")]
    pub consent: bool,
}

impl RegistrationForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, consent: bool) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            consent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationIssue {
    MissingFields,
    MissingConsent,
}

impl RegistrationIssue {
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingFields => MISSING_FIELDS_ERROR,
            Self::MissingConsent => MISSING_CONSENT_ERROR,
        }
    }
}

/// Checks the form and returns the trimmed contact to register.
/// Empty fields are reported before missing consent.
pub fn validate_registration(form: &RegistrationForm) -> Result<RegisterRequest, RegistrationIssue> {
    if let Err(errors) = form.validate() {
        let fields = errors.field_errors();
        if fields.contains_key("name") || fields.contains_key("email") {
            return Err(RegistrationIssue::MissingFields);
        }
        return Err(RegistrationIssue::MissingConsent);
    }

    Ok(RegisterRequest {
        name: form.name.trim().to_string(),
        email: form.email.trim().to_string(),
    })
}

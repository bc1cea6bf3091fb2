use serde::{Deserialize, Serialize};

// === API Types ===

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RegisterResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl RegisterResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            details: None,
        }
    }

    pub fn failed(message: impl Into<String>, details: Option<serde_json::Value>) -> Self {
        Self {
            success: false,
            message: message.into(),
            details,
        }
    }
}

/// Hands a new contact to the mailing-list services.
///
/// Fire-and-forget: implementations observe the outcome only for logging and
/// must never block or fail the local registration.
pub trait RegistrationTransport {
    fn forward(&self, request: RegisterRequest);
}

/// First word of the name and the rest, as mailing lists want them.
pub fn split_name(name: &str) -> (String, String) {
    let mut words = name.split_whitespace();
    let first = words.next().unwrap_or_default().to_string();
    let last = words.collect::<Vec<_>>().join(" ");
    (first, last)
}

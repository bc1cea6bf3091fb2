use serde_json::Value;

pub mod brevo;
pub mod mailchimp;
pub mod registration_service;

/// How a mailing-list provider answered an add-contact call.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome {
    Subscribed,
    /// The contact was already on the list. Counts as success.
    AlreadySubscribed,
    Rejected { status: u16, body: Value },
}

impl ProviderOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, ProviderOutcome::Rejected { .. })
    }
}

/// Reads a provider response body. Anything that is not JSON is kept as a
/// string so it can still be reported.
pub async fn read_body(response: reqwest::Response) -> Value {
    match response.text().await {
        Ok(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
        Err(e) => Value::String(e.to_string()),
    }
}

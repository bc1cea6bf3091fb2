use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use shared::registration::{split_name, RegisterRequest};
use tracing::{debug, info};

use super::{read_body, ProviderOutcome};
use crate::config::MailingConfig;

pub const SOURCE_ATTRIBUTE: &str = "Taqueria Ruleta";
const DUPLICATE_CODE: &str = "duplicate_parameter";

#[derive(Debug, Serialize, PartialEq)]
pub struct ContactAttributes {
    #[serde(rename = "FIRSTNAME")]
    pub first_name: String,
    #[serde(rename = "LASTNAME")]
    pub last_name: String,
    #[serde(rename = "SOURCE")]
    pub source: &'static str,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub email: String,
    pub attributes: ContactAttributes,
    pub list_ids: Vec<i64>,
    pub update_enabled: bool,
}

impl ContactRequest {
    pub fn new(request: &RegisterRequest, list_id: Option<i64>) -> Self {
        let (first_name, last_name) = split_name(&request.name);
        Self {
            email: request.email.clone(),
            attributes: ContactAttributes {
                first_name,
                last_name,
                source: SOURCE_ATTRIBUTE,
            },
            list_ids: list_id.into_iter().collect(),
            update_enabled: true,
        }
    }
}

/// Brevo answers 400 with `code: "duplicate_parameter"` for known contacts.
pub fn classify(status: u16, body: Value) -> ProviderOutcome {
    if (200..300).contains(&status) {
        return ProviderOutcome::Subscribed;
    }
    if status == 400 && body.get("code").and_then(Value::as_str) == Some(DUPLICATE_CODE) {
        return ProviderOutcome::AlreadySubscribed;
    }
    ProviderOutcome::Rejected { status, body }
}

pub async fn add_contact(
    client: &Client,
    config: &MailingConfig,
    request: &RegisterRequest,
) -> Result<ProviderOutcome, reqwest::Error> {
    debug!("Registering {} in Brevo", request.email);

    let response = client
        .post(config.brevo_contacts_url())
        .header("api-key", &config.brevo_api_key)
        .json(&ContactRequest::new(request, config.brevo_list_id))
        .send()
        .await?;

    let status = response.status().as_u16();
    let outcome = classify(status, read_body(response).await);
    match &outcome {
        ProviderOutcome::Subscribed => info!("User registered in Brevo: {}", request.email),
        ProviderOutcome::AlreadySubscribed => info!("User already exists in Brevo: {}", request.email),
        ProviderOutcome::Rejected { .. } => {}
    }
    Ok(outcome)
}

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use shared::registration::{split_name, RegisterRequest};
use tracing::{debug, info};

use super::{read_body, ProviderOutcome};
use crate::config::MailingConfig;

pub const SOURCE_TAG: &str = "taqueria-wheel";
const MEMBER_EXISTS_TITLE: &str = "Member Exists";

#[derive(Debug, Serialize, PartialEq)]
pub struct MergeFields {
    #[serde(rename = "FNAME")]
    pub first_name: String,
    #[serde(rename = "LNAME")]
    pub last_name: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct MemberRequest {
    pub email_address: String,
    pub status: &'static str,
    pub merge_fields: MergeFields,
    pub tags: Vec<&'static str>,
}

impl MemberRequest {
    pub fn new(request: &RegisterRequest) -> Self {
        let (first_name, last_name) = split_name(&request.name);
        Self {
            email_address: request.email.clone(),
            status: "subscribed",
            merge_fields: MergeFields { first_name, last_name },
            tags: vec![SOURCE_TAG],
        }
    }
}

/// Mailchimp answers 400 with `title: "Member Exists"` for known contacts.
pub fn classify(status: u16, body: Value) -> ProviderOutcome {
    if (200..300).contains(&status) {
        return ProviderOutcome::Subscribed;
    }
    if status == 400 && body.get("title").and_then(Value::as_str) == Some(MEMBER_EXISTS_TITLE) {
        return ProviderOutcome::AlreadySubscribed;
    }
    ProviderOutcome::Rejected { status, body }
}

pub async fn add_member(
    client: &Client,
    config: &MailingConfig,
    request: &RegisterRequest,
) -> Result<ProviderOutcome, reqwest::Error> {
    debug!("Registering {} in Mailchimp", request.email);

    let response = client
        .post(config.mailchimp_members_url())
        .bearer_auth(&config.mailchimp_api_key)
        .json(&MemberRequest::new(request))
        .send()
        .await?;

    let status = response.status().as_u16();
    let outcome = classify(status, read_body(response).await);
    match &outcome {
        ProviderOutcome::Subscribed => info!("User registered in Mailchimp: {}", request.email),
        ProviderOutcome::AlreadySubscribed => info!("User already exists in Mailchimp: {}", request.email),
        ProviderOutcome::Rejected { .. } => {}
    }
    Ok(outcome)
}

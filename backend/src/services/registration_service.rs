use axum::http::StatusCode;
use reqwest::Client;
use shared::constants::{ALREADY_SUBSCRIBED_MESSAGE, REGISTERED_MESSAGE};
use shared::registration::{RegisterRequest, RegisterResponse};
use tracing::error;

use super::{brevo, mailchimp, ProviderOutcome};
use crate::config::MailingConfig;
use crate::error::Error;

/// Adds the contact to both mailing lists. Contacts already on a list count
/// as registered.
pub async fn register_contact(
    client: &Client,
    config: &MailingConfig,
    request: &RegisterRequest,
) -> Result<RegisterResponse, Error> {
    let (mailchimp_result, brevo_result) = tokio::join!(
        mailchimp::add_member(client, config, request),
        brevo::add_contact(client, config, request),
    );

    if let ProviderOutcome::Rejected { status, body } = mailchimp_result? {
        error!("Mailchimp error ({}): {}", status, body);
        return Err(Error::Provider {
            message: "Error registrando usuario en Mailchimp",
            status: StatusCode::BAD_REQUEST,
            details: body,
        });
    }

    match brevo_result? {
        ProviderOutcome::Subscribed => Ok(RegisterResponse::ok(REGISTERED_MESSAGE)),
        ProviderOutcome::AlreadySubscribed => Ok(RegisterResponse::ok(ALREADY_SUBSCRIBED_MESSAGE)),
        ProviderOutcome::Rejected { status, body } => {
            error!("Brevo error ({}): {}", status, body);
            Err(Error::Provider {
                message: "Error registrando usuario",
                status: StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                details: body,
            })
        }
    }
}

use gloo_net::http::Request;
use shared::registration::{RegisterRequest, RegisterResponse, RegistrationTransport};
use wasm_bindgen_futures::spawn_local;

use crate::config::register_user_url;

/// Posts new contacts to the registration service in the background. The
/// visitor can already spin, so failures are only logged.
#[derive(Clone, Copy, Default)]
pub struct HttpRegistrationTransport;

impl RegistrationTransport for HttpRegistrationTransport {
    fn forward(&self, request: RegisterRequest) {
        spawn_local(async move {
            match post_registration(&request).await {
                Ok(response) if response.success => {
                    log::info!("Mailing lists updated: {}", response.message)
                }
                Ok(response) => log::warn!("Mailing list registration failed: {}", response.message),
                Err(e) => log::error!("Error contacting registration service: {}", e),
            }
        });
    }
}

async fn post_registration(request: &RegisterRequest) -> Result<RegisterResponse, String> {
    let response = Request::post(&register_user_url())
        .json(request)
        .map_err(|e| format!("Failed to encode request: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    let status = response.status();
    response
        .json::<RegisterResponse>()
        .await
        .map_err(|e| format!("Unexpected response ({}): {:?}", status, e))
}

use std::net::SocketAddr;

use tracing::warn;

use crate::error::Error;

pub const DEFAULT_BREVO_BASE_URL: &str = "https://api.brevo.com";
pub const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);
pub const DEFAULT_STATIC_DIR: &str = "dist";

pub const MISSING_MAILCHIMP_CONFIG: &str = "Configuración de Mailchimp faltante";
pub const MISSING_BREVO_CONFIG: &str = "Configuración de Brevo faltante";

/// Credentials and endpoints for the mailing-list providers.
#[derive(Debug, Clone, PartialEq)]
pub struct MailingConfig {
    pub mailchimp_api_key: String,
    pub mailchimp_audience_id: String,
    pub mailchimp_base_url: String,
    pub brevo_api_key: String,
    pub brevo_list_id: Option<i64>,
    pub brevo_base_url: String,
}

impl MailingConfig {
    /// Creates a new MailingConfig from environment variables
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(var: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        let (Some(mailchimp_api_key), Some(mailchimp_audience_id), Some(server_prefix)) = (
            present("MAILCHIMP_API_KEY"),
            present("MAILCHIMP_AUDIENCE_ID"),
            present("MAILCHIMP_SERVER_PREFIX"),
        ) else {
            return Err(Error::Config(MISSING_MAILCHIMP_CONFIG));
        };

        let Some(brevo_api_key) = present("BREVO_API_KEY") else {
            return Err(Error::Config(MISSING_BREVO_CONFIG));
        };

        let brevo_list_id = present("BREVO_LIST_ID").and_then(|raw| match raw.trim().parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                warn!("Ignoring non-numeric BREVO_LIST_ID: {}", raw);
                None
            }
        });

        Ok(Self {
            mailchimp_api_key,
            mailchimp_audience_id,
            mailchimp_base_url: present("MAILCHIMP_BASE_URL")
                .unwrap_or_else(|| format!("https://{}.api.mailchimp.com", server_prefix)),
            brevo_api_key,
            brevo_list_id,
            brevo_base_url: present("BREVO_BASE_URL").unwrap_or_else(|| DEFAULT_BREVO_BASE_URL.to_string()),
        })
    }

    pub fn mailchimp_members_url(&self) -> String {
        format!(
            "{}/3.0/lists/{}/members",
            self.mailchimp_base_url.trim_end_matches('/'),
            self.mailchimp_audience_id
        )
    }

    pub fn brevo_contacts_url(&self) -> String {
        format!("{}/v3/contacts", self.brevo_base_url.trim_end_matches('/'))
    }
}

pub fn bind_addr() -> SocketAddr {
    std::env::var("BIND_ADDR")
        .ok()
        .and_then(|addr| addr.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(DEFAULT_BIND_ADDR))
}

pub fn static_dir() -> String {
    std::env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const FULL: &[(&str, &str)] = &[
        ("MAILCHIMP_API_KEY", "mc-key"),
        ("MAILCHIMP_AUDIENCE_ID", "aud123"),
        ("MAILCHIMP_SERVER_PREFIX", "us21"),
        ("BREVO_API_KEY", "brevo-key"),
        ("BREVO_LIST_ID", "7"),
    ];

    #[test]
    fn test_full_config() {
        let config = MailingConfig::from_vars(vars(FULL)).unwrap();
        assert_eq!(
            config.mailchimp_members_url(),
            "https://us21.api.mailchimp.com/3.0/lists/aud123/members"
        );
        assert_eq!(config.brevo_contacts_url(), "https://api.brevo.com/v3/contacts");
        assert_eq!(config.brevo_list_id, Some(7));
    }

    #[test]
    fn test_missing_mailchimp_key() {
        let err = MailingConfig::from_vars(vars(&FULL[1..])).unwrap_err();
        assert!(matches!(err, Error::Config(MISSING_MAILCHIMP_CONFIG)));
    }

    #[test]
    fn test_missing_brevo_key() {
        let err = MailingConfig::from_vars(vars(&FULL[..3])).unwrap_err();
        assert!(matches!(err, Error::Config(MISSING_BREVO_CONFIG)));
    }

    #[test]
    fn test_base_url_overrides_and_bad_list_id() {
        let mut pairs = FULL.to_vec();
        pairs.push(("MAILCHIMP_BASE_URL", "http://127.0.0.1:9999/"));
        pairs.push(("BREVO_BASE_URL", "http://127.0.0.1:9998"));
        pairs[4] = ("BREVO_LIST_ID", "abc");
        let config = MailingConfig::from_vars(vars(&pairs)).unwrap();
        assert_eq!(config.mailchimp_members_url(), "http://127.0.0.1:9999/3.0/lists/aud123/members");
        assert_eq!(config.brevo_contacts_url(), "http://127.0.0.1:9998/v3/contacts");
        assert_eq!(config.brevo_list_id, None);
    }
}

use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Facebook,
    WhatsApp,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 2] = [ShareTarget::Facebook, ShareTarget::WhatsApp];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Facebook => "📘 Compartir en Facebook",
            Self::WhatsApp => "📱 Compartir por WhatsApp",
        }
    }
}

/// Link that opens the platform's share dialog for `page_url`.
pub fn share_url(target: ShareTarget, page_url: &str, message: &str) -> Result<Url, url::ParseError> {
    match target {
        ShareTarget::Facebook => Url::parse_with_params(
            "https://www.facebook.com/sharer/sharer.php",
            &[("u", page_url), ("quote", message)],
        ),
        ShareTarget::WhatsApp => Url::parse_with_params(
            "https://wa.me/",
            &[("text", format!("{} {}", message, page_url).as_str())],
        ),
    }
}

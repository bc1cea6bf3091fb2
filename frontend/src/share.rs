use shared::constants::SHARE_MESSAGE;
use shared::share::{share_url, ShareTarget};
use web_sys::window;

use crate::config::page_url;

/// Opens the share dialog for `target` in a new tab. Returns false when
/// the URL could not be built or the browser blocked the popup; callers
/// count the share either way.
pub fn open_share(target: ShareTarget) -> bool {
    let url = match share_url(target, &page_url(), SHARE_MESSAGE) {
        Ok(url) => url,
        Err(e) => {
            log::error!("Could not build {:?} share link: {}", target, e);
            return false;
        }
    };

    match window().map(|w| w.open_with_url_and_target(url.as_str(), "_blank")) {
        Some(Ok(Some(_))) => true,
        Some(Ok(None)) => {
            log::warn!("Share popup for {:?} was blocked", target);
            false
        }
        Some(Err(e)) => {
            log::error!("Error opening share link: {:?}", e);
            false
        }
        None => false,
    }
}

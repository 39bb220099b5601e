use crate::configs::PageConfig;
use crate::dom::DomGateway;
use crate::error::PageError;

/// Opens `url` in a new browsing context. The URL is passed through as given.
pub fn open_endpoint<G: DomGateway>(
    gateway: &G,
    config: &PageConfig,
    url: &str
) -> Result<(), PageError> {
    log::info!("Opening {} (target {})", url, config.open_target);

    if !gateway.open(url, &config.open_target)? {
        log::debug!("Host declined to open {}", url);
    }
    Ok(())
}

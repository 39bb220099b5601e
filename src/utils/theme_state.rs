use crate::configs::PageConfig;
use crate::dom::DomGateway;

/// Whether the page is currently dark, as read back from the document.
///
/// The body's marker class is the only source of truth; this is a snapshot
/// for rendering the toggle button.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub fn observe<G: DomGateway>(gateway: &G, config: &PageConfig) -> Self {
        let is_dark = gateway
            .body()
            .map(|body| gateway.has_class(&body, &config.marker_class))
            .unwrap_or(false);
        Self { is_dark }
    }

    pub fn icon(self) -> &'static str {
        if self.is_dark { "🌞" } else { "🌙" }
    }
}

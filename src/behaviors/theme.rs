use crate::configs::PageConfig;
use crate::dom::DomGateway;
use crate::error::PageError;

/// The element groups that carry the dark theme marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeTarget {
    Body,
    Navbar,
    Cards,
    CardHeaders,
    Footer,
}

impl ThemeTarget {
    pub const ALL: [ThemeTarget; 5] = [
        ThemeTarget::Body,
        ThemeTarget::Navbar,
        ThemeTarget::Cards,
        ThemeTarget::CardHeaders,
        ThemeTarget::Footer,
    ];

    /// Body, navbar and footer are expected exactly once per page.
    pub fn is_singleton(self) -> bool {
        !matches!(self, ThemeTarget::Cards | ThemeTarget::CardHeaders)
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeTarget::Body => "body",
            ThemeTarget::Navbar => "navbar",
            ThemeTarget::Cards => "cards",
            ThemeTarget::CardHeaders => "card headers",
            ThemeTarget::Footer => "footer",
        }
    }

    fn resolve<G: DomGateway>(
        self,
        gateway: &G,
        config: &PageConfig
    ) -> Result<Vec<G::Element>, PageError> {
        match self {
            ThemeTarget::Body => Ok(gateway.body().into_iter().collect()),
            ThemeTarget::Navbar => Ok(gateway.query_one(&config.navbar_selector)?.into_iter().collect()),
            ThemeTarget::Cards => gateway.query_all(&config.card_selector),
            ThemeTarget::CardHeaders => gateway.query_all(&config.card_header_selector),
            ThemeTarget::Footer => Ok(gateway.query_one(&config.footer_selector)?.into_iter().collect()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToggleReport {
    /// Number of class flips performed.
    pub toggled: usize,
    /// Groups that matched no element on this call.
    pub missing: Vec<ThemeTarget>,
}

/// Flips the marker class on every element of every [`ThemeTarget`].
///
/// Each element is flipped independently, so two calls restore the page.
pub fn toggle_theme<G: DomGateway>(
    gateway: &G,
    config: &PageConfig
) -> Result<ToggleReport, PageError> {
    let mut report = ToggleReport::default();

    // resolve every group before flipping anything so a host error leaves the page untouched
    let mut resolved = Vec::with_capacity(ThemeTarget::ALL.len());
    for target in ThemeTarget::ALL {
        resolved.push((target, target.resolve(gateway, config)?));
    }

    for (target, elements) in resolved {
        if elements.is_empty() {
            if target.is_singleton() {
                log::warn!("No {} element found, skipping", target.name());
            } else {
                log::debug!("No {} on page", target.name());
            }
            report.missing.push(target);
            continue;
        }

        for element in &elements {
            gateway.toggle_class(element, &config.marker_class)?;
            report.toggled += 1;
        }
    }

    log::debug!("Toggled {} on {} elements", config.marker_class, report.toggled);
    Ok(report)
}

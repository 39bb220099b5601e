use serde::Deserialize;
use crate::error::PageError;

/// Element lookups and class names the page behaviors work against.
///
/// Every field has a default matching the landing page markup, so a partial
/// JSON object (or `{}`) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub year_element_id: String,
    pub navbar_selector: String,
    pub card_selector: String,
    pub card_header_selector: String,
    pub footer_selector: String,
    pub marker_class: String,
    pub open_target: String,
    /// Prefix for catalog endpoint paths. Empty means same origin.
    pub api_base_url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            year_element_id: "year".to_string(),
            navbar_selector: ".navbar".to_string(),
            card_selector: ".card".to_string(),
            card_header_selector: ".card-header".to_string(),
            footer_selector: ".footer".to_string(),
            marker_class: "dark-theme".to_string(),
            open_target: "_blank".to_string(),
            api_base_url: String::new(),
        }
    }
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("Loaded page config: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PageError> {
        // DOMTokenList.toggle throws on empty tokens and tokens containing whitespace
        if self.marker_class.is_empty() {
            return Err(PageError::Config("marker_class must not be empty".to_string()));
        }
        if self.marker_class.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(
                PageError::Config(format!("marker_class contains whitespace: {:?}", self.marker_class))
            );
        }

        let required = [
            ("year_element_id", &self.year_element_id),
            ("navbar_selector", &self.navbar_selector),
            ("card_selector", &self.card_selector),
            ("card_header_selector", &self.card_header_selector),
            ("footer_selector", &self.footer_selector),
            ("open_target", &self.open_target),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(PageError::Config(format!("{} must not be empty", name)));
            }
        }

        Ok(())
    }
}

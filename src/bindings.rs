//! JS entry points for pages that load the wasm module directly.

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use crate::behaviors::{ open_endpoint, stamp_year, toggle_theme };
use crate::configs::PageConfig;
use crate::dom::with_browser;
use crate::utils::SystemClock;

thread_local! {
    static ACTIVE_CONFIG: RefCell<PageConfig> = RefCell::new(PageConfig::default());
}

pub fn active_config() -> PageConfig {
    ACTIVE_CONFIG.with(|config| config.borrow().clone())
}

/// Replaces the active config. Throws on invalid JSON or invalid values.
#[wasm_bindgen(js_name = configurePageBehavior)]
pub fn configure(json: &str) -> Result<(), JsValue> {
    let config = PageConfig::from_json(json)?;
    ACTIVE_CONFIG.with(|active| *active.borrow_mut() = config);
    Ok(())
}

#[wasm_bindgen(js_name = installPageBehavior)]
pub fn install() {
    #[cfg(target_arch = "wasm32")]
    {
        // a logger may already be installed by the app entry point
        let _ = console_log::init_with_level(log::Level::Info);
    }

    let installed = with_browser(|gateway| {
        gateway.on_page_ready(|| {
            let config = active_config();
            if let Err(e) = with_browser(|gateway| Ok(stamp_year(gateway, &SystemClock, &config))) {
                log::warn!("Year stamp failed: {}", e);
            }
        })
    });

    if let Err(e) = installed {
        log::warn!("Page behavior not installed: {}", e);
    }
}

#[wasm_bindgen(js_name = openEndpoint)]
pub fn open_endpoint_js(endpoint: &str) {
    let config = active_config();
    if let Err(e) = with_browser(|gateway| open_endpoint(gateway, &config, endpoint)) {
        log::warn!("Could not open {}: {}", endpoint, e);
    }
}

#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme_js() {
    let config = active_config();
    if let Err(e) = with_browser(|gateway| toggle_theme(gateway, &config)) {
        log::warn!("Theme toggle failed: {}", e);
    }
}

use dioxus::prelude::*;
use crate::behaviors::stamp_year;
use crate::configs::PageConfig;
use crate::dom::with_browser;
use crate::utils::SystemClock;

#[component]
pub fn Footer() -> Element {
    let config = use_context::<PageConfig>();
    let year_id = config.year_element_id.clone();

    // mounted footer is this app's page-ready signal
    use_effect(move || {
        if let Err(e) = with_browser(|gateway| Ok(stamp_year(gateway, &SystemClock, &config))) {
            log::debug!("Year stamp skipped: {}", e);
        }
    });

    rsx! {
        footer {
            class: "footer",
            p {
                "© "
                span { id: "{year_id}" }
                " Nerva API"
            }
        }
    }
}

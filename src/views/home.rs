use dioxus::prelude::*;
use crate::behaviors::open_endpoint;
use crate::catalog::{ endpoint_url, Endpoint, EndpointGroup, GROUPS };
use crate::configs::PageConfig;
use crate::dom::with_browser;

#[component]
fn EndpointRow(endpoint: Endpoint) -> Element {
    let config = use_context::<PageConfig>();
    let url = endpoint_url(&config.api_base_url, endpoint.path);

    rsx! {
        li {
            class: "endpoint",
            span { class: "endpoint-method", {endpoint.method.as_str()} }
            code { class: "endpoint-path", {endpoint.path} }
            span { class: "endpoint-summary", {endpoint.summary} }
            if endpoint.is_openable() {
                button {
                    class: "endpoint-open",
                    onclick: move |_| {
                        if let Err(e) = with_browser(|gateway| open_endpoint(gateway, &config, &url)) {
                            log::warn!("Could not open {}: {}", url, e);
                        }
                    },
                    "Open"
                }
            }
        }
    }
}

#[component]
fn EndpointCard(group: EndpointGroup) -> Element {
    rsx! {
        div {
            class: "card",
            div { class: "card-header", {group.title} }
            ul {
                class: "card-body",
                for (idx, endpoint) in group.endpoints.iter().copied().enumerate() {
                    EndpointRow { key: "{idx}", endpoint }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "container",
            h1 { "Nerva API" }
            p {
                class: "lead",
                "Public JSON endpoints for the Nerva daemon and exchange markets."
            }
            for (idx, group) in GROUPS.iter().copied().enumerate() {
                EndpointCard { key: "{idx}", group }
            }
        }
    }
}

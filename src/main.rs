use dioxus::prelude::*;
use page_behavior::dom::with_browser;
use page_behavior::{ active_config, Route, ThemeState };

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        env_logger::init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        let _ = console_log::init_with_level(log::Level::Info);
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(active_config);
    let theme = use_signal(|| {
        with_browser(|gateway| Ok(ThemeState::observe(gateway, &config))).unwrap_or_default()
    });
    use_context_provider(|| theme);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Router::<Route> {}
    }
}

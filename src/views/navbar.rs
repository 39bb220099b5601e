use dioxus::prelude::*;
use crate::behaviors::toggle_theme;
use crate::configs::PageConfig;
use crate::dom::with_browser;
use crate::routes::Route;
use crate::utils::ThemeState;
use crate::views::Footer;

#[component(no_case_check)]
pub fn Navbar() -> Element {
    let config = use_context::<PageConfig>();
    let mut theme = use_context::<Signal<ThemeState>>();

    rsx! {
        div {
            nav {
                class: "navbar",
                div {
                    class: "navbar-inner",
                    Link { class: "navbar-brand", to: Route::Home, "Nerva API" }
                    button {
                        class: "theme-toggle",
                        title: "Toggle theme",
                        onclick: move |_| {
                            let toggled = with_browser(|gateway| {
                                toggle_theme(gateway, &config)?;
                                Ok(ThemeState::observe(gateway, &config))
                            });
                            match toggled {
                                Ok(state) => theme.set(state),
                                Err(e) => log::warn!("Theme toggle failed: {}", e),
                            }
                        },
                        {theme.read().icon()}
                    }
                }
            }
            Outlet::<Route> {}
            Footer {}
        }
    }
}

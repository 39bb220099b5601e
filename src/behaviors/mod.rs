mod year;
mod opener;
mod theme;

pub use year::{ stamp_year, format_year };
pub use opener::open_endpoint;
pub use theme::{ toggle_theme, ThemeTarget, ToggleReport };

use crate::configs::PageConfig;
use crate::dom::DomGateway;
use crate::utils::Clock;

pub fn format_year(year: i32) -> String {
    format!("{:04}", year)
}

/// Writes the clock's current year into the year element.
///
/// Returns `false` without touching the document when the element is absent.
pub fn stamp_year<G, C>(gateway: &G, clock: &C, config: &PageConfig) -> bool
    where G: DomGateway, C: Clock
{
    let Some(element) = gateway.element_by_id(&config.year_element_id) else {
        log::warn!("No #{} element on page, skipping year stamp", config.year_element_id);
        return false;
    };

    let year = format_year(clock.current_year());
    gateway.set_text(&element, &year);
    log::debug!("Stamped year {} into #{}", year, config.year_element_id);
    true
}

use super::common::mocks::MockDom;
use crate::behaviors::toggle_theme;
use crate::configs::PageConfig;
use crate::utils::ThemeState;

#[test]
fn test_observe_follows_body_marker() {
    let dom = MockDom::landing_page(1, 1);
    let config = PageConfig::default();
    assert_eq!(ThemeState::observe(&dom, &config), ThemeState { is_dark: false });

    toggle_theme(&dom, &config).unwrap();
    assert_eq!(ThemeState::observe(&dom, &config), ThemeState { is_dark: true });

    toggle_theme(&dom, &config).unwrap();
    assert!(!ThemeState::observe(&dom, &config).is_dark);
}

#[test]
fn test_observe_without_body_is_light() {
    let dom = MockDom::without_body();
    assert_eq!(ThemeState::observe(&dom, &PageConfig::default()), ThemeState::default());
}

#[test]
fn test_icon_offers_opposite_theme() {
    assert_eq!(ThemeState { is_dark: false }.icon(), "🌙");
    assert_eq!(ThemeState { is_dark: true }.icon(), "🌞");
}

use crate::controller::resolve_initial;
use crate::theme::ThemeKind;

#[test]
fn stored_dark_wins_regardless_of_os() {
    assert_eq!(resolve_initial(Some("dark"), false), ThemeKind::Dark);
    assert_eq!(resolve_initial(Some("dark"), true), ThemeKind::Dark);
}

#[test]
fn stored_non_dark_value_selects_light_at_startup() {
    // Startup compares against "dark" exactly; the permissive fallback only
    // applies to values handed to setTheme.
    assert_eq!(resolve_initial(Some("light"), true), ThemeKind::Light);
    assert_eq!(resolve_initial(Some("banana"), true), ThemeKind::Light);
}

#[test]
fn without_stored_preference_the_os_decides() {
    assert_eq!(resolve_initial(None, true), ThemeKind::Dark);
    assert_eq!(resolve_initial(None, false), ThemeKind::Light);
}

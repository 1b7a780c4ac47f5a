use crate::config::{DARK_STYLESHEET, LIGHT_STYLESHEET};
use crate::theme::ThemeKind;

#[test]
fn opposite_flips_between_the_two_themes() {
    assert_eq!(ThemeKind::Light.opposite(), ThemeKind::Dark);
    assert_eq!(ThemeKind::Dark.opposite(), ThemeKind::Light);
}

#[test]
fn double_opposite_is_identity() {
    for theme in [ThemeKind::Light, ThemeKind::Dark] {
        assert_eq!(theme.opposite().opposite(), theme);
    }
}

#[test]
fn stylesheet_paths_match_the_fixed_hrefs() {
    assert_eq!(ThemeKind::Light.stylesheet_path(), LIGHT_STYLESHEET);
    assert_eq!(ThemeKind::Dark.stylesheet_path(), DARK_STYLESHEET);
}

#[test]
fn known_strings_parse_to_their_theme() {
    assert_eq!(ThemeKind::from("light"), ThemeKind::Light);
    assert_eq!(ThemeKind::from("dark"), ThemeKind::Dark);
}

#[test]
fn unknown_strings_fall_back_to_dark() {
    // Everything that is not exactly "light" counts as dark.
    assert_eq!(ThemeKind::from("banana"), ThemeKind::Dark);
    assert_eq!(ThemeKind::from(""), ThemeKind::Dark);
    assert_eq!(ThemeKind::from("Light"), ThemeKind::Dark);
}

#[test]
fn display_matches_as_str() {
    assert_eq!(ThemeKind::Light.to_string(), "light");
    assert_eq!(ThemeKind::Dark.to_string(), "dark");
}

#[test]
fn default_is_light() {
    assert_eq!(ThemeKind::default(), ThemeKind::Light);
}

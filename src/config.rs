//! Constants for the contract between this component and the host page.

/// localStorage key holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// Id of the stylesheet `<link>` whose href gets rewritten.
pub const STYLESHEET_ID: &str = "syntax_highlight";

pub const LIGHT_STYLESHEET: &str = "/syntax-light.css";
pub const DARK_STYLESHEET: &str = "/syntax-dark.css";

/// Selector for the control that toggles the theme on click.
pub const SWITCHER_SELECTOR: &str = ".theme-switcher";

/// Attribute set on the document root for CSS and other scripts to key off of.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Name of the CustomEvent broadcast on the window after every theme change,
/// consumed by embedded widgets (utterances, giscus).
pub const CHANGE_EVENT: &str = "themeChanged";

/// Media query watched for OS-level scheme changes.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

use std::fmt::{Display, Formatter};

use crate::config::{DARK_STYLESHEET, LIGHT_STYLESHEET};

/// The two visual modes of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Light,
    Dark,
}

impl ThemeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            ThemeKind::Light => ThemeKind::Dark,
            ThemeKind::Dark => ThemeKind::Light,
        }
    }

    /// Path of the syntax highlighting stylesheet for this theme.
    pub fn stylesheet_path(self) -> &'static str {
        match self {
            ThemeKind::Light => LIGHT_STYLESHEET,
            ThemeKind::Dark => DARK_STYLESHEET,
        }
    }
}

// Anything other than "light" counts as dark; unknown values are not
// rejected.
impl From<&str> for ThemeKind {
    fn from(value: &str) -> Self {
        if value == "light" {
            ThemeKind::Light
        } else {
            ThemeKind::Dark
        }
    }
}

impl Display for ThemeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

mod config;
mod controller;
mod error;
mod event;
mod theme;
#[cfg(test)]
mod tests;

pub use crate::controller::ThemeController;
pub use crate::error::ThemeError;
pub use crate::event::{ThemeChangedEvent, ThemePublisher, ThemeSubscriber};
pub use crate::theme::ThemeKind;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
thread_local! {
    static CONTROLLER: std::cell::RefCell<Option<ThemeController>> =
        std::cell::RefCell::new(None);
}

/// Runs at module instantiation. Load the module synchronously from `<head>`
/// so the stylesheet is selected before first paint; deferring it reintroduces
/// the flash of incorrectly-styled content.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
fn start() {
    let _ = console_log::init_with_level(log::Level::Info);

    // A host page without the expected elements loses the switcher but
    // keeps working otherwise.
    if let Err(err) = install_theme_switcher() {
        log::warn!("theme switcher setup failed: {}", crate::error::describe(&err));
    }
}

/// Install the controller against the current page, replacing any earlier
/// one. `start` calls this automatically; pages that build the switcher
/// elements late can call it again themselves.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = installThemeSwitcher)]
pub fn install_theme_switcher() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let controller = ThemeController::install(&window)?;
    CONTROLLER.with(|slot| *slot.borrow_mut() = Some(controller));
    Ok(())
}

/// Page-facing equivalent of the controller's `set_theme`. Unknown theme
/// strings fall back to dark.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = setTheme)]
pub fn set_theme(theme: &str, persist: bool) -> Result<(), JsValue> {
    with_controller(|controller| controller.set_theme(ThemeKind::from(theme), persist))
}

/// Page-facing equivalent of the controller's `toggle`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = switchTheme)]
pub fn switch_theme() -> Result<(), JsValue> {
    with_controller(|controller| controller.toggle())
}

#[cfg(target_arch = "wasm32")]
fn with_controller(
    f: impl FnOnce(&ThemeController) -> Result<(), ThemeError>,
) -> Result<(), JsValue> {
    CONTROLLER.with(|slot| match slot.borrow().as_ref() {
        Some(controller) => f(controller).map_err(JsValue::from),
        None => Err(JsValue::from_str("theme controller is not installed")),
    })
}

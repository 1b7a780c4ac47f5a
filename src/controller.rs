use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlLinkElement, MediaQueryListEvent, Storage, Window};

use crate::config::{
    DARK_SCHEME_QUERY, STORAGE_KEY, STYLESHEET_ID, SWITCHER_SELECTOR, THEME_ATTRIBUTE,
};
use crate::error::{describe, ThemeError};
use crate::event::{ThemeChangedEvent, ThemePublisher, ThemeSubscriber};
use crate::theme::ThemeKind;

/// Owns the theme state and the page hooks: the stylesheet link, the
/// `data-theme` attribute, the persisted preference, the click listener on
/// the switcher control and the OS color-scheme listener. Constructed once at
/// startup via [`ThemeController::install`].
pub struct ThemeController {
    inner: Rc<RefCell<Inner>>,
    _on_click: Closure<dyn FnMut(web_sys::Event)>,
    _on_media_change: Closure<dyn FnMut(MediaQueryListEvent)>,
}

struct Inner {
    window: Window,
    root: Element,
    stylesheet: HtmlLinkElement,
    storage: Storage,
    publisher: ThemePublisher,
    current: ThemeKind,
}

impl ThemeController {
    /// Wire the controller into the page. Expects the host page to provide a
    /// `.theme-switcher` control and a `#syntax_highlight` stylesheet link;
    /// a missing piece is fatal to setup.
    ///
    /// Selects the initial stylesheet from the stored preference, falling
    /// back to the OS color scheme when nothing is stored. Only the href is
    /// touched here; `data-theme` and the change event first happen on an
    /// explicit apply.
    pub fn install(window: &Window) -> Result<Self, ThemeError> {
        let document = window
            .document()
            .ok_or_else(|| ThemeError::Dom("window has no document".to_string()))?;
        let root = document
            .document_element()
            .ok_or_else(|| ThemeError::Dom("document has no root element".to_string()))?;

        let stylesheet = document
            .get_element_by_id(STYLESHEET_ID)
            .ok_or_else(|| ThemeError::Dom(format!("missing #{} link", STYLESHEET_ID)))?
            .dyn_into::<HtmlLinkElement>()
            .map_err(|_| {
                ThemeError::Dom(format!("#{} is not a stylesheet link", STYLESHEET_ID))
            })?;

        let switcher = document
            .query_selector(SWITCHER_SELECTOR)
            .map_err(|e| ThemeError::Dom(describe(&e)))?
            .ok_or_else(|| ThemeError::Dom(format!("missing {} control", SWITCHER_SELECTOR)))?;

        let storage = window
            .local_storage()
            .map_err(|e| ThemeError::Storage(describe(&e)))?
            .ok_or_else(|| ThemeError::Storage("localStorage unavailable".to_string()))?;

        let media = window
            .match_media(DARK_SCHEME_QUERY)
            .map_err(|e| ThemeError::Dom(describe(&e)))?
            .ok_or_else(|| ThemeError::Dom("match_media returned nothing".to_string()))?;

        let stored = storage
            .get_item(STORAGE_KEY)
            .map_err(|e| ThemeError::Storage(describe(&e)))?;
        let initial = resolve_initial(stored.as_deref(), media.matches());
        stylesheet.set_href(initial.stylesheet_path());

        let inner = Rc::new(RefCell::new(Inner {
            window: window.clone(),
            root,
            stylesheet,
            storage,
            publisher: ThemePublisher::new(),
            current: initial,
        }));

        let on_click = {
            let inner = Rc::clone(&inner);
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                if let Err(err) = toggle(&inner) {
                    log::warn!("theme toggle failed: {}", err);
                }
            })
        };
        switcher
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Dom(describe(&e)))?;

        let on_media_change = {
            let inner = Rc::clone(&inner);
            Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |event: MediaQueryListEvent| {
                let implied = if event.matches() {
                    ThemeKind::Dark
                } else {
                    ThemeKind::Light
                };
                // OS-driven change: displayed theme follows the OS, stored
                // preference stays as the user left it.
                if let Err(err) = apply(&inner, implied, false) {
                    log::warn!("system color-scheme update failed: {}", err);
                }
            })
        };
        media
            .add_event_listener_with_callback("change", on_media_change.as_ref().unchecked_ref())
            .map_err(|e| ThemeError::Dom(describe(&e)))?;

        log::info!("theme controller installed, initial theme: {}", initial);

        Ok(Self {
            inner,
            _on_click: on_click,
            _on_media_change: on_media_change,
        })
    }

    pub fn current(&self) -> ThemeKind {
        self.inner.borrow().current
    }

    /// Apply `theme` to the page, persisting it when `persist` is set.
    pub fn set_theme(&self, theme: ThemeKind, persist: bool) -> Result<(), ThemeError> {
        apply(&self.inner, theme, persist)
    }

    /// Switch to the opposite theme and persist the choice.
    pub fn toggle(&self) -> Result<(), ThemeError> {
        toggle(&self.inner)
    }

    /// React to an OS color-scheme change. Updates the displayed theme but
    /// never the stored preference. Known quirk: an earlier explicit choice
    /// is not checked for, so the OS value overrides it on screen.
    pub fn system_preference_changed(&self, dark: bool) -> Result<(), ThemeError> {
        let implied = if dark { ThemeKind::Dark } else { ThemeKind::Light };
        apply(&self.inner, implied, false)
    }

    /// Register a typed consumer for theme changes.
    pub fn subscribe(&self, subscriber: Rc<dyn ThemeSubscriber>) {
        self.inner.borrow_mut().publisher.subscribe(subscriber);
    }
}

// Stored "dark" wins; any other stored value lands on light; with nothing
// stored the OS preference decides.
pub(crate) fn resolve_initial(stored: Option<&str>, os_dark: bool) -> ThemeKind {
    match stored {
        Some("dark") => ThemeKind::Dark,
        Some(_) => ThemeKind::Light,
        None if os_dark => ThemeKind::Dark,
        None => ThemeKind::Light,
    }
}

// The RefCell borrow must end before the CustomEvent fires: page listeners
// run synchronously inside dispatch_event and may call straight back into
// the controller. State is mutated under the borrow, then the event goes out
// against a snapshot of the publisher with the cell released.
fn apply(inner: &Rc<RefCell<Inner>>, theme: ThemeKind, persist: bool) -> Result<(), ThemeError> {
    let (window, publisher) = {
        let mut state = inner.borrow_mut();
        state.update(theme, persist)?;
        (state.window.clone(), state.publisher.clone())
    };
    publisher.publish(&window, ThemeChangedEvent { theme })
}

fn toggle(inner: &Rc<RefCell<Inner>>) -> Result<(), ThemeError> {
    let next = inner.borrow().current.opposite();
    apply(inner, next, true)
}

impl Inner {
    fn update(&mut self, theme: ThemeKind, persist: bool) -> Result<(), ThemeError> {
        self.stylesheet.set_href(theme.stylesheet_path());
        self.root
            .set_attribute(THEME_ATTRIBUTE, theme.as_str())
            .map_err(|e| ThemeError::Dom(describe(&e)))?;
        self.current = theme;

        if persist {
            self.storage
                .set_item(STORAGE_KEY, theme.as_str())
                .map_err(|e| ThemeError::Storage(describe(&e)))?;
        }

        log::debug!("applied {} theme (persist: {})", theme, persist);
        Ok(())
    }
}

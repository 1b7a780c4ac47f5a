//! Change notifications: a typed subscriber list for in-crate consumers plus
//! a DOM CustomEvent broadcast for third-party embeds on the page.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, EventTarget};

use crate::config::CHANGE_EVENT;
use crate::error::{describe, ThemeError};
use crate::theme::ThemeKind;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChangedEvent {
    pub theme: ThemeKind,
}

pub trait ThemeSubscriber {
    fn theme_changed(&self, event: &ThemeChangedEvent);
}

/// Fan-out point for theme changes. Subscribers are registered up front, so
/// every consumer is statically known instead of discovered at runtime.
/// Cloning is cheap (a Vec of Rc handles), so a snapshot can outlive any
/// borrow on the state that owns it.
#[derive(Clone, Default)]
pub struct ThemePublisher {
    subscribers: Vec<Rc<dyn ThemeSubscriber>>,
}

impl ThemePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Rc<dyn ThemeSubscriber>) {
        self.subscribers.push(subscriber);
    }

    /// Notify typed subscribers only. No DOM involved.
    pub fn notify(&self, event: &ThemeChangedEvent) {
        for subscriber in &self.subscribers {
            subscriber.theme_changed(event);
        }
    }

    /// Notify typed subscribers, then dispatch the `themeChanged` CustomEvent
    /// with detail `{ theme: <string> }` on the given target (the window).
    pub fn publish(&self, target: &EventTarget, event: ThemeChangedEvent) -> Result<(), ThemeError> {
        self.notify(&event);

        let detail = js_sys::Object::new();
        js_sys::Reflect::set(
            &detail,
            &JsValue::from_str("theme"),
            &JsValue::from_str(event.theme.as_str()),
        )
        .map_err(|e| ThemeError::Event(describe(&e)))?;

        let init = CustomEventInit::new();
        init.set_detail(&detail);
        let dom_event = CustomEvent::new_with_event_init_dict(CHANGE_EVENT, &init)
            .map_err(|e| ThemeError::Event(describe(&e)))?;

        target
            .dispatch_event(&dom_event)
            .map_err(|e| ThemeError::Event(describe(&e)))?;
        Ok(())
    }
}

use std::cell::RefCell;

use crate::event::{ThemeChangedEvent, ThemeSubscriber};
use crate::theme::ThemeKind;

/// Subscriber that records every theme it is told about.
#[derive(Default)]
pub struct RecordingSubscriber {
    pub seen: RefCell<Vec<ThemeKind>>,
}

impl ThemeSubscriber for RecordingSubscriber {
    fn theme_changed(&self, event: &ThemeChangedEvent) {
        self.seen.borrow_mut().push(event.theme);
    }
}

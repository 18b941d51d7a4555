use std::rc::Rc;

use gloo::events::EventListener;
use web_sys::Element;

use crate::modal::ModalController;

/// Explicit opener-to-modal wiring.
///
/// Takes the full set of (opener element, controller) pairs up front and
/// returns a handle owning the click listeners, instead of hiding the
/// hookup in module-level state. Dropping the handle unwires every opener.
pub struct OpenerWiring {
    listeners: Vec<EventListener>,
}

impl OpenerWiring {
    pub fn wire(pairs: Vec<(Element, Rc<ModalController>)>) -> Self {
        let listeners = pairs
            .into_iter()
            .map(|(opener, modal)| EventListener::new(&opener, "click", move |_| modal.show()))
            .collect();
        Self { listeners }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{CustomEvent, CustomEventInit, Document, Element, Event};

use crate::error::UiError;
use crate::ACTIVE_CLASS;

/// Descendants that dismiss the modal on click: explicit close buttons and
/// the background overlay.
const CLOSE_SELECTOR: &str = "[data-bulma-modal='close'], .modal-background";

/// Modal visibility, tracked explicitly rather than inferred from the
/// class list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Open,
}

/// The two notifications a controller emits on its root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    Show,
    Close,
}

impl ModalEvent {
    /// DOM event name the notification is dispatched under.
    pub fn name(self) -> &'static str {
        match self {
            ModalEvent::Show => "modal:show",
            ModalEvent::Close => "modal:close",
        }
    }
}

/// Controller for one Bulma modal subtree.
///
/// [`show`](Self::show) and [`close`](Self::close) are conditional
/// transitions: calling `show()` on an open modal (or `close()` on a closed
/// one) changes nothing and emits nothing. On an actual transition the
/// `is-active` class and a bubbling `modal:show` / `modal:close`
/// [`CustomEvent`] are updated together.
///
/// Close triggers found under the root at attach time
/// (`[data-bulma-modal='close']` and `.modal-background`) run the same
/// transition path as `close()`, so both produce the identical class state
/// and the identical single event. The controller holds listeners on those
/// descendants but does not own them.
#[derive(Debug)]
pub struct ModalController {
    elem: Element,
    state: Rc<Cell<ModalState>>,
    _close_listeners: Vec<EventListener>,
    observers: RefCell<Vec<EventListener>>,
}

impl ModalController {
    /// Locates the modal root via `selector` and wires its close triggers.
    ///
    /// The selector must match an existing element; anything else is a
    /// markup error reported as [`UiError::ElementNotFound`].
    pub fn attach(document: &Document, selector: &str) -> Result<Self, UiError> {
        let elem = document
            .query_selector(selector)?
            .ok_or_else(|| UiError::ElementNotFound(selector.to_string()))?;
        let state = Rc::new(Cell::new(ModalState::Closed));

        let closers = elem.query_selector_all(CLOSE_SELECTOR)?;
        let mut close_listeners = Vec::with_capacity(closers.length() as usize);
        for i in 0..closers.length() {
            let Some(node) = closers.item(i) else { continue };
            let Ok(closer) = node.dyn_into::<Element>() else { continue };

            let elem = elem.clone();
            let state = Rc::clone(&state);
            close_listeners.push(EventListener::new(&closer, "click", move |_| {
                transition(&elem, &state, ModalState::Closed);
            }));
        }

        gloo::console::debug!(format!(
            "modal {selector}: wired {} close trigger(s)",
            close_listeners.len()
        ));

        Ok(Self {
            elem,
            state,
            _close_listeners: close_listeners,
            observers: RefCell::new(Vec::new()),
        })
    }

    /// Current visibility. Starts [`ModalState::Closed`].
    pub fn state(&self) -> ModalState {
        self.state.get()
    }

    /// Transitions to open and emits `modal:show`. No-op when already open.
    pub fn show(&self) {
        transition(&self.elem, &self.state, ModalState::Open);
    }

    /// Transitions to closed and emits `modal:close`. No-op when already
    /// closed.
    pub fn close(&self) {
        transition(&self.elem, &self.state, ModalState::Closed);
    }

    /// Registers an observer for one of the controller's notifications.
    ///
    /// Observers are invoked in registration order and live as long as the
    /// controller; there is no unregister.
    pub fn add_listener<F>(&self, event: ModalEvent, mut callback: F)
    where
        F: FnMut(&Event) + 'static,
    {
        let listener = EventListener::new(&self.elem, event.name(), move |e| callback(e));
        self.observers.borrow_mut().push(listener);
    }

    /// The controlled root element. Notifications bubble from here, so
    /// external DOM code may listen on it (or any ancestor) directly.
    pub fn element(&self) -> &Element {
        &self.elem
    }
}

/// The single transition path shared by `show()`, `close()` and the wired
/// close triggers. Returns whether a transition happened.
fn transition(elem: &Element, state: &Cell<ModalState>, target: ModalState) -> bool {
    if state.get() == target {
        return false;
    }

    let event = match target {
        ModalState::Open => {
            let _ = elem.class_list().add_1(ACTIVE_CLASS);
            ModalEvent::Show
        }
        ModalState::Closed => {
            let _ = elem.class_list().remove_1(ACTIVE_CLASS);
            ModalEvent::Close
        }
    };
    state.set(target);
    emit(elem, event);
    true
}

fn emit(elem: &Element, event: ModalEvent) {
    let init = CustomEventInit::new();
    init.set_bubbles(true);
    match CustomEvent::new_with_event_init_dict(event.name(), &init) {
        Ok(custom) => {
            let _ = elem.dispatch_event(&custom);
        }
        Err(err) => {
            gloo::console::error!(format!("failed to emit {}: {err:?}", event.name()));
        }
    }
}

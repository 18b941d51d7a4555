use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::error::UiError;
use crate::ACTIVE_CLASS;

const BURGER_SELECTOR: &str = ".navbar-burger";
const TARGET_ATTR: &str = "data-target";

/// One burger trigger paired with the menu panel it collapses.
///
/// The pairing is resolved once, up front. Click handlers never touch
/// `data-target` again, so a binding stays valid even if the attribute is
/// edited after wiring.
#[derive(Clone)]
pub struct ToggleBinding {
    pub trigger: Element,
    pub target: Element,
}

/// Collapsible navbar behavior: each wired burger click flips `is-active`
/// on both the burger and its menu panel.
///
/// Owns its click listeners; dropping the `NavbarToggle` unbinds them.
#[derive(Debug)]
pub struct NavbarToggle {
    listeners: Vec<EventListener>,
}

impl NavbarToggle {
    /// Wires an explicit trigger/target table.
    ///
    /// This is the preferred constructor: the caller decides which elements
    /// pair up, nothing is read from the DOM at click time.
    pub fn with_bindings(bindings: Vec<ToggleBinding>) -> Self {
        let listeners = bindings
            .into_iter()
            .map(|ToggleBinding { trigger, target }| {
                let burger = trigger.clone();
                EventListener::new(&trigger, "click", move |_| {
                    let _ = burger.class_list().toggle(ACTIVE_CLASS);
                    let _ = target.class_list().toggle(ACTIVE_CLASS);
                })
            })
            .collect();
        Self { listeners }
    }

    /// Scans `document` for `.navbar-burger` elements and resolves each one's
    /// `data-target` id into a [`ToggleBinding`].
    ///
    /// Zero burgers is fine (nothing gets wired). A burger with a missing or
    /// dangling `data-target` is a markup error and fails the whole scan.
    pub fn discover(document: &Document) -> Result<Self, UiError> {
        let burgers = document.query_selector_all(BURGER_SELECTOR)?;
        let mut bindings = Vec::with_capacity(burgers.length() as usize);

        for i in 0..burgers.length() {
            let Some(node) = burgers.item(i) else { continue };
            let Ok(trigger) = node.dyn_into::<Element>() else { continue };

            let id = trigger
                .get_attribute(TARGET_ATTR)
                .ok_or(UiError::MissingTargetRef)?;
            let target = document
                .get_element_by_id(&id)
                .ok_or_else(|| UiError::UnresolvedTarget(id.clone()))?;

            bindings.push(ToggleBinding { trigger, target });
        }

        gloo::console::debug!(format!("navbar: wired {} burger(s)", bindings.len()));
        Ok(Self::with_bindings(bindings))
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::utils::document;
    use web_sys::HtmlElement;

    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount(html: &str) -> Element {
        let container = document().create_element("div").unwrap();
        container.set_inner_html(html);
        document().body().unwrap().append_child(&container).unwrap();
        container
    }

    fn click(el: &Element) {
        el.dyn_ref::<HtmlElement>().unwrap().click();
    }

    #[wasm_bindgen_test]
    fn click_toggles_both_elements_and_second_click_restores() {
        let container = mount(
            "<a class=\"navbar-burger\" data-target=\"navMenuToggleTest\"></a>\
             <div id=\"navMenuToggleTest\" class=\"navbar-menu\"></div>",
        );

        let toggle = NavbarToggle::discover(&document()).unwrap();
        assert_eq!(toggle.len(), 1);

        let burger = container.query_selector(".navbar-burger").unwrap().unwrap();
        let menu = document().get_element_by_id("navMenuToggleTest").unwrap();

        click(&burger);
        assert!(burger.class_list().contains(ACTIVE_CLASS));
        assert!(menu.class_list().contains(ACTIVE_CLASS));

        click(&burger);
        assert!(!burger.class_list().contains(ACTIVE_CLASS));
        assert!(!menu.class_list().contains(ACTIVE_CLASS));

        drop(toggle);
        container.remove();
    }

    #[wasm_bindgen_test]
    fn discover_with_no_burgers_wires_nothing() {
        let toggle = NavbarToggle::discover(&document()).unwrap();
        assert!(toggle.is_empty());
    }

    #[wasm_bindgen_test]
    fn dangling_target_is_a_construction_error() {
        let container =
            mount("<a class=\"navbar-burger\" data-target=\"noSuchMenuAnywhere\"></a>");

        let err = NavbarToggle::discover(&document()).unwrap_err();
        assert!(matches!(err, UiError::UnresolvedTarget(id) if id == "noSuchMenuAnywhere"));

        container.remove();
    }

    #[wasm_bindgen_test]
    fn missing_target_attribute_is_a_construction_error() {
        let container = mount("<a class=\"navbar-burger\"></a>");

        let err = NavbarToggle::discover(&document()).unwrap_err();
        assert!(matches!(err, UiError::MissingTargetRef));

        container.remove();
    }

    #[wasm_bindgen_test]
    fn explicit_bindings_skip_attribute_lookup() {
        let container = mount(
            "<button id=\"plainTriggerBtn\"></button>\
             <div id=\"plainPanel\"></div>",
        );
        let trigger = document().get_element_by_id("plainTriggerBtn").unwrap();
        let target = document().get_element_by_id("plainPanel").unwrap();

        let _toggle = NavbarToggle::with_bindings(vec![ToggleBinding {
            trigger: trigger.clone(),
            target: target.clone(),
        }]);

        click(&trigger);
        assert!(trigger.class_list().contains(ACTIVE_CLASS));
        assert!(target.class_list().contains(ACTIVE_CLASS));

        container.remove();
    }

    #[wasm_bindgen_test]
    fn dropping_the_toggle_unbinds_listeners() {
        let container = mount(
            "<a class=\"navbar-burger\" data-target=\"navMenuDropTest\"></a>\
             <div id=\"navMenuDropTest\"></div>",
        );
        let burger = container.query_selector(".navbar-burger").unwrap().unwrap();

        let toggle = NavbarToggle::discover(&document()).unwrap();
        drop(toggle);

        click(&burger);
        assert!(!burger.class_list().contains(ACTIVE_CLASS));

        container.remove();
    }
}

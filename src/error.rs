use thiserror::Error;
use wasm_bindgen::JsValue;

/// Wiring failures surfaced at construction time.
///
/// Bad markup (a selector that matches nothing, a burger without a
/// `data-target`) is reported here, once, instead of blowing up inside a
/// click handler later.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("no element matches selector `{0}`")]
    ElementNotFound(String),

    #[error("navbar burger has no data-target attribute")]
    MissingTargetRef,

    #[error("data-target `{0}` does not resolve to an element")]
    UnresolvedTarget(String),

    #[error("dom call failed: {0}")]
    Dom(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Dom(format!("{value:?}"))
    }
}

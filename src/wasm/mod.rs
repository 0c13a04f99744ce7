//! WASM bindings for the paginator
//!
//! Values cross the boundary as JSON: configuration objects come in
//! through `JSON.stringify`, snapshots and events go out through
//! `JSON.parse`.

use js_sys::{Function, JSON};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::{
    resolve_key, ConfigChanges, Control, Key, NavigationEvent, NavigationIntent, PaginationError,
    Paginator, RawConfig,
};

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// WASM-exposed paginator wrapper
#[wasm_bindgen]
pub struct WasmPaginator {
    paginator: Paginator,
    listener: Option<Function>,
}

#[wasm_bindgen]
impl WasmPaginator {
    /// Create a paginator from a `{ totalPages, currentPageId, rangeLimit }`
    /// object. An invalid page count puts it in the error state instead of
    /// throwing.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<WasmPaginator, JsError> {
        let config: RawConfig = from_js(&config)?;
        Ok(Self {
            paginator: Paginator::with_config(config),
            listener: None,
        })
    }

    /// Replace the whole configuration
    pub fn initialize(&mut self, config: JsValue) -> Result<(), JsError> {
        let config: RawConfig = from_js(&config)?;
        self.paginator.initialize(config).map_err(to_js_error)
    }

    /// Apply a batch of changed inputs
    pub fn reconfigure(&mut self, changes: JsValue) -> Result<(), JsError> {
        let changes: ConfigChanges = from_js(&changes)?;
        self.paginator.reconfigure(changes).map_err(to_js_error)
    }

    /// Follow a selection change made by the host; returns true when the
    /// window was rebuilt or moved
    #[wasm_bindgen(js_name = reportSelectionChange)]
    pub fn report_selection_change(&mut self, new_id: JsValue, previous_id: JsValue) -> bool {
        let outcome = self
            .paginator
            .report_external_selection_change(js_to_value(&new_id), js_to_value(&previous_id));
        outcome != crate::Reconciliation::Unchanged
    }

    pub fn next(&mut self) -> Result<bool, JsError> {
        self.navigate(NavigationIntent::Next)
    }

    pub fn previous(&mut self) -> Result<bool, JsError> {
        self.navigate(NavigationIntent::Previous)
    }

    pub fn first(&mut self) -> Result<bool, JsError> {
        self.navigate(NavigationIntent::First)
    }

    pub fn last(&mut self) -> Result<bool, JsError> {
        self.navigate(NavigationIntent::Last)
    }

    /// Select a page by id; throws when the id is out of range
    #[wasm_bindgen(js_name = goTo)]
    pub fn go_to(&mut self, page_id: usize) -> Result<bool, JsError> {
        self.navigate(NavigationIntent::GoTo(page_id))
    }

    /// Handle a key press on a focused control.
    ///
    /// `control` is one of `first`, `previous`, `next`, `last` or `page`
    /// (with `page_id`). Returns true when the key was consumed.
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(
        &mut self,
        key_code: u32,
        control: &str,
        page_id: Option<usize>,
    ) -> Result<bool, JsError> {
        let intent = Key::from_key_code(key_code)
            .zip(Control::from_name(control, page_id))
            .and_then(|(key, control)| resolve_key(key, control));
        match intent {
            Some(intent) => {
                self.navigate(intent)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Current snapshot (returns JSON)
    pub fn state(&self) -> JsValue {
        to_js(&self.paginator.state()).unwrap_or(JsValue::NULL)
    }

    #[wasm_bindgen(js_name = currentPageId)]
    pub fn current_page_id(&self) -> Option<usize> {
        self.paginator.current_page_id()
    }

    #[wasm_bindgen(js_name = totalPages)]
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    /// Register the callback receiving `{ pageId, intent }` after each
    /// navigation; pass `null` to remove it
    #[wasm_bindgen(js_name = setListener)]
    pub fn set_listener(&mut self, listener: Option<Function>) {
        self.listener = listener;
    }
}

impl WasmPaginator {
    fn navigate(&mut self, intent: NavigationIntent) -> Result<bool, JsError> {
        let event = self.paginator.navigate(intent).map_err(to_js_error)?;
        match event {
            Some(event) => {
                self.emit(&event)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn emit(&self, event: &NavigationEvent) -> Result<(), JsError> {
        let Some(listener) = &self.listener else {
            return Ok(());
        };
        let payload = to_js(event)?;
        listener
            .call1(&JsValue::NULL, &payload)
            .map(|_| ())
            .map_err(|_| JsError::new("navigation listener threw"))
    }
}

impl Default for WasmPaginator {
    fn default() -> Self {
        Self {
            paginator: Paginator::new(),
            listener: None,
        }
    }
}

fn to_js_error(err: PaginationError) -> JsError {
    JsError::new(&err.to_string())
}

/// Deserialize a JS object; `null` and `undefined` give the default
fn from_js<T: DeserializeOwned + Default>(value: &JsValue) -> Result<T, JsError> {
    if value.is_null() || value.is_undefined() {
        return Ok(T::default());
    }
    let json: String = JSON::stringify(value)
        .map_err(|_| JsError::new("value is not JSON-serializable"))?
        .into();
    serde_json::from_str(&json).map_err(|err| JsError::new(&err.to_string()))
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    let json = serde_json::to_string(value).map_err(|err| JsError::new(&err.to_string()))?;
    JSON::parse(&json).map_err(|_| JsError::new("failed to parse snapshot JSON"))
}

/// Loose conversion of a scalar JS value
fn js_to_value(value: &JsValue) -> Value {
    if let Some(number) = value.as_f64() {
        return serde_json::Number::from_f64(number)
            .map(Value::Number)
            .unwrap_or(Value::Null);
    }
    value.as_string().map(Value::String).unwrap_or(Value::Null)
}

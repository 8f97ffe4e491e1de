use js_sys::Reflect;
use querybridge_errors::internal::BridgeInternalError;
use querybridge_errors::BridgeError;
use wasm_bindgen::JsValue;

/// Read `globalThis.location.search`, e.g. `"?a=1&b=2"` or `""`.
pub fn current_search() -> Result<String, BridgeError> {
    let location = get_property(&js_sys::global(), "location")?;
    if location.is_undefined() || location.is_null() {
        return Err(unavailable("no `location` on the global object".into()));
    }

    let search = get_property(&location, "search")?;
    search
        .as_string()
        .ok_or_else(|| unavailable("`location.search` is not a string".into()))
}

fn get_property(target: &JsValue, name: &str) -> Result<JsValue, BridgeError> {
    Reflect::get(target, &JsValue::from_str(name))
        .map_err(|err| unavailable(format!("reading `{name}` failed: {err:?}")))
}

fn unavailable(msg: String) -> BridgeError {
    BridgeError::InternalError(BridgeInternalError::LocationUnavailable(msg))
}

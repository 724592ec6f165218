use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::error::ClipboardError;

#[wasm_bindgen(inline_js = "export function write_clipboard_text(text) { return navigator.clipboard.writeText(text); }")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn write_clipboard_text(text: &str) -> Result<Promise, JsValue>;
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Writes `text` to the system clipboard.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let promise = write_clipboard_text(text).map_err(|e| ClipboardError::Unavailable(describe(&e)))?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ClipboardError::Rejected(describe(&e)))
}

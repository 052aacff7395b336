use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::window;

pub fn alert(message: &str) {
    if let Some(window) = window() {
        if window.alert_with_message(message).is_err() {
            log::warn!("alert() failed: {message}");
        }
    }
}

// navigator.clipboard is looked up dynamically; it is missing on insecure origins.
pub async fn copy_to_clipboard(text: &str) -> Result<(), String> {
    let window = window().ok_or("No window available")?;
    let navigator: JsValue = window.navigator().into();
    let clipboard = Reflect::get(&navigator, &"clipboard".into())
        .ok()
        .filter(|c| !c.is_undefined())
        .ok_or("Clipboard is not available")?;
    let write_text = Reflect::get(&clipboard, &"writeText".into())
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or("Clipboard writeText is not available")?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| format!("Clipboard write failed: {e:?}"))?;
    JsFuture::from(Promise::from(promise))
        .await
        .map_err(|e| format!("Clipboard write rejected: {e:?}"))?;
    Ok(())
}

/// Copies `text` and confirms with an alert, like the page's copy buttons.
pub fn copy_with_confirmation(text: String, confirmation: &'static str) {
    wasm_bindgen_futures::spawn_local(async move {
        match copy_to_clipboard(&text).await {
            Ok(()) => alert(confirmation),
            Err(e) => {
                log::error!("{e}");
                alert(&e);
            }
        }
    });
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse lightbox config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid zoom limits: {0}")]
    InvalidZoom(&'static str),
}

#[derive(Debug, Error)]
pub enum PluginError {
    #[error("PhotoSwipe disabled in config")]
    Disabled,
    #[error("{0} is not loaded")]
    NotLoaded(&'static str),
    #[error("{0} is not callable")]
    NotCallable(&'static str),
    #[error("Plugin threw: {0}")]
    Js(String),
}

#[derive(Debug, Error)]
pub enum DomError {
    #[error("No document available")]
    NoDocument,
    #[error("Invalid selector {0:?}")]
    Selector(String),
    #[error("Pointer capture failed: {0}")]
    PointerCapture(String),
}

/// Render a thrown JS value for a diagnostic message.
pub fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

// Optional PhotoSwipe gallery viewer, driven through its JS globals
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use crate::config::PhotoSwipeConfig;
use crate::error::{describe_js, PluginError};

const LIGHTBOX_CTOR: &str = "PhotoSwipeLightbox";
const CORE_MODULE: &str = "PhotoSwipe";

fn global(window: &Window, name: &'static str) -> Result<JsValue, PluginError> {
    match Reflect::get(window, &JsValue::from_str(name)) {
        Ok(v) if !v.is_undefined() && !v.is_null() => Ok(v),
        _ => Err(PluginError::NotLoaded(name)),
    }
}

/// Whether the built-in lightbox is mounted alongside the plugin outcome.
/// Only a running plugin configured as exclusive replaces it.
pub fn builtin_viewer_wanted(plugin: &Result<(), PluginError>, cfg: &PhotoSwipeConfig) -> bool {
    !(cfg.exclusive && plugin.is_ok())
}

/// `new PhotoSwipeLightbox({ gallery, children, pswpModule }).init()`.
pub fn init_photoswipe(window: &Window, cfg: &PhotoSwipeConfig) -> Result<(), PluginError> {
    if !cfg.enabled {
        return Err(PluginError::Disabled);
    }
    let ctor: Function = global(window, LIGHTBOX_CTOR)?
        .dyn_into()
        .map_err(|_| PluginError::NotCallable(LIGHTBOX_CTOR))?;
    let module = global(window, CORE_MODULE)?;

    let options = Object::new();
    let set = |key: &str, value: &JsValue| {
        Reflect::set(&options, &JsValue::from_str(key), value)
            .map(|_| ())
            .map_err(|e| PluginError::Js(describe_js(&e)))
    };
    set("gallery", &JsValue::from_str(&cfg.gallery))?;
    set("children", &JsValue::from_str(&cfg.children))?;
    set("pswpModule", &module)?;

    let instance = Reflect::construct(&ctor, &Array::of1(&options))
        .map_err(|e| PluginError::Js(describe_js(&e)))?;
    let init: Function = Reflect::get(&instance, &JsValue::from_str("init"))
        .ok()
        .and_then(|f| f.dyn_into().ok())
        .ok_or(PluginError::NotCallable("PhotoSwipeLightbox.init"))?;
    init.call0(&instance)
        .map(|_| ())
        .map_err(|e| PluginError::Js(describe_js(&e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_viewer_mounted_by_default_even_when_plugin_runs() {
        let cfg = PhotoSwipeConfig::default();
        assert!(builtin_viewer_wanted(&Ok(()), &cfg));
        assert!(builtin_viewer_wanted(&Err(PluginError::NotLoaded(LIGHTBOX_CTOR)), &cfg));
    }

    #[test]
    fn exclusive_plugin_replaces_builtin_only_when_running() {
        let cfg = PhotoSwipeConfig {
            exclusive: true,
            ..Default::default()
        };
        assert!(!builtin_viewer_wanted(&Ok(()), &cfg));
        assert!(builtin_viewer_wanted(&Err(PluginError::Disabled), &cfg));
        assert!(builtin_viewer_wanted(&Err(PluginError::Js("boom".into())), &cfg));
    }
}

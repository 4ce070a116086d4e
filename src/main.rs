mod components;
mod config;
mod dom;
mod error;
mod model;
mod plugin;
mod state;
mod util;

use components::app::{App, AppProps};
use config::{CONFIG_ATTR, LightboxConfig, MOUNT_ID};
use error::PluginError;
use util::{clog, cwarn};

/// Start PhotoSwipe when it is enabled and on the page, logging the outcome.
fn init_plugin(config: &LightboxConfig) -> Result<(), PluginError> {
    let Some(window) = web_sys::window() else {
        return Err(PluginError::NotLoaded("window"));
    };
    let result = plugin::init_photoswipe(&window, &config.photoswipe);
    match &result {
        Ok(()) => clog("lightbox: PhotoSwipe initialised"),
        Err(PluginError::Disabled) => {}
        Err(err @ PluginError::NotLoaded(_)) => clog(&format!("lightbox: {}", err)),
        Err(err) => cwarn(&format!("lightbox: PhotoSwipe initialisation failed: {}", err)),
    }
    result
}

fn main() {
    console_error_panic_hook::set_once();

    let document = match dom::document() {
        Ok(d) => d,
        Err(err) => {
            cwarn(&format!("lightbox: {}", err));
            return;
        }
    };
    let mount = document.get_element_by_id(MOUNT_ID);
    let raw_config = mount.as_ref().and_then(|m| m.get_attribute(CONFIG_ATTR));
    let config = LightboxConfig::from_attribute(raw_config.as_deref()).unwrap_or_else(|err| {
        cwarn(&format!("lightbox: {}; using defaults", err));
        LightboxConfig::default()
    });

    let plugin = init_plugin(&config);
    if !plugin::builtin_viewer_wanted(&plugin, &config.photoswipe) {
        clog("lightbox: PhotoSwipe is exclusive, built-in viewer not mounted");
        return;
    }

    let page = match dom::discover(&document, &config.thumbnail_selector) {
        Ok(page) => page,
        Err(err) => {
            cwarn(&format!("lightbox: {}", err));
            return;
        }
    };
    if page.is_empty() {
        clog(&format!(
            "lightbox: no thumbnails match {:?}, gallery disabled",
            config.thumbnail_selector
        ));
        return;
    }

    let props = AppProps { page, config };
    match mount {
        Some(root) => {
            yew::Renderer::<App>::with_root_and_props(root, props).render();
        }
        None => {
            yew::Renderer::<App>::with_props(props).render();
        }
    }
}

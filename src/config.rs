//! Lightbox settings, read as JSON from the mount element's `data-config`
//! attribute. Every field is optional; anything omitted keeps its default.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::state::ZoomLimits;

/// Element the overlay is rendered into; falls back to `<body>` when absent.
pub const MOUNT_ID: &str = "lightbox-root";
pub const CONFIG_ATTR: &str = "data-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    /// Selector for the page's thumbnail images, in gallery order.
    pub thumbnail_selector: String,
    pub zoom: ZoomLimits,
    pub controls: ControlsConfig,
    pub photoswipe: PhotoSwipeConfig,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            thumbnail_selector: ".gallery img".into(),
            zoom: ZoomLimits::default(),
            controls: ControlsConfig::default(),
            photoswipe: PhotoSwipeConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub prev: bool,
    pub next: bool,
    pub close: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            prev: true,
            next: true,
            close: true,
        }
    }
}

/// Options handed to `PhotoSwipeLightbox` when it is present on the page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PhotoSwipeConfig {
    pub enabled: bool,
    /// Gallery root selector.
    pub gallery: String,
    /// Child selector for the clickable items inside the root.
    pub children: String,
    /// When set and PhotoSwipe starts, the built-in viewer is not mounted.
    pub exclusive: bool,
}

impl Default for PhotoSwipeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            gallery: ".gallery".into(),
            children: "a".into(),
            exclusive: false,
        }
    }
}

impl LightboxConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: LightboxConfig = serde_json::from_str(raw)?;
        cfg.zoom.validate()?;
        Ok(cfg)
    }

    /// Parse the attribute value if there is one; errors leave the caller to fall back.
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, ConfigError> {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => Self::from_json(s),
            _ => Ok(Self::default()),
        }
    }
}

// Zoom/pan transform for the overlay image.
//
// The image is rendered with `translate(x, y) scale(z)` around its own
// center, so translation is always expressed in unscaled screen pixels.
use serde::Deserialize;

use crate::error::ConfigError;

/// Zoom at which the image is shown unmagnified and unpanned.
pub const REST_ZOOM: f64 = 1.0;

/// Wheel results are snapped to a 1e-6 grid so repeated steps return to rest exactly.
const ZOOM_GRID: f64 = 1e6;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
    /// Zoom change per wheel tick.
    pub step: f64,
    /// Zoom applied by a click at rest zoom.
    pub click_zoom: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 5.0,
            step: 0.2,
            click_zoom: 2.0,
        }
    }
}

impl ZoomLimits {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all_finite = [self.min, self.max, self.step, self.click_zoom]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(ConfigError::InvalidZoom("values must be finite"));
        }
        if self.min <= 0.0 || self.min > REST_ZOOM {
            return Err(ConfigError::InvalidZoom("min must be in (0, 1]"));
        }
        if self.max < REST_ZOOM {
            return Err(ConfigError::InvalidZoom("max must be at least 1"));
        }
        if self.step <= 0.0 {
            return Err(ConfigError::InvalidZoom("step must be positive"));
        }
        if self.click_zoom <= REST_ZOOM || self.click_zoom > self.max {
            return Err(ConfigError::InvalidZoom("click_zoom must be in (1, max]"));
        }
        Ok(())
    }

    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

/// Screen-space bounding box, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub zoom: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    /// Whether the next visual change is smoothed; off while dragging.
    pub animate: bool,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: REST_ZOOM,
            translate_x: 0.0,
            translate_y: 0.0,
            animate: true,
        }
    }
}

impl Viewport {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_magnified(&self) -> bool {
        self.zoom > REST_ZOOM
    }

    pub fn is_at_rest_zoom(&self) -> bool {
        self.zoom == REST_ZOOM
    }

    /// Zoom to `target` keeping `focal` (default: the image center) fixed on screen.
    /// Returns false when the clamped target equals the current zoom.
    pub fn zoom_to(
        &mut self,
        target: f64,
        focal: Option<(f64, f64)>,
        rect: Rect,
        limits: &ZoomLimits,
    ) -> bool {
        let target = limits.clamp(target);
        if target == self.zoom {
            return false;
        }
        let (cx, cy) = rect.center();
        let (fx, fy) = focal.unwrap_or((cx, cy));
        let ratio = 1.0 - target / self.zoom;
        self.translate_x += (fx - cx) * ratio;
        self.translate_y += (fy - cy) * ratio;
        self.zoom = target;
        self.animate = true;
        true
    }

    /// Click toggle: magnify around the pointer at rest zoom, otherwise reset.
    pub fn toggle_click_zoom(&mut self, x: f64, y: f64, rect: Rect, limits: &ZoomLimits) {
        if self.is_at_rest_zoom() {
            self.zoom_to(limits.click_zoom, Some((x, y)), rect, limits);
        } else {
            self.reset();
        }
    }

    /// One wheel tick: negative delta (scroll up/away) zooms in, anything else zooms out.
    pub fn wheel(&mut self, delta_y: f64, x: f64, y: f64, rect: Rect, limits: &ZoomLimits) {
        if !delta_y.is_finite() {
            return;
        }
        let step = if delta_y < 0.0 { limits.step } else { -limits.step };
        let target = limits.clamp(quantize(self.zoom + step));
        self.zoom_to(target, Some((x, y)), rect, limits);
        if self.is_at_rest_zoom() {
            self.translate_x = 0.0;
            self.translate_y = 0.0;
            self.animate = true;
        }
    }

    pub fn transform_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({})",
            self.translate_x, self.translate_y, self.zoom
        )
    }
}

fn quantize(zoom: f64) -> f64 {
    (zoom * ZOOM_GRID).round() / ZOOM_GRID
}

/// Drag state, live between pointer-down and the matching up/cancel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanSession {
    pub active: bool,
    pub start_x: f64,
    pub start_y: f64,
    /// Set by any move during the drag; consumed by the next image click.
    pub has_moved: bool,
}

impl PanSession {
    /// Start a drag unless the viewport is at or below rest zoom.
    pub fn begin(&mut self, x: f64, y: f64, viewport: &mut Viewport) -> bool {
        if !viewport.is_magnified() {
            return false;
        }
        self.active = true;
        self.has_moved = false;
        self.start_x = x - viewport.translate_x;
        self.start_y = y - viewport.translate_y;
        viewport.animate = false;
        true
    }

    pub fn track(&mut self, x: f64, y: f64, viewport: &mut Viewport) {
        if !self.active {
            return;
        }
        self.has_moved = true;
        viewport.translate_x = x - self.start_x;
        viewport.translate_y = y - self.start_y;
        viewport.animate = false;
    }

    /// End (or cancel) the drag; the last applied transform is kept.
    pub fn end(&mut self, viewport: &mut Viewport) {
        if !self.active {
            return;
        }
        self.active = false;
        viewport.animate = true;
    }

    pub fn take_moved(&mut self) -> bool {
        std::mem::take(&mut self.has_moved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn layout() -> Rect {
        Rect {
            left: 100.0,
            top: 50.0,
            width: 800.0,
            height: 600.0,
        }
    }

    // Box the browser reports for the untransformed layout box under `vp`.
    fn rendered(base: Rect, vp: &Viewport) -> Rect {
        let (cx, cy) = base.center();
        let w = base.width * vp.zoom;
        let h = base.height * vp.zoom;
        Rect {
            left: cx + vp.translate_x - w / 2.0,
            top: cy + vp.translate_y - h / 2.0,
            width: w,
            height: h,
        }
    }

    #[test]
    fn zoom_is_clamped_to_limits() {
        let limits = ZoomLimits::default();
        for target in [-3.0, 0.0, 0.05, 0.5, 3.0, 5.0, 9.0, 1e9] {
            let mut vp = Viewport::default();
            vp.zoom_to(target, None, layout(), &limits);
            assert!(vp.zoom >= limits.min && vp.zoom <= limits.max, "{}", vp.zoom);
        }
    }

    #[test]
    fn zoom_to_current_is_noop() {
        let limits = ZoomLimits::default();
        let mut vp = Viewport {
            zoom: 2.0,
            translate_x: 13.0,
            translate_y: -7.0,
            animate: false,
        };
        let before = vp;
        assert!(!vp.zoom_to(2.0, Some((0.0, 0.0)), layout(), &limits));
        assert_eq!(vp, before);
    }

    #[test]
    fn reset_returns_to_rest() {
        let mut vp = Viewport {
            zoom: 3.4,
            translate_x: 120.0,
            translate_y: 80.0,
            animate: false,
        };
        vp.reset();
        assert_eq!(vp.zoom, 1.0);
        assert_eq!((vp.translate_x, vp.translate_y), (0.0, 0.0));
        assert!(vp.animate);
    }

    #[test]
    fn zoom_without_focal_uses_center() {
        let limits = ZoomLimits::default();
        let mut vp = Viewport::default();
        vp.zoom_to(3.0, None, layout(), &limits);
        assert_eq!((vp.translate_x, vp.translate_y), (0.0, 0.0));
        assert_eq!(vp.zoom, 3.0);
    }

    #[test]
    fn zoom_round_trip_restores_translation() {
        let limits = ZoomLimits::default();
        let base = layout();
        let mut vp = Viewport {
            zoom: 1.4,
            translate_x: 25.0,
            translate_y: -40.0,
            animate: true,
        };
        let focal = Some((310.0, 220.0));
        let rect = rendered(base, &vp);
        vp.zoom_to(3.2, focal, rect, &limits);
        let rect = rendered(base, &vp);
        vp.zoom_to(1.4, focal, rect, &limits);
        assert!((vp.translate_x - 25.0).abs() < EPS);
        assert!((vp.translate_y + 40.0).abs() < EPS);
    }

    #[test]
    fn focal_point_offset_scales_translation() {
        let limits = ZoomLimits::default();
        let mut vp = Viewport::default();
        // 100px right of and 50px above center; 1 -> 2 gives ratio -1
        let (cx, cy) = layout().center();
        vp.zoom_to(2.0, Some((cx + 100.0, cy - 50.0)), layout(), &limits);
        assert_eq!(vp.translate_x, -100.0);
        assert_eq!(vp.translate_y, 50.0);
    }

    #[test]
    fn click_toggles_between_rest_and_magnified() {
        let limits = ZoomLimits::default();
        let mut vp = Viewport::default();
        vp.toggle_click_zoom(200.0, 100.0, layout(), &limits);
        assert_eq!(vp.zoom, 2.0);
        vp.toggle_click_zoom(200.0, 100.0, layout(), &limits);
        assert_eq!(vp, Viewport::default());
    }

    #[test]
    fn wheel_up_once_then_clamps_at_max() {
        let limits = ZoomLimits::default();
        let mut vp = Viewport::default();
        vp.wheel(-100.0, 500.0, 350.0, layout(), &limits);
        assert!((vp.zoom - 1.2).abs() < EPS);
        for _ in 0..20 {
            vp.wheel(-100.0, 500.0, 350.0, layout(), &limits);
            assert!(vp.zoom <= limits.max);
        }
        assert_eq!(vp.zoom, 5.0);
    }

    #[test]
    fn wheel_back_to_rest_clears_translation() {
        let limits = ZoomLimits::default();
        let mut vp = Viewport::default();
        for _ in 0..3 {
            vp.wheel(-1.0, 140.0, 90.0, layout(), &limits);
        }
        assert!(vp.translate_x != 0.0);
        for _ in 0..3 {
            vp.wheel(1.0, 610.0, 420.0, layout(), &limits);
        }
        assert_eq!(vp.zoom, 1.0);
        assert_eq!((vp.translate_x, vp.translate_y), (0.0, 0.0));
    }

    #[test]
    fn wheel_down_stops_at_min() {
        let limits = ZoomLimits::default();
        let mut vp = Viewport::default();
        for _ in 0..30 {
            vp.wheel(3.0, 0.0, 0.0, layout(), &limits);
        }
        assert!((vp.zoom - limits.min).abs() < EPS);
    }

    #[test]
    fn zero_delta_wheel_zooms_out_one_step() {
        let limits = ZoomLimits::default();
        let mut vp = Viewport {
            zoom: 2.0,
            ..Default::default()
        };
        vp.wheel(0.0, 50.0, 50.0, layout(), &limits);
        assert!((vp.zoom - 1.8).abs() < EPS);
    }

    #[test]
    fn pan_disabled_at_rest_zoom() {
        let mut vp = Viewport::default();
        let mut pan = PanSession::default();
        assert!(!pan.begin(10.0, 10.0, &mut vp));
        pan.track(200.0, 150.0, &mut vp);
        pan.end(&mut vp);
        assert_eq!((vp.translate_x, vp.translate_y), (0.0, 0.0));
        assert!(!pan.has_moved);
    }

    #[test]
    fn pan_tracks_pointer_from_current_offset() {
        let mut vp = Viewport {
            zoom: 2.0,
            translate_x: 30.0,
            translate_y: 10.0,
            animate: true,
        };
        let mut pan = PanSession::default();
        assert!(pan.begin(100.0, 100.0, &mut vp));
        assert!(!vp.animate);
        pan.track(150.0, 80.0, &mut vp);
        assert_eq!((vp.translate_x, vp.translate_y), (80.0, -10.0));
        pan.end(&mut vp);
        assert!(vp.animate);
        assert!(!pan.active);
        assert!(pan.take_moved());
        assert!(!pan.take_moved());
    }

    #[test]
    fn limits_validation() {
        assert!(ZoomLimits::default().validate().is_ok());
        let bad = ZoomLimits {
            min: 2.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        let bad = ZoomLimits {
            max: 0.5,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        let bad = ZoomLimits {
            step: f64::NAN,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        let bad = ZoomLimits {
            click_zoom: 1.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        let bad = ZoomLimits {
            click_zoom: 6.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn transform_css_format() {
        let vp = Viewport {
            zoom: 1.5,
            translate_x: -12.5,
            translate_y: 0.0,
            animate: true,
        };
        assert_eq!(vp.transform_css(), "translate(-12.5px, 0px) scale(1.5)");
    }
}

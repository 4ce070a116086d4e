//! Lightbox state and the reducer that drives it.
//! All input events reach the state through `LightboxAction`, so every
//! transition here can be exercised without a DOM.

use std::rc::Rc;
use yew::Reducible;

use crate::state::{
    Direction, GalleryEntry, GalleryIndex, OverlayVisibility, PanSession, Rect, Viewport,
    ZoomLimits,
};

#[derive(Clone, Debug, PartialEq)]
pub struct LightboxState {
    pub gallery: GalleryIndex,
    pub overlay: OverlayVisibility,
    pub viewport: Viewport,
    pub pan: PanSession,
    pub limits: ZoomLimits,
}

impl LightboxState {
    pub fn new(entries: Rc<[GalleryEntry]>, limits: ZoomLimits) -> Self {
        Self {
            gallery: GalleryIndex::new(entries),
            overlay: OverlayVisibility::default(),
            viewport: Viewport::default(),
            pan: PanSession::default(),
            limits,
        }
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Entry currently assigned to the overlay image.
    pub fn current(&self) -> Option<&GalleryEntry> {
        self.gallery.current()
    }

    pub fn cursor(&self) -> Option<&'static str> {
        if self.pan.active {
            Some("grabbing")
        } else if self.viewport.is_magnified() {
            Some("grab")
        } else {
            None
        }
    }

    /// Inline style for the overlay image.
    pub fn image_style(&self) -> String {
        let mut style = format!("transform: {};", self.viewport.transform_css());
        if !self.viewport.animate {
            style.push_str(" transition: none;");
        }
        if let Some(cursor) = self.cursor() {
            style.push_str(&format!(" cursor: {};", cursor));
        }
        style
    }

    fn show_fresh(&mut self) {
        self.viewport.reset();
        self.pan = PanSession::default();
    }
}

// ---------------- Reducer & Actions -----------------
#[derive(Clone, Debug, PartialEq)]
pub enum LightboxAction {
    Open { index: usize },
    Close,
    Show(Direction),
    ImageClick { x: f64, y: f64, rect: Rect },
    Wheel { delta_y: f64, x: f64, y: f64, rect: Rect },
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    PointerCancel,
    ImageLoaded,
}

/// Keyboard shortcuts available while the overlay is open.
pub fn key_action(key: &str) -> Option<LightboxAction> {
    match key {
        "ArrowLeft" => Some(LightboxAction::Show(Direction::Previous)),
        "ArrowRight" => Some(LightboxAction::Show(Direction::Next)),
        "Escape" => Some(LightboxAction::Close),
        _ => None,
    }
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use LightboxAction::*;
        if self.gallery.is_empty() {
            return self;
        }
        if !self.is_open() && !matches!(action, Open { .. } | Close) {
            return self;
        }
        let mut new = (*self).clone();
        let limits = new.limits;
        match action {
            Open { index } => {
                new.gallery.set_position(index);
                new.overlay.open();
                new.show_fresh();
            }
            Close => {
                new.overlay.close();
                new.show_fresh();
            }
            Show(dir) => {
                new.gallery.advance(dir);
                new.show_fresh();
            }
            ImageClick { x, y, rect } => {
                if new.pan.take_moved() {
                    return Rc::new(new);
                }
                new.viewport.toggle_click_zoom(x, y, rect, &limits);
            }
            Wheel { delta_y, x, y, rect } => {
                new.viewport.wheel(delta_y, x, y, rect, &limits);
            }
            PointerDown { x, y } => {
                if !new.pan.begin(x, y, &mut new.viewport) {
                    return self;
                }
            }
            PointerMove { x, y } => {
                if !new.pan.active {
                    return self;
                }
                new.pan.track(x, y, &mut new.viewport);
            }
            PointerUp | PointerCancel => {
                if !new.pan.active {
                    return self;
                }
                new.pan.end(&mut new.viewport);
            }
            ImageLoaded => {
                new.viewport.animate = true;
            }
        }
        if new == *self {
            return self;
        }
        Rc::new(new)
    }
}

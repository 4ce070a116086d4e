pub mod gallery;
pub mod overlay;
pub mod viewport;

pub use gallery::{Direction, GalleryEntry, GalleryIndex};
pub use overlay::OverlayVisibility;
pub use viewport::{PanSession, Rect, Viewport, ZoomLimits};

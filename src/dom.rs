// Page discovery and small DOM helpers for the lightbox
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, HtmlImageElement};

use crate::error::{describe_js, DomError};
use crate::state::{GalleryEntry, Rect};

/// Thumbnails found on the page, in document order, with their resolved entries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub entries: Rc<[GalleryEntry]>,
    pub thumbnails: Rc<[Element]>,
}

impl Page {
    pub fn is_empty(&self) -> bool {
        self.thumbnails.is_empty()
    }
}

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or(DomError::NoDocument)
}

pub fn discover(document: &Document, selector: &str) -> Result<Page, DomError> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|_| DomError::Selector(selector.to_string()))?;
    let mut entries = Vec::with_capacity(nodes.length() as usize);
    let mut thumbnails = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        entries.push(entry_for(&el));
        thumbnails.push(el);
    }
    Ok(Page {
        entries: entries.into(),
        thumbnails: thumbnails.into(),
    })
}

/// Full-size source: the enclosing link's target, else the thumbnail's own src.
fn entry_for(el: &Element) -> GalleryEntry {
    let thumb_src = el
        .dyn_ref::<HtmlImageElement>()
        .map(|img| img.src())
        .or_else(|| el.get_attribute("src"))
        .unwrap_or_default();
    let link = el
        .closest("a")
        .ok()
        .flatten()
        .and_then(|a| a.dyn_into::<HtmlAnchorElement>().ok())
        .map(|a| a.href())
        .filter(|href| !href.is_empty());
    let alt = el.get_attribute("alt").filter(|a| !a.is_empty());
    GalleryEntry {
        full_src: link.unwrap_or(thumb_src),
        alt,
    }
}

pub fn bounding_rect(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    }
}

pub fn capture_pointer(el: &Element, pointer_id: i32) -> Result<(), DomError> {
    el.set_pointer_capture(pointer_id)
        .map_err(|e| DomError::PointerCapture(describe_js(&e)))
}

pub fn release_pointer(el: &Element, pointer_id: i32) -> Result<(), DomError> {
    if !el.has_pointer_capture(pointer_id) {
        return Ok(());
    }
    el.release_pointer_capture(pointer_id)
        .map_err(|e| DomError::PointerCapture(describe_js(&e)))
}

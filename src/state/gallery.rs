// Ordered gallery entries and the current position within them
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryEntry {
    /// Source shown in the overlay (link target, or the thumbnail's own src).
    pub full_src: String,
    pub alt: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn offset(self) -> isize {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryIndex {
    entries: Rc<[GalleryEntry]>,
    position: usize,
}

impl Default for GalleryIndex {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl GalleryIndex {
    pub fn new(entries: impl Into<Rc<[GalleryEntry]>>) -> Self {
        Self {
            entries: entries.into(),
            position: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current_position(&self) -> usize {
        self.position
    }

    pub fn current(&self) -> Option<&GalleryEntry> {
        self.entries.get(self.position)
    }

    /// Out-of-range positions are ignored.
    pub fn set_position(&mut self, i: usize) {
        if i < self.entries.len() {
            self.position = i;
        }
    }

    /// Step one entry in `dir`, wrapping at both ends.
    pub fn advance(&mut self, dir: Direction) -> Option<&GalleryEntry> {
        let len = self.entries.len() as isize;
        if len == 0 {
            return None;
        }
        self.position = (self.position as isize + dir.offset() + len).rem_euclid(len) as usize;
        self.entries.get(self.position)
    }
}

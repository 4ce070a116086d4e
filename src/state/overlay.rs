// Open/closed state of the overlay container
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OverlayVisibility {
    open: bool,
}

impl OverlayVisibility {
    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

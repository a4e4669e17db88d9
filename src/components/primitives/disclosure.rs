//! Disclosure - Open/Closed Toggle

/// Open/closed state of a transient element (menu, confirm prompt, modal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Disclosure {
    is_open: bool,
}

impl Disclosure {
    pub fn new(is_open: bool) -> Self {
        Self { is_open }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn on_open(&mut self) {
        self.is_open = true;
    }

    pub fn on_close(&mut self) {
        self.is_open = false;
    }

    pub fn on_toggle(&mut self) {
        self.is_open = !self.is_open;
    }
}

//! Accordion state for the FAQ section: at most one entry open.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    /// Start with `default_open` expanded (or everything collapsed).
    #[must_use]
    pub fn new(default_open: Option<usize>) -> Self {
        Self { open: default_open }
    }

    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index`, closing any other; or close it if it was already open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.is_open(index) { None } else { Some(index) };
    }
}

//! Looping carousel position for the testimonials slider.
//!
//! Autoplay advances one slide every `AUTOPLAY_DELAY_MS` and keeps running
//! after the visitor clicks a pagination bullet.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

pub const AUTOPLAY_DELAY_MS: u32 = 5_000;

/// Viewport width breakpoints (px) and the slides shown at or above each.
const BREAKPOINTS: &[(f64, usize)] = &[(1024.0, 3), (768.0, 2)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Autoplay step; wraps from the last slide to the first.
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Pagination bullet click. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Slide indices on screen, centred on the active slide.
    #[must_use]
    pub fn visible(&self, per_view: usize) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        let per_view = per_view.clamp(1, self.len);
        let before = (per_view - 1) / 2;
        let start = (self.index + self.len - before % self.len) % self.len;
        (0..per_view).map(|i| (start + i) % self.len).collect()
    }
}

/// Slides per view for a viewport `width` in CSS pixels.
#[must_use]
pub fn slides_per_view(width: f64) -> usize {
    BREAKPOINTS
        .iter()
        .find(|(min, _)| width >= *min)
        .map_or(1, |(_, count)| *count)
}

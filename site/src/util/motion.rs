//! Pointer and scroll driven motion values for the hero and cursor.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

/// Maximum parallax travel in pixels, edge to edge.
pub const PARALLAX_RANGE_PX: f64 = 20.0;

/// Hero content fades out over the first half of its own height.
pub const HERO_FADE_END: f64 = 0.5;

/// Offset for a pointer at `client` inside a viewport of size `viewport`.
///
/// Zero at the centre, `±PARALLAX_RANGE_PX / 2` at the edges.
#[must_use]
pub fn parallax_offset(client: f64, viewport: f64) -> f64 {
    if viewport <= 0.0 {
        return 0.0;
    }
    (client / viewport - 0.5) * PARALLAX_RANGE_PX
}

/// Scroll-linked hero transform as `(translate_y_percent, opacity)`.
///
/// `progress` is scroll offset divided by the hero height. Content slides
/// down by up to 50% and fades to transparent by `HERO_FADE_END`.
#[must_use]
pub fn hero_scroll_transform(progress: f64) -> (f64, f64) {
    let p = progress.clamp(0.0, 1.0);
    let opacity = (1.0 - p / HERO_FADE_END).clamp(0.0, 1.0);
    (p * 50.0, opacity)
}

/// Selector matched by the cursor ring's hover state.
pub const INTERACTIVE_SELECTOR: &str = "a, button, [role='button']";

/// Pointer follower state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: f64,
    pub y: f64,
    pub hovering: bool,
    pub visible: bool,
}

impl CursorState {
    pub fn moved(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.visible = true;
    }

    pub fn left(&mut self) {
        self.visible = false;
        self.hovering = false;
    }

    /// Inline transform centring an element of `size` px on the pointer.
    #[must_use]
    pub fn transform(&self, size: f64) -> String {
        let half = size / 2.0;
        format!("translate3d({}px, {}px, 0)", self.x - half, self.y - half)
    }
}

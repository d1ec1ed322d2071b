//! Render geometry derived from the slider position.
//!
//! All values are fractions of the container width so views can hand them
//! straight to relative lengths without re-measuring.

/// Where the clip boundary and the handle sit for a given position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderLayout {
    /// Left edge of the visible after region.
    pub clip_start: f32,
    /// Width of the visible after region.
    pub visible_fraction: f32,
    /// Width of the after image relative to its clipped parent, so the image
    /// keeps the full container width and stays aligned with the before
    /// image. `None` when nothing of the after layer is visible.
    pub inner_width_ratio: Option<f32>,
    /// Horizontal center of the handle.
    pub handle_center: f32,
}

impl SliderLayout {
    /// Positions outside `[0, 100]` are allowed (unclamped initial values);
    /// the handle then sits outside the container and the clip saturates.
    pub fn from_percent(percent: f32) -> Self {
        let clip_start = if percent.is_nan() { 0.0 } else { percent / 100.0 };
        let visible_fraction = (1.0 - clip_start).max(0.0);
        let inner_width_ratio = (visible_fraction > 0.0).then(|| 1.0 / visible_fraction);
        Self {
            clip_start,
            visible_fraction,
            inner_width_ratio,
            handle_center: clip_start,
        }
    }

    pub fn shows_after(&self) -> bool {
        self.inner_width_ratio.is_some()
    }
}

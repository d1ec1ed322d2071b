/// Lowest slider position, in percent.
pub const MIN_POSITION: f32 = 0.0;
/// Highest slider position, in percent.
pub const MAX_POSITION: f32 = 100.0;

/// Horizontal extent of the widget, measured from its latest layout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerGeometry {
    pub left: f32,
    pub width: f32,
}

impl ContainerGeometry {
    pub fn new(left: f32, width: f32) -> Self {
        Self { left, width }
    }

    /// Whether the container has a usable, non-zero width.
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite() && self.width.is_finite() && self.width > 0.0
    }

    /// Map a horizontal coordinate to a percentage of the container width.
    ///
    /// Coordinates outside the container saturate at 0 or 100. Returns `None`
    /// when the container cannot be measured or `x` is NaN.
    pub fn percent_at(&self, x: f32) -> Option<f32> {
        if !self.is_measurable() || x.is_nan() {
            return None;
        }
        let offset = (x - self.left).clamp(0.0, self.width);
        Some((offset * 100.0 / self.width).clamp(MIN_POSITION, MAX_POSITION))
    }
}

/// Slider position plus drag state.
///
/// Every mutation is driven by an input event; methods return whether the
/// visible position changed so callers know when to repaint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionTracker {
    position: f32,
    dragging: bool,
}

impl PositionTracker {
    /// The initial position is taken as-is. Values outside `[0, 100]` stay
    /// until the first interaction recomputes a clamped one.
    pub fn new(initial_position: f32) -> Self {
        if !(MIN_POSITION..=MAX_POSITION).contains(&initial_position) {
            log::warn!(
                "Initial position {} is outside 0..=100; it is shown as-is until the first drag",
                initial_position
            );
        }
        Self {
            position: initial_position,
            dragging: false,
        }
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Start a drag at `x`. The press also counts as the first move.
    ///
    /// Ignored entirely when the container cannot be measured.
    pub fn press(&mut self, x: f32, geometry: ContainerGeometry) -> bool {
        let Some(percent) = geometry.percent_at(x) else {
            return false;
        };
        self.dragging = true;
        self.set_position(percent)
    }

    /// Follow the pointer while dragging. No-op when not dragging.
    pub fn drag_to(&mut self, x: f32, geometry: ContainerGeometry) -> bool {
        if !self.dragging {
            return false;
        }
        match geometry.percent_at(x) {
            Some(percent) => self.set_position(percent),
            None => false,
        }
    }

    /// End the drag, keeping the last position. Returns whether a drag was
    /// in progress.
    pub fn release(&mut self) -> bool {
        std::mem::replace(&mut self.dragging, false)
    }

    fn set_position(&mut self, percent: f32) -> bool {
        if self.position == percent {
            return false;
        }
        self.position = percent;
        true
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_INITIAL_POSITION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> ContainerGeometry {
        ContainerGeometry::new(0.0, 200.0)
    }

    #[test]
    fn test_percent_at_reference_points() {
        let g = geometry();
        assert_eq!(g.percent_at(0.0), Some(0.0));
        assert_eq!(g.percent_at(100.0), Some(50.0));
        assert_eq!(g.percent_at(250.0), Some(100.0));
        assert_eq!(g.percent_at(-50.0), Some(0.0));
    }

    #[test]
    fn test_percent_at_respects_left_offset() {
        let g = ContainerGeometry::new(40.0, 400.0);
        assert_eq!(g.percent_at(40.0), Some(0.0));
        assert_eq!(g.percent_at(140.0), Some(25.0));
        assert_eq!(g.percent_at(440.0), Some(100.0));
    }

    #[test]
    fn test_percent_always_in_range() {
        let g = ContainerGeometry::new(-13.5, 321.0);
        let mut x = -10_000.0;
        while x < 10_000.0 {
            let p = g.percent_at(x).unwrap();
            assert!((MIN_POSITION..=MAX_POSITION).contains(&p), "x={} gave {}", x, p);
            x += 7.25;
        }
        assert_eq!(g.percent_at(f32::INFINITY), Some(100.0));
        assert_eq!(g.percent_at(f32::NEG_INFINITY), Some(0.0));
    }

    #[test]
    fn test_percent_monotonic_inside_container() {
        let g = ContainerGeometry::new(10.0, 300.0);
        let mut last = 0.0;
        for step in 0..=300 {
            let p = g.percent_at(10.0 + step as f32).unwrap();
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_unmeasurable_geometry() {
        assert_eq!(ContainerGeometry::new(0.0, 0.0).percent_at(10.0), None);
        assert_eq!(ContainerGeometry::new(0.0, -5.0).percent_at(10.0), None);
        assert_eq!(ContainerGeometry::new(f32::NAN, 100.0).percent_at(10.0), None);
        assert_eq!(geometry().percent_at(f32::NAN), None);
    }

    #[test]
    fn test_press_starts_drag_and_moves() {
        let mut tracker = PositionTracker::new(50.0);
        assert!(tracker.press(50.0, geometry()));
        assert!(tracker.is_dragging());
        assert_eq!(tracker.position(), 25.0);
    }

    #[test]
    fn test_press_on_zero_width_is_noop() {
        let mut tracker = PositionTracker::new(50.0);
        assert!(!tracker.press(10.0, ContainerGeometry::new(0.0, 0.0)));
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.position(), 50.0);
    }

    #[test]
    fn test_move_without_press_is_ignored() {
        let mut tracker = PositionTracker::new(50.0);
        assert!(!tracker.drag_to(180.0, geometry()));
        assert_eq!(tracker.position(), 50.0);
    }

    #[test]
    fn test_drag_follows_pointer_past_edges() {
        let mut tracker = PositionTracker::new(50.0);
        tracker.press(100.0, geometry());
        assert!(tracker.drag_to(150.0, geometry()));
        assert_eq!(tracker.position(), 75.0);
        tracker.drag_to(900.0, geometry());
        assert_eq!(tracker.position(), 100.0);
        tracker.drag_to(-900.0, geometry());
        assert_eq!(tracker.position(), 0.0);
    }

    #[test]
    fn test_drag_uses_geometry_of_each_event() {
        let mut tracker = PositionTracker::new(50.0);
        tracker.press(100.0, geometry());
        // Window resized mid-drag
        tracker.drag_to(100.0, ContainerGeometry::new(0.0, 400.0));
        assert_eq!(tracker.position(), 25.0);
    }

    #[test]
    fn test_drag_ignores_unmeasurable_event() {
        let mut tracker = PositionTracker::new(50.0);
        tracker.press(20.0, geometry());
        assert!(!tracker.drag_to(150.0, ContainerGeometry::new(0.0, 0.0)));
        assert_eq!(tracker.position(), 10.0);
        assert!(tracker.is_dragging());
    }

    #[test]
    fn test_release_keeps_position_and_stops_tracking() {
        let mut tracker = PositionTracker::new(50.0);
        tracker.press(60.0, geometry());
        assert!(tracker.release());
        assert_eq!(tracker.position(), 30.0);
        assert!(!tracker.drag_to(190.0, geometry()));
        assert_eq!(tracker.position(), 30.0);
        assert!(!tracker.release());
    }

    #[test]
    fn test_out_of_range_initial_kept_until_interaction() {
        let mut tracker = PositionTracker::new(140.0);
        assert_eq!(tracker.position(), 140.0);
        tracker.press(500.0, geometry());
        assert_eq!(tracker.position(), 100.0);
    }

    #[test]
    fn test_default_starts_centered() {
        let tracker = PositionTracker::default();
        assert_eq!(tracker.position(), 50.0);
        assert!(!tracker.is_dragging());
    }
}

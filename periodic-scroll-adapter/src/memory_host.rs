use periodic_scroll::{Point, ScrollHost, Size};

/// An in-memory [`ScrollHost`].
///
/// Behaves like a toolkit scroll surface stripped of rendering: it clamps the offset to
/// `[0, content - viewport]`, and every offset change made while notifications are enabled
/// leaves a pending "did scroll" notification for the adapter to deliver.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryHost {
    viewport: Size,
    content_size: Size,
    offset: Point,
    suppressed: bool,
    pending: bool,
}

impl MemoryHost {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    pub fn set_viewport_size(&mut self, viewport: Size) {
        self.viewport = viewport;
        self.move_to(self.offset);
    }

    /// Largest offset the host accepts on each axis.
    pub fn max_offset(&self) -> Point {
        let max = |content: f32, view: f32| {
            let m = content - view;
            if m > 0.0 { m } else { 0.0 }
        };
        Point::new(
            max(self.content_size.width, self.viewport.width),
            max(self.content_size.height, self.viewport.height),
        )
    }

    /// Moves the offset by a drag delta, as the user's finger/mouse would.
    pub fn scroll_by(&mut self, dx: f32, dy: f32) {
        self.move_to(self.offset.offset_by(dx, dy));
    }

    /// Returns `true` (once) if an unsuppressed offset change happened since the last call.
    pub fn take_pending_notification(&mut self) -> bool {
        core::mem::take(&mut self.pending)
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    fn move_to(&mut self, offset: Point) {
        let max = self.max_offset();
        let clamped = Point::new(clamp(offset.x, max.x), clamp(offset.y, max.y));
        if clamped != self.offset {
            self.offset = clamped;
            if !self.suppressed {
                self.pending = true;
            }
        }
    }
}

fn clamp(value: f32, max: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        0.0
    }
}

impl ScrollHost for MemoryHost {
    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn content_size(&self) -> Size {
        self.content_size
    }

    fn set_content_size(&mut self, size: Size) {
        self.content_size = size;
        self.move_to(self.offset);
    }

    fn content_offset(&self) -> Point {
        self.offset
    }

    fn set_content_offset(&mut self, offset: Point) {
        self.move_to(offset);
    }

    fn set_scroll_notifications_suppressed(&mut self, suppressed: bool) {
        self.suppressed = suppressed;
    }
}

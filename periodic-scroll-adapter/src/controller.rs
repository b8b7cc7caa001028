use periodic_scroll::{
    Axis, PeriodicScrollOptions, PeriodicScrollView, PeriodicityMode, Point, Result, ScrollEvent,
    ScrollHost, Size,
};

use crate::{Easing, MemoryHost, Tween};

/// Upper bound on the number of host steps a single move is split into.
const MAX_STEPS: u32 = 4096;

#[derive(Clone, Copy, Debug)]
struct ScrollBy {
    x: Tween,
    y: Tween,
    travelled: Point,
}

/// A framework-neutral controller that wraps a `PeriodicScrollView` over a [`MemoryHost`] and
/// routes the usual adapter events to it.
///
/// Adapters drive it by calling:
/// - `on_drag` / `on_resize` when UI events occur
/// - `tick(now_ms)` each frame/timer tick (for tween-driven scrolling)
///
/// Programmatic scrolls are tweened in delta space: each tick moves the host by the distance
/// covered since the previous tick, exactly like a drag, so an animation can run across any
/// number of wraps.
#[derive(Debug)]
pub struct Controller<C = ()> {
    view: PeriodicScrollView<MemoryHost, C>,
    scroll_by: Option<ScrollBy>,
}

impl<C> Controller<C> {
    pub fn new(viewport: Size, options: PeriodicScrollOptions) -> Result<Self> {
        let view = PeriodicScrollView::new(MemoryHost::new(viewport), options)?;
        Ok(Self::from_view(view))
    }

    pub fn from_view(mut view: PeriodicScrollView<MemoryHost, C>) -> Self {
        // Anything the host queued before we took over is stale.
        view.host_mut().take_pending_notification();
        Self {
            view,
            scroll_by: None,
        }
    }

    pub fn view(&self) -> &PeriodicScrollView<MemoryHost, C> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PeriodicScrollView<MemoryHost, C> {
        &mut self.view
    }

    pub fn into_view(self) -> PeriodicScrollView<MemoryHost, C> {
        self.view
    }

    pub fn is_animating(&self) -> bool {
        self.scroll_by.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.scroll_by = None;
    }

    /// Call this when the viewport is resized. Returns `true` if the view re-tiled.
    pub fn on_resize(&mut self, viewport: Size) -> bool {
        self.view.host_mut().set_viewport_size(viewport);
        let retiled = self.view.layout();
        self.deliver();
        retiled
    }

    /// Call this when the user drags the surface by `(dx, dy)`.
    ///
    /// This cancels any active tween.
    pub fn on_drag(&mut self, dx: f32, dy: f32) -> Option<ScrollEvent> {
        self.cancel_animation();
        self.move_by(dx, dy)
    }

    /// Switches periodicity (the view re-centres) and cancels any active tween.
    pub fn set_periodicity(&mut self, mode: PeriodicityMode) {
        self.cancel_animation();
        self.view.set_periodicity(mode);
        self.deliver();
    }

    /// Starts a tween that scrolls by `(dx, dy)` over `duration_ms`.
    pub fn start_scroll_by(
        &mut self,
        dx: f32,
        dy: f32,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) {
        self.scroll_by = Some(ScrollBy {
            x: Tween::new(0.0, dx, now_ms, duration_ms, easing),
            y: Tween::new(0.0, dy, now_ms, duration_ms, easing),
            travelled: Point::ZERO,
        });
    }

    /// Extends the active tween by a further `(dx, dy)`, reaching the new target `duration_ms`
    /// after `now_ms`.
    ///
    /// The motion continues from wherever the tween is at `now_ms`, so an interrupted animation
    /// does not jump. Returns `false` (and does nothing) when no tween is active.
    pub fn retarget_scroll_by(
        &mut self,
        dx: f32,
        dy: f32,
        now_ms: u64,
        duration_ms: u64,
    ) -> bool {
        let Some(anim) = self.scroll_by.as_mut() else {
            return false;
        };
        let (to_x, to_y) = (anim.x.to + dx, anim.y.to + dy);
        anim.x.retarget(now_ms, to_x, duration_ms);
        anim.y.retarget(now_ms, to_y, duration_ms);
        true
    }

    /// Advances the active tween, if any.
    ///
    /// Returns the scroll event produced by this tick (`None` when idle or when the tween did not
    /// move this tick).
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollEvent> {
        let mut anim = self.scroll_by?;
        let target = Point::new(anim.x.sample(now_ms), anim.y.sample(now_ms));
        let dx = target.x - anim.travelled.x;
        let dy = target.y - anim.travelled.y;
        anim.travelled = target;

        self.scroll_by = if anim.x.is_done(now_ms) {
            None
        } else {
            Some(anim)
        };
        self.move_by(dx, dy)
    }

    /// Moves the host by `(dx, dy)`, one buffer's worth at a time.
    ///
    /// A step never exceeds `period - viewport` on a periodic axis, so the host cannot clamp it
    /// before the view wraps the offset. Returns the event of the last step that moved.
    fn move_by(&mut self, dx: f32, dy: f32) -> Option<ScrollEvent> {
        let steps = self.step_count(Point::new(dx, dy));
        let (step_x, step_y) = (dx / steps as f32, dy / steps as f32);
        let mut last = None;
        for _ in 0..steps {
            self.view.host_mut().scroll_by(step_x, step_y);
            last = self.deliver().or(last);
        }
        last
    }

    fn step_count(&self, delta: Point) -> u32 {
        let geometry = self.view.geometry();
        let viewport = self.view.host().viewport_size();
        let mut steps = 1;
        for axis in Axis::ALL {
            if !geometry.is_periodic(axis) {
                continue;
            }
            let slack = geometry.axis(axis).period - viewport.get(axis);
            let distance = delta.get(axis).abs();
            if slack <= 0.0 || !distance.is_finite() {
                continue;
            }
            let ratio = distance / slack;
            let mut n = ratio as u32;
            if (n as f32) < ratio {
                n = n.saturating_add(1);
            }
            steps = steps.max(n);
        }
        steps.min(MAX_STEPS)
    }

    /// Delivers the host's pending notification to the view.
    fn deliver(&mut self) -> Option<ScrollEvent> {
        if !self.view.host_mut().take_pending_notification() {
            return None;
        }
        let event = self.view.did_scroll();
        debug_assert!(
            !self.view.host().is_suppressed(),
            "host left suppressed after a scroll notification"
        );
        event
    }

    /// The current host offset.
    pub fn offset(&self) -> Point {
        self.view.host().content_offset()
    }
}

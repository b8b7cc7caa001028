use alloc::sync::Arc;

use crate::correction::{self, Correction};
use crate::{
    Axis, AxisTiling, ConfigurationError, ContentSurface, PeriodicScrollOptions, PeriodicityMode,
    Point, Result, ScrollEvent, ScrollHost, Size, TileGeometry,
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct LayoutKey {
    viewport: Size,
    content_size: Size,
    periodicity: PeriodicityMode,
}

/// A scroll view that loops endlessly along its periodic axes.
///
/// The view owns a [`ScrollHost`] (the toolkit's scroll surface) and a single
/// [`ContentSurface`]. It sizes the host's content to three tiles along every periodic axis,
/// keeps the content surface in the middle tile, and on every scroll notification moves the
/// offset back into that middle tile by whole periods. Since the content is identical modulo the
/// period, the user never notices the jump.
///
/// The view is driven by its adapter:
/// - [`PeriodicScrollView::layout`] after the host's viewport changes
/// - [`PeriodicScrollView::did_scroll`] whenever the host reports an offset change
#[derive(Debug)]
pub struct PeriodicScrollView<H, C = ()> {
    host: H,
    options: PeriodicScrollOptions,
    geometry: TileGeometry,
    layout_key: LayoutKey,
    surface: ContentSurface<C>,

    /// Host offset as of the last notification the view processed or the last write it made.
    last_offset: Point,
    /// Offset written by the view itself, whose echo (if the host notifies anyway) is dropped.
    silent_write: Option<Point>,
    wrap_count: u64,
}

impl<H: ScrollHost, C> PeriodicScrollView<H, C> {
    /// Creates a view over `host` and performs the first layout.
    ///
    /// The offset starts at the origin of the central tile.
    pub fn new(host: H, options: PeriodicScrollOptions) -> Result<Self> {
        validate_size(options.content_size)?;
        let geometry = TileGeometry::compute(options.content_size, options.periodicity);
        let layout_key = LayoutKey {
            viewport: host.viewport_size(),
            content_size: options.content_size,
            periodicity: options.periodicity,
        };
        pdebug!(
            periodicity = %options.periodicity,
            width = options.content_size.width,
            height = options.content_size.height,
            "PeriodicScrollView::new"
        );
        let mut view = Self {
            host,
            options,
            geometry,
            layout_key,
            surface: ContentSurface::new(),
            last_offset: Point::ZERO,
            silent_write: None,
            wrap_count: 0,
        };
        view.apply_geometry(geometry, geometry.central_tile_origin());
        Ok(view)
    }

    pub fn options(&self) -> &PeriodicScrollOptions {
        &self.options
    }

    /// Applies a new set of options.
    ///
    /// A periodicity change behaves like [`Self::set_periodicity`] (the offset is re-centred);
    /// any other change goes through the regular layout pass.
    pub fn set_options(&mut self, options: PeriodicScrollOptions) -> Result<()> {
        validate_size(options.content_size)?;
        let periodicity_changed = options.periodicity != self.options.periodicity;
        self.options = options;
        if periodicity_changed {
            self.retile_centered();
        } else {
            self.layout();
        }
        Ok(())
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut PeriodicScrollOptions)) -> Result<()> {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next)
    }

    pub fn set_on_scroll(
        &mut self,
        on_scroll: Option<impl Fn(ScrollEvent) + Send + Sync + 'static>,
    ) {
        self.options.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
    }

    pub fn periodicity(&self) -> PeriodicityMode {
        self.options.periodicity
    }

    /// Switches the periodicity mode.
    ///
    /// Always re-tiles, re-anchors the content surface and moves the offset to the start of the
    /// central tile, even when `mode` equals the current mode.
    pub fn set_periodicity(&mut self, mode: PeriodicityMode) {
        pdebug!(from = %self.options.periodicity, to = %mode, "set_periodicity");
        self.options.periodicity = mode;
        self.retile_centered();
    }

    /// Same as [`Self::set_periodicity`], from a raw toolkit value (`0..=3`).
    ///
    /// Unknown values fail with `InvalidConfiguration` and leave the view untouched.
    pub fn try_set_periodicity(&mut self, raw: u32) -> Result<()> {
        let mode = PeriodicityMode::try_from(raw)?;
        self.set_periodicity(mode);
        Ok(())
    }

    /// The caller's logical content size.
    pub fn content_size(&self) -> Size {
        self.options.content_size
    }

    /// Sets the logical content size and re-lays out.
    ///
    /// Negative or non-finite sizes fail with `InvalidConfiguration`. A zero extent is accepted:
    /// the axis simply stops being periodic until it grows again.
    pub fn set_content_size(&mut self, size: Size) -> Result<()> {
        validate_size(size)?;
        self.options.content_size = size;
        self.layout();
        Ok(())
    }

    pub fn geometry(&self) -> &TileGeometry {
        &self.geometry
    }

    pub fn content_surface(&self) -> &ContentSurface<C> {
        &self.surface
    }

    pub fn content_surface_mut(&mut self) -> &mut ContentSurface<C> {
        &mut self.surface
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host. Call [`Self::layout`] after changing its viewport.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// The host's current offset in tiled-content coordinates.
    pub fn offset(&self) -> Point {
        self.host.content_offset()
    }

    /// The current offset relative to the content surface (the central tile origin).
    pub fn logical_offset(&self) -> Point {
        let offset = self.host.content_offset();
        let origin = self.geometry.central_tile_origin();
        Point::new(offset.x - origin.x, offset.y - origin.y)
    }

    /// Scrolls so that `position` (in content-surface coordinates) is at the viewport origin.
    ///
    /// This is a regular scroll: the host reports it through its usual notification.
    pub fn scroll_to_logical_offset(&mut self, position: Point) {
        let origin = self.geometry.central_tile_origin();
        let target = Point::new(origin.x + position.x, origin.y + position.y);
        let target = correction::correct(target, &self.geometry).offset;
        self.host.set_content_offset(target);
    }

    /// Number of corrective writes applied so far.
    pub fn wrap_count(&self) -> u64 {
        self.wrap_count
    }

    /// Layout pass.
    ///
    /// Re-tiles when the host viewport, the logical content size or the periodicity changed since
    /// the last pass; otherwise this is a no-op. The perceived position is carried over
    /// proportionally. Returns `true` if the geometry was rebuilt.
    pub fn layout(&mut self) -> bool {
        let key = LayoutKey {
            viewport: self.host.viewport_size(),
            content_size: self.options.content_size,
            periodicity: self.options.periodicity,
        };
        if key == self.layout_key {
            return false;
        }
        let next = TileGeometry::compute(key.content_size, key.periodicity);
        let offset = carry_offset(self.host.content_offset(), &self.geometry, &next);
        pdebug!(
            viewport_width = key.viewport.width,
            viewport_height = key.viewport.height,
            width = key.content_size.width,
            height = key.content_size.height,
            "layout: re-tiling"
        );
        self.layout_key = key;
        self.apply_geometry(next, offset);
        true
    }

    /// Handles the host's "offset changed" notification.
    ///
    /// Moves the offset back into the central tile if needed, then forwards the notification to
    /// `on_scroll`. Returns the forwarded event, or `None` when the notification was the echo of
    /// the view's own corrective write.
    ///
    /// The echo is recognised by offset alone: the first notification after a corrective write
    /// that reports exactly the written offset is dropped, whether or not the host sent it because
    /// of the write. Such a notification carries no motion. Any later notification, or one at a
    /// different offset, is handled normally.
    pub fn did_scroll(&mut self) -> Option<ScrollEvent> {
        let raw = self.host.content_offset();
        if let Some(written) = self.silent_write.take() {
            if same_point(written, raw) {
                return None;
            }
        }

        let delta = Point::new(raw.x - self.last_offset.x, raw.y - self.last_offset.y);
        let Correction {
            offset,
            wrap,
            changed,
        } = correction::correct(raw, &self.geometry);

        let offset = if changed {
            self.wrap_count = self.wrap_count.saturating_add(1);
            ptrace!(
                raw_x = raw.x,
                raw_y = raw.y,
                x = offset.x,
                y = offset.y,
                wrap_x = wrap.x,
                wrap_y = wrap.y,
                "wrap"
            );
            self.write_offset_silently(offset)
        } else {
            self.last_offset = raw;
            raw
        };

        let event = ScrollEvent {
            offset,
            delta,
            wrap,
        };
        if let Some(cb) = &self.options.on_scroll {
            cb(event);
        }
        Some(event)
    }

    fn retile_centered(&mut self) {
        let next = TileGeometry::compute(self.options.content_size, self.options.periodicity);
        self.layout_key = LayoutKey {
            viewport: self.host.viewport_size(),
            content_size: self.options.content_size,
            periodicity: self.options.periodicity,
        };
        self.apply_geometry(next, next.central_tile_origin());
    }

    /// Swaps in `next` together with the host content size, the surface frame and `offset`.
    fn apply_geometry(&mut self, next: TileGeometry, offset: Point) {
        let viewport = self.host.viewport_size();
        if !next.buffers_cover(viewport) {
            pwarn!(
                viewport_width = viewport.width,
                viewport_height = viewport.height,
                period_x = next.horizontal.period,
                period_y = next.vertical.period,
                "viewport is larger than a tile; the host may clamp before the offset wraps"
            );
        }

        let tiled = next.tiled_size();
        let offset = Point::new(
            clamp_to_range(offset.x, tiled.width - viewport.width),
            clamp_to_range(offset.y, tiled.height - viewport.height),
        );
        let offset = correction::correct(offset, &next).offset;

        self.geometry = next;
        self.surface.set_frame(next.central_tile());
        self.host.set_scroll_notifications_suppressed(true);
        self.host.set_content_size(tiled);
        self.host.set_content_offset(offset);
        self.host.set_scroll_notifications_suppressed(false);
        let applied = self.host.content_offset();
        self.last_offset = applied;
        self.silent_write = Some(applied);
    }

    fn write_offset_silently(&mut self, offset: Point) -> Point {
        self.host.set_scroll_notifications_suppressed(true);
        self.host.set_content_offset(offset);
        self.host.set_scroll_notifications_suppressed(false);
        let applied = self.host.content_offset();
        self.last_offset = applied;
        self.silent_write = Some(applied);
        applied
    }
}

fn validate_size(size: Size) -> Result<()> {
    if size.is_valid() {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidSize {
            width: size.width,
            height: size.height,
        }
        .into())
    }
}

fn same_point(a: Point, b: Point) -> bool {
    a.x.to_bits() == b.x.to_bits() && a.y.to_bits() == b.y.to_bits()
}

fn clamp_to_range(value: f32, max: f32) -> f32 {
    let max = if max > 0.0 { max } else { 0.0 };
    if value.is_finite() {
        value.clamp(0.0, max)
    } else {
        0.0
    }
}

/// Maps `offset` from `prev` into `next`, keeping the same relative position within the content.
fn carry_offset(offset: Point, prev: &TileGeometry, next: &TileGeometry) -> Point {
    let mut out = Point::ZERO;
    for axis in Axis::ALL {
        out.set(axis, carry_axis(offset.get(axis), prev.axis(axis), next.axis(axis)));
    }
    out
}

fn carry_axis(offset: f32, prev: &AxisTiling, next: &AxisTiling) -> f32 {
    let within = offset - prev.central_origin;
    let within = if prev.period > 0.0 && next.period > 0.0 {
        within * (next.period / prev.period)
    } else {
        within
    };
    next.central_origin + within
}

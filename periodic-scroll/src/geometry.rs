use crate::{Axis, PeriodicityMode, Point, Rect, Size};

/// Number of tiles laid out along a periodic axis: one buffer tile on each side of the central
/// tile.
pub const PERIODIC_TILE_COUNT: u32 = 3;

/// Tiling of a single axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisTiling {
    /// Logical content extent along the axis (the wrap period when periodic).
    pub period: f32,
    pub tile_count: u32,
    /// Start of the central tile in tiled-content coordinates.
    pub central_origin: f32,
    /// The mode asked for this axis to be periodic but its extent was zero.
    pub demoted: bool,
}

impl AxisTiling {
    fn compute(extent: f32, periodic: bool) -> Self {
        // A zero period would make every offset fall outside the central tile.
        let demoted = periodic && extent <= 0.0;
        if periodic && !demoted {
            Self {
                period: extent,
                tile_count: PERIODIC_TILE_COUNT,
                central_origin: extent,
                demoted,
            }
        } else {
            Self {
                period: extent,
                tile_count: 1,
                central_origin: 0.0,
                demoted,
            }
        }
    }

    pub fn is_periodic(&self) -> bool {
        self.tile_count > 1
    }

    /// Full tiled extent: `tile_count * period`.
    pub fn extent(&self) -> f32 {
        self.period * self.tile_count as f32
    }

    /// Exclusive end of the central tile.
    pub fn central_end(&self) -> f32 {
        self.central_origin + self.period
    }

    pub fn contains(&self, offset: f32) -> bool {
        self.central_origin <= offset && offset < self.central_end()
    }
}

/// Tiled layout derived from a logical content size and a [`PeriodicityMode`].
///
/// This is a plain value: computing it twice from the same inputs yields bit-identical results,
/// so callers may compare or memoize it freely.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGeometry {
    pub horizontal: AxisTiling,
    pub vertical: AxisTiling,
}

impl TileGeometry {
    /// Computes the tiling for `logical` content under `mode`.
    ///
    /// Negative or non-finite extents are treated as zero. Callers that need to reject such
    /// sizes validate them before calling (see `PeriodicScrollView::set_content_size`).
    pub fn compute(logical: Size, mode: PeriodicityMode) -> Self {
        let extent = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        let geometry = Self {
            horizontal: AxisTiling::compute(
                extent(logical.width),
                mode.is_periodic(Axis::Horizontal),
            ),
            vertical: AxisTiling::compute(extent(logical.height), mode.is_periodic(Axis::Vertical)),
        };
        if geometry.horizontal.demoted || geometry.vertical.demoted {
            pwarn!(
                %mode,
                width = logical.width,
                height = logical.height,
                "degenerate geometry: zero extent on a periodic axis, axis treated as non-periodic"
            );
        }
        geometry
    }

    pub fn axis(&self, axis: Axis) -> &AxisTiling {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    pub fn is_periodic(&self, axis: Axis) -> bool {
        self.axis(axis).is_periodic()
    }

    /// Whether `axis` was nominally periodic but demoted because its extent is zero.
    pub fn is_demoted(&self, axis: Axis) -> bool {
        self.axis(axis).demoted
    }

    pub fn logical_size(&self) -> Size {
        Size::new(self.horizontal.period, self.vertical.period)
    }

    /// Content size to hand to the host.
    pub fn tiled_size(&self) -> Size {
        Size::new(self.horizontal.extent(), self.vertical.extent())
    }

    /// `(horizontal, vertical)` tile counts.
    pub fn tile_count(&self) -> (u32, u32) {
        (self.horizontal.tile_count, self.vertical.tile_count)
    }

    pub fn central_tile_origin(&self) -> Point {
        Point::new(self.horizontal.central_origin, self.vertical.central_origin)
    }

    /// Frame of the central tile; this is where the content surface lives.
    pub fn central_tile(&self) -> Rect {
        Rect::new(self.central_tile_origin(), self.logical_size())
    }

    /// Returns `true` when every buffer tile is at least as large as `viewport` along the
    /// periodic axes. When this does not hold, the host may clamp the offset before it ever
    /// reaches the far side of the central tile.
    pub fn buffers_cover(&self, viewport: Size) -> bool {
        Axis::ALL.into_iter().all(|axis| {
            let tiling = self.axis(axis);
            !tiling.is_periodic() || tiling.period >= viewport.get(axis)
        })
    }
}

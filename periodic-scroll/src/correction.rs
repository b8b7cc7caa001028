//! Offset correction: keeps the scroll offset inside the central tile.
//!
//! Every periodic axis is handled independently. An offset that left the central tile by less
//! than one period (the normal case while dragging, since notifications arrive far more often
//! than a tile can be crossed) is shifted by exactly one period. Offsets further out, which only
//! happen on programmatic jumps or host overscroll, are reduced modulo the period.

use crate::{Axis, AxisTiling, Point, TileGeometry, Wrap};

/// Result of correcting a single offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Correction {
    pub offset: Point,
    pub wrap: Wrap,
    /// The offset differs from the input and must be written back to the host.
    pub changed: bool,
}

/// Corrects one axis. Returns the new offset and the number of periods it was shifted by.
///
/// Non-periodic (including demoted) axes are returned unchanged.
pub fn correct_axis(offset: f32, tiling: &AxisTiling) -> (f32, i32) {
    if !tiling.is_periodic() {
        return (offset, 0);
    }
    let period = tiling.period;
    let start = tiling.central_origin;
    let end = tiling.central_end();

    if !offset.is_finite() {
        pwarn!(offset, "non-finite scroll offset, snapping to central tile");
        return (start, 0);
    }

    if offset < start {
        if offset >= start - period {
            let shifted = offset + period;
            // Rounding can land exactly on `end`; `start` is the same point modulo the period.
            return if shifted < end {
                (shifted, 1)
            } else {
                (start, 0)
            };
        }
    } else if offset < end {
        return (offset, 0);
    } else if offset < end + period {
        let shifted = offset - period;
        return if shifted < end {
            (shifted, -1)
        } else {
            (start, -2)
        };
    }

    reduce_modulo(offset, tiling)
}

fn reduce_modulo(offset: f32, tiling: &AxisTiling) -> (f32, i32) {
    let period = tiling.period;
    let start = tiling.central_origin;
    let mut rem = (offset - start) % period;
    if rem < 0.0 {
        rem += period;
    }
    let mut corrected = start + rem;
    if corrected >= tiling.central_end() {
        corrected = start;
    }
    let q = (corrected - offset) / period;
    let periods = (if q >= 0.0 { q + 0.5 } else { q - 0.5 }) as i64;
    let periods = periods.clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    pdebug!(offset, corrected, periods, "offset reduced modulo period");
    (corrected, periods)
}

/// Corrects `offset` against `geometry` on every periodic axis.
pub fn correct(offset: Point, geometry: &TileGeometry) -> Correction {
    let mut out = offset;
    let mut wrap = Wrap::NONE;
    for axis in Axis::ALL {
        let (value, periods) = correct_axis(offset.get(axis), geometry.axis(axis));
        out.set(axis, value);
        wrap.set(axis, periods);
    }
    let changed = out.x.to_bits() != offset.x.to_bits() || out.y.to_bits() != offset.y.to_bits();
    Correction {
        offset: out,
        wrap,
        changed,
    }
}

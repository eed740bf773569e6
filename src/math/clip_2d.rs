use super::outcode::{classify, Edge, Outcode};
use super::{Arithmetic, Point2, Vector2, PARALLEL_EPSILON};
use crate::geometry::{Rect, Segment};

/// Upper bound on endpoint moves in a single clip.
///
/// Each endpoint is snapped at most once per axis.
pub const MAX_CLIP_PASSES: usize = 4;

/// Rounding error of one interpolation step, in units of `f64::EPSILON`
/// times the magnitude of its terms.
const INTERPOLATION_ULPS: f64 = 4.0;

/// Outcome of clipping a segment against a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipResult {
    /// The segment does not overlap the cell.
    Rejected,
    /// The part of the segment inside the closed cell, in input order.
    Clipped(Segment),
}

impl ClipResult {
    /// Returns the clipped segment, if any.
    #[must_use]
    pub fn segment(&self) -> Option<&Segment> {
        match self {
            Self::Rejected => None,
            Self::Clipped(s) => Some(s),
        }
    }

    /// Returns `true` if the segment missed the cell.
    #[must_use]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// Length of the clipped segment; `0.0` when rejected.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.segment().map_or(0.0, Segment::length)
    }
}

/// Clips `segment` against `rect` with strict arithmetic.
///
/// See [`clip_with`].
#[inline]
#[must_use]
pub fn clip(segment: &Segment, rect: &Rect) -> ClipResult {
    clip_with(segment, rect, Arithmetic::Strict)
}

/// Cohen-Sutherland clip of `segment` against the closed rectangle `rect`.
///
/// Outside endpoints are moved onto the violated edge (first in
/// [`Edge::PRIORITY`] order), `p0` before `p1`, until both endpoints are
/// inside or they share a violated edge. Intersections are evaluated on the
/// input segment's line, with the clipped coordinate snapped exactly onto the
/// edge. Among the violated edges of an endpoint, those the segment runs
/// parallel to (extent below [`PARALLEL_EPSILON`]) are tried last; the
/// crossing parameter is clamped to the segment, so a nearly parallel
/// segment that straddles an edge is split there rather than dropped.
///
/// Coordinates must be finite.
#[must_use]
pub fn clip_with(segment: &Segment, rect: &Rect, arithmetic: Arithmetic) -> ClipResult {
    let origin = segment.p0;
    let dir = segment.direction();

    let mut p0 = segment.p0;
    let mut p1 = segment.p1;
    let mut c0 = classify(&p0, rect);
    let mut c1 = classify(&p1, rect);

    for _ in 0..MAX_CLIP_PASSES {
        if c0.intersects(c1) {
            return ClipResult::Rejected;
        }
        if c0.is_inside() && c1.is_inside() {
            return ClipResult::Clipped(Segment::new(p0, p1));
        }

        let move_first = !c0.is_inside();
        let (code, current) = if move_first { (c0, p0) } else { (c1, p1) };
        let p = edge_crossing(&origin, &dir, &current, code, rect, arithmetic);

        if move_first {
            p0 = p;
            c0 = classify(&p0, rect);
        } else {
            p1 = p;
            c1 = classify(&p1, rect);
        }
    }

    if c0.is_inside() && c1.is_inside() {
        ClipResult::Clipped(Segment::new(p0, p1))
    } else {
        ClipResult::Rejected
    }
}

/// Moves `current`, an endpoint violating `code`, onto a violated edge.
///
/// The returned point lies on the edge and on the input segment.
#[inline]
fn edge_crossing(
    origin: &Point2,
    dir: &Vector2,
    current: &Point2,
    code: Outcode,
    rect: &Rect,
    arithmetic: Arithmetic,
) -> Point2 {
    let Some(first) = code.first_edge() else {
        return *current;
    };
    let edge = code
        .edges()
        .find(|&e| !runs_parallel(e, dir))
        .unwrap_or(first);

    match edge {
        Edge::Left | Edge::Right => {
            let x = if edge == Edge::Left { rect.xmin() } else { rect.xmax() };
            let y = segment_param(x, origin.x, dir.x).map_or(current.y, |t| {
                interpolate(t, dir.y, origin.y, rect.ymin(), rect.ymax(), arithmetic)
            });
            Point2::new(x, y)
        }
        Edge::Bottom | Edge::Top => {
            let y = if edge == Edge::Bottom { rect.ymin() } else { rect.ymax() };
            let x = segment_param(y, origin.y, dir.y).map_or(current.x, |t| {
                interpolate(t, dir.x, origin.x, rect.xmin(), rect.xmax(), arithmetic)
            });
            Point2::new(x, y)
        }
    }
}

/// Evaluates `origin + t * extent` along the edge being crossed.
///
/// A result outside `[lo, hi]` by no more than the rounding error of the
/// evaluation is pulled onto the bound, so a crossing that lands on a cell
/// corner is not classified as outside the neighbouring edge.
#[inline]
fn interpolate(
    t: f64,
    extent: f64,
    origin: f64,
    lo: f64,
    hi: f64,
    arithmetic: Arithmetic,
) -> f64 {
    let value = arithmetic.mul_add(t, extent, origin);
    let slack = INTERPOLATION_ULPS * f64::EPSILON * (origin.abs() + (t * extent).abs());
    if value < lo && lo - value <= slack {
        lo
    } else if value > hi && value - hi <= slack {
        hi
    } else {
        value
    }
}

/// Returns `true` if the segment's extent across `edge` is below
/// [`PARALLEL_EPSILON`].
#[inline]
fn runs_parallel(edge: Edge, dir: &Vector2) -> bool {
    match edge {
        Edge::Left | Edge::Right => dir.x.abs() < PARALLEL_EPSILON,
        Edge::Bottom | Edge::Top => dir.y.abs() < PARALLEL_EPSILON,
    }
}

/// Parameter along the segment where its coordinate reaches `edge`.
///
/// The violated edge always lies between the current endpoints, so the
/// parameter is clamped to `[0, 1]`; `None` only for a zero extent.
#[inline]
fn segment_param(edge: f64, origin: f64, extent: f64) -> Option<f64> {
    let t = (edge - origin) / extent;
    t.is_finite().then(|| t.clamp(0.0, 1.0))
}

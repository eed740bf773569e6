use std::ops::BitOr;

use super::Point2;
use crate::geometry::Rect;

/// One of the four half-planes bounding a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Bottom,
    Top,
}

impl Edge {
    /// Order in which violated edges are clipped against.
    ///
    /// A point outside a corner violates two edges; the first one in this
    /// list is resolved first.
    pub const PRIORITY: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Bottom, Edge::Top];

    /// Bit representing this edge inside an [`Outcode`].
    #[must_use]
    pub const fn bit(self) -> u8 {
        match self {
            Edge::Left => 0b0001,
            Edge::Right => 0b0010,
            Edge::Bottom => 0b0100,
            Edge::Top => 0b1000,
        }
    }
}

/// Region code of a point relative to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Outcode(u8);

impl Outcode {
    /// Code for a point inside the cell or on its boundary.
    pub const INSIDE: Outcode = Outcode(0);

    /// Returns `true` if no edge is violated.
    #[inline]
    #[must_use]
    pub const fn is_inside(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if `edge` is violated.
    #[inline]
    #[must_use]
    pub const fn contains(self, edge: Edge) -> bool {
        self.0 & edge.bit() != 0
    }

    /// Returns `true` if both codes share a violated edge.
    #[inline]
    #[must_use]
    pub const fn intersects(self, other: Outcode) -> bool {
        self.0 & other.0 != 0
    }

    /// Violated edges in [`Edge::PRIORITY`] order.
    pub fn edges(self) -> impl Iterator<Item = Edge> {
        Edge::PRIORITY.into_iter().filter(move |&e| self.contains(e))
    }

    /// First violated edge in [`Edge::PRIORITY`] order.
    #[must_use]
    pub fn first_edge(self) -> Option<Edge> {
        self.edges().next()
    }
}

impl From<Edge> for Outcode {
    fn from(edge: Edge) -> Self {
        Outcode(edge.bit())
    }
}

impl BitOr for Outcode {
    type Output = Outcode;

    fn bitor(self, rhs: Self) -> Self::Output {
        Outcode(self.0 | rhs.0)
    }
}

/// Classifies `point` against the closed rectangle `rect`.
///
/// Points on the boundary are inside. Coordinates must be finite.
#[inline]
#[must_use]
pub fn classify(point: &Point2, rect: &Rect) -> Outcode {
    let mut code = 0;
    if point.x < rect.xmin() {
        code |= Edge::Left.bit();
    } else if point.x > rect.xmax() {
        code |= Edge::Right.bit();
    }
    if point.y < rect.ymin() {
        code |= Edge::Bottom.bit();
    } else if point.y > rect.ymax() {
        code |= Edge::Top.bit();
    }
    Outcode(code)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit_cell() -> Rect {
        Rect::new(0.0, 10.0, 0.0, 10.0).unwrap()
    }

    #[test]
    fn interior_point_is_inside() {
        assert!(classify(&Point2::new(5.0, 5.0), &unit_cell()).is_inside());
    }

    #[test]
    fn boundary_points_are_inside() {
        let rect = unit_cell();
        for p in [
            Point2::new(0.0, 5.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 0.0),
            Point2::new(5.0, 10.0),
            Point2::new(10.0, 10.0),
        ] {
            assert_eq!(classify(&p, &rect), Outcode::INSIDE, "{p:?}");
        }
    }

    #[test]
    fn single_edge_regions() {
        let rect = unit_cell();
        assert_eq!(classify(&Point2::new(-1.0, 5.0), &rect), Outcode::from(Edge::Left));
        assert_eq!(classify(&Point2::new(11.0, 5.0), &rect), Outcode::from(Edge::Right));
        assert_eq!(classify(&Point2::new(5.0, -1.0), &rect), Outcode::from(Edge::Bottom));
        assert_eq!(classify(&Point2::new(5.0, 11.0), &rect), Outcode::from(Edge::Top));
    }

    #[test]
    fn corner_region_sets_two_bits() {
        let code = classify(&Point2::new(-1.0, 11.0), &unit_cell());
        assert!(code.contains(Edge::Left));
        assert!(code.contains(Edge::Top));
        assert!(!code.contains(Edge::Right));
        assert!(!code.contains(Edge::Bottom));
    }

    #[test]
    fn first_edge_follows_priority() {
        let code = Outcode::from(Edge::Top) | Outcode::from(Edge::Right);
        assert_eq!(code.first_edge(), Some(Edge::Right));
        let code = Outcode::from(Edge::Bottom) | Outcode::from(Edge::Left);
        assert_eq!(code.first_edge(), Some(Edge::Left));
        assert_eq!(Outcode::INSIDE.first_edge(), None);
    }

    #[test]
    fn edges_iterates_in_priority_order() {
        let code = Outcode::from(Edge::Top) | Outcode::from(Edge::Left);
        assert_eq!(code.edges().collect::<Vec<_>>(), vec![Edge::Left, Edge::Top]);
        assert_eq!(Outcode::INSIDE.edges().count(), 0);
    }

    #[test]
    fn degenerate_rect_classifies_line() {
        let rect = Rect::new(0.0, 10.0, 0.0, 0.0).unwrap();
        assert!(classify(&Point2::new(5.0, 0.0), &rect).is_inside());
        assert_eq!(classify(&Point2::new(5.0, 1e-9), &rect), Outcode::from(Edge::Top));
    }
}

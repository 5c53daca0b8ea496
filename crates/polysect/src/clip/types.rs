//! Data carried between the clip phases.

use crate::geom2::Point;

/// One vertex of an augmented polygon.
///
/// - `is_intersection`: the point lies on the other operand's boundary
///   (an inserted crossing, or an original vertex touched by the other boundary).
/// - `is_inside`: inside-or-on the other operand, filled by `label_inside`.
/// - `jump`: index of the vertex with the same point in the other augmented
///   polygon, filled by `link_jumps`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabeledVertex {
    pub at: Point,
    pub is_intersection: bool,
    pub is_inside: bool,
    pub jump: Option<usize>,
}

impl LabeledVertex {
    pub fn vertex(at: Point, is_intersection: bool) -> Self {
        Self {
            at,
            is_intersection,
            is_inside: false,
            jump: None,
        }
    }

    pub fn crossing(at: Point) -> Self {
        Self::vertex(at, true)
    }
}

/// Boundary contacts of one operand against the other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeMarks {
    /// Per edge: contacts strictly between its endpoints, in discovery order.
    pub interior: Vec<Vec<Point>>,
    /// Per vertex: touched by the other boundary.
    pub at_vertex: Vec<bool>,
}

impl EdgeMarks {
    pub fn with_len(n: usize) -> Self {
        Self {
            interior: vec![Vec::new(); n],
            at_vertex: vec![false; n],
        }
    }

    pub fn crossing_count(&self) -> usize {
        self.interior.iter().map(Vec::len).sum()
    }
}

/// Result of marking two simple polygons against each other.
#[derive(Clone, Debug, PartialEq)]
pub struct Marks {
    pub a: EdgeMarks,
    pub b: EdgeMarks,
    /// No contact lies strictly inside an edge of either operand. Also true
    /// when the boundaries never meet.
    pub degenerate: bool,
}

//! Error types for validated entry points.

use std::fmt;

use thiserror::Error;

/// Which argument of a two-operand call an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand {
    A,
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => f.write_str("A"),
            Operand::B => f.write_str("B"),
        }
    }
}

/// Errors reported by `try_intersect_polygons`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClipError {
    /// Fewer than 3 vertices.
    #[error("polygon {operand} has {len} vertices; at least 3 are required")]
    InvalidPolygon { operand: Operand, len: usize },

    /// Edge `edge` has coincident endpoints under the point policy.
    #[error("polygon {operand} has a zero-length edge at index {edge}")]
    DegenerateEdge { operand: Operand, edge: usize },

    /// A coordinate is NaN or infinite.
    #[error("polygon {operand} has a non-finite coordinate at vertex {vertex}")]
    NonFiniteVertex { operand: Operand, vertex: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },
}

pub type ClipResult<T> = Result<T, ClipError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_operand() {
        let e = ClipError::InvalidPolygon {
            operand: Operand::B,
            len: 2,
        };
        assert_eq!(
            e.to_string(),
            "polygon B has 2 vertices; at least 3 are required"
        );
        let e = ClipError::DegenerateEdge {
            operand: Operand::A,
            edge: 4,
        };
        assert!(e.to_string().contains("index 4"));
    }
}

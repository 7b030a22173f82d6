use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::LATTICE_TOLERANCE;

/// A single point symmetry operation: a real orthogonal Cartesian matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymOp {
    /// Orthogonal rotation matrix with determinant ±1
    pub matrix: Matrix3<f64>,
}

impl SymOp {
    /// Create a new symmetry operation
    pub fn new(matrix: Matrix3<f64>) -> Self {
        Self { matrix }
    }

    /// Create identity operation
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Apply the operation to a Cartesian point
    pub fn apply(&self, point: Vector3<f64>) -> Vector3<f64> {
        self.matrix * point
    }

    /// Determinant of the operation (+1 proper, -1 improper)
    pub fn determinant(&self) -> f64 {
        self.matrix.determinant()
    }

    /// Inverse operation. Orthogonal matrices invert by transposition.
    pub fn inverse(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    /// Compose two operations (self applied after other)
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Check if this is the identity operation
    pub fn is_identity(&self) -> bool {
        (self.matrix - Matrix3::identity()).amax() < LATTICE_TOLERANCE
    }

    /// Check orthogonality within a tolerance
    pub fn is_orthogonal(&self, tol: f64) -> bool {
        (self.matrix.transpose() * self.matrix - Matrix3::identity()).amax() < tol
    }

    /// Integer representation of the operation in the given lattice basis,
    /// `round(U⁻¹ · g · U)`.
    ///
    /// An operation that maps the lattice onto itself acts on fractional
    /// coordinates as an integer matrix; rounding absorbs the floating-point
    /// noise of the conjugation. The caller must ensure the operation really
    /// belongs to the lattice point group, otherwise rounding silently
    /// produces a wrong matrix.
    pub fn integer_rep(&self, basis: &Matrix3<f64>) -> Matrix3<i64> {
        let inverse = basis
            .try_inverse()
            .expect("lattice basis must be invertible");
        (inverse * self.matrix * basis).map(|x| x.round() as i64)
    }
}

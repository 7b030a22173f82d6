use anyhow::{bail, Error};
use log::debug;
use nalgebra::Matrix3;
use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::supercell::hnf::determinant3;
use crate::symmetries::symmetry_operations::SymOp;

/// The finite group of orthogonal transformations mapping a lattice to itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointGroup {
    ops: Vec<SymOp>,
}

impl PointGroup {
    /// Create a point group from explicit operations
    pub fn new(ops: Vec<SymOp>) -> Self {
        Self { ops }
    }

    /// The trivial group containing only the identity
    pub fn trivial() -> Self {
        Self {
            ops: vec![SymOp::identity()],
        }
    }

    /// Derive the point group of a lattice from its basis matrix.
    ///
    /// Every operation that maps the lattice onto itself acts on fractional
    /// coordinates as an integer matrix `W` with `det W = ±1`. For a reduced
    /// basis the entries of `W` lie in `{-1, 0, 1}`, so the search scans all
    /// such candidates and keeps those whose Cartesian form `U·W·U⁻¹` is
    /// orthogonal within `tol`. All constructors in [`crate::lattice`]
    /// produce bases in reduced form.
    pub fn from_lattice(direct: &Matrix3<f64>, tol: f64) -> Result<Self, Error> {
        let inverse = match direct.try_inverse() {
            Some(inverse) => inverse,
            None => bail!("Cannot derive a point group from a singular basis matrix."),
        };

        let mut ops = Vec::new();
        for code in 0..3usize.pow(9) {
            let candidate = decode_candidate(code);

            // Unimodular candidates only
            if determinant3(&candidate).abs() != 1 {
                continue;
            }

            let cartesian = direct * candidate.map(|x| x as f64) * inverse;
            let op = SymOp::new(cartesian);
            if op.is_orthogonal(tol) {
                ops.push(op);
            }
        }

        debug!("derived point group of order {}", ops.len());
        Ok(Self { ops })
    }

    /// Number of operations in the group
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the group is empty
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over the operations
    pub fn iter(&self) -> std::slice::Iter<'_, SymOp> {
        self.ops.iter()
    }

    /// Get all operations
    pub fn operations(&self) -> &Vec<SymOp> {
        &self.ops
    }
}

impl Index<usize> for PointGroup {
    type Output = SymOp;

    fn index(&self, index: usize) -> &SymOp {
        &self.ops[index]
    }
}

/// Decode a base-3 candidate code into a 3×3 matrix with entries in {-1, 0, 1}
fn decode_candidate(code: usize) -> Matrix3<i64> {
    let mut candidate = Matrix3::zeros();
    let mut rest = code;
    for slot in 0..9 {
        candidate[(slot / 3, slot % 3)] = (rest % 3) as i64 - 1;
        rest /= 3;
    }
    candidate
}

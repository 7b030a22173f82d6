use anyhow::{bail, Error};
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::symmetries::point_groups::PointGroup;

/// A 3D Bravais lattice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lattice3D {
    /// Real-space basis vectors (columns).
    pub direct: Matrix3<f64>,
    /// Reciprocal-space basis vectors (columns).
    pub reciprocal: Matrix3<f64>,
    /// Unit cell volume = det(direct).
    pub cell_volume: f64,
    /// Metric tensor G = A^T * A.
    pub metric: Matrix3<f64>,
    /// Tolerance for float comparisons.
    pub tol: f64,
    /// Point group of the lattice.
    pub point_group: PointGroup,
}

impl Lattice3D {
    /// Construct a new 3D lattice from a real-space basis.
    pub fn new(direct: Matrix3<f64>, tol: f64) -> Result<Self, Error> {
        // 1) Reject degenerate bases
        let cell_volume = direct.determinant();
        if cell_volume.abs() < tol {
            bail!("Determinant too small. Basis vectors are either too small or linearly dependent.");
        }

        // 2) Compute metric tensor
        let metric = direct.transpose() * direct;

        // 3) Compute reciprocal basis (2π-convention)
        let reciprocal = {
            let inverse = direct
                .try_inverse()
                .expect("determinant check guarantees invertibility");
            (2.0 * PI) * inverse.transpose()
        };

        // 4) Derive the point group
        let point_group = PointGroup::from_lattice(&direct, tol)?;

        Ok(Lattice3D {
            direct,
            reciprocal,
            cell_volume,
            metric,
            tol,
            point_group,
        })
    }

    /// Convert fractional (u,v,w) coords → cartesian.
    pub fn frac_to_cart(&self, v_frac: Vector3<f64>) -> Vector3<f64> {
        self.direct * v_frac
    }

    /// Convert cartesian coords → fractional (u,v,w).
    pub fn cart_to_frac(&self, v_cart: Vector3<f64>) -> Vector3<f64> {
        self.direct
            .try_inverse()
            .expect("lattice basis is invertible by construction")
            * v_cart
    }

    /// Get lattice parameters: a, b, c (lengths)
    pub fn lattice_parameters(&self) -> (f64, f64, f64) {
        let a = self.metric[(0, 0)].sqrt();
        let b = self.metric[(1, 1)].sqrt();
        let c = self.metric[(2, 2)].sqrt();
        (a, b, c)
    }

    /// Get lattice angles: α, β, γ (in radians)
    pub fn lattice_angles(&self) -> (f64, f64, f64) {
        let (a, b, c) = self.lattice_parameters();

        // α = angle between b and c vectors
        let alpha = (self.metric[(1, 2)] / (b * c)).acos();
        // β = angle between a and c vectors
        let beta = (self.metric[(0, 2)] / (a * c)).acos();
        // γ = angle between a and b vectors
        let gamma = (self.metric[(0, 1)] / (a * b)).acos();

        (alpha, beta, gamma)
    }

    /// Get the primitive vectors as separate Vector3 objects
    pub fn primitive_vectors(&self) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) {
        (
            self.direct.column(0).into(),
            self.direct.column(1).into(),
            self.direct.column(2).into(),
        )
    }

    /// Get the unit cell volume
    pub fn cell_volume(&self) -> f64 {
        self.cell_volume
    }

    /// Get the metric tensor
    pub fn metric_tensor(&self) -> &Matrix3<f64> {
        &self.metric
    }

    /// Get the tolerance used for floating point comparisons
    pub fn tolerance(&self) -> f64 {
        self.tol
    }

    /// Get the point group of the lattice
    pub fn point_group(&self) -> &PointGroup {
        &self.point_group
    }

    /// Get direct lattice basis vectors
    pub fn direct_basis(&self) -> &Matrix3<f64> {
        &self.direct
    }

    /// Get reciprocal lattice basis vectors
    pub fn reciprocal_basis(&self) -> &Matrix3<f64> {
        &self.reciprocal
    }
}

use nalgebra::Matrix3;

use crate::config::LATTICE_TOLERANCE;
use crate::lattice::lattice3d::Lattice3D;

/// Standard lattice construction utilities for common 3D lattices

/// Create a simple cubic lattice with given lattice parameter
pub fn simple_cubic_lattice(a: f64) -> Result<Lattice3D, anyhow::Error> {
    let direct = Matrix3::new(a, 0.0, 0.0, 0.0, a, 0.0, 0.0, 0.0, a);
    Lattice3D::new(direct, LATTICE_TOLERANCE)
}

/// Create a face-centered cubic lattice (primitive cell) with given
/// conventional lattice parameter
pub fn face_centered_cubic_lattice(a: f64) -> Result<Lattice3D, anyhow::Error> {
    let direct = Matrix3::new(
        0.0,
        a / 2.0,
        a / 2.0,
        a / 2.0,
        0.0,
        a / 2.0,
        a / 2.0,
        a / 2.0,
        0.0,
    );
    Lattice3D::new(direct, LATTICE_TOLERANCE)
}

/// Create a body-centered cubic lattice (primitive cell) with given
/// conventional lattice parameter
pub fn body_centered_cubic_lattice(a: f64) -> Result<Lattice3D, anyhow::Error> {
    let direct = Matrix3::new(
        -a / 2.0,
        a / 2.0,
        a / 2.0,
        a / 2.0,
        -a / 2.0,
        a / 2.0,
        a / 2.0,
        a / 2.0,
        -a / 2.0,
    );
    Lattice3D::new(direct, LATTICE_TOLERANCE)
}

/// Create a hexagonal lattice with given lattice parameters
pub fn hexagonal_lattice(a: f64, c: f64) -> Result<Lattice3D, anyhow::Error> {
    let direct = Matrix3::new(
        a,
        -a / 2.0,
        0.0,
        0.0,
        a * 3.0_f64.sqrt() / 2.0,
        0.0,
        0.0,
        0.0,
        c,
    );
    Lattice3D::new(direct, LATTICE_TOLERANCE)
}

/// Create a tetragonal lattice with given lattice parameters
pub fn tetragonal_lattice(a: f64, c: f64) -> Result<Lattice3D, anyhow::Error> {
    let direct = Matrix3::new(a, 0.0, 0.0, 0.0, a, 0.0, 0.0, 0.0, c);
    Lattice3D::new(direct, LATTICE_TOLERANCE)
}

/// Create an orthorhombic lattice with given lattice parameters
pub fn orthorhombic_lattice(a: f64, b: f64, c: f64) -> Result<Lattice3D, anyhow::Error> {
    let direct = Matrix3::new(a, 0.0, 0.0, 0.0, b, 0.0, 0.0, 0.0, c);
    Lattice3D::new(direct, LATTICE_TOLERANCE)
}

/// Utility functions for supercell construction

/// Build the supercell of a lattice under an integer transformation matrix.
/// The supercell basis is S = U·M, so |det M| supercell volumes tile it.
pub fn make_supercell(
    lattice: &Lattice3D,
    transformation: &Matrix3<i64>,
) -> Result<Lattice3D, anyhow::Error> {
    let supercell_direct = lattice.direct_basis() * transformation.map(|x| x as f64);
    Lattice3D::new(supercell_direct, lattice.tolerance())
}

/// Create a diagonal supercell from a lattice with given multiplicities
pub fn create_supercell(
    lattice: &Lattice3D,
    n1: i64,
    n2: i64,
    n3: i64,
) -> Result<Lattice3D, anyhow::Error> {
    let transformation = Matrix3::new(n1, 0, 0, 0, n2, 0, 0, 0, n3);
    make_supercell(lattice, &transformation)
}

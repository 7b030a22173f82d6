// Lattice module: Contains the 3D Bravais lattice structure and related functionality
// This module provides the unit cell representation and standard lattice constructors

// ======================== MODULE DECLARATIONS ========================
pub mod construction;
pub mod lattice3d;

// Test modules
mod _tests_lattice3d;

// ======================== 3D LATTICE STRUCTURE ========================
pub use lattice3d::Lattice3D; // struct - 3D Bravais lattice
// Lattice3D impl methods:
//   new(direct: Matrix3<f64>, tol: f64) -> Result<Self>            - constructs 3D lattice from basis vectors
//   frac_to_cart(&self, v_frac: Vector3<f64>) -> Vector3<f64>      - converts fractional to cartesian coordinates
//   cart_to_frac(&self, v_cart: Vector3<f64>) -> Vector3<f64>      - converts cartesian to fractional coordinates
//   lattice_parameters(&self) -> (f64, f64, f64)                   - returns lattice constants a, b, c
//   lattice_angles(&self) -> (f64, f64, f64)                       - returns lattice angles α, β, γ in radians
//   primitive_vectors(&self) -> (Vector3<f64>, Vector3<f64>, Vector3<f64>) - returns primitive basis vectors a, b, c
//   cell_volume(&self) -> f64                                      - returns unit cell volume
//   metric_tensor(&self) -> &Matrix3<f64>                          - returns metric tensor G = A^T * A
//   tolerance(&self) -> f64                                        - returns floating point tolerance
//   point_group(&self) -> &PointGroup                              - returns the lattice point group
//   direct_basis(&self) -> &Matrix3<f64>                           - returns direct lattice basis matrix
//   reciprocal_basis(&self) -> &Matrix3<f64>                       - returns reciprocal lattice basis matrix

// ======================== LATTICE CONSTRUCTION UTILITIES ========================
pub use construction::{
    // === 3D LATTICE CONSTRUCTORS ===
    simple_cubic_lattice,           // fn(a: f64) -> Result<Lattice3D> - creates simple cubic lattice with parameter a
    face_centered_cubic_lattice,    // fn(a: f64) -> Result<Lattice3D> - creates face-centered cubic lattice
    body_centered_cubic_lattice,    // fn(a: f64) -> Result<Lattice3D> - creates body-centered cubic lattice
    hexagonal_lattice,              // fn(a: f64, c: f64) -> Result<Lattice3D> - creates hexagonal lattice
    tetragonal_lattice,             // fn(a: f64, c: f64) -> Result<Lattice3D> - creates tetragonal lattice
    orthorhombic_lattice,           // fn(a: f64, b: f64, c: f64) -> Result<Lattice3D> - creates orthorhombic lattice

    // === SUPERCELL CONSTRUCTION ===
    make_supercell,                 // fn(lattice: &Lattice3D, transformation: &Matrix3<i64>) -> Result<Lattice3D> - builds supercell S = U·M
    create_supercell,               // fn(lattice: &Lattice3D, n1: i64, n2: i64, n3: i64) -> Result<Lattice3D> - builds diagonal supercell
};

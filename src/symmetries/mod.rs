// Symmetries module: Contains point symmetry operations and point groups
// This module provides crystallographic point symmetry analysis for 3D lattices

// ======================== MODULE DECLARATIONS ========================
pub mod point_groups;
pub mod symmetry_operations;

// Test modules
mod _tests_point_groups;

// ======================== SYMMETRY OPERATIONS ========================
pub use symmetry_operations::SymOp; // struct - point symmetry operation (orthogonal Cartesian matrix)
// SymOp impl methods:
//   new(matrix: Matrix3<f64>) -> Self                              - creates operation from matrix
//   identity() -> Self                                             - creates identity operation
//   apply(&self, point: Vector3<f64>) -> Vector3<f64>              - applies operation to point
//   determinant(&self) -> f64                                      - returns ±1 (proper/improper)
//   inverse(&self) -> Self                                         - returns inverse operation
//   compose(&self, other: &Self) -> Self                           - composes two operations
//   is_identity(&self) -> bool                                     - checks for the identity
//   is_orthogonal(&self, tol: f64) -> bool                         - checks orthogonality within tolerance
//   integer_rep(&self, basis: &Matrix3<f64>) -> Matrix3<i64>       - fractional representation round(U⁻¹·g·U)

// ======================== POINT GROUPS ========================
pub use point_groups::PointGroup; // struct - finite collection of lattice point symmetry operations
// PointGroup impl methods:
//   new(ops: Vec<SymOp>) -> Self                                   - creates group from explicit operations
//   trivial() -> Self                                              - creates the identity-only group
//   from_lattice(direct: &Matrix3<f64>, tol: f64) -> Result<Self>  - derives the point group of a lattice basis
//   len(&self) -> usize                                            - number of operations
//   iter(&self) -> Iter<SymOp>                                     - iterates over operations
//   operations(&self) -> &Vec<SymOp>                               - returns all operations

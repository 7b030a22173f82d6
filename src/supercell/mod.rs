// Supercell module: Contains the HNF counters and the unique-supercell enumerator
// This module provides exhaustive and symmetry-filtered enumeration of supercell matrices

// ======================== MODULE DECLARATIONS ========================
pub mod enumerator;
pub mod hermite_counter;
pub mod hnf;
pub mod min_volume;
pub mod vector_counter;

mod _tests_hnf;

// ======================== MIXED-RADIX COUNTING ========================
pub use vector_counter::VectorCounter; // struct - bounded little-endian mixed-radix odometer
// VectorCounter impl methods:
//   new(bounds: DVector<i64>) -> Self                              - creates counter at all zeros with exclusive bounds
//   current(&self) -> &DVector<i64>                                - current digit values
//   valid(&self) -> bool                                           - false once every state was visited
//   advance(&mut self) -> bool                                     - steps to the next state, false on rollover
//   reset(&mut self)                                               - restarts from all zeros

// ======================== HNF ENUMERATION AT FIXED DETERMINANT ========================
pub use hermite_counter::{
    HermiteCounter,      // struct - counter over all n×n HNF matrices in a determinant range
    expand_dims,         // fn(hermite_mat: &DMatrix<i64>, active_dims: &DVector<i64>) -> DMatrix<i64> - embeds an HNF into a larger dimension
    next_spill_position, // fn(diagonal: &mut DVector<i64>, position: usize) -> Option<usize> - steps the diagonal factorization walk
    spill_factor,        // fn(diagonal: &mut DVector<i64>, position: usize, attempt: i64) -> usize - spills one factor to the right neighbor
    upper_size,          // fn(dim: usize) -> usize - number of strict upper triangle elements
    upper_tri_counter,   // fn(diagonal: &DVector<i64>) -> VectorCounter - odometer over the upper triangle of a diagonal
    zip_matrix,          // fn(diagonal: &DVector<i64>, upper_tri: &DVector<i64>) -> DMatrix<i64> - assembles diagonal and triangle into a matrix
};
// HermiteCounter impl methods:
//   new(det: i64, dim: usize) -> Result<Self>                      - counter over one determinant
//   new_range(low: i64, high: i64, dim: usize) -> Result<Self>     - counter over a determinant range
//   current(&self) -> DMatrix<i64>                                 - assembles the current matrix
//   determinant(&self) -> i64                                      - current determinant
//   diagonal(&self) -> &DVector<i64>                               - current diagonal values
//   valid(&self) -> bool                                           - false once the last matrix was counted
//   advance(&mut self) -> &mut Self                                - steps to the next HNF matrix
//   reset_current(&mut self) / reset_full(&mut self)               - restarts the current determinant / the whole counter
//   next_determinant(&mut self)                                    - skips the rest of the current determinant

// ======================== HNF DECOMPOSITION ========================
pub use hnf::{
    adjugate3,           // fn(m: &Matrix3<i64>) -> Matrix3<i64> - integer adjugate, m·adj(m) = det(m)·I
    determinant3,        // fn(m: &Matrix3<i64>) -> i64 - exact integer determinant
    hermite_normal_form, // fn(m: &Matrix3<i64>) -> Result<(Matrix3<i64>, Matrix3<i64>)> - column HNF (H, V) with M·V = H
    hnf_lex_cmp,         // fn(a: &Matrix3<i64>, b: &Matrix3<i64>) -> Ordering - lexicographic order on (h00, h11, h22, h12, h02, h01)
};

// ======================== SYMMETRY-UNIQUE SUPERCELL ENUMERATION ========================
pub use enumerator::{
    SupercellEnumerator, // struct - enumeration context (unit cell, point group, volume window)
    SupercellIterator,   // struct - forward iterator over symmetry-unique supercell matrices
};
// SupercellEnumerator impl methods:
//   new(unit: Lattice3D, tol: f64, begin: i64, end: i64) -> Result<Self>        - derives the point group from the unit lattice
//   with_point_group(unit: Lattice3D, group: PointGroup, begin: i64, end: i64) -> Result<Self> - uses explicit operations
//   begin(&self) / end(&self) / iterator_at(&self, volume: i64)                 - vends iterators
// SupercellIterator impl methods:
//   matrix(&self) -> &Matrix3<i64>                                 - current transformation matrix
//   volume(&self) -> i64                                           - current supercell volume
//   supercell(&self) -> &Lattice3D                                 - lazily built supercell lattice
//   advance(&mut self) -> &mut Self                                - steps to the next unique supercell

// ======================== MINIMUM VOLUME ENFORCEMENT ========================
pub use min_volume::{
    canonical_hnf,            // fn(t: &Matrix3<i64>, unit: &Lattice3D) -> Result<(Matrix3<i64>, SymOp)> - canonical orbit representative
    canonical_hnf_with_group, // fn(t: &Matrix3<i64>, basis: &Matrix3<f64>, group: &PointGroup) -> Result<(Matrix3<i64>, SymOp)>
    enforce_min_volume,       // fn(unit: &Lattice3D, t: &Matrix3<i64>, group: &PointGroup, volume: i64, fix_shape: bool) -> Result<Matrix3<i64>>
};

// Constants

// Tolerances
pub const LATTICE_TOLERANCE: f64 = 1e-10; // For basis matrix checks and float comparisons
pub const SYMMETRY_TOLERANCE: f64 = 1e-5; // For point group orthogonality detection

use anyhow::{bail, Error};
use nalgebra::{DMatrix, DVector};

use crate::supercell::vector_counter::VectorCounter;

/// Counter over every square integer matrix in Hermite normal form with a
/// determinant inside a chosen range.
///
/// For each determinant `d` the counter sweeps two nested cycles:
/// - the diagonal, through every ordered factorization of `d`, starting at
///   `(d, 1, …, 1)` and ending at `(1, …, 1, d)`;
/// - for each diagonal, the strict upper triangle, where the entry in row
///   `i` runs through `[0, diagonal[i])`.
///
/// Successive diagonals are produced by spilling a factor of the element at
/// the current position into its right neighbor. When no factor can be
/// spilled anymore the trailing elements are collected back and a larger
/// factor is attempted; once the leading element has no larger factor the
/// determinant is exhausted and the counter jumps to the next one.
#[derive(Debug, Clone)]
pub struct HermiteCounter {
    /// Diagonal index currently being factored
    pos: usize,
    /// Lowest determinant of the sweep (beginning of the counter)
    low_det: i64,
    /// Highest determinant of the sweep (end of the counter)
    high_det: i64,
    /// Diagonal element values
    diagonal: DVector<i64>,
    /// Odometer over the unrolled strict upper triangle
    upper_tri: VectorCounter,
    /// False once the last matrix has been counted
    valid: bool,
}

impl HermiteCounter {
    /// Create a counter over all HNF matrices with determinants in
    /// `[low_det, high_det]` and the given dimension
    pub fn new_range(low_det: i64, high_det: i64, dim: usize) -> Result<Self, Error> {
        if dim < 1 {
            bail!("HermiteCounter requires a positive matrix dimension.");
        }
        if low_det < 1 {
            bail!("HermiteCounter requires a positive starting determinant.");
        }
        if high_det < low_det {
            bail!("HermiteCounter end determinant cannot be smaller than its start.");
        }

        let mut diagonal = DVector::from_element(dim, 1);
        diagonal[0] = low_det;
        let upper_tri = upper_tri_counter(&diagonal);

        Ok(Self {
            pos: 0,
            low_det,
            high_det,
            diagonal,
            upper_tri,
            valid: true,
        })
    }

    /// Create a counter over all HNF matrices of a single determinant
    pub fn new(det: i64, dim: usize) -> Result<Self, Error> {
        Self::new_range(det, det, dim)
    }

    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.diagonal.len()
    }

    /// Diagonal index currently being factored
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Current determinant
    pub fn determinant(&self) -> i64 {
        self.diagonal.iter().product()
    }

    /// Current diagonal element values
    pub fn diagonal(&self) -> &DVector<i64> {
        &self.diagonal
    }

    /// False once the counter has stepped past its last matrix
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// Assemble the current matrix
    pub fn current(&self) -> DMatrix<i64> {
        zip_matrix(&self.diagonal, self.upper_tri.current())
    }

    /// Step to the next HNF matrix.
    ///
    /// The upper triangle varies fastest, then the diagonal, then the
    /// determinant; when the last matrix of `high_det` has been visited the
    /// counter becomes invalid.
    pub fn advance(&mut self) -> &mut Self {
        if !self.valid {
            return self;
        }
        if self.upper_tri.advance() {
            return self;
        }
        match next_spill_position(&mut self.diagonal, self.pos) {
            Some(pos) => {
                self.pos = pos;
                self.upper_tri = upper_tri_counter(&self.diagonal);
            }
            None => {
                let det = self.determinant();
                if det < self.high_det {
                    self.jump_to_determinant(det + 1);
                } else {
                    self.valid = false;
                }
            }
        }
        self
    }

    /// Restart the sweep of the current determinant from its initial diagonal
    pub fn reset_current(&mut self) {
        self.jump_to_determinant(self.determinant());
        self.valid = true;
    }

    /// Restart the whole counter at its lowest determinant
    pub fn reset_full(&mut self) {
        self.jump_to_determinant(self.low_det);
        self.valid = true;
    }

    /// Skip the remaining matrices of the current determinant and start on
    /// the next one. Invalidates the counter at the last determinant.
    pub fn next_determinant(&mut self) {
        let det = self.determinant();
        if det < self.high_det {
            self.jump_to_determinant(det + 1);
        } else {
            self.valid = false;
        }
    }

    /// Install the initial state for a determinant: diagonal
    /// `(det, 1, …, 1)`, zero upper triangle, position 0
    fn jump_to_determinant(&mut self, det: i64) {
        self.diagonal.fill(1);
        self.diagonal[0] = det;
        self.pos = 0;
        self.upper_tri = upper_tri_counter(&self.diagonal);
    }
}

/// Number of elements in the strict upper triangle of an `n×n` matrix
pub fn upper_size(dim: usize) -> usize {
    dim * (dim - 1) / 2
}

/// Build the odometer for the strict upper triangle of a diagonal: the slot
/// in row `i` counts through `[0, diagonal[i])`, slots ordered row-major
pub fn upper_tri_counter(diagonal: &DVector<i64>) -> VectorCounter {
    let dim = diagonal.len();
    let mut bounds = DVector::from_element(upper_size(dim), 1);
    let mut slot = 0;
    for row in 0..dim {
        for _column in (row + 1)..dim {
            bounds[slot] = diagonal[row];
            slot += 1;
        }
    }
    VectorCounter::new(bounds)
}

/// Assemble a diagonal and an unrolled strict upper triangle into a matrix
pub fn zip_matrix(diagonal: &DVector<i64>, upper_tri: &DVector<i64>) -> DMatrix<i64> {
    let dim = diagonal.len();
    assert_eq!(
        upper_tri.len(),
        upper_size(dim),
        "upper triangle length must match the matrix dimension"
    );

    let mut matrix = DMatrix::zeros(dim, dim);
    let mut slot = 0;
    for row in 0..dim {
        matrix[(row, row)] = diagonal[row];
        for column in (row + 1)..dim {
            matrix[(row, column)] = upper_tri[slot];
            slot += 1;
        }
    }
    matrix
}

/// Embed an `m×m` HNF matrix into a larger one.
///
/// Rows and columns flagged in `active_dims` receive the entries of
/// `hermite_mat` in order; every other diagonal element becomes 1 and the
/// rest stays zero. Useful for treating 2D supercells as 3D ones.
pub fn expand_dims(hermite_mat: &DMatrix<i64>, active_dims: &DVector<i64>) -> DMatrix<i64> {
    let dim = active_dims.len();
    let active: Vec<usize> = (0..dim).filter(|&i| active_dims[i] != 0).collect();
    assert_eq!(
        active.len(),
        hermite_mat.nrows(),
        "active dimension count must match the embedded matrix"
    );

    let mut expanded = DMatrix::identity(dim, dim);
    for row in 0..hermite_mat.nrows() {
        for column in 0..hermite_mat.ncols() {
            expanded[(active[row], active[column])] = hermite_mat[(row, column)];
        }
    }
    expanded
}

/// Spill a factor of `diagonal[position]` into its right neighbor, keeping
/// the diagonal product fixed. `attempt` is the smallest factor to try; the
/// chosen factor is the smallest divisor of `diagonal[position]` at least
/// that large. Returns the new position.
pub fn spill_factor(diagonal: &mut DVector<i64>, position: usize, attempt: i64) -> usize {
    debug_assert!(position < diagonal.len() - 1);
    debug_assert!(diagonal[position] > 1);
    debug_assert!(diagonal[position + 1] == 1);
    debug_assert!(attempt <= diagonal[position]);

    let mut factor = attempt;
    while diagonal[position] % factor != 0 {
        factor += 1;
    }

    diagonal[position] /= factor;
    diagonal[position + 1] = factor;
    position + 1
}

/// Step the diagonal to the next ordered factorization with the same
/// product.
///
/// Returns the new position, or None only once every factorization has been
/// visited. A None return guarantees the diagonal has been merged back to
/// its initial state `(d, 1, …, 1)`, so the caller reads the correct
/// determinant when deciding what comes next.
pub fn next_spill_position(diagonal: &mut DVector<i64>, position: usize) -> Option<usize> {
    let dim = diagonal.len();
    if dim < 2 {
        return None;
    }

    let mut position = position;
    let mut attempt: i64 = 2;

    if position == dim - 1 {
        // Backtrack: collect trailing factors until one can be spilled with
        // a larger attempt. Exhaustion is only decided at the leading
        // element, after every carry has been merged into it.
        loop {
            position -= 1;
            attempt = diagonal[position + 1] + 1;
            diagonal[position] *= diagonal[position + 1];
            diagonal[position + 1] = 1;
            if attempt <= diagonal[position] {
                break;
            }
            if position == 0 {
                return None;
            }
        }
    } else if diagonal[position] == 1 {
        // A bare 1 has no factor to spill; only the trivial factorization
        // of determinant 1 reaches this state.
        return None;
    }

    Some(spill_factor(diagonal, position, attempt))
}

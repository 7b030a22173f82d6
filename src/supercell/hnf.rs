use anyhow::{bail, Error};
use nalgebra::Matrix3;
use std::cmp::Ordering;

/// Field order used to compare two HNF matrices: diagonal first, then the
/// upper triangle from the slot closest to the diagonal outward.
pub const HNF_COMPARE_ORDER: [(usize, usize); 6] = [(0, 0), (1, 1), (2, 2), (1, 2), (0, 2), (0, 1)];

/// Compare two HNF matrices lexicographically on
/// `(h00, h11, h22, h12, h02, h01)`.
pub fn hnf_lex_cmp(a: &Matrix3<i64>, b: &Matrix3<i64>) -> Ordering {
    for (i, j) in HNF_COMPARE_ORDER {
        match a[(i, j)].cmp(&b[(i, j)]) {
            Ordering::Equal => continue,
            ordering => return ordering,
        }
    }
    Ordering::Equal
}

/// Exact determinant of a 3×3 integer matrix
pub fn determinant3(m: &Matrix3<i64>) -> i64 {
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}

/// Adjugate of a 3×3 integer matrix, so that `m * adjugate3(m) = det(m) · I`
pub fn adjugate3(m: &Matrix3<i64>) -> Matrix3<i64> {
    Matrix3::new(
        m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)],
        m[(0, 2)] * m[(2, 1)] - m[(0, 1)] * m[(2, 2)],
        m[(0, 1)] * m[(1, 2)] - m[(0, 2)] * m[(1, 1)],
        m[(1, 2)] * m[(2, 0)] - m[(1, 0)] * m[(2, 2)],
        m[(0, 0)] * m[(2, 2)] - m[(0, 2)] * m[(2, 0)],
        m[(0, 2)] * m[(1, 0)] - m[(0, 0)] * m[(1, 2)],
        m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)],
        m[(0, 1)] * m[(2, 0)] - m[(0, 0)] * m[(2, 1)],
        m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)],
    )
}

/// Hermite normal form decomposition of a non-singular integer matrix.
///
/// Returns `(H, V)` where `H` is upper triangular with a positive diagonal
/// and `0 <= H[(i, j)] < H[(i, i)]` for `i < j`, `V` is unimodular, and
/// `M · V = H`. The decomposition proceeds by unimodular column operations:
/// Euclidean elimination of the strict lower triangle from the bottom row
/// up, then reduction of the strict upper triangle against the diagonal.
pub fn hermite_normal_form(m: &Matrix3<i64>) -> Result<(Matrix3<i64>, Matrix3<i64>), Error> {
    if determinant3(m) == 0 {
        bail!("Hermite normal form requires a non-singular matrix.");
    }

    let mut h = *m;
    let mut v = Matrix3::<i64>::identity();

    for i in (0..3).rev() {
        // Zero row i to the left of the diagonal using columns 0..=i.
        // Earlier rounds already cleared rows below i in these columns, and
        // operations among them keep those rows clear.
        for j in 0..i {
            while h[(i, j)] != 0 {
                if h[(i, i)] == 0 {
                    swap_columns(&mut h, &mut v, i, j);
                    continue;
                }
                let quotient = h[(i, j)].div_euclid(h[(i, i)]);
                add_column_multiple(&mut h, &mut v, j, i, -quotient);
                if h[(i, j)] != 0 {
                    swap_columns(&mut h, &mut v, i, j);
                }
            }
        }
        if h[(i, i)] < 0 {
            negate_column(&mut h, &mut v, i);
        }
    }

    // Bring the strict upper triangle into [0, diagonal). Working from the
    // slot row downward keeps already-reduced rows untouched.
    for j in 1..3 {
        for i in (0..j).rev() {
            let quotient = h[(i, j)].div_euclid(h[(i, i)]);
            if quotient != 0 {
                add_column_multiple(&mut h, &mut v, j, i, -quotient);
            }
        }
    }

    Ok((h, v))
}

fn swap_columns(h: &mut Matrix3<i64>, v: &mut Matrix3<i64>, a: usize, b: usize) {
    h.swap_columns(a, b);
    v.swap_columns(a, b);
}

fn add_column_multiple(h: &mut Matrix3<i64>, v: &mut Matrix3<i64>, target: usize, source: usize, factor: i64) {
    for row in 0..3 {
        h[(row, target)] += factor * h[(row, source)];
        v[(row, target)] += factor * v[(row, source)];
    }
}

fn negate_column(h: &mut Matrix3<i64>, v: &mut Matrix3<i64>, column: usize) {
    for row in 0..3 {
        h[(row, column)] = -h[(row, column)];
        v[(row, column)] = -v[(row, column)];
    }
}

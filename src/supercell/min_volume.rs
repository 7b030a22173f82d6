use anyhow::{bail, Error};
use nalgebra::Matrix3;
use std::cmp::Ordering;

use crate::lattice::lattice3d::Lattice3D;
use crate::supercell::enumerator::SupercellEnumerator;
use crate::supercell::hnf::{adjugate3, determinant3, hermite_normal_form, hnf_lex_cmp};
use crate::symmetries::point_groups::PointGroup;
use crate::symmetries::symmetry_operations::SymOp;

/// Canonical Hermite normal form of a supercell matrix under the point
/// group of its unit lattice, and the operation that produces it.
///
/// The canonical form is the smallest HNF image of `transformation` over
/// the group, in the lexicographic order on `(h00, h11, h22, h12, h02, h01)`.
pub fn canonical_hnf(
    transformation: &Matrix3<i64>,
    unit: &Lattice3D,
) -> Result<(Matrix3<i64>, SymOp), Error> {
    canonical_hnf_with_group(transformation, unit.direct_basis(), unit.point_group())
}

/// As [`canonical_hnf`], with explicit point group operations
pub fn canonical_hnf_with_group(
    transformation: &Matrix3<i64>,
    basis: &Matrix3<f64>,
    point_group: &PointGroup,
) -> Result<(Matrix3<i64>, SymOp), Error> {
    if point_group.is_empty() {
        bail!("Cannot canonicalize against an empty point group.");
    }

    let mut best: Option<(Matrix3<i64>, SymOp)> = None;
    for op in point_group.iter() {
        let image = op.integer_rep(basis) * transformation;
        let (hnf, _) = hermite_normal_form(&image)?;
        let smaller = match best.as_ref() {
            None => true,
            Some((best_hnf, _)) => hnf_lex_cmp(&hnf, best_hnf) == Ordering::Less,
        };
        if smaller {
            best = Some((hnf, op.clone()));
        }
    }
    Ok(best.expect("the group has at least one operation"))
}

/// Return a transformation matrix `M` such that the supercell `T·M` has
/// volume at least `volume` and is symmetry-canonical among supercells of
/// `unit`.
///
/// With `fix_shape` set, `M` is `k·I` for the smallest integer `k` with
/// `k³·|det T| >= volume`. Otherwise the unique-supercell walk of `unit` is
/// started at the `T`-relative volume `⌈volume / |det T|⌉` and its first
/// canonical matrix is taken; when an explicit `T` other than the identity
/// is supplied, the combined transformation is canonicalized through
/// [`canonical_hnf_with_group`] whenever the achieving operation keeps the
/// quotient integral.
pub fn enforce_min_volume(
    unit: &Lattice3D,
    transformation: &Matrix3<i64>,
    point_group: &PointGroup,
    volume: i64,
    fix_shape: bool,
) -> Result<Matrix3<i64>, Error> {
    let init_volume = determinant3(transformation).abs();
    if init_volume == 0 {
        bail!("Cannot enforce a minimum volume on a singular transformation matrix.");
    }
    if volume < 1 {
        bail!("The minimum volume to enforce must be positive.");
    }

    if fix_shape {
        let mut scale: i64 = 1;
        while scale * scale * scale * init_volume < volume {
            scale += 1;
        }
        return Ok(Matrix3::identity() * scale);
    }

    // First canonical supercell at the T-relative volume
    let relative_volume = (volume + init_volume - 1) / init_volume;
    let enumerator = SupercellEnumerator::with_point_group(
        unit.clone(),
        point_group.clone(),
        relative_volume,
        relative_volume + 1,
    )?;
    let walked = *enumerator.begin().matrix();

    if *transformation == Matrix3::identity() {
        return Ok(walked);
    }

    let combined = transformation * walked;
    let (canonical, _) = canonical_hnf_with_group(&combined, unit.direct_basis(), point_group)?;
    match exact_quotient(transformation, &canonical) {
        Some(quotient) => Ok(quotient),
        None => Ok(walked),
    }
}

/// Solve `T·M = rhs` for an integer `M`, if one exists
fn exact_quotient(t: &Matrix3<i64>, rhs: &Matrix3<i64>) -> Option<Matrix3<i64>> {
    let det = determinant3(t);
    let numerator = adjugate3(t) * rhs;
    if numerator.iter().all(|entry| entry % det == 0) {
        Some(numerator.map(|entry| entry / det))
    } else {
        None
    }
}

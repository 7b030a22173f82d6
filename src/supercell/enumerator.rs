use anyhow::{bail, Error};
use log::debug;
use nalgebra::Matrix3;
use std::cell::OnceCell;
use std::cmp::Ordering;

use crate::lattice::construction::make_supercell;
use crate::lattice::lattice3d::Lattice3D;
use crate::supercell::hnf::{hermite_normal_form, hnf_lex_cmp};
use crate::symmetries::point_groups::PointGroup;

/// Enumeration context for the symmetry-unique supercells of a unit cell.
///
/// Holds the unit lattice, its point group and the volume window, and vends
/// iterators over the distinct supercell transformation matrices. Separate
/// iterators from the same enumerator are independent.
#[derive(Debug, Clone)]
pub struct SupercellEnumerator {
    /// The unit cell that is tiled to form supercells
    unit: Lattice3D,
    /// Point group used for the uniqueness test
    point_group: PointGroup,
    /// First volume to iterate over
    begin_volume: i64,
    /// Past-the-last volume to iterate over
    end_volume: i64,
}

impl SupercellEnumerator {
    /// Construct an enumerator, deriving the point group from the unit
    /// lattice at the given tolerance
    pub fn new(unit: Lattice3D, tol: f64, begin_volume: i64, end_volume: i64) -> Result<Self, Error> {
        let point_group = PointGroup::from_lattice(unit.direct_basis(), tol)?;
        Self::with_point_group(unit, point_group, begin_volume, end_volume)
    }

    /// Construct an enumerator with explicit point group operations
    pub fn with_point_group(
        unit: Lattice3D,
        point_group: PointGroup,
        begin_volume: i64,
        end_volume: i64,
    ) -> Result<Self, Error> {
        if begin_volume > end_volume {
            bail!("The beginning volume of the enumeration cannot be greater than the end volume.");
        }
        debug!(
            "supercell enumerator over volumes [{}, {}) with {} point group operations",
            begin_volume,
            end_volume,
            point_group.len()
        );
        Ok(Self {
            unit,
            point_group,
            begin_volume,
            end_volume,
        })
    }

    /// The unit cell being made into supercells
    pub fn unit(&self) -> &Lattice3D {
        &self.unit
    }

    /// The unit cell lattice
    pub fn lattice(&self) -> &Lattice3D {
        &self.unit
    }

    /// The point group used for the uniqueness test
    pub fn point_group(&self) -> &PointGroup {
        &self.point_group
    }

    /// First volume of the iteration
    pub fn begin_volume(&self) -> i64 {
        self.begin_volume
    }

    /// Past-the-last volume of the iteration
    pub fn end_volume(&self) -> i64 {
        self.end_volume
    }

    /// Iterator positioned at the beginning volume
    pub fn begin(&self) -> SupercellIterator<'_> {
        SupercellIterator::new(self, self.begin_volume)
    }

    /// Iterator positioned at the past-the-last volume
    pub fn end(&self) -> SupercellIterator<'_> {
        SupercellIterator::new(self, self.end_volume)
    }

    /// Iterator positioned at an arbitrary volume within the window
    pub fn iterator_at(&self, volume: i64) -> SupercellIterator<'_> {
        SupercellIterator::new(self, volume)
    }
}

/// Forward iterator over the symmetry-unique supercell matrices of a unit
/// cell, in order of strictly non-decreasing volume.
///
/// Every emitted matrix is in Hermite normal form with determinant equal to
/// the current volume, and is the smallest member of its point group orbit
/// under the lexicographic order on `(h00, h11, h22, h12, h02, h01)`.
#[derive(Debug, Clone)]
pub struct SupercellIterator<'a> {
    /// Enumerator holding the unit cell and point group
    enumerator: &'a SupercellEnumerator,
    /// Current supercell volume
    volume: i64,
    /// Current supercell transformation matrix
    current: Matrix3<i64>,
    /// Lazily built supercell, dropped on every advance
    supercell: OnceCell<Lattice3D>,
}

impl<'a> SupercellIterator<'a> {
    /// Position an iterator at the given volume. Volumes below 1 are
    /// clamped up to 1.
    fn new(enumerator: &'a SupercellEnumerator, volume: i64) -> Self {
        let volume = volume.max(1);
        let mut current = Matrix3::identity();
        current[(2, 2)] = volume;

        let mut iterator = Self {
            enumerator,
            volume,
            current,
            supercell: OnceCell::new(),
        };
        if !iterator.is_canonical() {
            iterator.advance();
        }
        iterator
    }

    /// The current supercell transformation matrix
    pub fn matrix(&self) -> &Matrix3<i64> {
        &self.current
    }

    /// The current supercell volume
    pub fn volume(&self) -> i64 {
        self.volume
    }

    /// The enumerator this iterates with
    pub fn enumerator(&self) -> &SupercellEnumerator {
        self.enumerator
    }

    /// The supercell lattice at the current position, built on first access
    /// and cached until the next advance
    pub fn supercell(&self) -> &Lattice3D {
        self.supercell.get_or_init(|| {
            make_supercell(self.enumerator.unit(), &self.current)
                .expect("enumerated supercell matrices are non-singular")
        })
    }

    /// Step to the next symmetry-unique supercell matrix, or to the end
    /// position when the volume window is exhausted
    pub fn advance(&mut self) -> &mut Self {
        if self.volume < self.enumerator.end_volume() {
            loop {
                self.try_increment();
                if self.volume >= self.enumerator.end_volume() || self.is_canonical() {
                    break;
                }
            }
        }
        self.supercell.take();
        self
    }

    /// Step to the next Hermite normal form with the current volume, moving
    /// to the next volume once all of them are exhausted.
    ///
    /// Order within a volume: the upper triangle in slots (1,2), (0,2),
    /// (0,1), each bounded by its row diagonal; then the next divisor pair
    /// on the diagonal.
    fn try_increment(&mut self) {
        let volume = self.volume;

        if self.current[(1, 2)] + 1 < self.current[(1, 1)] {
            self.current[(1, 2)] += 1;
            return;
        }
        self.current[(1, 2)] = 0;

        if self.current[(0, 2)] + 1 < self.current[(0, 0)] {
            self.current[(0, 2)] += 1;
            return;
        }
        self.current[(0, 2)] = 0;

        if self.current[(0, 1)] + 1 < self.current[(0, 0)] {
            self.current[(0, 1)] += 1;
            return;
        }
        self.current[(0, 1)] = 0;

        // Next middle diagonal element dividing the remaining quotient
        let quotient = volume / self.current[(0, 0)];
        let mut next = self.current[(1, 1)] + 1;
        while next <= volume && quotient % next != 0 {
            next += 1;
        }
        if next <= volume {
            self.current[(1, 1)] = next;
            self.current[(2, 2)] = volume / (self.current[(0, 0)] * next);
            return;
        }
        self.current[(1, 1)] = 1;

        // Next leading diagonal element dividing the volume
        let mut next = self.current[(0, 0)] + 1;
        while next <= volume && volume % next != 0 {
            next += 1;
        }
        if next <= volume {
            self.current[(0, 0)] = next;
            self.current[(2, 2)] = volume / next;
            return;
        }
        self.current[(0, 0)] = 1;

        self.volume += 1;
        self.current = Matrix3::identity();
        self.current[(2, 2)] = self.volume;
    }

    /// Check whether the current matrix is the canonical representative of
    /// its orbit: no point group operation may produce an HNF image that is
    /// strictly smaller in the `(h00, h11, h22, h12, h02, h01)` order.
    ///
    /// An operation `g` maps the supercell `U·M` onto `g·U·M = U·(W·M)` with
    /// `W = round(U⁻¹·g·U)`, so the orbit of `M` is the set of HNF forms of
    /// `W·M` over the group.
    fn is_canonical(&self) -> bool {
        let basis = self.enumerator.unit().direct_basis();
        for op in self.enumerator.point_group().iter() {
            let image = op.integer_rep(basis) * self.current;
            let (hnf, _) = hermite_normal_form(&image)
                .expect("point group operations preserve the determinant magnitude");
            if hnf_lex_cmp(&hnf, &self.current) == Ordering::Less {
                return false;
            }
        }
        true
    }
}

/// Iterator equality compares the enumerator identity and the walk state;
/// the lazy supercell cache never participates.
impl<'a> PartialEq for SupercellIterator<'a> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.enumerator, other.enumerator)
            && self.volume == other.volume
            && self.current == other.current
    }
}

impl<'a> Eq for SupercellIterator<'a> {}

impl<'a> Iterator for SupercellIterator<'a> {
    type Item = (i64, Matrix3<i64>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.volume >= self.enumerator.end_volume() {
            return None;
        }
        let item = (self.volume, self.current);
        self.advance();
        Some(item)
    }
}

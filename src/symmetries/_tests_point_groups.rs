#[cfg(test)]
mod _tests_point_groups {
    use super::super::point_groups::PointGroup;
    use crate::config::SYMMETRY_TOLERANCE;
    use crate::lattice::construction::{
        body_centered_cubic_lattice, face_centered_cubic_lattice, hexagonal_lattice,
        orthorhombic_lattice, simple_cubic_lattice, tetragonal_lattice,
    };

    const TOL: f64 = SYMMETRY_TOLERANCE;

    #[test]
    fn test_trivial_group() {
        let group = PointGroup::trivial();

        assert_eq!(group.len(), 1);
        assert!(group[0].is_identity());
    }

    #[test]
    fn test_cubic_point_group_order() {
        let lattice = simple_cubic_lattice(1.0).unwrap();
        assert_eq!(lattice.point_group().len(), 48);
    }

    #[test]
    fn test_fcc_point_group_order() {
        let lattice = face_centered_cubic_lattice(2.0).unwrap();
        assert_eq!(lattice.point_group().len(), 48);
    }

    #[test]
    fn test_bcc_point_group_order() {
        let lattice = body_centered_cubic_lattice(1.5).unwrap();
        assert_eq!(lattice.point_group().len(), 48);
    }

    #[test]
    fn test_hexagonal_point_group_order() {
        let lattice = hexagonal_lattice(1.0, 2.0).unwrap();
        assert_eq!(lattice.point_group().len(), 24);
    }

    #[test]
    fn test_tetragonal_point_group_order() {
        let lattice = tetragonal_lattice(1.0, 2.0).unwrap();
        assert_eq!(lattice.point_group().len(), 16);
    }

    #[test]
    fn test_orthorhombic_point_group_order() {
        let lattice = orthorhombic_lattice(1.0, 2.0, 3.0).unwrap();
        assert_eq!(lattice.point_group().len(), 8);
    }

    #[test]
    fn test_operations_are_orthogonal() {
        let lattice = hexagonal_lattice(1.0, 1.6).unwrap();

        for op in lattice.point_group().iter() {
            assert!(op.is_orthogonal(TOL));
            assert!((op.determinant().abs() - 1.0).abs() < TOL);
        }
    }

    #[test]
    fn test_group_contains_identity_and_inversion() {
        let lattice = simple_cubic_lattice(1.0).unwrap();
        let group = lattice.point_group();

        assert!(group.iter().any(|op| op.is_identity()));
        assert!(group
            .iter()
            .any(|op| (op.matrix + nalgebra::Matrix3::identity()).amax() < TOL));
    }

    #[test]
    fn test_group_is_closed_under_composition() {
        let lattice = tetragonal_lattice(1.0, 2.0).unwrap();
        let group = lattice.point_group();

        for first in group.iter() {
            for second in group.iter() {
                let product = first.compose(second);
                let contained = group
                    .iter()
                    .any(|op| (op.matrix - product.matrix).amax() < TOL);
                assert!(contained, "group must be closed under composition");
            }
        }
    }

    #[test]
    fn test_integer_rep_reconstructs_operations() {
        let lattice = face_centered_cubic_lattice(1.0).unwrap();
        let basis = lattice.direct_basis();
        let inverse = basis.try_inverse().unwrap();

        for op in lattice.point_group().iter() {
            let rep = op.integer_rep(basis);
            let reconstructed = basis * rep.map(|x| x as f64) * inverse;
            assert!((reconstructed - op.matrix).amax() < TOL);
        }
    }

    #[test]
    fn test_singular_basis_is_error() {
        let singular = nalgebra::Matrix3::new(1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 1.0);
        assert!(PointGroup::from_lattice(&singular, TOL).is_err());
    }
}

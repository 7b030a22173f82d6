#[cfg(test)]
mod _tests_lattice3d {
    use super::super::construction::{
        create_supercell, face_centered_cubic_lattice, hexagonal_lattice, make_supercell,
        orthorhombic_lattice, simple_cubic_lattice,
    };
    use super::super::lattice3d::Lattice3D;
    use nalgebra::{Matrix3, Vector3};
    use std::f64::consts::PI;

    const TOL: f64 = 1e-10;

    #[test]
    fn test_new_simple_cubic() {
        let a = 2.0;
        let lattice = simple_cubic_lattice(a).unwrap();

        // Check basic properties
        assert!((lattice.cell_volume() - a.powi(3)).abs() < TOL);

        // Check reciprocal lattice
        let expected_reciprocal = 2.0 * PI / a;
        assert!((lattice.reciprocal[(0, 0)] - expected_reciprocal).abs() < TOL);

        // Check lattice parameters and angles
        let (pa, pb, pc) = lattice.lattice_parameters();
        assert!((pa - a).abs() < TOL);
        assert!((pb - a).abs() < TOL);
        assert!((pc - a).abs() < TOL);

        let (alpha, beta, gamma) = lattice.lattice_angles();
        assert!((alpha - PI / 2.0).abs() < TOL);
        assert!((beta - PI / 2.0).abs() < TOL);
        assert!((gamma - PI / 2.0).abs() < TOL);
    }

    #[test]
    fn test_new_fcc() {
        let a = 2.0;
        let lattice = face_centered_cubic_lattice(a).unwrap();

        // FCC primitive cell volume is a³/4
        assert!((lattice.cell_volume() - a.powi(3) / 4.0).abs() < TOL);
        assert_eq!(lattice.point_group().len(), 48);
    }

    #[test]
    fn test_hexagonal_angles() {
        let lattice = hexagonal_lattice(1.0, 2.0).unwrap();

        let (alpha, beta, gamma) = lattice.lattice_angles();
        assert!((alpha - PI / 2.0).abs() < TOL);
        assert!((beta - PI / 2.0).abs() < TOL);
        assert!((gamma - 2.0 * PI / 3.0).abs() < TOL);
    }

    #[test]
    fn test_frac_cart_round_trip() {
        let lattice = orthorhombic_lattice(1.0, 2.0, 3.0).unwrap();

        let frac = Vector3::new(0.25, 0.5, -0.75);
        let cart = lattice.frac_to_cart(frac);
        assert!((cart - Vector3::new(0.25, 1.0, -2.25)).amax() < TOL);
        assert!((lattice.cart_to_frac(cart) - frac).amax() < TOL);
    }

    #[test]
    fn test_metric_tensor() {
        let lattice = hexagonal_lattice(1.0, 2.0).unwrap();
        let metric = lattice.metric_tensor();

        // Diagonal carries the squared lengths
        assert!((metric[(0, 0)] - 1.0).abs() < TOL);
        assert!((metric[(1, 1)] - 1.0).abs() < TOL);
        assert!((metric[(2, 2)] - 4.0).abs() < TOL);
        // Hexagonal a·b = -1/2
        assert!((metric[(0, 1)] + 0.5).abs() < TOL);
    }

    #[test]
    fn test_primitive_vectors() {
        let lattice = simple_cubic_lattice(1.5).unwrap();
        let (a1, a2, a3) = lattice.primitive_vectors();

        assert!((a1 - Vector3::new(1.5, 0.0, 0.0)).amax() < TOL);
        assert!((a2 - Vector3::new(0.0, 1.5, 0.0)).amax() < TOL);
        assert!((a3 - Vector3::new(0.0, 0.0, 1.5)).amax() < TOL);
    }

    #[test]
    fn test_singular_basis_is_error() {
        let singular = Matrix3::new(1.0, 2.0, 0.0, 2.0, 4.0, 0.0, 0.0, 0.0, 1.0);
        assert!(Lattice3D::new(singular, TOL).is_err());
    }

    #[test]
    fn test_make_supercell_volume() {
        let lattice = simple_cubic_lattice(1.0).unwrap();
        let transformation = Matrix3::new(1, 0, 1, 0, 1, 0, 0, 0, 3);

        let supercell = make_supercell(&lattice, &transformation).unwrap();
        assert!((supercell.cell_volume() - 3.0).abs() < TOL);
    }

    #[test]
    fn test_create_supercell_volume() {
        let lattice = simple_cubic_lattice(1.0).unwrap();

        let supercell = create_supercell(&lattice, 2, 2, 2).unwrap();
        assert!((supercell.cell_volume() - 8.0).abs() < TOL);

        // A diagonal cubic supercell keeps the full point group
        assert_eq!(supercell.point_group().len(), 48);
    }

    #[test]
    fn test_make_supercell_rejects_singular_transformation() {
        let lattice = simple_cubic_lattice(1.0).unwrap();
        let singular = Matrix3::new(1, 0, 0, 0, 0, 0, 0, 0, 1);

        assert!(make_supercell(&lattice, &singular).is_err());
    }
}

#[cfg(test)]
mod _tests_hnf {
    use super::super::hnf::{
        adjugate3, determinant3, hermite_normal_form, hnf_lex_cmp,
    };
    use nalgebra::Matrix3;
    use std::cmp::Ordering;

    // Helper function asserting the full decomposition contract
    fn assert_decomposition(matrix: &Matrix3<i64>) {
        let (hnf, unimodular) = hermite_normal_form(matrix).unwrap();

        // H is upper triangular with positive diagonal and bounded triangle
        for i in 0..3 {
            assert!(hnf[(i, i)] > 0, "diagonal must be positive");
            for j in 0..3 {
                if j < i {
                    assert_eq!(hnf[(i, j)], 0, "strict lower triangle must be zero");
                } else if j > i {
                    assert!(hnf[(i, j)] >= 0);
                    assert!(hnf[(i, j)] < hnf[(i, i)]);
                }
            }
        }

        // V is unimodular and M·V = H
        assert_eq!(determinant3(&unimodular).abs(), 1);
        assert_eq!(matrix * unimodular, hnf);
        assert_eq!(determinant3(&hnf), determinant3(matrix).abs());
    }

    #[test]
    fn test_hnf_input_is_fixed_point() {
        let matrix = Matrix3::new(2, 1, 1, 0, 3, 2, 0, 0, 4);
        let (hnf, unimodular) = hermite_normal_form(&matrix).unwrap();

        assert_eq!(hnf, matrix);
        assert_eq!(unimodular, Matrix3::identity());
    }

    #[test]
    fn test_diagonal_input() {
        let matrix = Matrix3::new(2, 0, 0, 0, 1, 0, 0, 0, 3);
        let (hnf, unimodular) = hermite_normal_form(&matrix).unwrap();

        assert_eq!(hnf, matrix);
        assert_eq!(unimodular, Matrix3::identity());
    }

    #[test]
    fn test_permutation_input() {
        let matrix = Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, 1);
        let (hnf, _unimodular) = hermite_normal_form(&matrix).unwrap();

        assert_eq!(hnf, Matrix3::identity());
        assert_decomposition(&matrix);
    }

    #[test]
    fn test_lower_triangular_input() {
        let matrix = Matrix3::new(1, 0, 0, 2, 3, 0, 4, 5, 6);
        assert_decomposition(&matrix);
    }

    #[test]
    fn test_negative_entries() {
        let matrix = Matrix3::new(1, 0, 0, 2, -3, 0, 4, 5, 6);
        assert_decomposition(&matrix);

        let matrix = Matrix3::new(-2, 1, 7, 3, -1, 2, 0, 4, -5);
        assert_decomposition(&matrix);
    }

    #[test]
    fn test_negative_determinant() {
        // det = -6; the unimodular factor absorbs the sign
        let matrix = Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, 6);
        assert_eq!(determinant3(&matrix), -6);
        assert_decomposition(&matrix);
    }

    #[test]
    fn test_dense_input() {
        let matrix = Matrix3::new(2, 4, 4, -6, 6, 12, 10, -4, -16);
        assert_decomposition(&matrix);
    }

    #[test]
    fn test_singular_input_is_error() {
        let matrix = Matrix3::new(1, 2, 3, 2, 4, 6, 0, 0, 1);
        assert!(hermite_normal_form(&matrix).is_err());
    }

    #[test]
    fn test_determinant3() {
        assert_eq!(determinant3(&Matrix3::identity()), 1);
        assert_eq!(determinant3(&Matrix3::new(2, 0, 0, 0, 3, 0, 0, 0, 4)), 24);
        assert_eq!(determinant3(&Matrix3::new(0, 1, 0, 1, 0, 0, 0, 0, 1)), -1);
    }

    #[test]
    fn test_adjugate3() {
        let matrix = Matrix3::new(2, 1, 0, 0, 3, 1, 1, 0, 4);
        let det = determinant3(&matrix);

        assert_eq!(matrix * adjugate3(&matrix), Matrix3::identity() * det);
        assert_eq!(adjugate3(&matrix) * matrix, Matrix3::identity() * det);
    }

    #[test]
    fn test_lexicographic_order() {
        // (h00, h11, h22, h12, h02, h01) = (2, 2, 2, 0, 1, 1)
        let base = Matrix3::new(2, 1, 1, 0, 2, 0, 0, 0, 2);

        // Diagonal entries dominate the upper triangle
        let larger_diagonal = Matrix3::new(2, 0, 0, 0, 4, 0, 0, 0, 1);
        assert_eq!(hnf_lex_cmp(&base, &larger_diagonal), Ordering::Less);

        // Slot (1,2) is compared before (0,2) and (0,1)
        let larger_triangle = Matrix3::new(2, 0, 0, 0, 2, 1, 0, 0, 2);
        assert_eq!(hnf_lex_cmp(&base, &larger_triangle), Ordering::Less);

        assert_eq!(hnf_lex_cmp(&base, &base), Ordering::Equal);
        assert_eq!(hnf_lex_cmp(&larger_triangle, &base), Ordering::Greater);
    }
}

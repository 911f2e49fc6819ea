#[cfg(test)]
mod tests {
    use super::super::moebius_transform::Moebius;
    use crate::complex::ExtendedPoint;
    use crate::config::MOEBIUS_TOLERANCE as TOL;
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;

    fn finite(point: ExtendedPoint) -> Complex64 {
        point.as_complex().expect("expected a finite point")
    }

    #[test]
    fn test_identity_transformation() {
        let identity = Moebius::identity();
        let point = ExtendedPoint::finite(3.0, 4.0);

        assert_eq!(identity.apply(point), point);
        assert_eq!(identity.apply(ExtendedPoint::Infinity), ExtendedPoint::Infinity);
        assert!(identity.is_identity(0.0));
        assert_eq!(identity.determinant(), 1.0);
    }

    #[test]
    fn test_translation() {
        let t = Moebius::translation(2.0);
        let image = finite(t.apply(ExtendedPoint::finite(1.0, 1.0)));

        assert_eq!(image, Complex64::new(3.0, 1.0));
        assert_eq!(t.apply(ExtendedPoint::Infinity), ExtendedPoint::Infinity);
    }

    #[test]
    fn test_inversion() {
        let s = Moebius::inversion();
        let image = finite(s.apply(ExtendedPoint::finite(0.0, 2.0)));

        // -1 / 2i = i / 2
        assert_abs_diff_eq!(image.re, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(image.im, 0.5, epsilon = TOL);
        assert_eq!(s.apply(ExtendedPoint::finite(0.0, 0.0)), ExtendedPoint::Infinity);
        assert_eq!(s.apply(ExtendedPoint::Infinity), ExtendedPoint::finite(0.0, 0.0));
    }

    #[test]
    fn test_infinity_maps_to_a_over_c() {
        let m = Moebius::new(2.0, 1.0, 4.0, 3.0);
        assert_eq!(m.apply(ExtendedPoint::Infinity), ExtendedPoint::finite(0.5, 0.0));
    }

    #[test]
    fn test_infinity_fixed_iff_lower_left_is_zero() {
        let cases = [
            Moebius::new(1.0, 5.0, 0.0, 1.0),
            Moebius::new(-1.0, 0.0, 0.0, -1.0),
            Moebius::new(0.0, -1.0, 1.0, 0.0),
            Moebius::new(2.0, 1.0, 1.0, 1.0),
            Moebius::new(1.0, 0.0, -3.0, 1.0),
        ];
        for m in cases {
            assert_eq!(
                m.apply(ExtendedPoint::Infinity).is_infinity(),
                m.c() == 0.0,
                "unexpected image of infinity under {}",
                m
            );
        }
    }

    #[test]
    fn test_pole_maps_to_infinity() {
        // c z + d = 0 at z = -d / c = -1/2
        let m = Moebius::new(1.0, 1.0, 2.0, 1.0);
        assert_eq!(m.apply(ExtendedPoint::finite(-0.5, 0.0)), ExtendedPoint::Infinity);
        assert!(!m.apply(ExtendedPoint::finite(-0.5, 1e-12)).is_infinity());
    }

    #[test]
    fn test_composition_order() {
        let t = Moebius::translation(1.0);
        let s = Moebius::inversion();
        let z = ExtendedPoint::finite(0.25, 1.5);

        let composed = t.compose(&s);
        let expected = t.apply(s.apply(z));

        assert!(composed.apply(z).approx_eq(&expected, TOL));
        assert_eq!(composed, Moebius::new(1.0, -1.0, 1.0, 0.0));
        assert_eq!(t * s, composed);
    }

    #[test]
    fn test_composition_is_associative() {
        let f = Moebius::new(2.0, 1.0, 1.0, 1.0);
        let g = Moebius::new(0.0, -1.0, 1.0, 3.0);
        let h = Moebius::new(1.0, -2.0, 0.0, 1.0);

        assert!((f * g * h).approx_eq(&(f * (g * h)), TOL));
    }

    #[test]
    fn test_inverse_is_adjugate() {
        let m = Moebius::new(2.0, 3.0, 5.0, 7.0);
        assert_eq!(m.inverse(), Moebius::new(7.0, -3.0, -5.0, 2.0));
    }

    #[test]
    fn test_compose_with_inverse_is_identity() {
        let elements = [
            Moebius::new(2.0, 1.0, 1.0, 1.0),
            Moebius::new(0.0, -1.0, 1.0, 0.0),
            Moebius::new(5.0, 2.0, 7.0, 3.0),
            Moebius::new(1.0, 0.0, 1.0, -1.0), // determinant -1
        ];
        for m in elements {
            let product = m.compose(&m.inverse());
            let scale = m.determinant();
            let normalized = Moebius::new(
                product.a() / scale,
                product.b() / scale,
                product.c() / scale,
                product.d() / scale,
            );
            assert!(normalized.is_identity(TOL), "{} * inverse = {}", m, product);
        }
    }

    #[test]
    fn test_apply_then_inverse_round_trip() {
        let m = Moebius::new(5.0, 2.0, 7.0, 3.0);
        let z = ExtendedPoint::finite(-0.3, 0.8);

        let back = m.inverse().apply(m.apply(z));
        assert!(back.approx_eq(&z, TOL));
    }

    #[test]
    fn test_upper_half_plane_preserved() {
        let m = Moebius::new(3.0, 1.0, 2.0, 1.0);
        for &(re, im) in &[(0.0, 1.0), (-4.0, 0.01), (7.5, 3.0)] {
            let image = finite(m.apply(ExtendedPoint::finite(re, im)));
            assert!(image.im > 0.0);
        }
    }

    #[test]
    fn test_entries_and_display() {
        let m = Moebius::new(1.0, -1.0, 0.0, 1.0);
        assert_eq!(m.entries(), [1.0, -1.0, 0.0, 1.0]);
        assert_eq!(m.to_string(), "[[1, -1], [0, 1]]");
        assert_eq!(Moebius::from([0.0, -1.0, 1.0, 0.0]), Moebius::inversion());
        assert_eq!(Moebius::default(), Moebius::identity());
    }

    #[test]
    fn test_serde_row_major() {
        let m = Moebius::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[1.0,2.0,3.0,4.0]");

        let back: Moebius = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}

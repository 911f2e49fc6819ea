#[cfg(test)]
mod tests {
    use super::super::level::Level;
    use super::super::subgroup::{CongruenceSubgroup, mod_eq};
    use crate::error::ModularError;
    use crate::moebius::Moebius;

    fn level(n: i64) -> Level {
        Level::new(n).unwrap()
    }

    #[test]
    fn test_mod_eq_is_sign_independent() {
        assert!(mod_eq(-6, 0, 3));
        assert!(mod_eq(6, 0, 3));
        assert!(mod_eq(-1, 4, 5));
        assert!(mod_eq(4, -1, 5));
        assert!(!mod_eq(-1, 1, 5));
        assert!(mod_eq(-1, 1, 2));
    }

    #[test]
    fn test_level_validation() {
        assert!(Level::new(1).is_ok());
        assert_eq!(Level::new(12).unwrap().get(), 12);
        assert_eq!(Level::new(0), Err(ModularError::InvalidLevel("0".to_string())));
        assert!(matches!(Level::new(-3), Err(ModularError::InvalidLevel(_))));

        assert_eq!(Level::try_from(5.0).unwrap().get(), 5);
        assert!(Level::try_from(2.5).is_err());
        assert!(Level::try_from(0.0).is_err());
        assert!(Level::try_from(f64::NAN).is_err());
        assert!(Level::try_from(f64::INFINITY).is_err());
    }

    #[test]
    fn test_prime_divisors() {
        assert_eq!(level(1).prime_divisors(), Vec::<u32>::new());
        assert_eq!(level(12).prime_divisors(), vec![2, 3]);
        assert_eq!(level(49).prime_divisors(), vec![7]);
        assert_eq!(level(30).prime_divisors(), vec![2, 3, 5]);
        assert_eq!(level(97).prime_divisors(), vec![97]);
    }

    #[test]
    fn test_gamma0_membership() {
        let g0 = CongruenceSubgroup::Gamma0;
        assert!(g0.is_member(level(4), &Moebius::new(1.0, 1.0, 4.0, 5.0)));
        assert!(g0.is_member(level(4), &Moebius::new(3.0, 2.0, -8.0, -5.0)));
        assert!(!g0.is_member(level(4), &Moebius::new(1.0, 0.0, 2.0, 1.0)));
        assert!(!g0.is_member(level(4), &Moebius::inversion()));
        assert!(g0.is_member(level(4), &Moebius::translation(7.0)));
    }

    #[test]
    fn test_gamma1_membership() {
        let g1 = CongruenceSubgroup::Gamma1;
        // a = 2 is not ±1 mod 5
        assert!(!g1.is_member(level(5), &Moebius::new(2.0, 1.0, 5.0, 3.0)));
        // a = 4 ≡ -1 mod 5
        assert!(g1.is_member(level(5), &Moebius::new(4.0, 1.0, 15.0, 4.0)));
        assert!(g1.is_member(level(5), &Moebius::new(-1.0, 0.0, 0.0, -1.0)));
        assert!(!g1.is_member(level(5), &Moebius::new(1.0, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn test_gamma_requires_common_sign() {
        let g = CongruenceSubgroup::Gamma;
        let n = level(5);
        assert!(g.is_member(n, &Moebius::identity()));
        assert!(g.is_member(n, &Moebius::new(-1.0, 0.0, 0.0, -1.0)));
        assert!(g.is_member(n, &Moebius::new(6.0, 5.0, 25.0, 21.0)));
        assert!(g.is_member(n, &Moebius::new(4.0, 5.0, 15.0, 19.0)));
        // a ≡ 1, d ≡ -1 is not in Γ(5) even though each entry is ±1
        assert!(!g.is_member(n, &Moebius::new(1.0, 0.0, 0.0, -1.0)));
        assert!(!g.is_member(n, &Moebius::new(-1.0, 0.0, 0.0, 1.0)));
        // b must vanish
        assert!(!g.is_member(n, &Moebius::translation(1.0)));
        assert!(g.is_member(n, &Moebius::translation(5.0)));
    }

    #[test]
    fn test_level_one_contains_everything() {
        for subgroup in CongruenceSubgroup::ALL {
            assert!(subgroup.is_member(level(1), &Moebius::inversion()));
            assert!(subgroup.is_member(level(1), &Moebius::new(2.0, 1.0, 1.0, 1.0)));
        }
    }

    #[test]
    fn test_membership_invariant_under_negation() {
        let elements = [
            Moebius::new(1.0, 5.0, 10.0, 51.0),
            Moebius::new(4.0, 1.0, 15.0, 4.0),
            Moebius::new(2.0, 1.0, 1.0, 1.0),
        ];
        for subgroup in CongruenceSubgroup::ALL {
            for m in elements {
                let neg = Moebius::new(-m.a(), -m.b(), -m.c(), -m.d());
                assert_eq!(subgroup.is_member(level(5), &m), subgroup.is_member(level(5), &neg));
            }
        }
    }

    #[test]
    fn test_find_coset_index() {
        let g0 = CongruenceSubgroup::Gamma0;
        let n = level(2);
        let list = [
            Moebius::identity(),
            Moebius::inversion(),
            Moebius::inversion() * Moebius::translation(1.0),
        ];

        assert_eq!(g0.find_coset_index(n, &list, &Moebius::translation(3.0)), Some(0));
        assert_eq!(g0.find_coset_index(n, &list, &Moebius::new(1.0, 0.0, 2.0, 1.0)), Some(0));
        assert_eq!(g0.find_coset_index(n, &list, &Moebius::inversion()), Some(1));
        assert_eq!(g0.find_coset(n, &list, &list[2]), Some(list[2]));
        assert_eq!(g0.find_coset_index(n, &list[..1], &Moebius::inversion()), None);
    }

    #[test]
    fn test_same_coset_is_symmetric() {
        let g1 = CongruenceSubgroup::Gamma1;
        let n = level(5);
        let x = Moebius::new(2.0, 1.0, 1.0, 1.0);
        let y = Moebius::new(1.0, 0.0, 5.0, 1.0) * x;

        assert!(g1.same_coset(n, &x, &y));
        assert!(g1.same_coset(n, &y, &x));
        assert!(!g1.same_coset(n, &x, &Moebius::identity()));
    }

    #[test]
    fn test_index_formula() {
        let g0 = CongruenceSubgroup::Gamma0;
        let g1 = CongruenceSubgroup::Gamma1;
        let g = CongruenceSubgroup::Gamma;

        assert_eq!(g0.index(level(1)), 1);
        assert_eq!(g0.index(level(4)), 6);
        assert_eq!(g0.index(level(6)), 12);
        assert_eq!(g0.index(level(11)), 12);

        assert_eq!(g1.index(level(2)), 3);
        assert_eq!(g1.index(level(4)), 6);
        assert_eq!(g1.index(level(5)), 12);

        assert_eq!(g.index(level(1)), 1);
        assert_eq!(g.index(level(2)), 6);
        assert_eq!(g.index(level(3)), 12);
        assert_eq!(g.index(level(4)), 24);
        assert_eq!(g.index(level(5)), 60);
        assert_eq!(g.index(level(7)), 168);
    }

    #[test]
    fn test_index_formula_at_large_levels() {
        // 3_000_000 = 2^6 * 3 * 5^6
        let n = level(3_000_000);
        assert_eq!(CongruenceSubgroup::Gamma.index(n), 8_640_000_000_000_000_000);
        assert_eq!(CongruenceSubgroup::Gamma1.index(n), 2_880_000_000_000);

        // 2^31, where N^3 alone overflows u64
        assert_eq!(
            CongruenceSubgroup::Gamma.index(level(1 << 31)),
            3 * (1u128 << 90)
        );

        // u32::MAX = 3 * 5 * 17 * 257 * 65537
        let max = level(u32::MAX as i64);
        assert_eq!(CongruenceSubgroup::Gamma0.index(max), 4 * 6 * 18 * 258 * 65538);
        assert!(CongruenceSubgroup::Gamma.index(max) > CongruenceSubgroup::Gamma1.index(max));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("gamma0".parse::<CongruenceSubgroup>().unwrap(), CongruenceSubgroup::Gamma0);
        assert_eq!("Gamma1".parse::<CongruenceSubgroup>().unwrap(), CongruenceSubgroup::Gamma1);
        assert_eq!("Γ".parse::<CongruenceSubgroup>().unwrap(), CongruenceSubgroup::Gamma);
        assert!(matches!(
            "gamma2".parse::<CongruenceSubgroup>(),
            Err(ModularError::UnknownSubgroup(_))
        ));
        assert_eq!(CongruenceSubgroup::Gamma0.to_string(), "Γ0");
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::congruence::cosets::CosetEnumerator;
use crate::congruence::level::Level;
use crate::error::ModularError;
use crate::moebius::Moebius;

/// The congruence subgroups of the modular group supported by the enumerator.
///
/// Membership is tested projectively: a matrix and its negative describe the same
/// transformation, so every class contains -I.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CongruenceSubgroup {
    /// Principal congruence subgroup Γ(N): b ≡ c ≡ 0 and a ≡ d ≡ ±1 with a common sign
    Gamma,
    /// Γ0(N): c ≡ 0
    Gamma0,
    /// Γ1(N): c ≡ 0 and a ≡ ±1
    Gamma1,
}

impl CongruenceSubgroup {
    pub const ALL: [CongruenceSubgroup; 3] = [
        CongruenceSubgroup::Gamma,
        CongruenceSubgroup::Gamma0,
        CongruenceSubgroup::Gamma1,
    ];

    /// Check whether `m` lies in the subgroup of the given level.
    ///
    /// The entries of `m` are expected to be integers; they are rounded before the
    /// residues are taken.
    pub fn is_member(&self, level: Level, m: &Moebius) -> bool {
        let n = level.get() as i64;
        let [a, b, c, d] = m.entries().map(|v| v.round() as i64);

        match self {
            CongruenceSubgroup::Gamma0 => mod_eq(c, 0, n),
            CongruenceSubgroup::Gamma1 => mod_eq(c, 0, n) && (mod_eq(a, 1, n) || mod_eq(a, -1, n)),
            CongruenceSubgroup::Gamma => {
                mod_eq(b, 0, n)
                    && mod_eq(c, 0, n)
                    && ((mod_eq(a, 1, n) && mod_eq(d, 1, n)) || (mod_eq(a, -1, n) && mod_eq(d, -1, n)))
            }
        }
    }

    /// Whether `x` and `y` lie in the same right coset, i.e. `y · x⁻¹` is a member
    pub fn same_coset(&self, level: Level, x: &Moebius, y: &Moebius) -> bool {
        self.is_member(level, &y.compose(&x.inverse()))
    }

    /// Position of the first representative in `list` sharing a right coset with `value`
    pub fn find_coset_index(&self, level: Level, list: &[Moebius], value: &Moebius) -> Option<usize> {
        let value_inv = value.inverse();
        list.iter()
            .position(|r| self.is_member(level, &r.compose(&value_inv)))
    }

    /// The first representative in `list` sharing a right coset with `value`
    pub fn find_coset(&self, level: Level, list: &[Moebius], value: &Moebius) -> Option<Moebius> {
        self.find_coset_index(level, list, value).map(|i| list[i])
    }

    /// Index of the subgroup (with -I adjoined) in PSL2(Z).
    ///
    /// This is the number of right cosets the enumerator produces. Computed in `u128`,
    /// which holds N^3 for every level up to `u32::MAX`.
    pub fn index(&self, level: Level) -> u128 {
        let n = level.get() as u128;
        let primes = level.prime_divisors();

        match self {
            CongruenceSubgroup::Gamma0 => {
                // N * prod (1 + 1/p), kept in integers
                primes
                    .iter()
                    .fold(n, |acc, &p| acc / p as u128 * (p as u128 + 1))
            }
            CongruenceSubgroup::Gamma1 | CongruenceSubgroup::Gamma => {
                let power = if *self == CongruenceSubgroup::Gamma { 3 } else { 2 };
                // N^k * prod (1 - 1/p^2); -I only differs from I once N > 2
                let full = primes.iter().fold(n.pow(power), |acc, &p| {
                    let p = p as u128;
                    acc / (p * p) * (p * p - 1)
                });
                if n <= 2 {
                    full
                } else {
                    full / 2
                }
            }
        }
    }

    /// Enumerate right-coset representatives with the default strategy.
    pub fn coset_representatives(&self, level: i64) -> Result<Vec<Moebius>, ModularError> {
        let level = Level::new(level)?;
        Ok(CosetEnumerator::new(*self, level).enumerate())
    }
}

/// Sign-independent congruence test `v1 ≡ v2 (mod modulus)`
pub fn mod_eq(v1: i64, v2: i64, modulus: i64) -> bool {
    (v1 - v2).rem_euclid(modulus) == 0
}

impl fmt::Display for CongruenceSubgroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CongruenceSubgroup::Gamma => "Γ",
            CongruenceSubgroup::Gamma0 => "Γ0",
            CongruenceSubgroup::Gamma1 => "Γ1",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CongruenceSubgroup {
    type Err = ModularError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gamma" | "γ" | "g" => Ok(CongruenceSubgroup::Gamma),
            "gamma0" | "gamma_0" | "γ0" | "g0" => Ok(CongruenceSubgroup::Gamma0),
            "gamma1" | "gamma_1" | "γ1" | "g1" => Ok(CongruenceSubgroup::Gamma1),
            _ => Err(ModularError::UnknownSubgroup(s.to_string())),
        }
    }
}

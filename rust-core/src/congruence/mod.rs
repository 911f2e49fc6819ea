// Congruence module: Congruence subgroups of the modular group and their cosets
// This module provides membership tests for Γ(N), Γ0(N), Γ1(N) and coset enumeration

// ======================== MODULE DECLARATIONS ========================
pub mod cosets;
pub mod level;
pub mod subgroup;

mod _tests_subgroup;

// ======================== LEVELS ========================
pub use level::Level; // struct - validated positive level N
// Level impl methods:
//   new(level: i64) -> Result<Level, ModularError>           - rejects non-positive levels
//   try_from(level: f64) -> Result<Level, ModularError>      - additionally rejects non-integers
//   get(&self) -> u32                                        - raw value
//   prime_divisors(&self) -> Vec<u32>                        - distinct primes dividing N

// ======================== MEMBERSHIP ========================
pub use subgroup::{
    CongruenceSubgroup, // enum - Gamma, Gamma0, Gamma1
    mod_eq,             // fn(v1: i64, v2: i64, modulus: i64) -> bool - sign-independent congruence test
};
// CongruenceSubgroup impl methods:
//   is_member(&self, level: Level, m: &Moebius) -> bool      - membership predicate on integer entries
//   same_coset(&self, level: Level, x: &Moebius, y: &Moebius) -> bool - y * x^-1 is a member
//   find_coset_index(&self, level, list: &[Moebius], value: &Moebius) -> Option<usize> - first matching representative
//   find_coset(&self, level, list: &[Moebius], value: &Moebius) -> Option<Moebius> - same, returning the element
//   index(&self, level: Level) -> u128                       - number of right cosets in PSL2(Z)
//   coset_representatives(&self, level: i64) -> Result<Vec<Moebius>> - default enumeration

// ======================== ENUMERATION ========================
pub use cosets::{
    CosetEnumerator,        // struct - breadth-first coset search for one (subgroup, level)
    DedupStrategy,          // enum - SlidingWindow (default) or Exhaustive duplicate check
    coset_representatives,  // fn(subgroup, level: i64) -> Result<Vec<Moebius>> - convenience wrapper
    modular_generators,     // fn() -> [Moebius; 3] - S, T, T^-1
};
#[cfg(feature = "parallel")]
pub use cosets::coset_tables; // fn(subgroup, levels: &[i64]) -> Vec<(i64, Result<Vec<Moebius>>)> - parallel batch
// CosetEnumerator impl methods:
//   new(subgroup: CongruenceSubgroup, level: Level) -> Self  - enumerator with the default strategy
//   with_strategy(self, strategy: DedupStrategy) -> Self     - builder for the dedup strategy
//   enumerate(&self) -> Vec<Moebius>                         - runs the search, identity first

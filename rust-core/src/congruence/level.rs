use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ModularError;

/// Level N of a congruence subgroup, always a positive integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Level(u32);

impl Level {
    /// Validate an integer level.
    pub fn new(level: i64) -> Result<Self, ModularError> {
        if level <= 0 || level > u32::MAX as i64 {
            return Err(ModularError::InvalidLevel(level.to_string()));
        }
        Ok(Level(level as u32))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Distinct primes dividing the level, ascending
    pub fn prime_divisors(&self) -> Vec<u32> {
        let mut primes = Vec::new();
        let mut n = self.0;
        let mut p: u32 = 2;
        while (p as u64) * (p as u64) <= n as u64 {
            if n % p == 0 {
                primes.push(p);
                while n % p == 0 {
                    n /= p;
                }
            }
            p += 1;
        }
        if n > 1 {
            primes.push(n);
        }
        primes
    }
}

impl TryFrom<i64> for Level {
    type Error = ModularError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Level::new(level)
    }
}

/// Levels coming from JavaScript or other untyped sources arrive as floats.
impl TryFrom<f64> for Level {
    type Error = ModularError;

    fn try_from(level: f64) -> Result<Self, Self::Error> {
        if !level.is_finite() || level.fract() != 0.0 || level < 1.0 || level > u32::MAX as f64 {
            return Err(ModularError::InvalidLevel(level.to_string()));
        }
        Ok(Level(level as u32))
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

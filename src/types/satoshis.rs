// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for coin amounts in the smallest currency unit
//!
//! Block rewards arrive as fractional coin amounts while transaction fees
//! arrive as integer satoshis. Mining revenue is summed in satoshis so the
//! result can be rendered with exactly eight decimals, free of floating point
//! artifacts.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::config::constants::SATOSHIS_PER_COIN;

/// An amount in satoshis (1 coin = 10^8 satoshis)
///
/// # Examples
///
/// ```
/// use blockcharts::Satoshis;
///
/// let reward = Satoshis::from_coins(6.25);
/// assert_eq!(reward.as_u64(), 625_000_000);
/// assert_eq!((reward + Satoshis::new(150_000)).to_coin_string(), "6.25150000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Satoshis(u64);

impl Satoshis {
    /// Zero satoshis
    pub const ZERO: Self = Self(0);

    /// Create a new amount from a raw satoshi count
    pub const fn new(satoshis: u64) -> Self {
        Self(satoshis)
    }

    /// Convert a fractional coin amount to satoshis
    ///
    /// The product is rounded to the nearest satoshi, so `0.29` becomes
    /// `29_000_000` even though `0.29 * 1e8` is not exact in binary floating
    /// point. Negative and non-finite inputs map to zero.
    pub fn from_coins(coins: f64) -> Self {
        let scaled = (coins * SATOSHIS_PER_COIN as f64).round();
        if scaled.is_finite() && scaled > 0.0 {
            Self(scaled as u64)
        } else {
            Self::ZERO
        }
    }

    /// Get the raw satoshi count
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Render as a coin amount with exactly eight decimals
    ///
    /// # Examples
    ///
    /// ```
    /// use blockcharts::Satoshis;
    ///
    /// assert_eq!(Satoshis::new(1_250_000_000).to_coin_string(), "12.50000000");
    /// assert_eq!(Satoshis::new(1).to_coin_string(), "0.00000001");
    /// ```
    pub fn to_coin_string(&self) -> String {
        let whole = self.0 / SATOSHIS_PER_COIN;
        let fraction = self.0 % SATOSHIS_PER_COIN;
        format!("{whole}.{fraction:08}")
    }
}

impl From<u64> for Satoshis {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Add for Satoshis {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Satoshis {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl fmt::Display for Satoshis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sat", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_coins_exact_rewards() {
        assert_eq!(Satoshis::from_coins(50.0).as_u64(), 5_000_000_000);
        assert_eq!(Satoshis::from_coins(12.5).as_u64(), 1_250_000_000);
        assert_eq!(Satoshis::from_coins(6.25).as_u64(), 625_000_000);
        assert_eq!(Satoshis::from_coins(3.125).as_u64(), 312_500_000);
    }

    #[test]
    fn test_from_coins_rounds_binary_artifacts() {
        assert_eq!(Satoshis::from_coins(0.29).as_u64(), 29_000_000);
        assert_eq!(Satoshis::from_coins(0.1 + 0.2).as_u64(), 30_000_000);
    }

    #[test]
    fn test_from_coins_rejects_garbage() {
        assert_eq!(Satoshis::from_coins(-1.0), Satoshis::ZERO);
        assert_eq!(Satoshis::from_coins(f64::NAN), Satoshis::ZERO);
        assert_eq!(Satoshis::from_coins(f64::INFINITY), Satoshis::ZERO);
    }

    #[test]
    fn test_to_coin_string() {
        assert_eq!(Satoshis::ZERO.to_coin_string(), "0.00000000");
        assert_eq!(Satoshis::new(625_150_000).to_coin_string(), "6.25150000");
        assert_eq!(Satoshis::new(100_000_000).to_coin_string(), "1.00000000");
        assert_eq!(
            Satoshis::new(2_100_000_000_000_000).to_coin_string(),
            "21000000.00000000"
        );
    }

    #[test]
    fn test_add_saturates() {
        let sum = Satoshis::new(u64::MAX) + Satoshis::new(1);
        assert_eq!(sum.as_u64(), u64::MAX);

        let mut total = Satoshis::new(10);
        total += Satoshis::new(5);
        assert_eq!(total, Satoshis::new(15));
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Satoshis::new(150_000)).unwrap();
        assert_eq!(json, "150000");
        let back: Satoshis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Satoshis::new(150_000));
    }
}

//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. `Price` is the one the catalog needs.

use serde::{Deserialize, Serialize};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A currency amount in the store's single currency.
///
/// Stored as a float to stay wire-compatible with clients that send plain JSON
/// numbers (`"price": 59.99`). Formatting always rounds to two decimals.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// A price is usable when it is a finite, non-negative amount.
    pub fn is_valid(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }

    /// Multiply by a factor (e.g. `0.9` for 10% off).
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    /// Two-decimal rendering, e.g. `"270.00"`. Same as `Display`.
    pub fn to_fixed(&self) -> String {
        self.to_string()
    }
}

impl core::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0 + rhs.0)
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

/// Rounds half-up on the shortest decimal form of the amount: `1.125` renders
/// as `"1.13"` where `{:.2}` would give `"1.12"`.
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !self.0.is_finite() {
            return write!(f, "{}", self.0);
        }

        // `{}` on f64 never switches to exponent notation.
        let shortest = format!("{}", self.0.abs());
        let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));
        let mut frac = frac_part.bytes();
        let tenths = frac.next().unwrap_or(b'0');
        let hundredths = frac.next().unwrap_or(b'0');
        let round_up = frac.next().is_some_and(|d| d >= b'5');

        let mut digits: Vec<u8> = int_part.bytes().chain([tenths, hundredths]).collect();
        if round_up {
            increment_decimal(&mut digits);
        }

        let negative = self.0.is_sign_negative() && digits.iter().any(|d| *d != b'0');
        let split = digits.len() - 2;
        let (whole, cents) = digits.split_at(split);
        write!(
            f,
            "{}{}.{}",
            if negative { "-" } else { "" },
            String::from_utf8_lossy(whole),
            String::from_utf8_lossy(cents)
        )
    }
}

/// Adds one unit in the last place of an ASCII digit string.
fn increment_decimal(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(Price::new(270.0).to_fixed(), "270.00");
        assert_eq!(Price::new(59.999).to_string(), "60.00");
        assert_eq!(Price::new(0.5).to_fixed(), "0.50");
        assert_eq!(Price::new(7.0).to_fixed(), "7.00");
    }

    #[test]
    fn rounds_half_up_on_the_shortest_decimal() {
        // `{:.2}` on the binary value gives "1.12" and "0.85" here.
        assert_eq!(Price::new(1.125).to_fixed(), "1.13");
        assert_eq!(Price::new(0.855).to_fixed(), "0.86");
        assert_eq!(Price::new(2.675).to_fixed(), "2.68");
        assert_eq!(Price::new(1.124).to_fixed(), "1.12");
    }

    #[test]
    fn rounding_carries_into_the_integer_part() {
        assert_eq!(Price::new(9.995).to_fixed(), "10.00");
        assert_eq!(Price::new(99.999).to_fixed(), "100.00");
        assert_eq!(Price::new(0.004).to_fixed(), "0.00");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(Price::new(-1.125).to_fixed(), "-1.13");
        assert_eq!(Price::new(-0.001).to_fixed(), "0.00");
    }

    #[test]
    fn rejects_negative_and_nan() {
        assert!(!Price::new(-0.01).is_valid());
        assert!(!Price::new(f64::NAN).is_valid());
        assert!(Price::ZERO.is_valid());
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&Price::new(19.5)).unwrap();
        assert_eq!(json, "19.5");
    }

    proptest! {
        #[test]
        fn sum_matches_float_sum(a in 0.0f64..10_000.0, b in 0.0f64..10_000.0) {
            let total: Price = [Price::new(a), Price::new(b)].into_iter().sum();
            prop_assert!((total.amount() - (a + b)).abs() < 1e-9);
        }
    }
}

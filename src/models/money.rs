//! Fixed-point currency amounts

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::CENTS_PER_UNIT;

/// A currency amount held in integer minor units (cents).
///
/// On the wire amounts travel as plain JSON numbers in major units
/// (`450`, `99.5`); conversion happens only at the serde boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Whole major units, e.g. `Money::from_major(450)` is $450.00
    pub const fn from_major(units: i64) -> Self {
        Money(units * CENTS_PER_UNIT)
    }

    /// Convert a decimal major-unit amount, rounding to the nearest cent.
    pub fn from_major_f64(units: f64) -> Option<Self> {
        if !units.is_finite() {
            return None;
        }
        let cents = (units * CENTS_PER_UNIT as f64).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Money(cents as i64))
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_mul(self, factor: i64) -> Option<Money> {
        self.0.checked_mul(factor).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_unit = CENTS_PER_UNIT as u64;
        write!(f, "{}${}.{:02}", sign, abs / per_unit, abs % per_unit)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % CENTS_PER_UNIT == 0 {
            serializer.serialize_i64(self.0 / CENTS_PER_UNIT)
        } else {
            serializer.serialize_f64(self.0 as f64 / CENTS_PER_UNIT as f64)
        }
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

struct MoneyVisitor;

impl de::Visitor<'_> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a currency amount in major units")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        v.checked_mul(CENTS_PER_UNIT)
            .map(Money)
            .ok_or_else(|| E::custom("currency amount out of range"))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        let v = i64::try_from(v).map_err(|_| E::custom("currency amount out of range"))?;
        self.visit_i64(v)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::from_major_f64(v).ok_or_else(|| E::custom("currency amount out of range"))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Money, E> {
        let parsed: f64 = v
            .trim()
            .parse()
            .map_err(|_| E::custom(format!("invalid currency amount: {}", v)))?;
        self.visit_f64(parsed)
    }
}

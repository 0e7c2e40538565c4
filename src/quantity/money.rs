use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
    ops::{Div, Mul},
};

use ordered_float::OrderedFloat;

use crate::quantity::percent::Percent;

/// US dollar amount.
#[derive(
    Copy,
    Clone,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::FromStr,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Dollars(pub f64);

impl Dollars {
    pub const ZERO: Self = Self(0.0);
}

impl Display for Dollars {
    /// Format with grouped thousands and cents, e.g. `$57,466.67`.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        #[expect(clippy::cast_possible_truncation)]
        #[expect(clippy::cast_sign_loss)]
        let total_cents = (self.0.abs() * 100.0).round() as u64;
        let whole = (total_cents / 100).to_string();
        let cents = total_cents % 100;

        if self.0.is_sign_negative() && total_cents != 0 {
            write!(f, "-")?;
        }
        write!(f, "$")?;
        for (position, digit) in whole.chars().enumerate() {
            if position != 0 && (whole.len() - position) % 3 == 0 {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, ".{cents:02}")
    }
}

impl Debug for Dollars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}$", self.0)
    }
}

impl PartialOrd for Dollars {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dollars {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.0).cmp(&OrderedFloat(other.0))
    }
}

impl PartialEq for Dollars {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.0).eq(&OrderedFloat(other.0))
    }
}

impl Eq for Dollars {}

impl Mul<f64> for Dollars {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Dollars {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl Mul<Percent> for Dollars {
    type Output = Self;

    fn mul(self, rhs: Percent) -> Self::Output {
        self * rhs.to_proportion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_groups_thousands() {
        assert_eq!(Dollars(57466.666_666).to_string(), "$57,466.67");
        assert_eq!(Dollars(1_234_567.0).to_string(), "$1,234,567.00");
    }

    #[test]
    fn display_small_amounts() {
        assert_eq!(Dollars(0.5).to_string(), "$0.50");
        assert_eq!(Dollars(1000.0).to_string(), "$1,000.00");
    }

    #[test]
    fn tariff_share() {
        assert_eq!(Dollars(1000.0) * Percent(73.8), Dollars(738.0));
    }
}

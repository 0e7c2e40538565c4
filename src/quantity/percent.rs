use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter},
};

use ordered_float::OrderedFloat;

/// Percentage points, `64.5` meaning 64.5%.
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
pub struct Percent(pub f64);

impl Percent {
    pub const ZERO: Self = Self(0.0);

    /// Convert into a unit-less proportion: `Percent(64.5)` becomes `0.645`.
    #[must_use]
    pub fn to_proportion(self) -> f64 {
        self.0 / 100.0
    }
}

impl Display for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

impl Debug for Percent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}%", self.0)
    }
}

impl PartialOrd for Percent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Percent {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.0).cmp(&OrderedFloat(other.0))
    }
}

impl PartialEq for Percent {
    fn eq(&self, other: &Self) -> bool {
        OrderedFloat(self.0).eq(&OrderedFloat(other.0))
    }
}

impl Eq for Percent {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_proportion_ok() {
        assert_eq!(Percent(64.5).to_proportion(), 0.645);
        assert_eq!(Percent::ZERO.to_proportion(), 0.0);
    }

    #[test]
    fn display_ok() {
        assert_eq!(Percent(64.5).to_string(), "64.5%");
        assert_eq!(Percent(100.0).to_string(), "100.0%");
    }
}

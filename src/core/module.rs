use std::{
    fmt::{Debug, Display, Formatter},
    ops::{Div, Mul},
};

use crate::quantity::{energy::KilowattHours, money::Dollars, power::Kilowatts};

/// Fixed building block the cabinets are assembled from.
///
/// Only `size` enters the calculation; `power_ceiling` is the per-module
/// rating quoted alongside the results.
#[derive(Copy, Clone, Debug)]
pub struct ModuleSpec {
    pub size: KilowattHours,
    pub power_ceiling: Kilowatts,
}

impl Default for ModuleSpec {
    fn default() -> Self {
        Self {
            size: KilowattHours(10.24),
            power_ceiling: Kilowatts(90.0),
        }
    }
}

impl ModuleSpec {
    /// Number of whole modules needed to store the energy, at least one.
    #[expect(clippy::cast_possible_truncation)]
    #[expect(clippy::cast_sign_loss)]
    #[must_use]
    pub fn count_for(&self, energy: KilowattHours) -> ModuleCount {
        debug_assert!(self.size > KilowattHours::ZERO);
        debug_assert!(energy >= KilowattHours::ZERO);
        ModuleCount(((energy / self.size).ceil() as u32).max(1))
    }
}

/// Count of whole battery modules, the billing granularity.
#[derive(Copy, Clone, Eq, Ord, PartialEq, PartialOrd, serde::Serialize)]
pub struct ModuleCount(pub u32);

impl Display for ModuleCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for ModuleCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Mul<ModuleCount> for Dollars {
    type Output = Self;

    fn mul(self, rhs: ModuleCount) -> Self::Output {
        self * f64::from(rhs.0)
    }
}

impl Div<ModuleCount> for Dollars {
    type Output = Self;

    fn div(self, rhs: ModuleCount) -> Self::Output {
        self / f64::from(rhs.0)
    }
}

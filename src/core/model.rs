use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::quantity::{
    energy::KilowattHours, money::Dollars, percent::Percent, power::Kilowatts, time::Hours,
};

/// Nominal cabinet voltage, a categorical class rather than a measurement.
#[derive(
    Copy,
    Clone,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    derive_more::FromStr,
    serde::Deserialize,
    serde::Serialize,
)]
pub struct Voltage(pub u16);

impl Display for Voltage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} V", self.0)
    }
}

impl std::fmt::Debug for Voltage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}V", self.0)
    }
}

/// Pre-configured cabinet model the estimator interpolates between.
///
/// `backup_hours` is the nameplate figure and may disagree with the
/// `energy / power` ratio.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReferenceModel {
    pub name: String,
    pub voltage: Voltage,
    pub power: Kilowatts,
    pub energy: KilowattHours,
    pub backup_hours: Hours,
    pub price_without_tariff: Dollars,
    pub price_with_tariff: Dollars,
}

impl ReferenceModel {
    /// Tariff component baked into this row's pricing.
    #[must_use]
    pub fn tariff(&self) -> Dollars {
        self.price_with_tariff - self.price_without_tariff
    }

    /// Tariff component as a percentage of the base price.
    #[must_use]
    pub fn tariff_percent(&self) -> Percent {
        Percent(self.tariff().0 / self.price_without_tariff.0 * 100.0)
    }
}

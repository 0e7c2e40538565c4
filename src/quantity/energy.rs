use std::ops::Div;

use crate::quantity::{power::Kilowatts, time::Hours};

quantity!(KilowattHours, "kWh");

/// Dimensionless ratio of two energies, e.g. a cabinet energy in module sizes.
impl Div for KilowattHours {
    type Output = f64;

    fn div(self, rhs: Self) -> Self::Output {
        self.0 / rhs.0
    }
}

impl Div<Kilowatts> for KilowattHours {
    type Output = Hours;

    fn div(self, rhs: Kilowatts) -> Self::Output {
        Hours(self.0 / rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backup_hours_from_energy_and_power() {
        assert_eq!(KilowattHours(100.0) / Kilowatts(25.0), Hours(4.0));
    }

    #[test]
    fn display_ok() {
        assert_eq!(KilowattHours(10.24).to_string(), "10.24 kWh");
    }
}

use bon::Builder;

use crate::{
    core::model::Voltage,
    quantity::{energy::KilowattHours, percent::Percent, power::Kilowatts, time::Hours},
};

/// A single cabinet configuration to price.
#[derive(Builder, Clone, Debug)]
pub struct Query {
    pub voltage: Voltage,
    pub power: Kilowatts,
    pub energy: KilowattHours,
    pub backup_hours: Hours,
    #[builder(default = true)]
    pub include_tariff: bool,
    #[builder(default = Percent(64.5))]
    pub tariff_percent: Percent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let query = Query::builder()
            .voltage(Voltage(480))
            .power(Kilowatts(30.0))
            .energy(KilowattHours(100.0))
            .backup_hours(Hours(3.3))
            .build();
        assert!(query.include_tariff);
        assert_eq!(query.tariff_percent, Percent(64.5));
    }
}

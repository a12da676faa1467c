use serde::Serialize;

use crate::{
    error::EstimateError,
    estimate::DomainEstimate,
    quantity::{
        energy::KilowattHours,
        mass::KilogramsCo2,
        rate::{KilogramsCo2PerKilowattHour, KilowattHoursPerCubicMeter, KilowattHoursPerLiter},
        volume::{CubicMeters, Liters},
    },
};

/// Per-capita daily water usage.
pub const DEFAULT_DAILY_BASELINE: Liters = Liters(305.0);

/// Upper bound accepted from the input layer.
pub const MAX_DAILY_USAGE: Liters = Liters(500.0);

/// Share of the saved water that would have been heated.
const HOT_WATER_SHARE: f64 = 0.40;

const HEATING_ENERGY: KilowattHoursPerLiter = KilowattHoursPerLiter(0.029);
const SUPPLY_ENERGY: KilowattHoursPerCubicMeter = KilowattHoursPerCubicMeter(0.5);
const GRID_CO2: KilogramsCo2PerKilowattHour = KilogramsCo2PerKilowattHour(0.4);
const CO2_ABSORBED_PER_TREE: KilogramsCo2 = KilogramsCo2(21.0);

/// Annual footprint attributed per liter of daily usage.
const ANNUAL_CO2_PER_DAILY_LITER: f64 = 0.01;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct WaterEstimate {
    pub daily_saving: Liters,
    pub annual_saving: Liters,
    pub energy_saved: KilowattHours,
    pub co2_avoided: KilogramsCo2,
    pub equivalent_trees: f64,
}

/// Estimate the annual effect of using less water than the baseline.
///
/// Usage at or above the baseline is not an error: the saving is clamped to
/// zero and every derived figure follows.
pub fn estimate(daily_usage: Liters, baseline: Liters) -> Result<WaterEstimate, EstimateError> {
    validate_daily_usage(daily_usage)?;

    let daily_saving = (baseline - daily_usage).max(Liters::ZERO);
    let annual_saving = daily_saving * 365.0;

    let hot_water = annual_saving * HOT_WATER_SHARE;
    let cold_supply = CubicMeters::from(annual_saving * (1.0 - HOT_WATER_SHARE));
    let energy_saved: KilowattHours = hot_water * HEATING_ENERGY + cold_supply * SUPPLY_ENERGY;

    let co2_avoided = energy_saved * GRID_CO2;
    let equivalent_trees = co2_avoided / CO2_ABSORBED_PER_TREE;

    Ok(WaterEstimate { daily_saving, annual_saving, energy_saved, co2_avoided, equivalent_trees })
}

/// Annual footprint of the usage itself, as opposed to the saving.
/// This is the term that feeds the aggregate tally.
pub fn footprint(daily_usage: Liters) -> Result<DomainEstimate, EstimateError> {
    validate_daily_usage(daily_usage)?;
    Ok(DomainEstimate {
        label: "water",
        energy: None,
        co2: KilogramsCo2(daily_usage.0 * ANNUAL_CO2_PER_DAILY_LITER),
    })
}

fn validate_daily_usage(daily_usage: Liters) -> Result<(), EstimateError> {
    ensure_input!(
        (Liters::ZERO..=MAX_DAILY_USAGE).contains(&daily_usage),
        "daily water usage must be within 0..={MAX_DAILY_USAGE}, got {daily_usage}",
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_baseline_usage_is_neutral() -> Result<(), EstimateError> {
        let estimate = estimate(DEFAULT_DAILY_BASELINE, DEFAULT_DAILY_BASELINE)?;
        assert_eq!(estimate.daily_saving, Liters::ZERO);
        assert_eq!(estimate.co2_avoided, KilogramsCo2::ZERO);
        Ok(())
    }

    #[test]
    fn test_above_baseline_usage_is_neutral() -> Result<(), EstimateError> {
        let estimate = estimate(Liters(400.0), DEFAULT_DAILY_BASELINE)?;
        assert_eq!(estimate.daily_saving, Liters::ZERO);
        assert_eq!(estimate.annual_saving, Liters::ZERO);
        assert_eq!(estimate.energy_saved, KilowattHours::ZERO);
        assert_abs_diff_eq!(estimate.equivalent_trees, 0.0);
        Ok(())
    }

    #[test]
    fn test_hundred_liters_per_day() -> Result<(), EstimateError> {
        let estimate = estimate(Liters(100.0), DEFAULT_DAILY_BASELINE)?;
        assert_eq!(estimate.daily_saving, Liters(205.0));
        assert_eq!(estimate.annual_saving, Liters(74825.0));
        assert_abs_diff_eq!(estimate.energy_saved.0, 890.42, epsilon = 0.01);
        assert_abs_diff_eq!(estimate.co2_avoided.0, 356.17, epsilon = 0.01);
        assert_abs_diff_eq!(estimate.equivalent_trees, 16.96, epsilon = 0.01);
        Ok(())
    }

    #[test]
    fn test_out_of_range_usage_fails() {
        assert!(matches!(
            estimate(Liters(500.5), DEFAULT_DAILY_BASELINE),
            Err(EstimateError::InvalidInput(_))
        ));
        assert!(matches!(
            estimate(Liters(-1.0), DEFAULT_DAILY_BASELINE),
            Err(EstimateError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_footprint_scales_with_usage() -> Result<(), EstimateError> {
        let estimate = footprint(Liters(100.0))?;
        assert_eq!(estimate.co2, KilogramsCo2(1.0));
        assert!(estimate.energy.is_none());
        Ok(())
    }

    #[test]
    fn test_idempotence() -> Result<(), EstimateError> {
        let first = estimate(Liters(100.0), DEFAULT_DAILY_BASELINE)?;
        let second = estimate(Liters(100.0), DEFAULT_DAILY_BASELINE)?;
        assert_eq!(first, second);
        Ok(())
    }
}

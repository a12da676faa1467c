use serde::Serialize;

use crate::{
    error::EstimateError,
    estimate::DomainEstimate,
    quantity::{
        cost::Won,
        energy::KilowattHours,
        mass::KilogramsCo2,
        rate::GramsCo2PerKilowattHour,
        time::Months,
    },
    tariff::{BillBreakdown, TariffSchedule},
};

/// Grid carbon intensity. Independent of the flat per-kilowatt-hour factor
/// used on the water path; the two assumptions are intentionally kept apart.
pub const GRID_EMISSION_FACTOR: GramsCo2PerKilowattHour = GramsCo2PerKilowattHour(409.0);

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct ElectricitySavingEstimate {
    pub months: Months,

    /// Energy saved over the whole billing period.
    pub saved_energy: KilowattHours,

    /// Monthly saving relative to the usage before, in percent.
    pub saved_percent: f64,

    pub bill_before: BillBreakdown,
    pub bill_after: BillBreakdown,

    /// Money saved over the whole billing period.
    pub saved_money: Won,

    /// Energy still consumed over the whole billing period.
    pub energy_after: KilowattHours,

    pub co2_before: KilogramsCo2,
    pub co2_after: KilogramsCo2,
    pub co2_saved: KilogramsCo2,
}

impl ElectricitySavingEstimate {
    pub const fn into_domain(self) -> DomainEstimate {
        DomainEstimate {
            label: "electricity",
            energy: Some(self.energy_after),
            co2: self.co2_after,
        }
    }
}

pub fn estimate(
    usage_before: KilowattHours,
    usage_after: KilowattHours,
    months: Months,
    schedule: &TariffSchedule,
) -> Result<ElectricitySavingEstimate, EstimateError> {
    ensure_input!(
        usage_before > KilowattHours::ZERO,
        "usage before saving must be positive, got {usage_before}",
    );
    ensure_input!(
        usage_after >= KilowattHours::ZERO,
        "usage after saving must be non-negative, got {usage_after}",
    );
    ensure_input!(
        usage_after <= usage_before,
        "usage after saving ({usage_after}) exceeds the usage before ({usage_before})",
    );

    let monthly_saving = usage_before - usage_after;
    let saved_energy = monthly_saving * months;
    let saved_percent = (monthly_saving / usage_before) * 100.0;

    let bill_before = schedule.bill(usage_before)?;
    let bill_after = schedule.bill(usage_after)?;
    let saved_money = (bill_before.total - bill_after.total) * months;

    let energy_after = usage_after * months;
    let co2_before = (usage_before * months) * GRID_EMISSION_FACTOR;
    let co2_after = energy_after * GRID_EMISSION_FACTOR;

    Ok(ElectricitySavingEstimate {
        months,
        saved_energy,
        saved_percent,
        bill_before,
        bill_after,
        saved_money,
        energy_after,
        co2_before,
        co2_after,
        co2_saved: co2_before - co2_after,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_single_month_saving() -> Result<(), EstimateError> {
        let estimate = estimate(
            KilowattHours(400.0),
            KilowattHours(300.0),
            Months(1),
            &TariffSchedule::default(),
        )?;
        assert_eq!(estimate.saved_energy, KilowattHours(100.0));
        assert_abs_diff_eq!(estimate.saved_percent, 25.0);
        Ok(())
    }

    #[test]
    fn test_saved_money_is_bill_difference() -> Result<(), EstimateError> {
        let schedule = TariffSchedule::default();
        let estimate =
            estimate(KilowattHours(400.0), KilowattHours(300.0), Months(12), &schedule)?;
        let expected =
            (schedule.bill(KilowattHours(400.0))?.total - schedule.bill(KilowattHours(300.0))?.total).0 * 12.0;
        assert_abs_diff_eq!(estimate.saved_money.0, expected);
        Ok(())
    }

    #[test]
    fn test_grid_emission_factor() -> Result<(), EstimateError> {
        let estimate = estimate(
            KilowattHours(400.0),
            KilowattHours(300.0),
            Months(1),
            &TariffSchedule::default(),
        )?;
        assert_abs_diff_eq!(estimate.co2_before.0, 163.6);
        assert_abs_diff_eq!(estimate.co2_after.0, 122.7);
        assert_abs_diff_eq!(estimate.co2_saved.0, 40.9, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_increased_usage_fails() {
        assert!(matches!(
            estimate(
                KilowattHours(300.0),
                KilowattHours(400.0),
                Months(1),
                &TariffSchedule::default(),
            ),
            Err(EstimateError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_zero_usage_before_fails() {
        assert!(matches!(
            estimate(
                KilowattHours::ZERO,
                KilowattHours::ZERO,
                Months(1),
                &TariffSchedule::default(),
            ),
            Err(EstimateError::InvalidInput(_))
        ));
    }
}

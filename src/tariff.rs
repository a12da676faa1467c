use std::path::Path;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    error::EstimateError,
    prelude::*,
    quantity::{cost::Won, energy::KilowattHours, rate::WonPerKilowattHour},
};

/// Progressive tariff schedule, loaded once at process start and never
/// mutated afterwards.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TariffSchedule {
    /// Fixed monthly fee, charged regardless of usage.
    #[serde(default)]
    pub base_fee: Won,

    /// Electricity fund surcharge rate, applied to the energy charge pre-VAT.
    pub fund_rate: f64,

    pub vat_rate: f64,

    /// Ordered pricing bands. Every tier except the last is capped by its
    /// `limit`; the last tier must be unbounded.
    pub tiers: Vec<Tier>,
}

#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct Tier {
    #[serde(default)]
    pub limit: Option<KilowattHours>,

    pub rate: WonPerKilowattHour,
}

impl Default for TariffSchedule {
    /// Low-voltage residential schedule.
    fn default() -> Self {
        Self {
            base_fee: Won::ZERO,
            fund_rate: 0.037,
            vat_rate: 0.1,
            tiers: vec![
                Tier { limit: Some(KilowattHours(200.0)), rate: WonPerKilowattHour(78.3) },
                Tier { limit: Some(KilowattHours(400.0)), rate: WonPerKilowattHour(147.3) },
                Tier { limit: None, rate: WonPerKilowattHour(215.6) },
            ],
        }
    }
}

impl TariffSchedule {
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read the tariff schedule from `{path:?}`"))?;
        let schedule: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse the tariff schedule from `{path:?}`"))?;
        schedule.validate()?;
        Ok(schedule)
    }

    pub fn validate(&self) -> Result<(), EstimateError> {
        let Some((last, bounded)) = self.tiers.split_last() else {
            return Err(EstimateError::InvalidInput("tariff schedule has no tiers".to_string()));
        };
        ensure_input!(last.limit.is_none(), "the last tier must be unbounded");
        for tier in bounded {
            ensure_input!(tier.limit.is_some(), "only the last tier may be unbounded");
        }
        for (lower, upper) in bounded.iter().tuple_windows() {
            ensure_input!(
                lower.limit < upper.limit,
                "tier limits must be strictly increasing: {:?} is followed by {:?}",
                lower.limit,
                upper.limit,
            );
        }
        for tier in &self.tiers {
            ensure_input!(
                tier.rate >= WonPerKilowattHour::ZERO,
                "tier rates must be non-negative, got {}",
                tier.rate,
            );
        }
        Ok(())
    }

    /// Compute one month's bill with progressive marginal pricing: the usage
    /// falling within each band is charged at that band's rate. Usage exactly
    /// on a threshold belongs to the lower band.
    pub fn bill(&self, usage: KilowattHours) -> Result<BillBreakdown, EstimateError> {
        self.validate()?;
        ensure_input!(usage >= KilowattHours::ZERO, "usage must be non-negative, got {usage}");

        let mut energy_charge = Won::ZERO;
        let mut lower = KilowattHours::ZERO;
        for tier in &self.tiers {
            let upper = tier.limit.unwrap_or_else(|| usage.max(lower));
            let band_usage = (usage.min(upper) - lower).max(KilowattHours::ZERO);
            energy_charge += band_usage * tier.rate;
            lower = upper;
        }

        let fund = energy_charge * self.fund_rate;
        let vat = (energy_charge + fund) * self.vat_rate;
        let total = self.base_fee + energy_charge + fund + vat;
        Ok(BillBreakdown { energy_charge, fund, vat, total })
    }
}

/// One month's bill, split into its statutory components.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct BillBreakdown {
    pub energy_charge: Won,
    pub fund: Won,
    pub vat: Won,

    /// Base fee plus energy charge plus fund plus VAT.
    pub total: Won,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_first_tier_is_flat() -> Result<(), EstimateError> {
        let schedule = TariffSchedule::default();
        for usage in [0.0, 1.0, 100.0, 199.5, 200.0] {
            let bill = schedule.bill(KilowattHours(usage))?;
            assert_abs_diff_eq!(bill.energy_charge.0, usage * 78.3);
        }
        Ok(())
    }

    #[test]
    fn test_second_tier_is_marginal() -> Result<(), EstimateError> {
        let bill = TariffSchedule::default().bill(KilowattHours(300.0))?;
        assert_abs_diff_eq!(bill.energy_charge.0, 200.0 * 78.3 + 100.0 * 147.3);
        Ok(())
    }

    #[test]
    fn test_third_tier_is_marginal() -> Result<(), EstimateError> {
        let bill = TariffSchedule::default().bill(KilowattHours(500.0))?;
        assert_abs_diff_eq!(bill.energy_charge.0, 200.0 * 78.3 + 200.0 * 147.3 + 100.0 * 215.6);
        Ok(())
    }

    #[test]
    fn test_surcharges() -> Result<(), EstimateError> {
        let bill = TariffSchedule::default().bill(KilowattHours(300.0))?;
        assert_abs_diff_eq!(bill.fund.0, bill.energy_charge.0 * 0.037);
        assert_abs_diff_eq!(bill.vat.0, (bill.energy_charge.0 + bill.fund.0) * 0.1);
        assert_abs_diff_eq!(bill.total.0, bill.energy_charge.0 + bill.fund.0 + bill.vat.0);
        Ok(())
    }

    #[test]
    fn test_zero_usage_is_base_fee_only() -> Result<(), EstimateError> {
        let schedule = TariffSchedule { base_fee: Won(1000.0), ..TariffSchedule::default() };
        let bill = schedule.bill(KilowattHours::ZERO)?;
        assert_eq!(bill.energy_charge, Won::ZERO);
        assert_eq!(bill.fund, Won::ZERO);
        assert_eq!(bill.vat, Won::ZERO);
        assert_eq!(bill.total, Won(1000.0));
        Ok(())
    }

    #[test]
    fn test_negative_usage_fails() {
        let result = TariffSchedule::default().bill(KilowattHours(-1.0));
        assert!(matches!(result, Err(EstimateError::InvalidInput(_))));
    }

    #[test]
    fn test_empty_schedule_fails() {
        let schedule = TariffSchedule { tiers: Vec::new(), ..TariffSchedule::default() };
        assert!(matches!(
            schedule.bill(KilowattHours(100.0)),
            Err(EstimateError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_non_increasing_limits_fail() {
        let schedule = TariffSchedule {
            tiers: vec![
                Tier { limit: Some(KilowattHours(400.0)), rate: WonPerKilowattHour(78.3) },
                Tier { limit: Some(KilowattHours(200.0)), rate: WonPerKilowattHour(147.3) },
                Tier { limit: None, rate: WonPerKilowattHour(215.6) },
            ],
            ..TariffSchedule::default()
        };
        assert!(matches!(schedule.validate(), Err(EstimateError::InvalidInput(_))));
    }

    #[test]
    fn test_bounded_last_tier_fails() {
        let schedule = TariffSchedule {
            tiers: vec![Tier {
                limit: Some(KilowattHours(200.0)),
                rate: WonPerKilowattHour(78.3),
            }],
            ..TariffSchedule::default()
        };
        assert!(matches!(schedule.validate(), Err(EstimateError::InvalidInput(_))));
    }

    #[test]
    fn test_toml_round_trip() -> Result {
        let toml = r#"
            fund_rate = 0.037
            vat_rate = 0.1

            [[tiers]]
            limit = 200.0
            rate = 78.3

            [[tiers]]
            limit = 400.0
            rate = 147.3

            [[tiers]]
            rate = 215.6
        "#;
        let schedule: TariffSchedule = toml::from_str(toml)?;
        schedule.validate()?;
        assert_eq!(schedule.base_fee, Won::ZERO);
        assert_eq!(schedule.tiers.len(), 3);
        assert_eq!(schedule.tiers[1].limit, Some(KilowattHours(400.0)));
        let bill = schedule.bill(KilowattHours(300.0))?;
        assert_abs_diff_eq!(bill.energy_charge.0, TariffSchedule::default().bill(KilowattHours(300.0))?.energy_charge.0);
        Ok(())
    }
}

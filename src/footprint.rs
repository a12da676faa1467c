use bon::bon;
use serde::Serialize;

use crate::{estimate::DomainEstimate, quantity::mass::KilogramsCo2};

/// Annual per-person reference the total is compared against.
pub const WORLD_AVERAGE_CO2: KilogramsCo2 = KilogramsCo2(4800.0);

/// Baseline emissions not attributable to any single domain.
pub const FIXED_ANNUAL_EMISSION: KilogramsCo2 = KilogramsCo2(1300.0);

const CO2_SAVING_PER_PENGUIN: KilogramsCo2 = KilogramsCo2(100.0);

/// Scale used by the visual reward renderer. Deliberately different from
/// [`CO2_SAVING_PER_PENGUIN`]; the two figures are displayed side by side
/// and are not meant to agree.
const CO2_PER_REWARD_PENGUIN: KilogramsCo2 = KilogramsCo2(5000.0);

/// Combined annual footprint across all the domains that produced an
/// estimate, compared against the world average.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AggregateFootprint {
    /// The domain estimates that were actually included.
    pub domains: Vec<DomainEstimate>,

    pub total_co2: KilogramsCo2,
    pub world_average_co2: KilogramsCo2,

    /// World average minus the total: positive means emitting less than the
    /// average person.
    pub delta: KilogramsCo2,

    pub fixed_emission_included: bool,
}

#[bon]
impl AggregateFootprint {
    #[builder]
    pub fn new(
        electricity: Option<DomainEstimate>,
        water: Option<DomainEstimate>,
        transport: Option<DomainEstimate>,
        waste: Option<DomainEstimate>,
        #[builder(default = true)] include_fixed_baseline: bool,
    ) -> Self {
        let domains: Vec<DomainEstimate> =
            [electricity, water, transport, waste].into_iter().flatten().collect();
        let mut total_co2: KilogramsCo2 = domains.iter().map(|domain| domain.co2).sum();
        if include_fixed_baseline {
            total_co2 += FIXED_ANNUAL_EMISSION;
        }
        Self {
            domains,
            total_co2,
            world_average_co2: WORLD_AVERAGE_CO2,
            delta: WORLD_AVERAGE_CO2 - total_co2,
            fixed_emission_included: include_fixed_baseline,
        }
    }
}

impl AggregateFootprint {
    /// Symbolic impact units: one penguin per hundred kilograms under the
    /// world average, never negative.
    pub fn penguins_saved(&self) -> f64 {
        self.delta.max(KilogramsCo2::ZERO) / CO2_SAVING_PER_PENGUIN
    }

    /// The figure consumed by the visual reward renderer. May be negative.
    pub fn reward_penguins(&self) -> f64 {
        self.delta / CO2_PER_REWARD_PENGUIN
    }
}

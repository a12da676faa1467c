use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{
    error::EstimateError,
    estimate::DomainEstimate,
    quantity::{distance::Kilometers, mass::KilogramsCo2, rate::KilogramsCo2PerKilometer},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum, Serialize)]
pub enum TransportMode {
    Car,
    Bus,
    Subway,
    BikeWalk,
}

impl TransportMode {
    pub const fn emission_factor(self) -> KilogramsCo2PerKilometer {
        match self {
            Self::Car => KilogramsCo2PerKilometer(0.170),
            Self::Bus => KilogramsCo2PerKilometer(0.093),
            Self::Subway => KilogramsCo2PerKilometer(0.091),
            Self::BikeWalk => KilogramsCo2PerKilometer(0.056),
        }
    }
}

impl Display for TransportMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Car => write!(f, "Car"),
            Self::Bus => write!(f, "Bus"),
            Self::Subway => write!(f, "Subway"),
            Self::BikeWalk => write!(f, "Bike/walk"),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TransportEstimate {
    pub mode: TransportMode,

    /// Footprint of one day's round trip.
    pub daily_co2: KilogramsCo2,

    pub annual_co2: KilogramsCo2,
}

impl TransportEstimate {
    pub const fn into_domain(self) -> DomainEstimate {
        DomainEstimate { label: "transport", energy: None, co2: self.annual_co2 }
    }
}

pub fn estimate(
    mode: TransportMode,
    round_trip: Kilometers,
) -> Result<TransportEstimate, EstimateError> {
    ensure_input!(
        round_trip >= Kilometers::ZERO,
        "round-trip distance must be non-negative, got {round_trip}",
    );
    let daily_co2 = round_trip * mode.emission_factor();
    Ok(TransportEstimate { mode, daily_co2, annual_co2: daily_co2 * 365.0 })
}

use std::fmt::{Display, Formatter};

use serde::Serialize;

use crate::{estimate::DomainEstimate, quantity::mass::KilogramsCo2};

#[derive(Copy, Clone, Debug, Eq, PartialEq, clap::ValueEnum, Serialize)]
pub enum WasteMethod {
    FullSeparation,
    MixedCollection,
}

impl WasteMethod {
    pub const fn annual_co2(self) -> KilogramsCo2 {
        match self {
            Self::FullSeparation => KilogramsCo2(203.0),
            Self::MixedCollection => KilogramsCo2(193.0),
        }
    }
}

impl Display for WasteMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FullSeparation => write!(f, "Full separation"),
            Self::MixedCollection => write!(f, "Mixed collection"),
        }
    }
}

pub const fn estimate(method: WasteMethod) -> DomainEstimate {
    DomainEstimate { label: "waste", energy: None, co2: method.annual_co2() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_lookup() {
        assert_eq!(estimate(WasteMethod::FullSeparation).co2, KilogramsCo2(203.0));
        assert_eq!(estimate(WasteMethod::MixedCollection).co2, KilogramsCo2(193.0));
    }
}

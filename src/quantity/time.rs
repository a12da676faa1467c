use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::quantity::{cost::Won, energy::KilowattHours, mass::KilogramsCo2};

/// Inclusive count of billing months, always at least one.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Deserialize,
    Serialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("{_0} mo")]
pub struct Months(pub u32);

impl Mul<Months> for KilowattHours {
    type Output = Self;

    fn mul(self, rhs: Months) -> Self::Output {
        Self(self.0 * f64::from(rhs.0))
    }
}

impl Mul<Months> for Won {
    type Output = Self;

    fn mul(self, rhs: Months) -> Self::Output {
        Self(self.0 * f64::from(rhs.0))
    }
}

impl Mul<Months> for KilogramsCo2 {
    type Output = Self;

    fn mul(self, rhs: Months) -> Self::Output {
        Self(self.0 * f64::from(rhs.0))
    }
}

use std::ops::Mul;

use crate::quantity::{
    energy::KilowattHours,
    rate::{KilowattHoursPerCubicMeter, KilowattHoursPerLiter},
};

quantity!(Liters, "L", 0);

quantity!(CubicMeters, "m³", 3);

impl From<Liters> for CubicMeters {
    fn from(liters: Liters) -> Self {
        Self(liters.0 / 1000.0)
    }
}

impl Mul<KilowattHoursPerLiter> for Liters {
    type Output = KilowattHours;

    fn mul(self, rhs: KilowattHoursPerLiter) -> Self::Output {
        KilowattHours(self.0 * rhs.0)
    }
}

impl Mul<KilowattHoursPerCubicMeter> for CubicMeters {
    type Output = KilowattHours;

    fn mul(self, rhs: KilowattHoursPerCubicMeter) -> Self::Output {
        KilowattHours(self.0 * rhs.0)
    }
}

use std::ops::Mul;

use crate::quantity::{
    cost::Won,
    mass::KilogramsCo2,
    rate::{GramsCo2PerKilowattHour, KilogramsCo2PerKilowattHour, WonPerKilowattHour},
};

quantity!(KilowattHours, "kWh");

impl Mul<WonPerKilowattHour> for KilowattHours {
    type Output = Won;

    fn mul(self, rhs: WonPerKilowattHour) -> Self::Output {
        Won(self.0 * rhs.0)
    }
}

impl Mul<KilogramsCo2PerKilowattHour> for KilowattHours {
    type Output = KilogramsCo2;

    fn mul(self, rhs: KilogramsCo2PerKilowattHour) -> Self::Output {
        KilogramsCo2(self.0 * rhs.0)
    }
}

impl Mul<GramsCo2PerKilowattHour> for KilowattHours {
    type Output = KilogramsCo2;

    fn mul(self, rhs: GramsCo2PerKilowattHour) -> Self::Output {
        KilogramsCo2(self.0 * rhs.0 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_grid_intensity_converts_to_kilograms() {
        let co2 = KilowattHours(400.0) * GramsCo2PerKilowattHour(409.0);
        assert_abs_diff_eq!(co2.0, 163.6, epsilon = 1e-9);
    }
}

use std::ops::Mul;

use crate::quantity::{mass::KilogramsCo2, rate::KilogramsCo2PerKilometer};

quantity!(Kilometers, "km", 1);

impl Mul<KilogramsCo2PerKilometer> for Kilometers {
    type Output = KilogramsCo2;

    fn mul(self, rhs: KilogramsCo2PerKilometer) -> Self::Output {
        KilogramsCo2(self.0 * rhs.0)
    }
}

pub mod electricity;
pub mod recycling;
pub mod transport;
pub mod waste;
pub mod water;

use serde::Serialize;

use crate::quantity::{energy::KilowattHours, mass::KilogramsCo2};

/// One category's contribution to the annual footprint.
///
/// Carbon mass is always present; the energy equivalent only exists for the
/// domains that route through electricity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct DomainEstimate {
    pub label: &'static str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<KilowattHours>,

    pub co2: KilogramsCo2,
}

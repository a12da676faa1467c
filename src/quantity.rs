#[macro_use]
pub mod macros;

pub mod cost;
pub mod distance;
pub mod energy;
pub mod mass;
pub mod rate;
pub mod time;
pub mod volume;

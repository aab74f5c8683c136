use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraverseMode {
    #[default]
    Walk,
    Bicycle,
    Car,
    /// rented scooters and similar light vehicles
    MicroMobility,
    Transit,
}

impl TraverseMode {
    pub fn is_transit(&self) -> bool {
        matches!(self, TraverseMode::Transit)
    }

    pub fn is_driving(&self) -> bool {
        matches!(self, TraverseMode::Car)
    }
}

impl Display for TraverseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TraverseMode::Walk => "walk",
            TraverseMode::Bicycle => "bicycle",
            TraverseMode::Car => "car",
            TraverseMode::MicroMobility => "micro_mobility",
            TraverseMode::Transit => "transit",
        };
        write!(f, "{s}")
    }
}

use serde::{Deserialize, Serialize};

/// deployment toggles for the rented-vehicle incomparability rules. when a
/// toggle is on, two renting states that differ in that attribute are never
/// compared against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DominanceRules {
    pub compare_vehicle_provider: bool,
    pub compare_vehicle_type: bool,
    pub compare_vehicle_range: bool,
    pub vehicle_range_bucket_meters: f64,
    pub compare_vehicle_droppable: bool,
}

impl Default for DominanceRules {
    fn default() -> Self {
        DominanceRules {
            compare_vehicle_provider: true,
            compare_vehicle_type: true,
            compare_vehicle_range: true,
            vehicle_range_bucket_meters: 5000.0,
            compare_vehicle_droppable: true,
        }
    }
}

impl DominanceRules {
    /// rules with every configurable vehicle toggle off.
    pub fn permissive() -> DominanceRules {
        DominanceRules {
            compare_vehicle_provider: false,
            compare_vehicle_type: false,
            compare_vehicle_range: false,
            vehicle_range_bucket_meters: 5000.0,
            compare_vehicle_droppable: false,
        }
    }
}

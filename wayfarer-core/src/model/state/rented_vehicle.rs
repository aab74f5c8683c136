use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Bicycle,
    ElectricBicycle,
    Scooter,
    Car,
}

/// the shared vehicle a search branch is currently riding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentedVehicle {
    /// rental network the vehicle was picked up from
    pub network: String,
    /// operator of the vehicle
    pub provider: String,
    pub vehicle_type: VehicleType,
    /// remaining range for vehicles that report it (electric vehicles)
    pub remaining_range_meters: Option<f64>,
    /// whether the vehicle may be left at the trip destination
    pub droppable_at_destination: bool,
}

impl RentedVehicle {
    pub fn new(network: &str, provider: &str, vehicle_type: VehicleType) -> RentedVehicle {
        RentedVehicle {
            network: network.to_string(),
            provider: provider.to_string(),
            vehicle_type,
            remaining_range_meters: None,
            droppable_at_destination: false,
        }
    }

    /// discretizes the remaining range into buckets of `bucket_meters` so that
    /// vehicles with nearly identical ranges compare equal. vehicles without
    /// range information and non-positive bucket sizes produce None.
    pub fn range_bucket(&self, bucket_meters: f64) -> Option<u64> {
        if bucket_meters <= 0.0 {
            return None;
        }
        self.remaining_range_meters
            .map(|range| (range.max(0.0) / bucket_meters).floor() as u64)
    }
}

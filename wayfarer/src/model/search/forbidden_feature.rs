use serde::{Deserialize, Serialize};
use wayfarer_core::model::{
    graph::{EdgeId, VertexId},
    state::{State, TraverseMode, VehicleType},
};

/// a property that disqualifies a search branch during replanning.
///
/// [`ForbiddenFeature::exhibited_by`] tests a single state. a branch has the
/// feature when any state on its back-reference chain exhibits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "value")]
pub enum ForbiddenFeature {
    /// riding a vehicle picked up from this rental network
    RentalNetwork(String),
    VehicleProvider(String),
    VehicleType(VehicleType),
    /// moving in this mode. transit matches states riding a vehicle
    TraverseMode(TraverseMode),
    Vertex(VertexId),
    Edge(EdgeId),
    TransitBoarding,
    AnyOf(Vec<ForbiddenFeature>),
}

impl ForbiddenFeature {
    pub fn exhibited_by(&self, state: &State) -> bool {
        match self {
            ForbiddenFeature::RentalNetwork(network) => {
                state.rental_network() == Some(network.as_str())
            }
            ForbiddenFeature::VehicleProvider(provider) => state
                .rented_vehicle
                .as_ref()
                .map(|v| &v.provider == provider)
                .unwrap_or_default(),
            ForbiddenFeature::VehicleType(vehicle_type) => state
                .rented_vehicle
                .as_ref()
                .map(|v| v.vehicle_type == *vehicle_type)
                .unwrap_or_default(),
            ForbiddenFeature::TraverseMode(TraverseMode::Transit) => state.is_on_board(),
            ForbiddenFeature::TraverseMode(mode) => {
                !state.is_on_board() && state.non_transit_mode == *mode
            }
            ForbiddenFeature::Vertex(vertex_id) => state.vertex_id == *vertex_id,
            ForbiddenFeature::Edge(edge_id) => state.back_edge == Some(*edge_id),
            ForbiddenFeature::TransitBoarding => state.is_on_board(),
            ForbiddenFeature::AnyOf(features) => features.iter().any(|f| f.exhibited_by(state)),
        }
    }
}

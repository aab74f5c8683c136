use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::{RentedVehicle, TraverseMode};
use crate::model::graph::{EdgeClass, EdgeId, VertexId};

/// index of a [`State`] in the [`super::StateStore`] that owns it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct StateId(pub usize);

impl Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// orthogonal feature flags of a search branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StateFlags {
    /// the branch has boarded a transit vehicle at some point
    pub ever_boarded: bool,
    /// the branch is currently riding a transit vehicle
    pub on_board: bool,
    pub car_parked: bool,
    pub bike_parked: bool,
}

/// an immutable snapshot of a search branch at a vertex.
///
/// states form a DAG through `back_state`, an index into the owning
/// [`super::StateStore`]. a state with zero weight and no back state is the
/// origin of its search. new states are produced with
/// [`super::StateEditor`]; existing states are never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub vertex_id: VertexId,
    pub back_state: Option<StateId>,
    pub back_edge: Option<EdgeId>,
    pub back_edge_class: Option<EdgeClass>,
    pub back_edge_turn_restricted: bool,
    pub weight: f64,
    pub elapsed_time_seconds: f64,
    pub walk_distance_meters: f64,
    pub price: f64,
    /// the street mode of this branch, kept while riding transit
    pub non_transit_mode: TraverseMode,
    pub flags: StateFlags,
    pub rented_vehicle: Option<RentedVehicle>,
}

impl State {
    pub fn origin(vertex_id: VertexId, mode: TraverseMode) -> State {
        State {
            vertex_id,
            back_state: None,
            back_edge: None,
            back_edge_class: None,
            back_edge_turn_restricted: false,
            weight: 0.0,
            elapsed_time_seconds: 0.0,
            walk_distance_meters: 0.0,
            price: 0.0,
            non_transit_mode: mode,
            flags: StateFlags::default(),
            rented_vehicle: None,
        }
    }

    pub fn is_origin(&self) -> bool {
        self.back_state.is_none() && self.weight == 0.0
    }

    pub fn is_ever_boarded(&self) -> bool {
        self.flags.ever_boarded
    }

    pub fn is_on_board(&self) -> bool {
        self.flags.on_board
    }

    pub fn is_car_parked(&self) -> bool {
        self.flags.car_parked
    }

    pub fn is_bike_parked(&self) -> bool {
        self.flags.bike_parked
    }

    pub fn is_renting(&self) -> bool {
        self.rented_vehicle.is_some()
    }

    pub fn rental_network(&self) -> Option<&str> {
        self.rented_vehicle.as_ref().map(|v| v.network.as_str())
    }

    pub fn arrived_by(&self, edge_class: EdgeClass) -> bool {
        self.back_edge_class == Some(edge_class)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_origin() {
        let state = State::origin(VertexId(3), TraverseMode::Walk);
        assert!(state.is_origin());
        assert!(!state.is_renting());
        assert!(!state.arrived_by(EdgeClass::SimpleTransfer));
    }
}

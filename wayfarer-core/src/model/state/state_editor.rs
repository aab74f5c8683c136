use super::{RentedVehicle, State, StateError, StateId, TraverseMode};
use crate::model::graph::Edge;

/// produces a successor of an existing state by traversing an edge.
///
/// the parent is copied; the copy is edited and returned by
/// [`StateEditor::make_state`]. the first invalid increment is retained and
/// reported by `make_state`.
pub struct StateEditor {
    child: State,
    error: Option<StateError>,
}

impl StateEditor {
    pub fn new(parent: &State, parent_id: StateId, edge: &Edge) -> StateEditor {
        let mut child = parent.clone();
        child.vertex_id = edge.dst_vertex_id;
        child.back_state = Some(parent_id);
        child.back_edge = Some(edge.edge_id);
        child.back_edge_class = Some(edge.edge_class);
        child.back_edge_turn_restricted = edge.turn_restricted;
        StateEditor { child, error: None }
    }

    pub fn increment_weight(&mut self, weight: f64) -> &mut Self {
        if self.check("weight", weight) {
            self.child.weight += weight;
        }
        self
    }

    pub fn increment_time_seconds(&mut self, seconds: f64) -> &mut Self {
        if self.check("elapsed_time_seconds", seconds) {
            self.child.elapsed_time_seconds += seconds;
        }
        self
    }

    pub fn increment_walk_distance(&mut self, meters: f64) -> &mut Self {
        if self.check("walk_distance_meters", meters) {
            self.child.walk_distance_meters += meters;
        }
        self
    }

    pub fn increment_price(&mut self, price: f64) -> &mut Self {
        if self.check("price", price) {
            self.child.price += price;
        }
        self
    }

    pub fn set_non_transit_mode(&mut self, mode: TraverseMode) -> &mut Self {
        self.child.non_transit_mode = mode;
        self
    }

    pub fn begin_vehicle_rental(&mut self, vehicle: RentedVehicle) -> &mut Self {
        self.child.rented_vehicle = Some(vehicle);
        self
    }

    pub fn end_vehicle_rental(&mut self) -> &mut Self {
        if self.child.rented_vehicle.take().is_none() && self.error.is_none() {
            self.error = Some(StateError::NotRenting);
        }
        self
    }

    pub fn set_car_parked(&mut self, parked: bool) -> &mut Self {
        self.child.flags.car_parked = parked;
        self
    }

    pub fn set_bike_parked(&mut self, parked: bool) -> &mut Self {
        self.child.flags.bike_parked = parked;
        self
    }

    pub fn board_transit(&mut self) -> &mut Self {
        self.child.flags.ever_boarded = true;
        self.child.flags.on_board = true;
        self
    }

    pub fn alight_transit(&mut self) -> &mut Self {
        self.child.flags.on_board = false;
        self
    }

    pub fn make_state(self) -> Result<State, StateError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.child),
        }
    }

    fn check(&mut self, field: &'static str, value: f64) -> bool {
        if value.is_finite() && value >= 0.0 {
            true
        } else {
            if self.error.is_none() {
                self.error = Some(StateError::InvalidIncrement { field, value });
            }
            false
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::graph::{EdgeClass, VertexId};
    use crate::model::state::VehicleType;

    #[test]
    fn test_successor_copies_and_edits() {
        let origin = State::origin(VertexId(0), TraverseMode::Walk);
        let edge = Edge::new(4, 0, 1, 100.0).with_class(EdgeClass::SimpleTransfer);
        let mut editor = StateEditor::new(&origin, StateId(0), &edge);
        editor
            .increment_weight(10.0)
            .increment_time_seconds(8.0)
            .increment_walk_distance(100.0)
            .begin_vehicle_rental(RentedVehicle::new("net", "acme", VehicleType::Bicycle));
        let child = editor.make_state().expect("test failed");
        assert_eq!(child.vertex_id, VertexId(1));
        assert_eq!(child.back_state, Some(StateId(0)));
        assert_eq!(child.weight, 10.0);
        assert!(child.arrived_by(EdgeClass::SimpleTransfer));
        assert_eq!(child.rental_network(), Some("net"));
        // the parent is untouched
        assert_eq!(origin.weight, 0.0);
        assert!(!origin.is_renting());
    }

    #[test]
    fn test_negative_increment_fails() {
        let origin = State::origin(VertexId(0), TraverseMode::Walk);
        let edge = Edge::new(0, 0, 1, 100.0);
        let mut editor = StateEditor::new(&origin, StateId(0), &edge);
        editor.increment_weight(-1.0).increment_time_seconds(1.0);
        let result = editor.make_state();
        assert!(matches!(
            result,
            Err(StateError::InvalidIncrement {
                field: "weight",
                ..
            })
        ));
    }

    #[test]
    fn test_end_rental_without_rental_fails() {
        let origin = State::origin(VertexId(0), TraverseMode::Walk);
        let edge = Edge::new(0, 0, 1, 100.0);
        let mut editor = StateEditor::new(&origin, StateId(0), &edge);
        editor.end_vehicle_rental();
        assert!(matches!(editor.make_state(), Err(StateError::NotRenting)));
    }
}

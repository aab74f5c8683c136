use wayfarer_core::model::{
    graph::EdgeClass,
    request::DominanceRules,
    state::{RentedVehicle, State},
};

/// true when `a` and `b` are on the same search plane, meaning a dominance
/// strategy may order them. states on different planes never prune each
/// other.
pub fn on_same_plane(a: &State, b: &State, rules: &DominanceRules) -> bool {
    if a.is_ever_boarded() != b.is_ever_boarded() {
        return false;
    }
    if a.non_transit_mode != b.non_transit_mode {
        return false;
    }
    // transfers are provisional
    if a.arrived_by(EdgeClass::SimpleTransfer) != b.arrived_by(EdgeClass::SimpleTransfer) {
        return false;
    }
    if a.arrived_by(EdgeClass::TimedTransfer) != b.arrived_by(EdgeClass::TimedTransfer) {
        return false;
    }
    if a.is_car_parked() != b.is_car_parked() || a.is_bike_parked() != b.is_bike_parked() {
        return false;
    }
    match (&a.rented_vehicle, &b.rented_vehicle) {
        (None, None) => {}
        (Some(va), Some(vb)) => {
            if !same_rented_vehicle_plane(va, vb, rules) {
                return false;
            }
        }
        _ => return false,
    }
    if a.back_edge != b.back_edge && a.back_edge_turn_restricted {
        return false;
    }
    true
}

fn same_rented_vehicle_plane(a: &RentedVehicle, b: &RentedVehicle, rules: &DominanceRules) -> bool {
    if a.network != b.network {
        return false;
    }
    if rules.compare_vehicle_provider && a.provider != b.provider {
        return false;
    }
    if rules.compare_vehicle_type && a.vehicle_type != b.vehicle_type {
        return false;
    }
    if rules.compare_vehicle_range {
        let bucket = rules.vehicle_range_bucket_meters;
        if a.range_bucket(bucket) != b.range_bucket(bucket) {
            return false;
        }
    }
    if rules.compare_vehicle_droppable && a.droppable_at_destination != b.droppable_at_destination
    {
        return false;
    }
    true
}

#[cfg(test)]
mod test {
    use super::*;
    use wayfarer_core::model::{
        graph::{EdgeId, VertexId},
        state::{StateId, TraverseMode, VehicleType},
    };

    fn state_at(weight: f64) -> State {
        let mut state = State::origin(VertexId(1), TraverseMode::Walk);
        state.back_state = Some(StateId(0));
        state.back_edge = Some(EdgeId(0));
        state.back_edge_class = Some(EdgeClass::Street);
        state.weight = weight;
        state
    }

    #[test]
    fn test_identical_states_same_plane() {
        let rules = DominanceRules::default();
        assert!(on_same_plane(&state_at(1.0), &state_at(2.0), &rules));
    }

    #[test]
    fn test_vehicle_toggles() {
        let mut a = state_at(1.0);
        let mut b = state_at(1.0);
        a.rented_vehicle = Some(RentedVehicle::new("net", "acme", VehicleType::Scooter));
        b.rented_vehicle = Some(RentedVehicle::new("net", "other", VehicleType::Scooter));
        assert!(!on_same_plane(&a, &b, &DominanceRules::default()));
        assert!(on_same_plane(&a, &b, &DominanceRules::permissive()));

        // range buckets
        let mut rules = DominanceRules::permissive();
        rules.compare_vehicle_range = true;
        rules.vehicle_range_bucket_meters = 1000.0;
        if let Some(v) = a.rented_vehicle.as_mut() {
            v.provider = "other".to_string();
            v.remaining_range_meters = Some(1500.0);
        }
        if let Some(v) = b.rented_vehicle.as_mut() {
            v.remaining_range_meters = Some(1900.0);
        }
        assert!(on_same_plane(&a, &b, &rules));
        if let Some(v) = b.rented_vehicle.as_mut() {
            v.remaining_range_meters = Some(2100.0);
        }
        assert!(!on_same_plane(&a, &b, &rules));
    }

    #[test]
    fn test_turn_restricted_arrival() {
        let mut a = state_at(1.0);
        let mut b = state_at(1.0);
        a.back_edge_turn_restricted = true;
        b.back_edge = Some(EdgeId(7));
        assert!(!on_same_plane(&a, &b, &DominanceRules::default()));
        // arriving over the same edge is comparable
        b.back_edge = Some(EdgeId(0));
        assert!(on_same_plane(&a, &b, &DominanceRules::default()));
    }

    #[test]
    fn test_transfer_is_provisional() {
        let a = state_at(1.0);
        let mut b = state_at(1.0);
        b.back_edge_class = Some(EdgeClass::TimedTransfer);
        assert!(!on_same_plane(&a, &b, &DominanceRules::default()));
        b.back_edge_class = Some(EdgeClass::SimpleTransfer);
        assert!(!on_same_plane(&a, &b, &DominanceRules::default()));
    }
}

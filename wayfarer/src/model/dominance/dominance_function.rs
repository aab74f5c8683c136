use wayfarer_core::model::{
    request::{DominanceRules, DominanceStrategy},
    state::State,
};

use super::comparability_ops;

/// slack on elapsed time, weight and price for pareto co-dominance.
/// near-identical states within this slack are treated as equal.
pub const PARETO_EPSILON: f64 = 1e-4;

/// decides whether one state subsumes another at the same vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct DominanceFunction {
    pub strategy: DominanceStrategy,
    pub rules: DominanceRules,
}

impl DominanceFunction {
    pub fn new(strategy: DominanceStrategy, rules: DominanceRules) -> DominanceFunction {
        DominanceFunction { strategy, rules }
    }

    pub fn minimum_weight() -> DominanceFunction {
        DominanceFunction::new(DominanceStrategy::MinimumWeight, DominanceRules::default())
    }

    /// the strategy ordering alone, without the comparability checks.
    pub fn better_or_equal(&self, a: &State, b: &State) -> bool {
        match self.strategy {
            DominanceStrategy::MinimumWeight => a.weight <= b.weight,
            DominanceStrategy::EarliestArrival => a.elapsed_time_seconds <= b.elapsed_time_seconds,
            DominanceStrategy::LeastWalk => a.walk_distance_meters <= b.walk_distance_meters,
            DominanceStrategy::Pareto => {
                a.elapsed_time_seconds <= b.elapsed_time_seconds + PARETO_EPSILON
                    && a.weight <= b.weight + PARETO_EPSILON
                    && a.price <= b.price + PARETO_EPSILON
            }
        }
    }

    /// true when `a` is on the same plane as `b` and at least as good under
    /// the strategy ordering.
    pub fn better_or_equal_and_comparable(&self, a: &State, b: &State) -> bool {
        comparability_ops::on_same_plane(a, b, &self.rules) && self.better_or_equal(a, b)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wayfarer_core::model::{
        graph::{EdgeClass, EdgeId, VertexId},
        state::{RentedVehicle, StateId, TraverseMode, VehicleType},
    };

    fn downstream(weight: f64) -> State {
        let mut state = State::origin(VertexId(2), TraverseMode::Walk);
        state.back_state = Some(StateId(0));
        state.back_edge = Some(EdgeId(3));
        state.back_edge_class = Some(EdgeClass::Street);
        state.weight = weight;
        state.elapsed_time_seconds = weight;
        state
    }

    fn all_strategies() -> Vec<DominanceFunction> {
        [
            DominanceStrategy::MinimumWeight,
            DominanceStrategy::EarliestArrival,
            DominanceStrategy::LeastWalk,
            DominanceStrategy::Pareto,
        ]
        .into_iter()
        .map(|s| DominanceFunction::new(s, DominanceRules::default()))
        .collect()
    }

    fn assert_incomparable(a: &State, b: &State) {
        for dominance in all_strategies() {
            assert!(
                !dominance.better_or_equal_and_comparable(a, b),
                "{:?} compared a to b",
                dominance.strategy
            );
            assert!(
                !dominance.better_or_equal_and_comparable(b, a),
                "{:?} compared b to a",
                dominance.strategy
            );
        }
    }

    #[test]
    fn test_boarded_states_incomparable() {
        let cheap = downstream(1.0);
        let mut boarded = downstream(100.0);
        boarded.flags.ever_boarded = true;
        assert_incomparable(&cheap, &boarded);
    }

    #[test]
    fn test_parked_states_incomparable() {
        let cheap = downstream(1.0);
        let mut car = downstream(100.0);
        car.flags.car_parked = true;
        assert_incomparable(&cheap, &car);
        let mut bike = downstream(100.0);
        bike.flags.bike_parked = true;
        assert_incomparable(&cheap, &bike);
    }

    #[test]
    fn test_rental_network_incomparable() {
        let mut a = downstream(1.0);
        let mut b = downstream(100.0);
        a.rented_vehicle = Some(RentedVehicle::new("north", "acme", VehicleType::Bicycle));
        b.rented_vehicle = Some(RentedVehicle::new("south", "acme", VehicleType::Bicycle));
        assert_incomparable(&a, &b);
        // renting and not renting are also different planes
        let walking = downstream(100.0);
        assert_incomparable(&a, &walking);
    }

    #[test]
    fn test_minimum_weight_total_on_plane() {
        let dominance = DominanceFunction::minimum_weight();
        let weights = [0.0, 1.0, 1.0, 2.5, 10.0];
        for wa in weights {
            for wb in weights {
                let a = downstream(wa);
                let b = downstream(wb);
                assert_eq!(dominance.better_or_equal_and_comparable(&a, &b), wa <= wb);
            }
        }
    }

    #[test]
    fn test_pareto_epsilon_and_codominance() {
        let dominance = DominanceFunction::new(DominanceStrategy::Pareto, DominanceRules::default());
        let a = downstream(10.0);
        let mut nearly = downstream(10.0);
        nearly.weight = 10.0 - PARETO_EPSILON / 2.0;
        assert!(dominance.better_or_equal_and_comparable(&a, &nearly));
        assert!(dominance.better_or_equal_and_comparable(&nearly, &a));

        // faster but more expensive: neither dominates
        let mut fast = downstream(20.0);
        fast.elapsed_time_seconds = 5.0;
        assert!(!dominance.better_or_equal_and_comparable(&fast, &a));
        assert!(!dominance.better_or_equal_and_comparable(&a, &fast));
    }

    #[test]
    fn test_pareto_keeps_cheaper_slower_state() {
        let dominance = DominanceFunction::new(DominanceStrategy::Pareto, DominanceRules::default());
        let mut fast = downstream(10.0);
        fast.price = 5.0;
        let cheap = downstream(20.0);
        assert!(!dominance.better_or_equal_and_comparable(&fast, &cheap));
        assert!(!dominance.better_or_equal_and_comparable(&cheap, &fast));

        let mut free_and_fast = downstream(10.0);
        free_and_fast.price = 0.0;
        assert!(dominance.better_or_equal_and_comparable(&free_and_fast, &fast));
    }

    #[test]
    fn test_least_walk() {
        let dominance =
            DominanceFunction::new(DominanceStrategy::LeastWalk, DominanceRules::default());
        let mut a = downstream(100.0);
        a.walk_distance_meters = 10.0;
        let mut b = downstream(1.0);
        b.walk_distance_meters = 50.0;
        assert!(dominance.better_or_equal_and_comparable(&a, &b));
        assert!(!dominance.better_or_equal_and_comparable(&b, &a));
    }
}

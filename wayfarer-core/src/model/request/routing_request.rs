use serde::{Deserialize, Serialize};

use super::{
    DominanceRules, DominanceStrategy, HeuristicType, OptimizationStrategy, SearchDirection,
};
use crate::model::{graph::VertexId, state::TraverseMode};

/// parameters of one search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingRequest {
    pub from: VertexId,
    pub to: VertexId,
    #[serde(default)]
    pub arrive_by: bool,
    /// allowed travel modes
    #[serde(default = "default_modes")]
    pub modes: Vec<TraverseMode>,
    #[serde(default)]
    pub optimize: OptimizationStrategy,
    /// overrides the dominance implied by `optimize`
    #[serde(default)]
    pub dominance: Option<DominanceStrategy>,
    #[serde(default)]
    pub heuristic: HeuristicType,
    /// multiplier applied to the heuristic when ordering the frontier
    #[serde(default = "default_heuristic_weight")]
    pub heuristic_weight: f64,
    #[serde(default)]
    pub disable_remaining_weight_heuristic: bool,
    #[serde(default = "default_walk_reluctance")]
    pub walk_reluctance: f64,
    /// meters per second
    #[serde(default = "default_walk_speed")]
    pub walk_speed: f64,
    /// meters per second
    #[serde(default = "default_bike_speed")]
    pub bike_speed: f64,
    /// meters per second
    #[serde(default = "default_car_speed")]
    pub car_speed: f64,
    /// meters per second. no transit vehicle is faster than this.
    #[serde(default = "default_transit_speed")]
    pub transit_speed_upper_bound: f64,
    /// weight of one unit of price in the multimodal cost
    #[serde(default = "default_price_weight")]
    pub price_weight: f64,
    #[serde(default)]
    pub dominance_rules: DominanceRules,
}

fn default_modes() -> Vec<TraverseMode> {
    vec![TraverseMode::Walk]
}

fn default_heuristic_weight() -> f64 {
    1.0
}

fn default_walk_reluctance() -> f64 {
    2.0
}

fn default_walk_speed() -> f64 {
    1.33
}

fn default_bike_speed() -> f64 {
    5.0
}

fn default_car_speed() -> f64 {
    40.0
}

fn default_transit_speed() -> f64 {
    55.0
}

fn default_price_weight() -> f64 {
    1.0
}

impl RoutingRequest {
    pub fn new(from: VertexId, to: VertexId) -> RoutingRequest {
        RoutingRequest {
            from,
            to,
            arrive_by: false,
            modes: default_modes(),
            optimize: OptimizationStrategy::default(),
            dominance: None,
            heuristic: HeuristicType::default(),
            heuristic_weight: default_heuristic_weight(),
            disable_remaining_weight_heuristic: false,
            walk_reluctance: default_walk_reluctance(),
            walk_speed: default_walk_speed(),
            bike_speed: default_bike_speed(),
            car_speed: default_car_speed(),
            transit_speed_upper_bound: default_transit_speed(),
            price_weight: default_price_weight(),
            dominance_rules: DominanceRules::default(),
        }
    }

    pub fn with_modes(mut self, modes: &[TraverseMode]) -> RoutingRequest {
        self.modes = modes.to_vec();
        self
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicType) -> RoutingRequest {
        self.heuristic = heuristic;
        self
    }

    pub fn with_optimize(mut self, optimize: OptimizationStrategy) -> RoutingRequest {
        self.optimize = optimize;
        self
    }

    pub fn is_transit_allowed(&self) -> bool {
        self.modes.iter().any(TraverseMode::is_transit)
    }

    pub fn allows(&self, mode: TraverseMode) -> bool {
        self.modes.contains(&mode)
    }

    /// fastest possible speed on streets among the allowed street modes.
    pub fn street_speed_upper_bound(&self) -> f64 {
        let mut speed = self.walk_speed;
        if self.allows(TraverseMode::Bicycle) || self.allows(TraverseMode::MicroMobility) {
            speed = speed.max(self.bike_speed);
        }
        if self.allows(TraverseMode::Car) {
            speed = speed.max(self.car_speed);
        }
        speed
    }

    pub fn search_direction(&self) -> SearchDirection {
        if self.arrive_by {
            SearchDirection::Reverse
        } else {
            SearchDirection::Forward
        }
    }

    /// where the search starts expanding
    pub fn origin_vertex(&self) -> VertexId {
        match self.search_direction() {
            SearchDirection::Forward => self.from,
            SearchDirection::Reverse => self.to,
        }
    }

    /// where the search is heading
    pub fn target_vertex(&self) -> VertexId {
        match self.search_direction() {
            SearchDirection::Forward => self.to,
            SearchDirection::Reverse => self.from,
        }
    }

    /// the same request searched in the opposite direction.
    pub fn reversed(&self) -> RoutingRequest {
        let mut reversed = self.clone();
        reversed.arrive_by = !self.arrive_by;
        reversed
    }

    /// the street mode a fresh search starts in.
    pub fn initial_mode(&self) -> TraverseMode {
        if self.allows(TraverseMode::Car) && !self.is_transit_allowed() {
            TraverseMode::Car
        } else if self.allows(TraverseMode::Bicycle) && !self.allows(TraverseMode::Walk) {
            TraverseMode::Bicycle
        } else {
            TraverseMode::Walk
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let json = serde_json::json!({"from": 1, "to": 2, "modes": ["walk", "transit"]});
        let request: RoutingRequest = serde_json::from_value(json).expect("test failed");
        assert_eq!(request.heuristic, HeuristicType::Euclidean);
        assert_eq!(request.heuristic_weight, 1.0);
        assert!(request.is_transit_allowed());
        assert!(request.dominance_rules.compare_vehicle_provider);
    }

    #[test]
    fn test_direction_and_target() {
        let request = RoutingRequest::new(VertexId(1), VertexId(2));
        assert_eq!(request.origin_vertex(), VertexId(1));
        assert_eq!(request.target_vertex(), VertexId(2));
        let reversed = request.reversed();
        assert_eq!(reversed.search_direction(), SearchDirection::Reverse);
        assert_eq!(reversed.origin_vertex(), VertexId(2));
        assert_eq!(reversed.target_vertex(), VertexId(1));
    }

    #[test]
    fn test_street_speed_upper_bound() {
        let walk = RoutingRequest::new(VertexId(0), VertexId(1));
        assert_eq!(walk.street_speed_upper_bound(), walk.walk_speed);
        let drive = walk.clone().with_modes(&[TraverseMode::Walk, TraverseMode::Car]);
        assert_eq!(drive.street_speed_upper_bound(), drive.car_speed);
    }
}

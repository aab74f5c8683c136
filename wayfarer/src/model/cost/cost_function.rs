use serde::{Deserialize, Serialize};
use wayfarer_core::model::state::State;

/// the scalar a search minimizes for a state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum CostFunction {
    Weight,
    Price,
    /// weight plus price scaled by `price_weight`
    Multimodal { price_weight: f64 },
}

impl CostFunction {
    pub fn cost(&self, state: &State) -> f64 {
        match self {
            CostFunction::Weight => state.weight,
            CostFunction::Price => state.price,
            CostFunction::Multimodal { price_weight } => state.weight + price_weight * state.price,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use wayfarer_core::model::{graph::VertexId, state::TraverseMode};

    #[test]
    fn test_costs() {
        let mut state = State::origin(VertexId(0), TraverseMode::Walk);
        state.weight = 100.0;
        state.price = 2.5;
        assert_eq!(CostFunction::Weight.cost(&state), 100.0);
        assert_eq!(CostFunction::Price.cost(&state), 2.5);
        let multimodal = CostFunction::Multimodal { price_weight: 10.0 };
        assert_eq!(multimodal.cost(&state), 125.0);
    }
}

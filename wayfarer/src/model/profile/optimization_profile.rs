use wayfarer_core::model::request::{
    DominanceStrategy, HeuristicType, OptimizationStrategy, RoutingRequest, SearchDirection,
};

use super::ProfileError;
use crate::model::{
    context::RoutingContext,
    cost::CostFunction,
    dominance::DominanceFunction,
    heuristic::{heuristic_ops, HeuristicError, RemainingWeightHeuristic},
};

/// the dominance, heuristics and cost a search strategy runs with.
///
/// | strategy | dominance | heuristic | cost |
/// |---|---|---|---|
/// | weight | minimum weight | requested | weight |
/// | price | pareto | trivial | price |
/// | multimodal | pareto | requested | weight + price |
///
/// `request.dominance` replaces the strategy's dominance when set.
pub struct OptimizationProfile {
    pub strategy: OptimizationStrategy,
    pub dominance: DominanceFunction,
    /// used by forward searches
    pub heuristic: Box<dyn RemainingWeightHeuristic>,
    /// used by reverse (arrive-by) searches
    pub reversed_heuristic: Box<dyn RemainingWeightHeuristic>,
    pub cost_function: CostFunction,
}

impl OptimizationProfile {
    pub fn build(
        request: &RoutingRequest,
        context: &RoutingContext,
    ) -> Result<OptimizationProfile, ProfileError> {
        let strategy = request.optimize;
        let (default_dominance, heuristic_type, cost_function) = match strategy {
            OptimizationStrategy::Weight => (
                DominanceStrategy::MinimumWeight,
                request.heuristic,
                CostFunction::Weight,
            ),
            OptimizationStrategy::Price => (
                DominanceStrategy::Pareto,
                HeuristicType::Trivial,
                CostFunction::Price,
            ),
            OptimizationStrategy::Multimodal => (
                DominanceStrategy::Pareto,
                request.heuristic,
                CostFunction::Multimodal {
                    price_weight: request.price_weight,
                },
            ),
        };
        let dominance = DominanceFunction::new(
            request.dominance.unwrap_or(default_dominance),
            request.dominance_rules.clone(),
        );
        let build = |direction| {
            heuristic_ops::build_heuristic(heuristic_type, context, direction).map_err(|e| match e {
                HeuristicError::MissingArtifact { .. } => ProfileError::MissingArtifact {
                    strategy: strategy.to_string(),
                    source: e,
                },
                other => ProfileError::HeuristicError(other),
            })
        };
        let heuristic = build(SearchDirection::Forward)?;
        let reversed_heuristic = build(SearchDirection::Reverse)?;
        log::debug!(
            "built {strategy} profile with {:?} dominance and {heuristic_type} heuristic",
            dominance.strategy
        );
        Ok(OptimizationProfile {
            strategy,
            dominance,
            heuristic,
            reversed_heuristic,
            cost_function,
        })
    }

    /// splits the profile into the parts one search in `direction` uses.
    pub fn into_search_parts(
        self,
        direction: SearchDirection,
    ) -> (DominanceFunction, Box<dyn RemainingWeightHeuristic>, CostFunction) {
        let heuristic = match direction {
            SearchDirection::Forward => self.heuristic,
            SearchDirection::Reverse => self.reversed_heuristic,
        };
        (self.dominance, heuristic, self.cost_function)
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// coarse classification of edges. used to exclude edge types from
/// traversals (see connected components) and by dominance rules which treat
/// transfer edges as provisional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeClass {
    #[default]
    Street,
    Transit,
    /// connects a street vertex with a transit stop
    TransitLink,
    /// flexible walking transfer between two stops
    SimpleTransfer,
    /// scheduled, guaranteed transfer between two trips
    TimedTransfer,
    /// zero-cost connector
    Free,
}

impl EdgeClass {
    pub fn is_transfer(&self) -> bool {
        matches!(self, EdgeClass::SimpleTransfer | EdgeClass::TimedTransfer)
    }
}

impl Display for EdgeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EdgeClass::Street => "street",
            EdgeClass::Transit => "transit",
            EdgeClass::TransitLink => "transit_link",
            EdgeClass::SimpleTransfer => "simple_transfer",
            EdgeClass::TimedTransfer => "timed_transfer",
            EdgeClass::Free => "free",
        };
        write!(f, "{s}")
    }
}

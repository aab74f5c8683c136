mod forbidden_feature;
mod forbidden_states_selector;
mod frontier;
mod run_state;
mod search_error;

pub use forbidden_feature::ForbiddenFeature;
pub use forbidden_states_selector::ForbiddenStatesSelector;
pub use frontier::Frontier;
pub use run_state::{Inserted, RunState};
pub use search_error::SearchError;

use super::StateId;

#[derive(thiserror::Error, Debug)]
pub enum StateError {
    #[error("invalid increment of {field} by {value}, increments must be finite and non-negative")]
    InvalidIncrement { field: &'static str, value: f64 },
    #[error("state {0} does not exist in the state store")]
    StateNotFound(StateId),
    #[error("cannot end vehicle rental on a state that is not renting")]
    NotRenting,
}

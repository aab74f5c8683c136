mod rented_vehicle;
mod search_state;
mod state_editor;
mod state_error;
mod state_store;
mod traverse_mode;

pub use rented_vehicle::{RentedVehicle, VehicleType};
pub use search_state::{State, StateFlags, StateId};
pub use state_editor::StateEditor;
pub use state_error::StateError;
pub use state_store::StateStore;
pub use traverse_mode::TraverseMode;

mod abort_signal;
pub mod geo_utils;

pub use abort_signal::AbortSignal;

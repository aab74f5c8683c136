mod optimization_profile;
mod profile_error;

pub use optimization_profile::OptimizationProfile;
pub use profile_error::ProfileError;

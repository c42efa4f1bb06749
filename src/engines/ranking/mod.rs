pub mod distance;

pub use distance::{argsort, kendall_tau_distance};

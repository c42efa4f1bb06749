pub mod layers;

pub use layers::{LayerSpec, WeightLayoutRegistry};

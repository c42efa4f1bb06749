pub mod evaluator;
pub mod population;
pub mod traits;

pub use evaluator::FitnessEvaluator;
pub use population::{best_candidate, evaluate_population};
pub use traits::CostFunction;

pub mod rank;

pub use rank::{load_puzzles, rank, rank_by_estimate, rank_by_model, write_ranks, Puzzle};

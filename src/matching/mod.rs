//! Profession matching engine module
//! Builds trait vectors, adapts catalog records, scores and ranks

pub mod builder;
pub mod catalog;
pub mod engine;
pub mod ranker;
pub mod scoring;
pub mod traits;

pub use engine::compute_matches;
pub use traits::TraitCategory;

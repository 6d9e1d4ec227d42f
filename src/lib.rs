//! Career matcher library
//!
//! Turns RAMAK questionnaire submissions into trait vectors and ranks a
//! profession catalog against them.

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod matching;
pub mod output;

pub use config::Config;
pub use error::{CareerMatcherError, Result};
pub use matching::builder::{CategoryAnswer, QuestionnaireSubmission, TraitVectorBuilder};
pub use matching::catalog::ProfessionRecord;
pub use matching::engine::{compute_matches, MatchingEngine};
pub use matching::ranker::{MatchResult, RankedList};
pub use matching::scoring::SimilarityMethod;
pub use matching::traits::{TraitCategory, TraitVector};
pub use output::report::MatchReport;

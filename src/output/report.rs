//! Match report assembly for presentation and persistence

use crate::matching::engine::{ExcludedRecord, MatchRun};
use crate::matching::ranker::RankedList;
use crate::matching::scoring::SimilarityMethod;
use crate::matching::traits::TraitVector;
use serde::Serialize;
use std::time::SystemTime;

/// Complete outcome of a matching run, ready for formatting
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    /// Ranked matches, best first
    pub results: RankedList,

    /// The trait vector built from the questionnaire
    pub user_profile: TraitVector,

    /// Catalog records dropped because they could not be scored
    pub excluded: Vec<ExcludedRecord>,

    /// Report metadata and generation info
    pub metadata: ReportMetadata,
}

/// Report metadata
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// When the report was generated
    pub generated_at: SystemTime,

    /// Version of the matcher used
    pub matcher_version: String,

    /// Similarity method applied to vector profiles
    pub similarity_method: SimilarityMethod,

    /// Number of catalog records considered
    pub catalog_size: usize,

    /// Number of records that produced a score
    pub scored: usize,

    /// Total processing time
    pub processing_time_ms: u64,
}

impl MatchReport {
    /// Build a report from a finished matching run.
    pub fn from_run(run: MatchRun, method: SimilarityMethod) -> Self {
        let scored = run.catalog_size - run.excluded.len();

        Self {
            metadata: ReportMetadata {
                generated_at: SystemTime::now(),
                matcher_version: env!("CARGO_PKG_VERSION").to_string(),
                similarity_method: method,
                catalog_size: run.catalog_size,
                scored,
                processing_time_ms: run.elapsed_ms,
            },
            results: run.ranked,
            user_profile: run.user_vector,
            excluded: run.excluded,
        }
    }
}

//! Matching engine coordinating vector building, catalog adaptation,
//! scoring and ranking

use crate::config::ScoringConfig;
use crate::error::{CareerMatcherError, Result};
use crate::matching::builder::{QuestionnaireSubmission, TraitVectorBuilder};
use crate::matching::catalog::{CatalogAdapter, ComparableProfile, ProfessionRecord};
use crate::matching::ranker::{self, MatchResult, RankedList};
use crate::matching::scoring::{ScoringEngine, SimilarityMethod};
use crate::matching::traits::TraitVector;
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use std::time::Instant;

/// Coordinates the four matching stages. Holds the adapter cache, so one
/// engine instance amortizes catalog adaptation across repeated runs.
pub struct MatchingEngine {
    builder: TraitVectorBuilder,
    adapter: CatalogAdapter,
    scorer: ScoringEngine,
}

/// A record dropped from the batch, with the reason it could not be scored.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExcludedRecord {
    pub id: String,
    pub job: String,
    pub reason: String,
}

/// Outcome of one full matching run.
#[derive(Debug, Clone)]
pub struct MatchRun {
    pub ranked: RankedList,
    pub excluded: Vec<ExcludedRecord>,
    pub user_vector: TraitVector,
    pub catalog_size: usize,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchingEngineStats {
    pub cached_profiles: usize,
    pub similarity_method: SimilarityMethod,
    pub fuzzy_threshold: f64,
}

impl MatchingEngine {
    pub fn new(config: &ScoringConfig) -> Result<Self> {
        Ok(Self {
            builder: TraitVectorBuilder::new(),
            adapter: CatalogAdapter::new()?,
            scorer: ScoringEngine::new(config),
        })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(&ScoringConfig::default())
    }

    /// Run the full pipeline: build the user vector, adapt the catalog,
    /// score every profession and rank the results.
    ///
    /// Unscoreable records are dropped from the batch with a warning and
    /// reported in [`MatchRun::excluded`]; they are never scored as zero.
    /// Every other error aborts the run.
    pub fn evaluate(
        &mut self,
        submission: &QuestionnaireSubmission,
        catalog: &[ProfessionRecord],
        top_k: Option<usize>,
    ) -> Result<MatchRun> {
        let start_time = Instant::now();

        let user_vector = self.builder.build(&submission.answers)?;
        let user_tags = self.adapter.normalize_tags(&submission.general_requirements);

        let mut profiles: Vec<(&ProfessionRecord, ComparableProfile)> =
            Vec::with_capacity(catalog.len());
        let mut excluded = Vec::new();
        for record in catalog {
            match self.adapter.adapt(record) {
                Ok(profile) => profiles.push((record, profile)),
                Err(error @ CareerMatcherError::UnscoreableRecord { .. }) => {
                    warn!("Skipping profession '{}': {}", record.job_name, error);
                    excluded.push(ExcludedRecord {
                        id: record.key().to_string(),
                        job: record.job_name.clone(),
                        reason: error.to_string(),
                    });
                }
                Err(error) => return Err(error),
            }
        }

        // Professions are independent of each other, so the scoring pass
        // fans out across cores; collect keeps catalog order for the
        // ranker's tie-break.
        let scored: Vec<MatchResult> = profiles
            .par_iter()
            .map(|(record, profile)| {
                self.scorer
                    .score(&user_vector, &user_tags, profile)
                    .map(|percentage| {
                        MatchResult::new(record.key(), record.job_name.clone(), percentage)
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let ranked = ranker::rank(scored, top_k)?;

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Matched {} of {} professions ({} excluded) in {} ms",
            ranked.len(),
            catalog.len(),
            excluded.len(),
            elapsed_ms
        );

        Ok(MatchRun {
            ranked,
            excluded,
            user_vector,
            catalog_size: catalog.len(),
            elapsed_ms,
        })
    }

    pub fn stats(&self) -> MatchingEngineStats {
        MatchingEngineStats {
            cached_profiles: self.adapter.cached_profiles(),
            similarity_method: self.scorer.method(),
            fuzzy_threshold: self.scorer.fuzzy_threshold(),
        }
    }

    pub fn clear_cache(&mut self) {
        self.adapter.clear_cache();
    }
}

/// Single public entry point: score a questionnaire submission against a
/// profession catalog and return the ranked list.
pub fn compute_matches(
    submission: &QuestionnaireSubmission,
    catalog: &[ProfessionRecord],
    top_k: Option<usize>,
) -> Result<RankedList> {
    let mut engine = MatchingEngine::with_defaults()?;
    Ok(engine.evaluate(submission, catalog, top_k)?.ranked)
}

//! Similarity scoring between a user trait vector and profession profiles

use crate::config::ScoringConfig;
use crate::error::{CareerMatcherError, Result};
use crate::matching::catalog::{ComparableProfile, NormalizedTagSet};
use crate::matching::traits::TraitVector;
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use strsim::jaro_winkler;

/// How two trait vectors are turned into a match percentage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMethod {
    /// Shared weight mass: the sum of per-category minimums. Since both
    /// vectors sum to 100 this equals 100 minus half the total absolute
    /// per-category difference, and stays in pure integer arithmetic.
    #[default]
    Overlap,
    /// Cosine similarity scaled to 0-100 and rounded.
    Cosine,
}

impl SimilarityMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityMethod::Overlap => "overlap",
            SimilarityMethod::Cosine => "cosine",
        }
    }
}

impl fmt::Display for SimilarityMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pure scoring over adapted profiles. Identical inputs always produce the
/// identical percentage; nothing here touches I/O or shared state.
pub struct ScoringEngine {
    method: SimilarityMethod,
    fuzzy_matching: bool,
    fuzzy_threshold: f64,
}

impl ScoringEngine {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            method: config.similarity,
            fuzzy_matching: config.fuzzy_matching,
            fuzzy_threshold: config.fuzzy_threshold.clamp(0.0, 1.0),
        }
    }

    pub fn method(&self) -> SimilarityMethod {
        self.method
    }

    pub fn fuzzy_threshold(&self) -> f64 {
        self.fuzzy_threshold
    }

    /// Score the user against one profession profile, in [0, 100].
    ///
    /// Vector professions are compared vector-to-vector with the configured
    /// similarity method. Tag professions are scored by coverage: the
    /// fraction of their requirement tags matched by the user's declared
    /// general-requirement tags.
    pub fn score(
        &self,
        user: &TraitVector,
        user_tags: &NormalizedTagSet,
        profile: &ComparableProfile,
    ) -> Result<u8> {
        match profile {
            ComparableProfile::Vector(profession) => self.score_vectors(user, profession),
            ComparableProfile::Tags(profession_tags) => {
                self.score_tags(user_tags, profession_tags)
            }
        }
    }

    fn score_vectors(&self, user: &TraitVector, profession: &TraitVector) -> Result<u8> {
        // Normalization upstream makes zero totals impossible; this guard
        // keeps a broken caller from turning into NaN percentages.
        if user.total() == 0 || profession.total() == 0 {
            return Err(CareerMatcherError::DegenerateVector);
        }

        let percentage = match self.method {
            SimilarityMethod::Overlap => overlap_percentage(user, profession),
            SimilarityMethod::Cosine => cosine_percentage(user, profession),
        };
        Ok(percentage)
    }

    /// Coverage of the profession's requirement tags by the user's tags.
    ///
    /// A profession tag counts as covered when some user tag contains it
    /// (which includes exact equality) or, with fuzzy matching enabled, is
    /// within the Jaro-Winkler threshold of it. Empty intersection scores
    /// 0, full coverage 100, and a user with no declared tags scores 0.
    fn score_tags(
        &self,
        user_tags: &NormalizedTagSet,
        profession_tags: &NormalizedTagSet,
    ) -> Result<u8> {
        if profession_tags.is_empty() {
            return Err(CareerMatcherError::Scoring(
                "empty tag profile reached scoring".to_string(),
            ));
        }
        if user_tags.is_empty() {
            return Ok(0);
        }

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(profession_tags.tags())
            .map_err(|e| {
                CareerMatcherError::Scoring(format!("Failed to build tag matcher: {}", e))
            })?;

        let mut covered: HashSet<usize> = HashSet::new();
        for user_tag in user_tags.tags() {
            for hit in automaton.find_overlapping_iter(user_tag) {
                covered.insert(hit.pattern().as_usize());
            }
        }

        if self.fuzzy_matching {
            for (index, tag) in profession_tags.tags().iter().enumerate() {
                if covered.contains(&index) {
                    continue;
                }
                let close = user_tags
                    .tags()
                    .iter()
                    .any(|candidate| jaro_winkler(tag, candidate) >= self.fuzzy_threshold);
                if close {
                    covered.insert(index);
                }
            }
        }

        let coverage = covered.len() as f64 / profession_tags.len() as f64;
        Ok((coverage * 100.0).round() as u8)
    }
}

fn overlap_percentage(user: &TraitVector, profession: &TraitVector) -> u8 {
    let mut shared: u32 = 0;
    for (category, weight) in user.iter() {
        shared += weight.min(profession.weight(category));
    }
    // Both totals are 100, so the shared mass never exceeds 100.
    shared as u8
}

fn cosine_percentage(user: &TraitVector, profession: &TraitVector) -> u8 {
    let mut dot = 0.0f64;
    let mut user_norm = 0.0f64;
    let mut profession_norm = 0.0f64;

    for (category, weight) in user.iter() {
        let a = f64::from(weight);
        let b = f64::from(profession.weight(category));
        dot += a * b;
        user_norm += a * a;
        profession_norm += b * b;
    }

    let similarity = dot / (user_norm.sqrt() * profession_norm.sqrt());
    (similarity * 100.0).round().clamp(0.0, 100.0) as u8
}

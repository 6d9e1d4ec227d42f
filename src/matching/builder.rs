//! Questionnaire aggregation into a normalized trait vector

use crate::error::{CareerMatcherError, Result};
use crate::matching::traits::{TraitVector, CATEGORY_COUNT};
use crate::matching::TraitCategory;
use log::debug;
use serde::{Deserialize, Serialize};

/// One aggregated questionnaire answer: how strongly the user endorsed a
/// trait category (e.g. the count of endorsed items in that category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAnswer {
    pub category: TraitCategory,
    pub raw_score: u32,
}

impl CategoryAnswer {
    pub fn new(category: TraitCategory, raw_score: u32) -> Self {
        Self {
            category,
            raw_score,
        }
    }
}

/// Everything the questionnaire layer hands to the engine: per-category
/// answers plus the user's declared general-requirement tags, which are
/// matched against professions characterized by free text instead of a
/// weight vector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireSubmission {
    pub answers: Vec<CategoryAnswer>,
    #[serde(default)]
    pub general_requirements: Vec<String>,
}

impl QuestionnaireSubmission {
    pub fn from_answers(answers: Vec<CategoryAnswer>) -> Self {
        Self {
            answers,
            general_requirements: Vec::new(),
        }
    }
}

/// Builds the canonical user trait vector from raw questionnaire answers.
pub struct TraitVectorBuilder;

impl TraitVectorBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Sum raw scores per category and normalize to a sum-100 vector.
    ///
    /// Repeated categories accumulate. A total raw score of zero means the
    /// user gave the questionnaire no signal at all and fails with
    /// [`CareerMatcherError::EmptyInput`] rather than producing an all-zero
    /// vector that would match every profession at 0%.
    pub fn build(&self, answers: &[CategoryAnswer]) -> Result<TraitVector> {
        let mut raw = [0u64; CATEGORY_COUNT];
        for answer in answers {
            raw[answer.category as usize] += u64::from(answer.raw_score);
        }

        let vector = TraitVector::normalize(&raw).ok_or(CareerMatcherError::EmptyInput)?;
        debug!(
            "Built trait vector from {} answers, dominant category: {}",
            answers.len(),
            vector.dominant()
        );
        Ok(vector)
    }
}

impl Default for TraitVectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Ordering of scored professions into the final ranked list

use crate::error::{CareerMatcherError, Result};
use serde::Serialize;

/// One scored profession. Serializes as `{"job": ..., "percentage": ...}`;
/// the record identifier stays internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    #[serde(skip)]
    pub profession_id: String,
    pub job: String,
    pub percentage: u8,
}

impl MatchResult {
    pub fn new(profession_id: impl Into<String>, job: impl Into<String>, percentage: u8) -> Self {
        Self {
            profession_id: profession_id.into(),
            job: job.into(),
            percentage,
        }
    }
}

/// Professions ordered by match percentage descending, ties in catalog
/// insertion order. Serializes transparently as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedList {
    results: Vec<MatchResult>,
}

impl RankedList {
    /// Wrap already-ordered results. Use [`rank`] to order and truncate raw scores.
    pub fn from_results(results: Vec<MatchResult>) -> Self {
        Self { results }
    }

    pub fn results(&self) -> &[MatchResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<MatchResult> {
        self.results
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchResult> {
        self.results.iter()
    }

    /// Zero-based page of the ranked results. An out-of-range page is an
    /// empty slice; a zero page size is an invalid argument, mirroring the
    /// top-K policy.
    pub fn page(&self, page: usize, per_page: usize) -> Result<&[MatchResult]> {
        if per_page == 0 {
            return Err(CareerMatcherError::InvalidArgument(
                "page size must be at least 1".to_string(),
            ));
        }

        let start = page.saturating_mul(per_page);
        if start >= self.results.len() {
            return Ok(&[]);
        }
        let end = start.saturating_add(per_page).min(self.results.len());
        Ok(&self.results[start..end])
    }
}

/// Sort scored professions by percentage descending and apply `top_k`.
///
/// The sort is stable, so equal percentages keep their catalog insertion
/// order (identifiers are never compared). `top_k` truncates without
/// reordering; zero is rejected, and negative values cannot be expressed.
pub fn rank(mut scored: Vec<MatchResult>, top_k: Option<usize>) -> Result<RankedList> {
    if top_k == Some(0) {
        return Err(CareerMatcherError::InvalidArgument(
            "topK must be at least 1".to_string(),
        ));
    }

    scored.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    if let Some(k) = top_k {
        scored.truncate(k);
    }

    Ok(RankedList { results: scored })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored() -> Vec<MatchResult> {
        vec![
            MatchResult::new("1", "Accountant", 40),
            MatchResult::new("2", "Developer", 85),
            MatchResult::new("3", "Ranger", 12),
            MatchResult::new("4", "Teacher", 85),
            MatchResult::new("5", "Chef", 63),
        ]
    }

    #[test]
    fn test_rank_sorts_descending() {
        let ranked = rank(scored(), None).unwrap();
        assert_eq!(ranked.len(), 5);
        assert!(ranked
            .results()
            .windows(2)
            .all(|pair| pair[0].percentage >= pair[1].percentage));
        assert_eq!(ranked.results()[0].job, "Developer");
    }

    #[test]
    fn test_rank_ties_keep_catalog_order() {
        let ranked = rank(scored(), None).unwrap();
        // Developer (catalog index 1) precedes Teacher (index 3) at 85.
        assert_eq!(ranked.results()[0].job, "Developer");
        assert_eq!(ranked.results()[1].job, "Teacher");
    }

    #[test]
    fn test_rank_top_k_truncates_prefix() {
        let ranked = rank(scored(), Some(3)).unwrap();
        assert_eq!(ranked.len(), 3);
        let jobs: Vec<&str> = ranked.iter().map(|r| r.job.as_str()).collect();
        assert_eq!(jobs, vec!["Developer", "Teacher", "Chef"]);
    }

    #[test]
    fn test_rank_top_k_larger_than_catalog() {
        let ranked = rank(scored(), Some(50)).unwrap();
        assert_eq!(ranked.len(), 5);
    }

    #[test]
    fn test_rank_rejects_zero_top_k() {
        let result = rank(scored(), Some(0));
        assert!(matches!(
            result,
            Err(CareerMatcherError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rank_is_idempotent() {
        let once = rank(scored(), None).unwrap();
        let twice = rank(once.clone().into_results(), None).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_result_serializes_job_and_percentage_only() {
        let result = MatchResult::new("ab12", "Pilot", 77);
        let value = serde_json::to_value(&result).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object["job"], "Pilot");
        assert_eq!(object["percentage"], 77);
    }

    #[test]
    fn test_ranked_list_serializes_as_array() {
        let ranked = rank(scored(), Some(2)).unwrap();
        let value = serde_json::to_value(&ranked).unwrap();
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["job"], "Developer");
    }

    #[test]
    fn test_page_slices_ranked_results() {
        let ranked = rank(scored(), None).unwrap();
        let first = ranked.page(0, 2).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].job, "Developer");

        let second = ranked.page(1, 2).unwrap();
        assert_eq!(second[0].job, "Chef");

        let out_of_range = ranked.page(9, 2).unwrap();
        assert!(out_of_range.is_empty());
    }

    #[test]
    fn test_page_rejects_zero_size() {
        let ranked = rank(scored(), None).unwrap();
        assert!(ranked.page(0, 0).is_err());
    }
}

//! Profession catalog records and their adaptation into comparable profiles

use crate::error::{CareerMatcherError, Result};
use crate::matching::traits::{TraitVector, TraitWeights};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A profession document as stored by the catalog service.
///
/// Field names mirror the stored documents exactly. Only `Prerequisites`
/// and `GeneralRequirements` participate in matching; the rest is
/// descriptive content passed through untouched for presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessionRecord {
    #[serde(rename = "_id", default)]
    pub id: String,

    #[serde(rename = "jobName")]
    pub job_name: String,

    #[serde(rename = "Description", default)]
    pub description: String,

    #[serde(rename = "AverageSalary", default)]
    pub average_salary: f64,

    #[serde(rename = "jobField", default)]
    pub job_field: String,

    #[serde(rename = "facebookPostUrl", default)]
    pub facebook_post_url: String,

    #[serde(rename = "Prerequisites", default)]
    pub prerequisites: Option<TraitWeights>,

    #[serde(rename = "GeneralRequirements", default)]
    pub general_requirements: Vec<String>,

    #[serde(rename = "standardDay", default)]
    pub standard_day: String,

    #[serde(default)]
    pub education: String,

    #[serde(rename = "technicalSkills", default)]
    pub technical_skills: String,

    #[serde(rename = "workLifeBalance", default)]
    pub work_life_balance: String,
}

impl ProfessionRecord {
    /// Stable key for caching and reporting. Hand-written catalogs may omit
    /// `_id`, in which case the display name stands in.
    pub fn key(&self) -> &str {
        if self.id.is_empty() {
            &self.job_name
        } else {
            &self.id
        }
    }
}

/// Free-text requirement tags after normalization: split on delimiters,
/// trimmed, lower-cased, inner whitespace collapsed, duplicates removed
/// with first occurrence kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedTagSet {
    tags: Vec<String>,
}

impl NormalizedTagSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// The comparable form of a profession: either a canonical trait vector or
/// a non-empty normalized tag set. Exactly one mode per profession, enforced
/// here at the type level instead of by optional-field checks in callers.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparableProfile {
    Vector(TraitVector),
    Tags(NormalizedTagSet),
}

/// Adapts catalog records into comparable profiles, caching per record
/// since catalog entries are read far more often than written.
pub struct CatalogAdapter {
    delimiter: Regex,
    cache: HashMap<String, ComparableProfile>,
}

impl CatalogAdapter {
    pub fn new() -> Result<Self> {
        let delimiter = Regex::new(r"[,;/|•\n]+").map_err(|e| {
            CareerMatcherError::Configuration(format!(
                "Failed to build tag delimiter pattern: {}",
                e
            ))
        })?;

        Ok(Self {
            delimiter,
            cache: HashMap::new(),
        })
    }

    /// Map a record to its comparable profile.
    ///
    /// A `Prerequisites` map with any nonzero weight wins and is normalized
    /// to the canonical sum-100 vector (stored catalogs already sum to 100;
    /// normalization keeps hand-edited data comparable). Otherwise the
    /// general requirements are normalized into tags. A record with neither
    /// fails with [`CareerMatcherError::UnscoreableRecord`] so the caller
    /// can drop it from the batch instead of scoring it as zero.
    pub fn adapt(&mut self, record: &ProfessionRecord) -> Result<ComparableProfile> {
        let key = record.key().to_string();
        if let Some(profile) = self.cache.get(&key) {
            debug!("Using cached profile for '{}'", key);
            return Ok(profile.clone());
        }

        let profile = self.build_profile(record)?;
        self.cache.insert(key, profile.clone());
        Ok(profile)
    }

    fn build_profile(&self, record: &ProfessionRecord) -> Result<ComparableProfile> {
        if let Some(weights) = &record.prerequisites {
            // An all-zero map is how the catalog marks "characterized by
            // requirements instead", so it falls through rather than erroring.
            if let Some(vector) = TraitVector::normalize(&weights.raw()) {
                return Ok(ComparableProfile::Vector(vector));
            }
        }

        let tags = self.normalize_tags(&record.general_requirements);
        if !tags.is_empty() {
            return Ok(ComparableProfile::Tags(tags));
        }

        Err(CareerMatcherError::UnscoreableRecord {
            id: record.key().to_string(),
            job: record.job_name.clone(),
        })
    }

    /// Normalize free-text requirement entries into a tag set.
    ///
    /// Entries may pack several requirements into one string; they are split
    /// on list delimiters (comma, semicolon, slash, pipe, bullet, newline but
    /// not hyphen, which keeps compound tags whole), then each fragment is
    /// trimmed, lower-cased and whitespace-collapsed. Requirement text is
    /// user-entered in any language, so nothing here assumes ASCII.
    pub fn normalize_tags(&self, entries: &[String]) -> NormalizedTagSet {
        let mut tags = Vec::new();
        let mut seen = HashSet::new();

        for entry in entries {
            for fragment in self.delimiter.split(entry) {
                let tag = fragment
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .to_lowercase();
                if tag.is_empty() {
                    continue;
                }
                if seen.insert(tag.clone()) {
                    tags.push(tag);
                }
            }
        }

        NormalizedTagSet { tags }
    }

    pub fn cached_profiles(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

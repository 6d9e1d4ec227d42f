//! RAMAK trait categories and weight vectors

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Number of RAMAK trait categories.
pub const CATEGORY_COUNT: usize = 8;

/// The closed set of RAMAK trait categories.
///
/// Catalog documents and questionnaire answers refer to categories by these
/// exact names; anything else is rejected during deserialization instead of
/// silently becoming an unknown bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitCategory {
    Business,
    GeneralCulture,
    ArtsAndEntertainment,
    Science,
    Organization,
    Service,
    Outdoor,
    Technology,
}

impl TraitCategory {
    /// All categories in canonical declaration order.
    pub const ALL: [TraitCategory; CATEGORY_COUNT] = [
        TraitCategory::Business,
        TraitCategory::GeneralCulture,
        TraitCategory::ArtsAndEntertainment,
        TraitCategory::Science,
        TraitCategory::Organization,
        TraitCategory::Service,
        TraitCategory::Outdoor,
        TraitCategory::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TraitCategory::Business => "Business",
            TraitCategory::GeneralCulture => "GeneralCulture",
            TraitCategory::ArtsAndEntertainment => "ArtsAndEntertainment",
            TraitCategory::Science => "Science",
            TraitCategory::Organization => "Organization",
            TraitCategory::Service => "Service",
            TraitCategory::Outdoor => "Outdoor",
            TraitCategory::Technology => "Technology",
        }
    }
}

impl fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw per-category weights as stored on a profession document
/// (the `Prerequisites` object).
///
/// Carries no invariant: weights may sum to anything, including zero when a
/// profession is characterized by general requirements instead. Missing
/// categories deserialize as 0; unknown category names are errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraitWeights {
    values: [u32; CATEGORY_COUNT],
}

impl TraitWeights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(pairs: &[(TraitCategory, u32)]) -> Self {
        let mut weights = Self::default();
        for (category, value) in pairs {
            weights.values[*category as usize] = *value;
        }
        weights
    }

    pub fn get(&self, category: TraitCategory) -> u32 {
        self.values[category as usize]
    }

    pub fn set(&mut self, category: TraitCategory, value: u32) {
        self.values[category as usize] = value;
    }

    pub fn total(&self) -> u64 {
        self.values.iter().map(|v| u64::from(*v)).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }

    pub(crate) fn raw(&self) -> [u64; CATEGORY_COUNT] {
        let mut raw = [0u64; CATEGORY_COUNT];
        for (i, value) in self.values.iter().enumerate() {
            raw[i] = u64::from(*value);
        }
        raw
    }
}

impl Serialize for TraitWeights {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT))?;
        for category in TraitCategory::ALL {
            map.serialize_entry(category.as_str(), &self.values[category as usize])?;
        }
        map.end()
    }
}

struct TraitWeightsVisitor;

impl<'de> Visitor<'de> for TraitWeightsVisitor {
    type Value = TraitWeights;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of trait category names to non-negative weights")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut weights = TraitWeights::default();
        while let Some((category, value)) = access.next_entry::<TraitCategory, u32>()? {
            weights.values[category as usize] = value;
        }
        Ok(weights)
    }
}

impl<'de> Deserialize<'de> for TraitWeights {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(TraitWeightsVisitor)
    }
}

/// A completed RAMAK characterization: eight non-negative integer weights
/// summing to exactly 100.
///
/// Only produced by [`TraitVector::normalize`], so every value of this type
/// upholds the sum invariant; there is no constructor for arbitrary weights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitVector {
    weights: [u32; CATEGORY_COUNT],
}

impl TraitVector {
    /// Normalize raw per-category totals into percentage weights summing to
    /// exactly 100.
    ///
    /// Each share is rounded to the nearest integer, then the rounding
    /// residue is folded into the heaviest category (earliest category on
    /// ties) so the sum never lands on 99 or 101. Returns `None` when the
    /// raw totals are all zero, since no proportions exist to preserve.
    pub(crate) fn normalize(raw: &[u64; CATEGORY_COUNT]) -> Option<TraitVector> {
        let total: u64 = raw.iter().sum();
        if total == 0 {
            return None;
        }

        let mut weights = [0u32; CATEGORY_COUNT];
        for (i, value) in raw.iter().enumerate() {
            let share = (*value as f64) * 100.0 / (total as f64);
            weights[i] = share.round() as u32;
        }

        let rounded_sum: i64 = weights.iter().map(|w| i64::from(*w)).sum();
        let residue = 100 - rounded_sum;
        if residue != 0 {
            let mut heaviest = 0;
            for i in 1..CATEGORY_COUNT {
                if weights[i] > weights[heaviest] {
                    heaviest = i;
                }
            }
            // The heaviest rounded share is always at least 12 and the
            // residue magnitude at most 4, so this cannot underflow.
            weights[heaviest] = (i64::from(weights[heaviest]) + residue) as u32;
        }

        Some(TraitVector { weights })
    }

    pub fn weight(&self, category: TraitCategory) -> u32 {
        self.weights[category as usize]
    }

    pub fn total(&self) -> u32 {
        self.weights.iter().sum()
    }

    /// Iterate categories with their weights in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (TraitCategory, u32)> + '_ {
        TraitCategory::ALL
            .iter()
            .map(move |category| (*category, self.weights[*category as usize]))
    }

    /// The category carrying the largest weight (earliest on ties).
    pub fn dominant(&self) -> TraitCategory {
        let mut heaviest = 0;
        for i in 1..CATEGORY_COUNT {
            if self.weights[i] > self.weights[heaviest] {
                heaviest = i;
            }
        }
        TraitCategory::ALL[heaviest]
    }

    #[cfg(test)]
    pub(crate) fn zeroed() -> TraitVector {
        TraitVector {
            weights: [0; CATEGORY_COUNT],
        }
    }
}

impl Serialize for TraitVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT))?;
        for (category, weight) in self.iter() {
            map.serialize_entry(category.as_str(), &weight)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_names() {
        let json = serde_json::to_string(&TraitCategory::GeneralCulture).unwrap();
        assert_eq!(json, "\"GeneralCulture\"");

        let parsed: TraitCategory = serde_json::from_str("\"ArtsAndEntertainment\"").unwrap();
        assert_eq!(parsed, TraitCategory::ArtsAndEntertainment);
    }

    #[test]
    fn test_weights_deserialize_with_missing_keys() {
        let weights: TraitWeights =
            serde_json::from_str(r#"{"Technology": 60, "Science": 40}"#).unwrap();
        assert_eq!(weights.get(TraitCategory::Technology), 60);
        assert_eq!(weights.get(TraitCategory::Science), 40);
        assert_eq!(weights.get(TraitCategory::Outdoor), 0);
        assert_eq!(weights.total(), 100);
    }

    #[test]
    fn test_weights_reject_unknown_category() {
        let result = serde_json::from_str::<TraitWeights>(r#"{"Tecnology": 100}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_weights_serialize_all_categories() {
        let weights = TraitWeights::from_pairs(&[(TraitCategory::Business, 100)]);
        let value = serde_json::to_value(&weights).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), CATEGORY_COUNT);
        assert_eq!(map["Business"], 100);
        assert_eq!(map["Service"], 0);
    }

    #[test]
    fn test_normalize_single_category() {
        let mut raw = [0u64; CATEGORY_COUNT];
        raw[TraitCategory::Technology as usize] = 17;
        let vector = TraitVector::normalize(&raw).unwrap();
        assert_eq!(vector.weight(TraitCategory::Technology), 100);
        assert_eq!(vector.weight(TraitCategory::Business), 0);
        assert_eq!(vector.total(), 100);
    }

    #[test]
    fn test_normalize_residue_goes_to_heaviest() {
        // Three equal categories: 33.33 each rounds to 33, leaving a +1
        // residue for the earliest of the tied heaviest categories.
        let mut raw = [0u64; CATEGORY_COUNT];
        raw[TraitCategory::Business as usize] = 1;
        raw[TraitCategory::Science as usize] = 1;
        raw[TraitCategory::Outdoor as usize] = 1;
        let vector = TraitVector::normalize(&raw).unwrap();
        assert_eq!(vector.weight(TraitCategory::Business), 34);
        assert_eq!(vector.weight(TraitCategory::Science), 33);
        assert_eq!(vector.weight(TraitCategory::Outdoor), 33);
        assert_eq!(vector.total(), 100);
    }

    #[test]
    fn test_normalize_negative_residue() {
        // Eight equal categories: 12.5 each rounds to 13, so the sum
        // overshoots by 4 and the first category absorbs the correction.
        let raw = [5u64; CATEGORY_COUNT];
        let vector = TraitVector::normalize(&raw).unwrap();
        assert_eq!(vector.weight(TraitCategory::Business), 9);
        for category in &TraitCategory::ALL[1..] {
            assert_eq!(vector.weight(*category), 13);
        }
        assert_eq!(vector.total(), 100);
    }

    #[test]
    fn test_normalize_sum_is_always_100() {
        let fixtures: [[u64; CATEGORY_COUNT]; 5] = [
            [1, 2, 3, 4, 5, 6, 7, 8],
            [0, 0, 1, 0, 0, 999, 0, 0],
            [7, 7, 7, 7, 7, 7, 7, 6],
            [13, 0, 0, 0, 0, 0, 0, 29],
            [100, 100, 100, 100, 0, 0, 0, 0],
        ];
        for raw in &fixtures {
            let vector = TraitVector::normalize(raw).unwrap();
            assert_eq!(vector.total(), 100, "raw totals: {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_all_zero() {
        assert!(TraitVector::normalize(&[0; CATEGORY_COUNT]).is_none());
    }

    #[test]
    fn test_dominant_category() {
        let mut raw = [0u64; CATEGORY_COUNT];
        raw[TraitCategory::Service as usize] = 3;
        raw[TraitCategory::Organization as usize] = 1;
        let vector = TraitVector::normalize(&raw).unwrap();
        assert_eq!(vector.dominant(), TraitCategory::Service);
    }

    #[test]
    fn test_vector_serializes_as_category_map() {
        let mut raw = [0u64; CATEGORY_COUNT];
        raw[TraitCategory::Science as usize] = 1;
        let vector = TraitVector::normalize(&raw).unwrap();
        let value = serde_json::to_value(&vector).unwrap();
        assert_eq!(value["Science"], 100);
        assert_eq!(value["Business"], 0);
    }
}

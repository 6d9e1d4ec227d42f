//! Input manager for loading questionnaire and catalog files

use crate::error::{CareerMatcherError, Result};
use crate::matching::builder::QuestionnaireSubmission;
use crate::matching::catalog::ProfessionRecord;
use log::info;
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Load a questionnaire submission from a JSON file.
    pub async fn load_submission(&mut self, path: &Path) -> Result<QuestionnaireSubmission> {
        let content = self.read_json(path).await?;
        let submission: QuestionnaireSubmission = serde_json::from_str(&content)?;
        info!(
            "Loaded submission with {} answers from: {}",
            submission.answers.len(),
            path.display()
        );
        Ok(submission)
    }

    /// Load a profession catalog from a JSON file holding an array of records.
    pub async fn load_catalog(&mut self, path: &Path) -> Result<Vec<ProfessionRecord>> {
        let content = self.read_json(path).await?;
        let catalog: Vec<ProfessionRecord> = serde_json::from_str(&content)?;
        info!(
            "Loaded catalog with {} professions from: {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    async fn read_json(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        // Check cache first
        if self.enable_cache {
            if let Some(cached) = self.cache.get(&path_str) {
                info!("Using cached content for: {}", path.display());
                return Ok(cached.clone());
            }
        }

        // Validate file exists
        if !path.exists() {
            return Err(CareerMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        self.validate_extension(path)?;

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            CareerMatcherError::InvalidInput(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))
        })?;

        // Cache the result
        if self.enable_cache {
            self.cache.insert(path_str, content.clone());
        }

        Ok(content)
    }

    fn validate_extension(&self, path: &Path) -> Result<()> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                CareerMatcherError::InvalidInput(format!(
                    "File has no extension: {}",
                    path.display()
                ))
            })?;

        if !extension.eq_ignore_ascii_case("json") {
            return Err(CareerMatcherError::InvalidInput(format!(
                "Expected a .json file, got .{}: {}",
                extension,
                path.display()
            )));
        }

        Ok(())
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

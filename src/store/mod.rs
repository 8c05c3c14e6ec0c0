//! Flat-file persistence of analyzed resumes
//!
//! One JSON document per resume under the configured data directory.
//! The analysis core never touches storage; this layer owns the record
//! lifecycle, including re-analysis of stored original text.

pub mod insights;

use crate::analysis::extractor::ParsedDocument;
use crate::analysis::{AnalysisResult, Analyzer, ResumeAnalysis};
use crate::error::{Result, ResumeInsightError};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// A stored resume with its extraction and analysis results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub file_name: String,
    pub original_text: String,
    pub parsed_data: ParsedDocument,
    pub analysis: AnalysisResult,
    pub uploaded_at: DateTime<Utc>,
    pub last_analyzed: DateTime<Utc>,
}

pub struct ResumeStore {
    root: PathBuf,
}

impl ResumeStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| {
            ResumeInsightError::Storage(format!(
                "failed to create data directory {}: {}",
                root.display(),
                e
            ))
        })?;
        Ok(Self { root })
    }

    /// Persist a fresh analysis as a new record.
    pub fn insert(
        &self,
        file_name: &str,
        original_text: &str,
        result: ResumeAnalysis,
    ) -> Result<ResumeRecord> {
        let now = Utc::now();
        let record = ResumeRecord {
            id: Uuid::new_v4(),
            file_name: file_name.to_string(),
            original_text: original_text.to_string(),
            parsed_data: result.parsed_data,
            analysis: result.analysis,
            uploaded_at: now,
            last_analyzed: now,
        };
        self.write_record(&record)?;
        Ok(record)
    }

    pub fn get(&self, id: Uuid) -> Result<ResumeRecord> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(ResumeInsightError::Storage(format!(
                "no stored resume with id {}",
                id
            )));
        }
        self.read_record(&path)
    }

    /// All records, most recently uploaded first.
    pub fn list(&self) -> Result<Vec<ResumeRecord>> {
        let mut records = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                records.push(self.read_record(&path)?);
            }
        }
        records.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(records)
    }

    pub fn remove(&self, id: Uuid) -> Result<()> {
        let path = self.record_path(id);
        if !path.exists() {
            return Err(ResumeInsightError::Storage(format!(
                "no stored resume with id {}",
                id
            )));
        }
        std::fs::remove_file(path)?;
        Ok(())
    }

    /// Re-run the analyzer over a record's stored original text,
    /// replacing its parsed data and analysis and refreshing
    /// `last_analyzed`. `uploaded_at` is untouched.
    pub fn reanalyze(&self, id: Uuid, analyzer: &Analyzer) -> Result<ResumeRecord> {
        let mut record = self.get(id)?;
        let result = analyzer.analyze(&record.original_text)?;

        record.parsed_data = result.parsed_data;
        record.analysis = result.analysis;
        record.last_analyzed = Utc::now();
        self.write_record(&record)?;
        debug!("re-analyzed resume {}", id);
        Ok(record)
    }

    fn record_path(&self, id: Uuid) -> PathBuf {
        self.root.join(format!("{}.json", id))
    }

    fn write_record(&self, record: &ResumeRecord) -> Result<()> {
        let content = serde_json::to_string_pretty(record)?;
        std::fs::write(self.record_path(record.id), content)?;
        Ok(())
    }

    fn read_record(&self, path: &Path) -> Result<ResumeRecord> {
        let content = std::fs::read_to_string(path)?;
        let record = serde_json::from_str(&content)?;
        Ok(record)
    }
}

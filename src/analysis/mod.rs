//! The heuristic document-analysis engine: raw resume text in,
//! structured fields and a scored, explained analysis out.
//!
//! Everything here is pure, synchronous computation over an in-memory
//! string. The only shared state is the immutable taxonomy loaded at
//! construction, so one `Analyzer` can serve any number of concurrent
//! callers without coordination.

pub mod extractor;
pub mod feedback;
pub mod keywords;
pub mod matcher;
pub mod scorer;
pub mod taxonomy;

use crate::config::Config;
use crate::error::{Result, ResumeInsightError};
use extractor::{FieldExtractor, ParsedDocument};
use keywords::KeywordExtractor;
use log::debug;
use matcher::SkillMatcher;
use scorer::Rating;
use serde::{Deserialize, Serialize};
use taxonomy::SkillsTaxonomy;

/// Scored analysis of one resume. All three numeric fields are in
/// [0, 100], rounded once from the internal sub-scores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_score: u8,
    pub skills_match: u8,
    pub experience_relevance: u8,
    pub rating: Rating,
    pub recommendations: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub keywords: Vec<String>,
}

/// The complete output of one `Analyzer::analyze` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub parsed_data: ParsedDocument,
    pub analysis: AnalysisResult,
}

/// Sequences extraction, matching, scoring, feedback and keyword
/// extraction into one call.
pub struct Analyzer {
    taxonomy: SkillsTaxonomy,
    extractor: FieldExtractor,
    matcher: SkillMatcher,
    keyword_extractor: KeywordExtractor,
}

impl Analyzer {
    /// Build an analyzer from configuration. Taxonomy or matcher
    /// construction failures are startup-fatal for the owning process.
    pub fn new(config: &Config) -> Result<Self> {
        let additional: Vec<(String, Vec<String>)> = config
            .matching
            .additional_skills
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let taxonomy = SkillsTaxonomy::with_custom_skills(&additional)?;
        Self::with_taxonomy(taxonomy, config.matching.word_boundary)
    }

    /// Build an analyzer with the built-in taxonomy and default
    /// substring matching.
    pub fn with_defaults() -> Result<Self> {
        Self::with_taxonomy(SkillsTaxonomy::builtin(), false)
    }

    pub fn with_taxonomy(taxonomy: SkillsTaxonomy, word_boundary: bool) -> Result<Self> {
        let matcher = SkillMatcher::new(&taxonomy, word_boundary)?;
        Ok(Self {
            taxonomy,
            extractor: FieldExtractor::new(),
            matcher,
            keyword_extractor: KeywordExtractor::new(),
        })
    }

    /// Analyze one resume. Fails only on blank input; every sub-step is
    /// total over non-empty text.
    pub fn analyze(&self, text: &str) -> Result<ResumeAnalysis> {
        if text.trim().is_empty() {
            return Err(ResumeInsightError::InvalidInput(
                "resume text is empty".to_string(),
            ));
        }

        let parsed_data = self.extractor.extract(text, &self.matcher);
        let skill_analysis = self.matcher.match_skills(text);
        debug!(
            "extracted {} skills, {} experience entries, {} education entries",
            skill_analysis.total_skills,
            parsed_data.experience.len(),
            parsed_data.education.len()
        );

        let breakdown = scorer::score(&parsed_data, &skill_analysis);
        let overall_score = breakdown.rounded_overall();

        let analysis = AnalysisResult {
            overall_score,
            skills_match: breakdown.skills.round() as u8,
            experience_relevance: breakdown.experience.round() as u8,
            rating: Rating::from_score(overall_score),
            recommendations: feedback::recommendations(&parsed_data, &skill_analysis),
            strengths: feedback::strengths(&parsed_data, &skill_analysis),
            weaknesses: feedback::weaknesses(&parsed_data, &skill_analysis),
            keywords: self.keyword_extractor.keywords(text),
        };

        Ok(ResumeAnalysis {
            parsed_data,
            analysis,
        })
    }

    pub fn taxonomy(&self) -> &SkillsTaxonomy {
        &self.taxonomy
    }
}

//! Taxonomy term matching over raw document text

use crate::analysis::taxonomy::{SkillCategory, SkillsTaxonomy};
use crate::error::{Result, ResumeInsightError};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Skills found in a document, grouped by taxonomy category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAnalysis {
    /// Matched skills, de-duplicated, in taxonomy iteration order.
    pub found_skills: Vec<String>,
    pub skill_categories: SkillCategories,
    pub total_skills: usize,
}

/// Per-category match buckets. Every bucket is always present; a
/// resume with no match in a category gets an empty list, which is a
/// legal "no signal" value for the feedback rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillCategories {
    pub programming: Vec<String>,
    pub frameworks: Vec<String>,
    pub databases: Vec<String>,
    pub cloud: Vec<String>,
    pub tools: Vec<String>,
    pub methodologies: Vec<String>,
}

impl SkillCategories {
    pub fn bucket(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Programming => &self.programming,
            SkillCategory::Frameworks => &self.frameworks,
            SkillCategory::Databases => &self.databases,
            SkillCategory::Cloud => &self.cloud,
            SkillCategory::Tools => &self.tools,
            SkillCategory::Methodologies => &self.methodologies,
        }
    }

    fn bucket_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Programming => &mut self.programming,
            SkillCategory::Frameworks => &mut self.frameworks,
            SkillCategory::Databases => &mut self.databases,
            SkillCategory::Cloud => &mut self.cloud,
            SkillCategory::Tools => &mut self.tools,
            SkillCategory::Methodologies => &mut self.methodologies,
        }
    }
}

/// Matches taxonomy terms by case-insensitive substring containment.
///
/// The default mode deliberately accepts substring false positives
/// ("go" inside "django"); `word_boundary` tightens each occurrence to
/// require non-alphanumeric neighbors.
pub struct SkillMatcher {
    automaton: AhoCorasick,
    patterns: Vec<(SkillCategory, String)>,
    word_boundary: bool,
}

impl SkillMatcher {
    pub fn new(taxonomy: &SkillsTaxonomy, word_boundary: bool) -> Result<Self> {
        let patterns: Vec<(SkillCategory, String)> = taxonomy
            .iter()
            .flat_map(|(category, skills)| {
                skills.iter().map(move |s| (category, s.clone()))
            })
            .collect();

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(patterns.iter().map(|(_, s)| s.as_str()))
            .map_err(|e| {
                ResumeInsightError::Configuration(format!(
                    "failed to build skill matcher: {}",
                    e
                ))
            })?;

        Ok(Self {
            automaton,
            patterns,
            word_boundary,
        })
    }

    /// All taxonomy terms contained in `text`, in taxonomy order.
    pub fn found_terms(&self, text: &str) -> Vec<String> {
        let matched = self.matched_pattern_ids(text);
        self.patterns
            .iter()
            .enumerate()
            .filter(|(id, _)| matched.contains(id))
            .map(|(_, (_, skill))| skill.clone())
            .collect()
    }

    /// Full per-category analysis of `text`. Total and deterministic.
    pub fn match_skills(&self, text: &str) -> SkillAnalysis {
        let matched = self.matched_pattern_ids(text);

        let mut found_skills = Vec::new();
        let mut skill_categories = SkillCategories::default();
        for (id, (category, skill)) in self.patterns.iter().enumerate() {
            if matched.contains(&id) {
                found_skills.push(skill.clone());
                skill_categories.bucket_mut(*category).push(skill.clone());
            }
        }

        let total_skills = found_skills.len();
        SkillAnalysis {
            found_skills,
            skill_categories,
            total_skills,
        }
    }

    fn matched_pattern_ids(&self, text: &str) -> HashSet<usize> {
        let mut matched = HashSet::new();
        for mat in self.automaton.find_overlapping_iter(text) {
            if self.word_boundary && !is_isolated(text, mat.start(), mat.end()) {
                continue;
            }
            matched.insert(mat.pattern().as_usize());
        }
        matched
    }

    pub fn word_boundary(&self) -> bool {
        self.word_boundary
    }
}

/// True when the bytes adjacent to `[start, end)` are not alphanumeric.
/// Taxonomy terms are ASCII, so byte-level checks are sufficient.
fn is_isolated(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before_ok = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before_ok && after_ok
}

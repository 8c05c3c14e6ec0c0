//! Aggregate statistics and pairwise comparison over stored resumes

use crate::store::ResumeRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Score-distribution bucket boundaries.
const BUCKETS: &[(u8, u8)] = &[(0, 19), (20, 39), (40, 59), (60, 79), (80, 100)];
const TOP_SKILLS: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeStats {
    pub total_resumes: usize,
    pub average_score: f32,
    pub top_skills: Vec<SkillCount>,
    pub score_distribution: Vec<ScoreBucket>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBucket {
    pub range: String,
    pub count: usize,
}

/// Aggregate statistics over a set of records. An empty set yields
/// zeroed stats, not an error.
pub fn compute_stats(records: &[ResumeRecord]) -> ResumeStats {
    let total_resumes = records.len();

    let average_score = if records.is_empty() {
        0.0
    } else {
        let sum: u32 = records.iter().map(|r| r.analysis.overall_score as u32).sum();
        sum as f32 / records.len() as f32
    };

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        for skill in &record.parsed_data.skills {
            *counts.entry(skill.as_str()).or_insert(0) += 1;
        }
    }
    let mut top_skills: Vec<SkillCount> = counts
        .into_iter()
        .map(|(skill, count)| SkillCount {
            skill: skill.to_string(),
            count,
        })
        .collect();
    // count descending, then name for a stable order
    top_skills.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.skill.cmp(&b.skill)));
    top_skills.truncate(TOP_SKILLS);

    let score_distribution = BUCKETS
        .iter()
        .map(|(low, high)| ScoreBucket {
            range: format!("{}-{}", low, high),
            count: records
                .iter()
                .filter(|r| {
                    let score = r.analysis.overall_score;
                    score >= *low && score <= *high
                })
                .count(),
        })
        .collect();

    ResumeStats {
        total_resumes,
        average_score,
        top_skills,
        score_distribution,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeComparison {
    pub first: ComparisonSide,
    pub second: ComparisonSide,
    /// first minus second, so the sign says who scored higher.
    pub score_difference: i16,
    pub common_skills: Vec<String>,
    pub unique_to_first: Vec<String>,
    pub unique_to_second: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSide {
    pub name: Option<String>,
    pub file_name: String,
    pub overall_score: u8,
    pub skills: Vec<String>,
    pub experience_entries: usize,
}

pub fn compare(first: &ResumeRecord, second: &ResumeRecord) -> ResumeComparison {
    let skills_a = &first.parsed_data.skills;
    let skills_b = &second.parsed_data.skills;

    let common_skills = skills_a
        .iter()
        .filter(|s| skills_b.contains(s))
        .cloned()
        .collect();
    let unique_to_first = skills_a
        .iter()
        .filter(|s| !skills_b.contains(s))
        .cloned()
        .collect();
    let unique_to_second = skills_b
        .iter()
        .filter(|s| !skills_a.contains(s))
        .cloned()
        .collect();

    ResumeComparison {
        first: side(first),
        second: side(second),
        score_difference: first.analysis.overall_score as i16
            - second.analysis.overall_score as i16,
        common_skills,
        unique_to_first,
        unique_to_second,
    }
}

fn side(record: &ResumeRecord) -> ComparisonSide {
    ComparisonSide {
        name: record.parsed_data.name.clone(),
        file_name: record.file_name.clone(),
        overall_score: record.analysis.overall_score,
        skills: record.parsed_data.skills.clone(),
        experience_entries: record.parsed_data.experience.len(),
    }
}

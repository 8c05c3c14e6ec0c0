//! Weighted scoring of extraction and skill-match results

use crate::analysis::extractor::ParsedDocument;
use crate::analysis::matcher::SkillAnalysis;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_SKILLS_POINTS: f32 = 40.0;
pub const MAX_EXPERIENCE_POINTS: f32 = 30.0;
pub const MAX_EDUCATION_POINTS: f32 = 15.0;
pub const MAX_SUMMARY_POINTS: f32 = 15.0;

/// Unrounded sub-scores. The additive rubric is deliberately simple —
/// skills weighted heaviest — so a score is always explainable from
/// the extracted fields. Rounding happens once, at the output boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: f32,
    pub experience: f32,
    pub education: f32,
    pub summary: f32,
}

impl ScoreBreakdown {
    pub fn overall(&self) -> f32 {
        self.skills + self.experience + self.education + self.summary
    }

    /// Rounded overall score; bounded to [0, 100] by construction
    /// (40 + 30 + 15 + 15).
    pub fn rounded_overall(&self) -> u8 {
        self.overall().round() as u8
    }
}

/// Compute the sub-scores for one analyzed resume. Total function:
/// empty inputs contribute 0, nothing fails.
pub fn score(parsed: &ParsedDocument, skills: &SkillAnalysis) -> ScoreBreakdown {
    let skills_score = ((skills.total_skills * 2) as f32).min(MAX_SKILLS_POINTS);
    let experience_score = ((parsed.experience.len() * 5) as f32).min(MAX_EXPERIENCE_POINTS);
    let education_score = ((parsed.education.len() * 5) as f32).min(MAX_EDUCATION_POINTS);

    let summary_len = parsed.summary.chars().count();
    let summary_score = if summary_len > 50 {
        MAX_SUMMARY_POINTS
    } else {
        summary_len as f32 / 3.0
    };

    ScoreBreakdown {
        skills: skills_score,
        experience: experience_score,
        education: education_score,
        summary: summary_score,
    }
}

/// Qualitative label derived from the rounded overall score. Bucket
/// edges follow the score-distribution boundaries used for aggregate
/// statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rating {
    Excellent,
    Good,
    Fair,
    #[default]
    NeedsWork,
}

impl Rating {
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Rating::Excellent,
            60..=79 => Rating::Good,
            40..=59 => Rating::Fair,
            _ => Rating::NeedsWork,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Rating::Excellent => "excellent",
            Rating::Good => "good",
            Rating::Fair => "fair",
            Rating::NeedsWork => "needs work",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::{EducationEntry, ExperienceEntry};
    use crate::analysis::matcher::SkillCategories;

    fn skill_analysis(total: usize) -> SkillAnalysis {
        SkillAnalysis {
            found_skills: (0..total).map(|i| format!("skill{}", i)).collect(),
            skill_categories: SkillCategories::default(),
            total_skills: total,
        }
    }

    fn parsed(experience: usize, education: usize, summary: &str) -> ParsedDocument {
        ParsedDocument {
            summary: summary.to_string(),
            experience: vec![ExperienceEntry::default(); experience],
            education: vec![EducationEntry::default(); education],
            ..Default::default()
        }
    }

    #[test]
    fn test_sub_score_caps() {
        let breakdown = score(&parsed(10, 10, &"x".repeat(200)), &skill_analysis(50));
        assert_eq!(breakdown.skills, 40.0);
        assert_eq!(breakdown.experience, 30.0);
        assert_eq!(breakdown.education, 15.0);
        assert_eq!(breakdown.summary, 15.0);
        assert_eq!(breakdown.rounded_overall(), 100);
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let breakdown = score(&parsed(0, 0, ""), &skill_analysis(0));
        assert_eq!(breakdown.overall(), 0.0);
        assert_eq!(breakdown.rounded_overall(), 0);
    }

    #[test]
    fn test_short_summary_is_fractional() {
        let breakdown = score(&parsed(0, 0, "short one"), &skill_analysis(0));
        assert_eq!(breakdown.summary, 9.0 / 3.0);
        // rounding happens once, at the boundary
        let breakdown = score(&parsed(0, 0, "1234567"), &skill_analysis(1));
        assert!((breakdown.overall() - (2.0 + 7.0 / 3.0)).abs() < f32::EPSILON);
        assert_eq!(breakdown.rounded_overall(), 4);
    }

    #[test]
    fn test_linear_below_caps() {
        let breakdown = score(&parsed(2, 1, ""), &skill_analysis(3));
        assert_eq!(breakdown.skills, 6.0);
        assert_eq!(breakdown.experience, 10.0);
        assert_eq!(breakdown.education, 5.0);
    }

    #[test]
    fn test_rating_buckets() {
        assert_eq!(Rating::from_score(100), Rating::Excellent);
        assert_eq!(Rating::from_score(80), Rating::Excellent);
        assert_eq!(Rating::from_score(79), Rating::Good);
        assert_eq!(Rating::from_score(60), Rating::Good);
        assert_eq!(Rating::from_score(40), Rating::Fair);
        assert_eq!(Rating::from_score(39), Rating::NeedsWork);
        assert_eq!(Rating::from_score(0), Rating::NeedsWork);
    }
}

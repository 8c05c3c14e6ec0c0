//! Rule-based feedback generation from extracted and scored data

use crate::analysis::extractor::ParsedDocument;
use crate::analysis::matcher::SkillAnalysis;
use crate::analysis::taxonomy::SkillsTaxonomy;
use crate::analysis::AnalysisResult;

/// Thresholds shared by several rules below.
const FEW_SKILLS: usize = 5;
const MANY_SKILLS: usize = 8;
const SHORT_SUMMARY: usize = 50;
const LONG_SUMMARY: usize = 100;

/// Recommendation rules, evaluated in declaration order. An empty
/// result means "no signal", not an error.
pub fn recommendations(parsed: &ParsedDocument, skills: &SkillAnalysis) -> Vec<String> {
    let mut out = Vec::new();

    if skills.total_skills < FEW_SKILLS {
        out.push("Add more technical skills to your resume".to_string());
    }
    if parsed.experience.len() < 2 {
        out.push("Include more work experience or internships".to_string());
    }
    if parsed.summary.chars().count() < SHORT_SUMMARY {
        out.push("Add a comprehensive professional summary".to_string());
    }
    if parsed.education.is_empty() {
        out.push("Include your educational background".to_string());
    }
    if skills.skill_categories.programming.is_empty() {
        out.push("Consider adding programming languages to your skills".to_string());
    }

    out
}

pub fn strengths(parsed: &ParsedDocument, skills: &SkillAnalysis) -> Vec<String> {
    let mut out = Vec::new();

    if skills.total_skills >= MANY_SKILLS {
        out.push("Strong technical skillset".to_string());
    }
    if parsed.experience.len() >= 3 {
        out.push("Good work experience".to_string());
    }
    if parsed.summary.chars().count() > LONG_SUMMARY {
        out.push("Well-written professional summary".to_string());
    }
    if skills.skill_categories.programming.len() >= 3 {
        out.push("Strong programming background".to_string());
    }

    out
}

pub fn weaknesses(parsed: &ParsedDocument, skills: &SkillAnalysis) -> Vec<String> {
    let mut out = Vec::new();

    if skills.total_skills < FEW_SKILLS {
        out.push("Limited technical skills".to_string());
    }
    if parsed.experience.len() < 2 {
        out.push("Limited work experience".to_string());
    }
    if parsed.summary.chars().count() < SHORT_SUMMARY {
        out.push("Missing or weak professional summary".to_string());
    }
    if skills.skill_categories.cloud.is_empty() {
        out.push("No cloud computing skills mentioned".to_string());
    }

    out
}

/// Score-threshold tips surfaced alongside a stored analysis.
pub fn improvement_tips(analysis: &AnalysisResult) -> Vec<String> {
    let mut tips = Vec::new();

    if analysis.overall_score < 60 {
        tips.push("Focus on adding more technical skills and experience".to_string());
    }
    if analysis.skills_match < 30 {
        tips.push("Consider learning in-demand technologies like cloud platforms".to_string());
    }
    if analysis.experience_relevance < 20 {
        tips.push(
            "Include more detailed work experience with quantifiable achievements".to_string(),
        );
    }

    tips
}

/// Up to five taxonomy skills not yet on the resume, taxonomy order.
pub fn suggested_skills(taxonomy: &SkillsTaxonomy, current: &[String]) -> Vec<String> {
    taxonomy
        .all_skills()
        .into_iter()
        .filter(|skill| !current.iter().any(|c| c == skill))
        .take(5)
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::extractor::{EducationEntry, ExperienceEntry};
    use crate::analysis::matcher::SkillCategories;

    fn skills(total: usize, programming: usize, cloud: usize) -> SkillAnalysis {
        SkillAnalysis {
            found_skills: (0..total).map(|i| format!("s{}", i)).collect(),
            skill_categories: SkillCategories {
                programming: (0..programming).map(|i| format!("p{}", i)).collect(),
                cloud: (0..cloud).map(|i| format!("c{}", i)).collect(),
                ..Default::default()
            },
            total_skills: total,
        }
    }

    fn sparse_resume() -> ParsedDocument {
        ParsedDocument::default()
    }

    fn rich_resume() -> ParsedDocument {
        ParsedDocument {
            summary: "s".repeat(120),
            experience: vec![ExperienceEntry::default(); 3],
            education: vec![EducationEntry::default()],
            ..Default::default()
        }
    }

    #[test]
    fn test_sparse_resume_triggers_every_recommendation() {
        let recs = recommendations(&sparse_resume(), &skills(0, 0, 0));
        assert_eq!(recs.len(), 5);
        assert_eq!(recs[0], "Add more technical skills to your resume");
    }

    #[test]
    fn test_rich_resume_triggers_no_recommendations() {
        let recs = recommendations(&rich_resume(), &skills(9, 3, 1));
        assert!(recs.is_empty());
    }

    #[test]
    fn test_strengths_fixed_order() {
        let list = strengths(&rich_resume(), &skills(9, 3, 1));
        assert_eq!(
            list,
            vec![
                "Strong technical skillset",
                "Good work experience",
                "Well-written professional summary",
                "Strong programming background",
            ]
        );
    }

    #[test]
    fn test_weaknesses_cloud_rule() {
        let list = weaknesses(&rich_resume(), &skills(9, 3, 0));
        assert_eq!(list, vec!["No cloud computing skills mentioned"]);

        let list = weaknesses(&rich_resume(), &skills(9, 3, 2));
        assert!(list.is_empty());
    }

    #[test]
    fn test_summary_thresholds() {
        // exactly 50 chars: still "short" for recommendations, not yet
        // "long" for strengths
        let boundary = ParsedDocument {
            summary: "s".repeat(50),
            ..rich_resume()
        };
        let recs = recommendations(&boundary, &skills(9, 3, 1));
        assert!(recs.is_empty());
        let list = strengths(&boundary, &skills(9, 3, 1));
        assert!(!list.contains(&"Well-written professional summary".to_string()));
    }

    #[test]
    fn test_improvement_tips_thresholds() {
        let analysis = AnalysisResult {
            overall_score: 31,
            skills_match: 6,
            experience_relevance: 5,
            ..Default::default()
        };
        assert_eq!(improvement_tips(&analysis).len(), 3);

        let analysis = AnalysisResult {
            overall_score: 90,
            skills_match: 40,
            experience_relevance: 30,
            ..Default::default()
        };
        assert!(improvement_tips(&analysis).is_empty());
    }

    #[test]
    fn test_suggested_skills_excludes_present() {
        let taxonomy = SkillsTaxonomy::builtin();
        let current = vec!["javascript".to_string(), "python".to_string()];
        let suggested = suggested_skills(&taxonomy, &current);

        assert_eq!(suggested.len(), 5);
        assert!(!suggested.contains(&"javascript".to_string()));
        assert!(!suggested.contains(&"python".to_string()));
        assert_eq!(suggested[0], "java");
    }
}

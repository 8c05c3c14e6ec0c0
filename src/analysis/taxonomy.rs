//! Skills taxonomy: the fixed category -> skills reference table

use crate::error::{Result, ResumeInsightError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Skill categories fixed at build time. Every taxonomy term belongs to
/// exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Programming,
    Frameworks,
    Databases,
    Cloud,
    Tools,
    Methodologies,
}

impl SkillCategory {
    /// All categories in taxonomy iteration order.
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Programming,
        SkillCategory::Frameworks,
        SkillCategory::Databases,
        SkillCategory::Cloud,
        SkillCategory::Tools,
        SkillCategory::Methodologies,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Databases => "databases",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Tools => "tools",
            SkillCategory::Methodologies => "methodologies",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "programming" => Some(SkillCategory::Programming),
            "frameworks" => Some(SkillCategory::Frameworks),
            "databases" => Some(SkillCategory::Databases),
            "cloud" => Some(SkillCategory::Cloud),
            "tools" => Some(SkillCategory::Tools),
            "methodologies" => Some(SkillCategory::Methodologies),
            _ => None,
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Immutable category -> skills mapping, loaded once at startup and
/// shared read-only by the matcher and extractor.
///
/// Skill names are lower-case canonical forms; no category is empty and
/// no skill appears in more than one category.
#[derive(Debug, Clone)]
pub struct SkillsTaxonomy {
    categories: Vec<(SkillCategory, Vec<String>)>,
}

impl SkillsTaxonomy {
    /// The built-in skills database.
    pub fn builtin() -> Self {
        let lists: [(SkillCategory, &[&str]); 6] = [
            (
                SkillCategory::Programming,
                &[
                    "javascript", "python", "java", "c++", "c#", "php", "ruby", "go",
                    "rust", "swift", "kotlin", "typescript",
                ],
            ),
            (
                SkillCategory::Frameworks,
                &[
                    "react", "angular", "vue", "node.js", "express", "django", "flask",
                    "spring", "laravel", "asp.net",
                ],
            ),
            (
                SkillCategory::Databases,
                &[
                    "mysql", "postgresql", "mongodb", "redis", "sqlite", "oracle",
                    "sql server",
                ],
            ),
            (
                SkillCategory::Cloud,
                &["aws", "azure", "gcp", "docker", "kubernetes", "terraform", "jenkins"],
            ),
            (
                SkillCategory::Tools,
                &[
                    "git", "github", "gitlab", "jira", "confluence", "slack", "trello",
                    "figma", "adobe",
                ],
            ),
            (
                SkillCategory::Methodologies,
                &["agile", "scrum", "kanban", "waterfall", "devops", "ci/cd"],
            ),
        ];

        let categories = lists
            .into_iter()
            .map(|(category, skills)| {
                (category, skills.iter().map(|s| s.to_string()).collect())
            })
            .collect();

        Self { categories }
    }

    /// Add custom skills to a category. Names are lower-cased; terms
    /// already present anywhere in the taxonomy are skipped so the
    /// one-category-per-skill invariant holds.
    pub fn extend(&mut self, category: SkillCategory, skills: &[String]) {
        for skill in skills {
            let canonical = skill.trim().to_lowercase();
            if canonical.is_empty() || self.category_of(&canonical).is_some() {
                continue;
            }
            let bucket = self
                .categories
                .iter_mut()
                .find(|(c, _)| *c == category)
                .map(|(_, list)| list)
                .expect("all categories present by construction");
            bucket.push(canonical);
        }
    }

    /// Build a taxonomy from the built-in lists plus named custom
    /// skills, e.g. from the config file. Unknown category names are a
    /// configuration error (startup-fatal for the owning process).
    pub fn with_custom_skills(additional: &[(String, Vec<String>)]) -> Result<Self> {
        let mut taxonomy = Self::builtin();
        for (name, skills) in additional {
            let category = SkillCategory::from_name(name).ok_or_else(|| {
                ResumeInsightError::Configuration(format!(
                    "unknown skill category in config: {}",
                    name
                ))
            })?;
            taxonomy.extend(category, skills);
        }
        Ok(taxonomy)
    }

    pub fn lookup(&self, category: SkillCategory) -> &[String] {
        self.categories
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, list)| list.as_slice())
            .unwrap_or(&[])
    }

    /// Iterate (category, skills) pairs in taxonomy order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillCategory, &[String])> {
        self.categories.iter().map(|(c, list)| (*c, list.as_slice()))
    }

    /// Flattened de-duplicated skill list, taxonomy order.
    pub fn all_skills(&self) -> Vec<&str> {
        self.categories
            .iter()
            .flat_map(|(_, list)| list.iter().map(|s| s.as_str()))
            .collect()
    }

    pub fn category_of(&self, skill: &str) -> Option<SkillCategory> {
        let needle = skill.to_lowercase();
        self.categories
            .iter()
            .find(|(_, list)| list.iter().any(|s| *s == needle))
            .map(|(category, _)| *category)
    }

    pub fn skill_count(&self) -> usize {
        self.categories.iter().map(|(_, list)| list.len()).sum()
    }
}

impl Default for SkillsTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_categories_non_empty() {
        let taxonomy = SkillsTaxonomy::builtin();
        for category in SkillCategory::ALL {
            assert!(!taxonomy.lookup(category).is_empty(), "{} is empty", category);
        }
    }

    #[test]
    fn test_category_of() {
        let taxonomy = SkillsTaxonomy::builtin();
        assert_eq!(taxonomy.category_of("python"), Some(SkillCategory::Programming));
        assert_eq!(taxonomy.category_of("Docker"), Some(SkillCategory::Cloud));
        assert_eq!(taxonomy.category_of("scrum"), Some(SkillCategory::Methodologies));
        assert_eq!(taxonomy.category_of("cobol"), None);
    }

    #[test]
    fn test_all_skills_unique() {
        let taxonomy = SkillsTaxonomy::builtin();
        let all = taxonomy.all_skills();
        let mut deduped = all.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(all.len(), deduped.len());
        assert_eq!(all.len(), taxonomy.skill_count());
    }

    #[test]
    fn test_extend_skips_known_terms() {
        let mut taxonomy = SkillsTaxonomy::builtin();
        let before = taxonomy.skill_count();
        taxonomy.extend(
            SkillCategory::Programming,
            &["Zig".to_string(), "python".to_string()],
        );
        assert_eq!(taxonomy.skill_count(), before + 1);
        assert_eq!(taxonomy.category_of("zig"), Some(SkillCategory::Programming));
    }

    #[test]
    fn test_unknown_category_is_configuration_error() {
        let custom = vec![("hobbies".to_string(), vec!["chess".to_string()])];
        assert!(SkillsTaxonomy::with_custom_skills(&custom).is_err());
    }
}

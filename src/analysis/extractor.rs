//! Structured field extraction from raw resume text

use crate::analysis::matcher::SkillMatcher;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Structured view of a resume, produced by heuristic extraction.
/// Every field degrades gracefully: `None` or empty means "not found".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    /// De-duplicated, insertion-ordered (taxonomy order, skills-section
    /// matches first).
    pub skills: Vec<String>,
}

/// One work-history entry. Fields fill in independently as lines are
/// classified, so partially populated entries are normal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: String,
}

/// Line-scan state shared by the experience and education extractors.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ScanState {
    SeekingHeader,
    InSection,
    Done,
}

const EXPERIENCE_START: &[&str] = &["experience", "work history", "employment"];
const EXPERIENCE_STOP: &[&str] = &["education", "skills", "projects"];
const EDUCATION_START: &[&str] = &["education", "academic"];
const EDUCATION_STOP: &[&str] = &["experience", "skills", "projects"];

/// A section header is a short line (at most three words, optional
/// trailing colon) containing a trigger keyword. Prose that merely
/// mentions a keyword ("Experienced developer...") does not qualify.
fn is_section_header(line: &str, keywords: &[&str]) -> bool {
    let trimmed = line.trim().trim_end_matches(':').to_lowercase();
    if trimmed.is_empty() || trimmed.split_whitespace().count() > 3 {
        return false;
    }
    keywords.iter().any(|k| trimmed.contains(k))
}

/// Extracts a `ParsedDocument` from raw text using regex and keyword
/// heuristics. All patterns are compiled once at construction.
pub struct FieldExtractor {
    email_regex: Regex,
    phone_regex: Regex,
    name_regex: Regex,
    year_regex: Regex,
    summary_header_regex: Regex,
    skills_header_regex: Regex,
    title_keyword_regex: Regex,
    company_keyword_regex: Regex,
    degree_keyword_regex: Regex,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor {
    pub fn new() -> Self {
        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Invalid email regex");

        let phone_regex =
            Regex::new(r"\b(?:\+?1[-. ]?)?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}\b")
                .expect("Invalid phone regex");

        // Capitalized bigram, e.g. "John Smith"
        let name_regex =
            Regex::new(r"\b[A-Z][a-z]+\s+[A-Z][a-z]+\b").expect("Invalid name regex");

        let year_regex = Regex::new(r"\d{4}").expect("Invalid year regex");

        let summary_header_regex =
            Regex::new(r"(?i)summary|profile|objective").expect("Invalid summary regex");

        let skills_header_regex =
            Regex::new(r"(?i)skills|technologies|tools").expect("Invalid skills regex");

        let title_keyword_regex = Regex::new(
            r"(?i)senior|junior|lead|principal|software|developer|engineer|manager|analyst|consultant",
        )
        .expect("Invalid title regex");

        let company_keyword_regex =
            Regex::new(r"(?i)inc|corp|llc|ltd|company|tech|systems|solutions")
                .expect("Invalid company regex");

        let degree_keyword_regex = Regex::new(r"(?i)bachelor|master|phd|diploma|certificate")
            .expect("Invalid degree regex");

        Self {
            email_regex,
            phone_regex,
            name_regex,
            year_regex,
            summary_header_regex,
            skills_header_regex,
            title_keyword_regex,
            company_keyword_regex,
            degree_keyword_regex,
        }
    }

    pub fn extract(&self, text: &str, matcher: &SkillMatcher) -> ParsedDocument {
        ParsedDocument {
            name: self.extract_name(text),
            email: self.first_match(&self.email_regex, text),
            phone: self.first_match(&self.phone_regex, text),
            location: self.extract_location(text),
            summary: self.extract_summary(text),
            experience: self.extract_experience(text),
            education: self.extract_education(text),
            skills: self.extract_skills(text, matcher),
        }
    }

    fn first_match(&self, regex: &Regex, text: &str) -> Option<String> {
        regex.find(text).map(|m| m.as_str().to_string())
    }

    /// Capitalized-bigram heuristic over the first five lines, skipping
    /// lines that carry an email address. Precision is limited: any
    /// Capitalized Pair near the top can win.
    fn extract_name(&self, text: &str) -> Option<String> {
        text.lines()
            .take(5)
            .filter(|line| !line.contains('@'))
            .find_map(|line| self.first_match(&self.name_regex, line))
    }

    /// Gazetteer lookup: earliest case-insensitive occurrence of a
    /// known city name wins. Recall is bounded by the gazetteer.
    fn extract_location(&self, text: &str) -> Option<String> {
        let lower = text.to_lowercase();
        LOCATION_GAZETTEER
            .iter()
            .filter_map(|city| lower.find(&city.to_lowercase()).map(|pos| (pos, *city)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, city)| city.to_string())
    }

    /// The summary body runs from just after the first {summary,
    /// profile, objective} token to the next blank-line boundary, or
    /// document end.
    fn extract_summary(&self, text: &str) -> String {
        let Some(header) = self.summary_header_regex.find(text) else {
            return String::new();
        };
        let end = text[header.start()..]
            .find("\n\n")
            .map(|offset| header.start() + offset)
            .unwrap_or(text.len());
        text[header.end()..end].trim().to_string()
    }

    fn extract_experience(&self, text: &str) -> Vec<ExperienceEntry> {
        let mut entries = Vec::new();
        let mut state = ScanState::SeekingHeader;
        let mut current = ExperienceEntry::default();

        for raw_line in text.lines() {
            let line = raw_line.trim();
            match state {
                ScanState::SeekingHeader => {
                    if is_section_header(line, EXPERIENCE_START) {
                        state = ScanState::InSection;
                    }
                }
                ScanState::InSection => {
                    if is_section_header(line, EXPERIENCE_STOP) {
                        state = ScanState::Done;
                        continue;
                    }
                    if line.is_empty() {
                        continue;
                    }
                    if self.title_keyword_regex.is_match(line) && current.title.is_none() {
                        current.title = Some(line.to_string());
                    } else if self.company_keyword_regex.is_match(line)
                        && current.company.is_none()
                    {
                        current.company = Some(line.to_string());
                    } else if self.year_regex.is_match(line) && current.duration.is_none() {
                        current.duration = Some(line.to_string());
                    } else if current.title.is_some() && current.company.is_some() {
                        // Entry complete: the next unclassified line is
                        // its description. An in-progress entry that
                        // never reaches this point is dropped.
                        current.description = Some(line.to_string());
                        entries.push(std::mem::take(&mut current));
                    }
                }
                ScanState::Done => break,
            }
        }

        entries
    }

    fn extract_education(&self, text: &str) -> Vec<EducationEntry> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let mut entries = Vec::new();
        let mut state = ScanState::SeekingHeader;

        for (i, line) in lines.iter().enumerate() {
            match state {
                ScanState::SeekingHeader => {
                    if is_section_header(line, EDUCATION_START) {
                        state = ScanState::InSection;
                    }
                }
                ScanState::InSection => {
                    if is_section_header(line, EDUCATION_STOP) {
                        state = ScanState::Done;
                        continue;
                    }
                    if line.is_empty() || !self.degree_keyword_regex.is_match(line) {
                        continue;
                    }
                    let institution = lines.get(i + 1).copied().unwrap_or("").to_string();
                    entries.push(EducationEntry {
                        degree: line.to_string(),
                        institution,
                        year: self.nearby_year(&lines, i),
                    });
                }
                ScanState::Done => break,
            }
        }

        entries
    }

    /// First 4-digit token on the degree line, the institution line, or
    /// the line after it.
    fn nearby_year(&self, lines: &[&str], degree_index: usize) -> String {
        lines
            .iter()
            .skip(degree_index)
            .take(3)
            .find_map(|line| self.year_regex.find(line))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    /// Two-pass union: taxonomy terms in the bounded skills section
    /// first, then the whole document. De-duplicated, taxonomy order
    /// within each pass.
    fn extract_skills(&self, text: &str, matcher: &SkillMatcher) -> Vec<String> {
        let mut skills: Vec<String> = Vec::new();

        if let Some(header) = self.skills_header_regex.find(text) {
            let end = text[header.start()..]
                .find("\n\n")
                .map(|offset| header.start() + offset)
                .unwrap_or(text.len());
            for term in matcher.found_terms(&text[header.end()..end]) {
                if !skills.contains(&term) {
                    skills.push(term);
                }
            }
        }

        for term in matcher.found_terms(text) {
            if !skills.contains(&term) {
                skills.push(term);
            }
        }

        skills
    }
}

/// Cities recognized by the location heuristic.
const LOCATION_GAZETTEER: &[&str] = &[
    "New York",
    "San Francisco",
    "Los Angeles",
    "Seattle",
    "Austin",
    "Boston",
    "Chicago",
    "Denver",
    "Atlanta",
    "Portland",
    "San Diego",
    "San Jose",
    "Dallas",
    "Houston",
    "Miami",
    "Philadelphia",
    "Phoenix",
    "Toronto",
    "Vancouver",
    "London",
    "Berlin",
    "Paris",
    "Amsterdam",
    "Dublin",
    "Sydney",
    "Singapore",
    "Bangalore",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::taxonomy::SkillsTaxonomy;

    fn extractor() -> FieldExtractor {
        FieldExtractor::new()
    }

    fn matcher() -> SkillMatcher {
        SkillMatcher::new(&SkillsTaxonomy::builtin(), false).unwrap()
    }

    #[test]
    fn test_contact_extraction() {
        let text = "Jane Doe\njane.doe@example.com\n555-123-4567\nSeattle, WA";
        let parsed = extractor().extract(text, &matcher());

        assert_eq!(parsed.name.as_deref(), Some("Jane Doe"));
        assert_eq!(parsed.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(parsed.phone.as_deref(), Some("555-123-4567"));
        assert_eq!(parsed.location.as_deref(), Some("Seattle"));
    }

    #[test]
    fn test_contact_absent() {
        let parsed = extractor().extract("just some plain text", &matcher());
        assert_eq!(parsed.name, None);
        assert_eq!(parsed.email, None);
        assert_eq!(parsed.phone, None);
        assert_eq!(parsed.location, None);
    }

    #[test]
    fn test_summary_bounded_by_blank_line() {
        let text = "Summary\nSeasoned backend developer.\nTen years of services work.\n\nExperience\n";
        let summary = extractor().extract_summary(text);
        assert_eq!(
            summary,
            "Seasoned backend developer.\nTen years of services work."
        );
    }

    #[test]
    fn test_summary_missing_header() {
        assert_eq!(extractor().extract_summary("no headers here"), "");
    }

    #[test]
    fn test_summary_runs_to_document_end() {
        let text = "Profile\nBuilds things.";
        assert_eq!(extractor().extract_summary(text), "Builds things.");
    }

    #[test]
    fn test_experience_entry_finalized_by_description() {
        let text = "Experience\nSenior Developer\nAcme Corp\n2020 - 2023\nShipped the billing platform.\nEducation\n";
        let entries = extractor().extract_experience(text);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title.as_deref(), Some("Senior Developer"));
        assert_eq!(entries[0].company.as_deref(), Some("Acme Corp"));
        assert_eq!(entries[0].duration.as_deref(), Some("2020 - 2023"));
        assert_eq!(
            entries[0].description.as_deref(),
            Some("Shipped the billing platform.")
        );
    }

    #[test]
    fn test_experience_prose_does_not_open_section() {
        // "Experienced" in prose must not activate the scan
        let text = "Experienced Senior Developer with 5 years.\nSkills\nPython";
        assert!(extractor().extract_experience(text).is_empty());
    }

    #[test]
    fn test_experience_in_progress_entry_dropped() {
        // no description line arrives before the section ends
        let text = "Experience\nSenior Developer\nAcme Corp\nEducation\n";
        assert!(extractor().extract_experience(text).is_empty());
    }

    #[test]
    fn test_experience_multiple_entries() {
        let text = "Work History\nLead Engineer\nGlobex Inc\nBuilt the data pipeline.\nSoftware Developer\nInitech Systems\n2015\nMaintained internal tooling.\nSkills\n";
        let entries = extractor().extract_experience(text);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title.as_deref(), Some("Lead Engineer"));
        assert_eq!(entries[0].company.as_deref(), Some("Globex Inc"));
        assert_eq!(entries[0].duration, None);
        assert_eq!(entries[1].company.as_deref(), Some("Initech Systems"));
        assert_eq!(entries[1].duration.as_deref(), Some("2015"));
    }

    #[test]
    fn test_education_entry_with_year_fallback() {
        let text = "Education\nBachelor of Science\nMIT\n2015";
        let entries = extractor().extract_education(text);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "Bachelor of Science");
        assert_eq!(entries[0].institution, "MIT");
        assert_eq!(entries[0].year, "2015");
    }

    #[test]
    fn test_education_year_on_degree_line() {
        let text = "Education\nMaster of Engineering, 2018\nStanford University";
        let entries = extractor().extract_education(text);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].year, "2018");
        assert_eq!(entries[0].institution, "Stanford University");
    }

    #[test]
    fn test_education_stops_at_next_section() {
        let text = "Education\nBachelor of Arts\nState College\nSkills\nMaster of Science\nIgnored";
        let entries = extractor().extract_education(text);
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_skills_union_order() {
        let text = "Intro mentions docker early.\nSkills\nPython and AWS\n\nMore text with mysql.";
        let skills = extractor().extract_skills(text, &matcher());

        // section matches first (taxonomy order), then remaining
        // whole-document matches
        let python = skills.iter().position(|s| s == "python").unwrap();
        let aws = skills.iter().position(|s| s == "aws").unwrap();
        let docker = skills.iter().position(|s| s == "docker").unwrap();
        assert!(python < aws);
        assert!(aws < docker);
        assert!(skills.contains(&"mysql".to_string()));

        let mut deduped = skills.clone();
        deduped.dedup();
        assert_eq!(skills.len(), deduped.len());
    }

    #[test]
    fn test_headerless_document() {
        let text = "Plain paragraph that talks about rust and kubernetes without any structure.";
        let parsed = extractor().extract(text, &matcher());

        assert_eq!(parsed.summary, "");
        assert!(parsed.experience.is_empty());
        assert!(parsed.education.is_empty());
        assert!(parsed.skills.contains(&"rust".to_string()));
        assert!(parsed.skills.contains(&"kubernetes".to_string()));
    }
}

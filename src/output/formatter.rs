//! Output formatters: console, JSON and Markdown renditions of one
//! analyzed resume

use crate::analysis::scorer::Rating;
use crate::analysis::ResumeAnalysis;
use crate::config::OutputFormat;
use crate::error::Result;
use colored::{Color, Colorize};
use serde_json::json;

/// Everything a formatter needs to render one report.
pub struct ReportContext<'a> {
    pub file_name: &'a str,
    pub result: &'a ResumeAnalysis,
    pub improvement_tips: &'a [String],
    pub suggested_skills: &'a [String],
}

pub trait OutputFormatter {
    fn format_report(&self, context: &ReportContext<'_>) -> Result<String>;
}

pub struct ConsoleFormatter {
    use_colors: bool,
}

pub struct JsonFormatter;

pub struct MarkdownFormatter;

/// Routes a report to the formatter for the requested output format.
pub struct ReportGenerator {
    use_colors: bool,
}

impl ReportGenerator {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn render(&self, context: &ReportContext<'_>, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => ConsoleFormatter {
                use_colors: self.use_colors,
            }
            .format_report(context),
            OutputFormat::Json => JsonFormatter.format_report(context),
            OutputFormat::Markdown => MarkdownFormatter.format_report(context),
        }
    }
}

fn rating_color(rating: Rating) -> Color {
    match rating {
        Rating::Excellent => Color::Green,
        Rating::Good => Color::Cyan,
        Rating::Fair => Color::Yellow,
        Rating::NeedsWork => Color::Red,
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, context: &ReportContext<'_>) -> Result<String> {
        let analysis = &context.result.analysis;
        let parsed = &context.result.parsed_data;
        let mut out = String::new();

        let headline = format!(
            "{}: {}/100 ({})",
            context.file_name, analysis.overall_score, analysis.rating
        );
        if self.use_colors {
            out.push_str(&format!(
                "{}\n",
                headline.color(rating_color(analysis.rating)).bold()
            ));
        } else {
            out.push_str(&headline);
            out.push('\n');
        }

        out.push_str(&format!(
            "  skills match: {}/40   experience: {}/30\n\n",
            analysis.skills_match, analysis.experience_relevance
        ));

        out.push_str("Contact\n");
        for (label, value) in [
            ("name", &parsed.name),
            ("email", &parsed.email),
            ("phone", &parsed.phone),
            ("location", &parsed.location),
        ] {
            out.push_str(&format!(
                "  {}: {}\n",
                label,
                value.as_deref().unwrap_or("not found")
            ));
        }

        if !parsed.skills.is_empty() {
            out.push_str(&format!("\nSkills ({})\n  {}\n", parsed.skills.len(), parsed.skills.join(", ")));
        }
        if !parsed.experience.is_empty() {
            out.push_str(&format!("\nExperience ({} entries)\n", parsed.experience.len()));
            for entry in &parsed.experience {
                out.push_str(&format!(
                    "  {} @ {} ({})\n",
                    entry.title.as_deref().unwrap_or("?"),
                    entry.company.as_deref().unwrap_or("?"),
                    entry.duration.as_deref().unwrap_or("n/a")
                ));
            }
        }
        if !parsed.education.is_empty() {
            out.push_str(&format!("\nEducation ({} entries)\n", parsed.education.len()));
            for entry in &parsed.education {
                out.push_str(&format!(
                    "  {}, {} {}\n",
                    entry.degree, entry.institution, entry.year
                ));
            }
        }

        for (title, items) in [
            ("Strengths", analysis.strengths.as_slice()),
            ("Weaknesses", analysis.weaknesses.as_slice()),
            ("Recommendations", analysis.recommendations.as_slice()),
            ("Improvement tips", context.improvement_tips),
        ] {
            if !items.is_empty() {
                out.push_str(&format!("\n{}\n", title));
                for item in items {
                    out.push_str(&format!("  - {}\n", item));
                }
            }
        }

        if !context.suggested_skills.is_empty() {
            out.push_str(&format!(
                "\nSuggested skills: {}\n",
                context.suggested_skills.join(", ")
            ));
        }

        if !analysis.keywords.is_empty() {
            out.push_str(&format!("\nKeywords: {}\n", analysis.keywords.join(", ")));
        }

        Ok(out)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, context: &ReportContext<'_>) -> Result<String> {
        let value = json!({
            "file_name": context.file_name,
            "parsed_data": context.result.parsed_data,
            "analysis": context.result.analysis,
            "improvement_tips": context.improvement_tips,
            "suggested_skills": context.suggested_skills,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, context: &ReportContext<'_>) -> Result<String> {
        let analysis = &context.result.analysis;
        let parsed = &context.result.parsed_data;
        let mut out = String::new();

        out.push_str(&format!("# Resume analysis: {}\n\n", context.file_name));
        out.push_str(&format!(
            "**Overall score:** {}/100 ({})\n\n",
            analysis.overall_score, analysis.rating
        ));
        out.push_str(&format!(
            "| Dimension | Score |\n|---|---|\n| Skills match | {}/40 |\n| Experience relevance | {}/30 |\n\n",
            analysis.skills_match, analysis.experience_relevance
        ));

        if !parsed.skills.is_empty() {
            out.push_str(&format!("## Skills\n\n{}\n\n", parsed.skills.join(", ")));
        }

        for (title, items) in [
            ("Strengths", analysis.strengths.as_slice()),
            ("Weaknesses", analysis.weaknesses.as_slice()),
            ("Recommendations", analysis.recommendations.as_slice()),
        ] {
            if !items.is_empty() {
                out.push_str(&format!("## {}\n\n", title));
                for item in items {
                    out.push_str(&format!("- {}\n", item));
                }
                out.push('\n');
            }
        }

        if !analysis.keywords.is_empty() {
            out.push_str(&format!("## Keywords\n\n{}\n", analysis.keywords.join(", ")));
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analyzer;

    fn context_fixture() -> ResumeAnalysis {
        Analyzer::with_defaults()
            .unwrap()
            .analyze("Grace Hopper\nSummary\nCompiler pioneer, python and rust practitioner with long experience in systems.\nSkills\nPython, Rust, AWS")
            .unwrap()
    }

    #[test]
    fn test_console_report_plain() {
        let result = context_fixture();
        let context = ReportContext {
            file_name: "grace.txt",
            result: &result,
            improvement_tips: &[],
            suggested_skills: &[],
        };
        let report = ReportGenerator::new(false)
            .render(&context, OutputFormat::Console)
            .unwrap();

        assert!(report.contains("grace.txt"));
        assert!(report.contains("Contact"));
        assert!(report.contains("python"));
    }

    #[test]
    fn test_json_report_parses_back() {
        let result = context_fixture();
        let context = ReportContext {
            file_name: "grace.txt",
            result: &result,
            improvement_tips: &[],
            suggested_skills: &[],
        };
        let report = ReportGenerator::new(false)
            .render(&context, OutputFormat::Json)
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["file_name"], "grace.txt");
        assert!(value["analysis"]["overall_score"].is_u64());
    }

    #[test]
    fn test_markdown_report_sections() {
        let result = context_fixture();
        let context = ReportContext {
            file_name: "grace.txt",
            result: &result,
            improvement_tips: &[],
            suggested_skills: &[],
        };
        let report = ReportGenerator::new(false)
            .render(&context, OutputFormat::Markdown)
            .unwrap();

        assert!(report.starts_with("# Resume analysis: grace.txt"));
        assert!(report.contains("## Skills"));
        assert!(report.contains("**Overall score:**"));
    }
}

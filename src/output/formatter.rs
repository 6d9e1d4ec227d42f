//! Output formatters for match reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::MatchReport;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting match reports
pub trait OutputFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and score badges
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and saved reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            use_colors,
            detailed,
        }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!(
                "\n{} {}\n",
                prefix.color(color).bold(),
                title.color(color).bold()
            )
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, percentage: u8) -> String {
        let (badge, color) = match percentage {
            80..=100 => ("EXCELLENT", Color::Green),
            60..=79 => ("GOOD", Color::Cyan),
            40..=59 => ("FAIR", Color::Yellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn percentage_color(percentage: u8) -> Color {
        match percentage {
            80..=100 => Color::Green,
            60..=79 => Color::Cyan,
            40..=59 => Color::Yellow,
            _ => Color::Red,
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        // Header
        output.push_str(&self.format_header("📊 CAREER MATCH RESULTS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at)
                .format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        // Ranked matches
        output.push_str(&self.format_header("Top Matches", 2));
        if report.results.is_empty() {
            output.push_str(&self.colorize(
                "No profession could be matched against this questionnaire.\n",
                Color::Yellow,
            ));
        }
        for (i, result) in report.results.iter().enumerate() {
            let percentage_text = self.colorize(
                &format!("{}%", result.percentage),
                Self::percentage_color(result.percentage),
            );
            output.push_str(&format!(
                "{:2}. {} {} {}\n",
                i + 1,
                self.colorize(&result.job, Color::White),
                percentage_text,
                self.format_score_badge(result.percentage)
            ));
        }

        // Skipped records
        if !report.excluded.is_empty() {
            output.push_str(&format!(
                "\n⚠️  {} catalog record(s) skipped (no usable profile)\n",
                report.excluded.len()
            ));
            if self.detailed {
                for excluded in &report.excluded {
                    output.push_str(&format!(
                        "  • {} {}\n",
                        excluded.job,
                        self.colorize(&format!("({})", excluded.reason), Color::BrightBlack)
                    ));
                }
            }
        }

        if self.detailed {
            // Trait profile breakdown (only in detailed mode)
            output.push_str(&self.format_header("Your Trait Profile", 2));
            for (category, weight) in report.user_profile.iter() {
                output.push_str(&format!("  {:<22} {:>3}%\n", category.to_string(), weight));
            }
        }

        // Footer
        output.push_str(&format!(
            "\n{} Career Matcher v{} | Method: {} | Scored {}/{} professions\n",
            self.colorize("ℹ️", Color::Blue),
            report.metadata.matcher_version,
            report.metadata.similarity_method,
            report.metadata.scored,
            report.metadata.catalog_size
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_score_badge(percentage: u8) -> &'static str {
        match percentage {
            80..=100 => "🟢 Excellent",
            60..=79 => "🟡 Good",
            40..=59 => "🟠 Fair",
            _ => "🔴 Weak",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &MatchReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 Career Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms\n",
                chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at)
                    .format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
            output.push_str(&format!(
                "**Method:** {} | **Scored:** {}/{} professions\n\n",
                report.metadata.similarity_method,
                report.metadata.scored,
                report.metadata.catalog_size
            ));
        }

        // Ranked matches
        output.push_str("## Top Matches\n\n");
        if report.results.is_empty() {
            output.push_str("_No profession could be matched against this questionnaire._\n\n");
        } else {
            output.push_str("| # | Profession | Match |\n");
            output.push_str("|---|------------|-------|\n");
            for (i, result) in report.results.iter().enumerate() {
                output.push_str(&format!(
                    "| {} | {} | {}% {} |\n",
                    i + 1,
                    result.job,
                    result.percentage,
                    Self::markdown_score_badge(result.percentage)
                ));
            }
            output.push('\n');
        }

        // Trait profile
        output.push_str("## Trait Profile\n\n");
        output.push_str("| Category | Weight |\n");
        output.push_str("|----------|--------|\n");
        for (category, weight) in report.user_profile.iter() {
            output.push_str(&format!("| {} | {}% |\n", category, weight));
        }
        output.push('\n');

        // Skipped records
        if !report.excluded.is_empty() {
            output.push_str("## ⚠️ Skipped Records\n\n");
            for excluded in &report.excluded {
                output.push_str(&format!("- **{}**: {}\n", excluded.job, excluded.reason));
            }
            output.push('\n');
        }

        // Footer
        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "*Generated by Career Matcher v{}*\n",
                report.metadata.matcher_version
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &MatchReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

// Utility functions for saving reports

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, timestamp: bool) -> String {
    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("career_matches{}.txt", timestamp_suffix),
        OutputFormat::Json => format!("career_matches{}.json", timestamp_suffix),
        OutputFormat::Markdown => format!("career_matches{}.md", timestamp_suffix),
    }
}

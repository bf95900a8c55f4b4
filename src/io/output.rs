use super::envelope::{ApiResponse, ErrorBody, ErrorEnvelope};
use crate::core::{AnalysisResult, PowerWord, Result, Severity, SpamTrigger};
use crate::scoring::BatchSummary;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "terminal" => Ok(OutputFormat::Terminal),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Outcome for one input line: a full result, or why it was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReportEntry {
    Analyzed(AnalysisResult),
    Failed {
        #[serde(rename = "subjectLine")]
        subject_line: String,
        error: ErrorBody,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub entries: Vec<ReportEntry>,
    pub summary: BatchSummary,
}

impl AnalysisReport {
    /// Pair each input with its outcome. `subjects` and `results` must line up.
    pub fn from_results(subjects: &[String], results: Vec<Result<AnalysisResult>>) -> Self {
        let entries: Vec<ReportEntry> = subjects
            .iter()
            .zip(results)
            .map(|(subject, result)| match result {
                Ok(analysis) => ReportEntry::Analyzed(analysis),
                Err(e) => ReportEntry::Failed {
                    subject_line: subject.clone(),
                    error: ErrorBody::from(&e),
                },
            })
            .collect();

        let successes: Vec<&AnalysisResult> = entries
            .iter()
            .filter_map(|entry| match entry {
                ReportEntry::Analyzed(result) => Some(result),
                ReportEntry::Failed { .. } => None,
            })
            .collect();
        let summary = BatchSummary::from_successes(&successes, entries.len() - successes.len());

        Self { entries, summary }
    }

    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }
}

/// Read-only rule table to list.
#[derive(Debug, Clone, Copy)]
pub enum RuleListing {
    SpamTriggers(&'static [SpamTrigger]),
    PowerWords(&'static [PowerWord]),
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
    fn write_rules(&mut self, rules: RuleListing) -> anyhow::Result<()>;
}

#[derive(Serialize)]
struct BatchData<'a> {
    results: &'a [ReportEntry],
    summary: &'a BatchSummary,
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        match report.entries.as_slice() {
            [ReportEntry::Analyzed(result)] => self.write_json(&ApiResponse::ok(result)),
            [ReportEntry::Failed { error, .. }] => self.write_json(&ErrorEnvelope {
                error: error.clone(),
            }),
            entries => self.write_json(&ApiResponse {
                success: !report.has_failures(),
                data: BatchData {
                    results: entries,
                    summary: &report.summary,
                },
            }),
        }
    }

    fn write_rules(&mut self, rules: RuleListing) -> anyhow::Result<()> {
        match rules {
            RuleListing::SpamTriggers(triggers) => self.write_json(&ApiResponse::ok(triggers)),
            RuleListing::PowerWords(words) => self.write_json(&ApiResponse::ok(words)),
        }
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_entry(&mut self, entry: &ReportEntry) -> anyhow::Result<()> {
        match entry {
            ReportEntry::Analyzed(result) => self.write_result(result),
            ReportEntry::Failed {
                subject_line,
                error,
            } => {
                writeln!(self.writer, "## `{subject_line}`")?;
                writeln!(self.writer)?;
                writeln!(self.writer, "> Error: {}", error.message)?;
                writeln!(self.writer)?;
                Ok(())
            }
        }
    }

    fn write_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        writeln!(self.writer, "## `{}`", result.subject_line)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Overall Score | {} / 100 |", result.overall_score)?;
        writeln!(self.writer, "| Spam Score | {} / 100 |", result.spam_score)?;
        writeln!(self.writer, "| Length | {} |", result.length)?;
        writeln!(self.writer, "| Words | {} |", result.word_count)?;
        writeln!(
            self.writer,
            "| Power Words | {} |",
            if result.power_words.is_empty() {
                "-".to_string()
            } else {
                result.power_words.join(", ")
            }
        )?;
        writeln!(self.writer)?;

        if !result.issues.is_empty() {
            writeln!(self.writer, "### Issues")?;
            writeln!(self.writer)?;
            for issue in &result.issues {
                writeln!(self.writer, "- **{}** {}", issue.impact, issue.text)?;
            }
            writeln!(self.writer)?;
        }

        if !result.suggestions.is_empty() {
            writeln!(self.writer, "### Suggestions")?;
            writeln!(self.writer)?;
            for suggestion in &result.suggestions {
                writeln!(self.writer, "- [ ] {suggestion}")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_summary(&mut self, summary: &BatchSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Analyzed | {} |", summary.analyzed)?;
        writeln!(self.writer, "| Failed | {} |", summary.failed)?;
        writeln!(
            self.writer,
            "| Average Overall Score | {:.1} |",
            summary.average_overall_score
        )?;
        writeln!(
            self.writer,
            "| Average Spam Score | {:.1} |",
            summary.average_spam_score
        )?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Subject Line Analysis")?;
        writeln!(self.writer)?;
        for entry in &report.entries {
            self.write_entry(entry)?;
        }
        if report.entries.len() > 1 {
            self.write_summary(&report.summary)?;
        }
        Ok(())
    }

    fn write_rules(&mut self, rules: RuleListing) -> anyhow::Result<()> {
        match rules {
            RuleListing::SpamTriggers(triggers) => {
                writeln!(self.writer, "# Spam Triggers")?;
                writeln!(self.writer)?;
                writeln!(self.writer, "| Word | Impact | Reason |")?;
                writeln!(self.writer, "|------|--------|--------|")?;
                for t in triggers {
                    writeln!(self.writer, "| {} | {} | {} |", t.word, t.impact, t.reason)?;
                }
            }
            RuleListing::PowerWords(words) => {
                writeln!(self.writer, "# Power Words")?;
                writeln!(self.writer)?;
                writeln!(self.writer, "| Word | Category | Impact |")?;
                writeln!(self.writer, "|------|----------|--------|")?;
                for pw in words {
                    writeln!(self.writer, "| {} | {} | {} |", pw.word, pw.category, pw.impact)?;
                }
            }
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn print_result(&mut self, result: &AnalysisResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", format!("\"{}\"", result.subject_line).bold())?;
        writeln!(
            self.writer,
            "  Overall score: {}   Spam score: {}",
            overall_colored(result.overall_score),
            spam_colored(result.spam_score)
        )?;
        writeln!(
            self.writer,
            "  Length: {} chars, {} words{}",
            result.length,
            result.word_count,
            if result.has_punctuation {
                ", has punctuation"
            } else {
                ""
            }
        )?;
        if !result.power_words.is_empty() {
            writeln!(
                self.writer,
                "  Power words: {}",
                result.power_words.join(", ").cyan()
            )?;
        }

        if !result.issues.is_empty() {
            writeln!(self.writer, "  {}", "Issues:".bold())?;
            for issue in &result.issues {
                writeln!(
                    self.writer,
                    "    {} {}",
                    severity_marker(issue.impact),
                    issue.text
                )?;
            }
        }

        if !result.suggestions.is_empty() {
            writeln!(self.writer, "  {}", "Suggestions:".bold())?;
            for suggestion in &result.suggestions {
                writeln!(self.writer, "    - {suggestion}")?;
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_summary(&mut self, summary: &BatchSummary) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Summary".bold().blue())?;
        writeln!(
            self.writer,
            "  Analyzed: {}  Failed: {}",
            summary.analyzed, summary.failed
        )?;
        writeln!(
            self.writer,
            "  Average overall: {:.1}  Average spam: {:.1}",
            summary.average_overall_score, summary.average_spam_score
        )?;
        if !summary.top_spam_triggers.is_empty() {
            let triggers: Vec<String> = summary
                .top_spam_triggers
                .iter()
                .map(|t| format!("{} ({})", t.word, t.count))
                .collect();
            writeln!(self.writer, "  Top spam triggers: {}", triggers.join(", "))?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Subject Line Analysis".bold().blue())?;
        writeln!(self.writer, "{}", "=====================".blue())?;
        writeln!(self.writer)?;

        for entry in &report.entries {
            match entry {
                ReportEntry::Analyzed(result) => self.print_result(result)?,
                ReportEntry::Failed {
                    subject_line,
                    error,
                } => {
                    writeln!(
                        self.writer,
                        "{} \"{}\": {}",
                        "error".red().bold(),
                        subject_line,
                        error.message
                    )?;
                    writeln!(self.writer)?;
                }
            }
        }

        if report.entries.len() > 1 {
            self.print_summary(&report.summary)?;
        }
        Ok(())
    }

    fn write_rules(&mut self, rules: RuleListing) -> anyhow::Result<()> {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        match rules {
            RuleListing::SpamTriggers(triggers) => {
                table.set_header(vec!["Word", "Impact", "Reason"]);
                for t in triggers {
                    table.add_row(vec![
                        t.word.to_string(),
                        t.impact.to_string(),
                        t.reason.to_string(),
                    ]);
                }
            }
            RuleListing::PowerWords(words) => {
                table.set_header(vec!["Word", "Category", "Impact"]);
                for pw in words {
                    table.add_row(vec![
                        pw.word.to_string(),
                        pw.category.to_string(),
                        pw.impact.to_string(),
                    ]);
                }
            }
        }

        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

fn overall_colored(score: u32) -> ColoredString {
    match score {
        70..=100 => score.to_string().green(),
        50..=69 => score.to_string().yellow(),
        _ => score.to_string().red(),
    }
}

fn spam_colored(score: u32) -> ColoredString {
    match score {
        0..=20 => score.to_string().green(),
        21..=50 => score.to_string().yellow(),
        _ => score.to_string().red(),
    }
}

fn severity_marker(severity: Severity) -> ColoredString {
    match severity {
        Severity::High => "[high]".red(),
        Severity::Medium => "[medium]".yellow(),
        Severity::Low => "[low]".normal(),
    }
}

pub fn create_writer(format: OutputFormat, destination: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(destination)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(destination)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(destination)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::rules::{POWER_WORDS, SPAM_TRIGGERS};
    use crate::scoring::{FixedSampler, SubjectLineScorer};
    use serde_json::Value;

    fn report_for(subjects: &[&str]) -> AnalysisReport {
        let scorer = SubjectLineScorer::new();
        let subjects: Vec<String> = subjects.iter().map(|s| s.to_string()).collect();
        let results = subjects
            .iter()
            .map(|s| scorer.analyze_with(s, &mut FixedSampler::TableOrder))
            .collect();
        AnalysisReport::from_results(&subjects, results)
    }

    fn json_output(report: &AnalysisReport) -> Value {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer).write_report(report).unwrap();
        serde_json::from_slice(&buffer).unwrap()
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("md".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_single_result_uses_success_envelope() {
        let value = json_output(&report_for(&["Quick question about your project"]));
        assert_eq!(value["success"], true);
        assert_eq!(value["data"]["wordCount"], 5);
        assert_eq!(value["data"]["overallScore"], 90);
    }

    #[test]
    fn test_single_failure_uses_error_envelope() {
        let value = json_output(&report_for(&[""]));
        assert_eq!(value["error"]["status"], 400);
        assert!(value.get("success").is_none());
    }

    #[test]
    fn test_batch_json_includes_summary_and_failures() {
        let value = json_output(&report_for(&[
            "Free cash now",
            "",
            "A calm update for you",
        ]));
        assert_eq!(value["success"], false);
        let results = value["data"]["results"].as_array().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[1]["error"]["status"], 400);
        assert_eq!(results[1]["subjectLine"], "");
        assert_eq!(value["data"]["summary"]["analyzed"], 2);
        assert_eq!(value["data"]["summary"]["failed"], 1);
    }

    #[test]
    fn test_report_pairs_subjects_with_errors() {
        let report = AnalysisReport::from_results(
            &["x".to_string()],
            vec![Err(Error::configuration("boom"))],
        );
        assert!(report.has_failures());
        match &report.entries[0] {
            ReportEntry::Failed { subject_line, error } => {
                assert_eq!(subject_line, "x");
                assert_eq!(error.status, 500);
            }
            other => panic!("unexpected entry {other:?}"),
        }
    }

    #[test]
    fn test_markdown_report_lists_issues_and_suggestions() {
        let mut buffer = Vec::new();
        MarkdownWriter::new(&mut buffer)
            .write_report(&report_for(&["FREE cash"]))
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("# Subject Line Analysis"));
        assert!(text.contains("- **high** Contains spam trigger word \"free\""));
        assert!(text.contains("- [ ] Replace spam trigger words: free, cash"));
        assert!(!text.contains("## Summary"));
    }

    #[test]
    fn test_json_rules_listing() {
        let mut buffer = Vec::new();
        JsonWriter::new(&mut buffer)
            .write_rules(RuleListing::SpamTriggers(SPAM_TRIGGERS))
            .unwrap();
        let value: Value = serde_json::from_slice(&buffer).unwrap();
        let data = value["data"].as_array().unwrap();
        assert_eq!(data.len(), SPAM_TRIGGERS.len());
        assert_eq!(data[0]["word"], "free");
        assert_eq!(data[0]["impact"], "high");
    }

    #[test]
    fn test_terminal_rules_table_contains_every_word() {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .write_rules(RuleListing::PowerWords(POWER_WORDS))
            .unwrap();
        let text = String::from_utf8(buffer).unwrap();
        for pw in POWER_WORDS {
            assert!(text.contains(pw.word), "missing {}", pw.word);
        }
    }
}

use colored::Colorize;
use std::path::Path;

use crate::driver::{FileOutcome, RunSummary, TargetKind};

/// Renders a [`RunSummary`] for the terminal.
pub struct Reporter {
    color: bool,
    quiet: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            quiet: false,
        }
    }

    /// Suppress per-file lines; only the directory summary is printed.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn render(&self, summary: &RunSummary) -> String {
        let mut lines = Vec::new();

        if summary.kind == TargetKind::Directory {
            if summary.outcomes.is_empty() {
                lines.push(format!("No Java files found in {}", summary.target.display()));
                return lines.join("\n");
            }
            if !self.quiet {
                lines.push(format!(
                    "Found {} Java file(s) to process",
                    summary.outcomes.len()
                ));
            }
        }

        if !self.quiet {
            for outcome in &summary.outcomes {
                lines.extend(self.format_outcome(outcome));
            }
        }

        if summary.kind == TargetKind::Directory {
            lines.push(String::new());
            lines.push("Processing complete:".to_string());
            lines.push(format!(
                "  Successfully processed: {} files",
                self.format_count(summary.succeeded(), false)
            ));
            lines.push(format!(
                "  Errors: {} files",
                self.format_count(summary.failed(), true)
            ));
        }

        lines.join("\n")
    }

    pub fn render_json(&self, summary: &RunSummary) -> serde_json::Result<String> {
        let value = serde_json::json!({
            "target": summary.target,
            "kind": summary.kind,
            "succeeded": summary.succeeded(),
            "failed": summary.failed(),
            "files": summary.outcomes,
        });
        serde_json::to_string_pretty(&value)
    }

    pub fn format_outcome(&self, outcome: &FileOutcome) -> Vec<String> {
        match outcome {
            FileOutcome::Processed {
                input,
                output,
                backup,
                unterminated,
                ..
            } => {
                let mut lines = Vec::with_capacity(3);
                if let Some(backup) = backup {
                    lines.push(format!("Backup created: {}", backup.display()));
                }
                if let Some(state) = unterminated {
                    let note = format!(
                        "Warning: {} ends inside an unterminated {}",
                        input.display(),
                        state.describe()
                    );
                    lines.push(if self.color {
                        note.yellow().to_string()
                    } else {
                        note
                    });
                }
                lines.push(format!(
                    "{} {} -> {}",
                    self.label("Successfully processed:", false),
                    input.display(),
                    output.display()
                ));
                lines
            }
            FileOutcome::Failed { path, error } => vec![self.format_error(path, error)],
        }
    }

    pub fn format_error(&self, path: &Path, error: &str) -> String {
        format!(
            "{} {}: {}",
            self.label("Error processing", true),
            path.display(),
            error
        )
    }

    fn label(&self, text: &str, is_error: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        if is_error {
            text.red().bold().to_string()
        } else {
            text.green().to_string()
        }
    }

    fn format_count(&self, count: usize, is_error: bool) -> String {
        let label = count.to_string();
        if !self.color || count == 0 {
            return label;
        }
        if is_error {
            label.red().bold().to_string()
        } else {
            label.green().bold().to_string()
        }
    }
}

//! Demo services wired through the registry.

use std::sync::Arc;
use tracing::info;

pub(crate) trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

pub(crate) struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        info!(target: "depot::demo", "{message}");
    }
}

pub(crate) trait Formatter: Send + Sync {
    fn name(&self) -> &'static str;
    fn format(&self, title: &str, rows: &[(&str, i64)]) -> String;
}

/// Aligned, one row per line.
pub(crate) struct TableFormatter;

impl Formatter for TableFormatter {
    fn name(&self) -> &'static str {
        "table"
    }

    fn format(&self, title: &str, rows: &[(&str, i64)]) -> String {
        let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let lines = rows.iter().map(|(label, value)| format!("{label:<width$} | {value:>8}"));
        std::iter::once(format!("== {title} ==")).chain(lines).collect::<Vec<_>>().join("\n")
    }
}

/// Single line, comma separated.
pub(crate) struct InlineFormatter;

impl Formatter for InlineFormatter {
    fn name(&self) -> &'static str {
        "inline"
    }

    fn format(&self, title: &str, rows: &[(&str, i64)]) -> String {
        let body = rows.iter().map(|(label, value)| format!("{label}={value}")).collect::<Vec<_>>();
        format!("{title}: {}", body.join(", "))
    }
}

/// Target marker for the full report pipeline.
pub(crate) struct ReportTarget;

/// Target marker for the one-line summary pipeline.
pub(crate) struct SummaryTarget;

pub(crate) struct ReportService {
    logger: Arc<dyn Logger>,
    formatter: Arc<dyn Formatter>,
}

impl ReportService {
    pub(crate) fn new(logger: Arc<dyn Logger>, formatter: Arc<dyn Formatter>) -> Self {
        Self { logger, formatter }
    }

    pub(crate) fn formatter_name(&self) -> &'static str {
        self.formatter.name()
    }

    pub(crate) fn render(&self, title: &str, rows: &[(&str, i64)]) -> String {
        let out = self.formatter.format(title, rows);
        self.logger.log(&format!("Rendered '{title}' with the {} formatter", self.formatter.name()));
        out
    }
}

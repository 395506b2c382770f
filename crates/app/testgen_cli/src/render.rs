//! Plain-text rendering for terminal output.

use std::fmt;

use testgen_core::metrics::{self, Recommendation};
use testgen_core::models::{AgentMetrics, MetricsSummary, Severity, ValidationReport};
use testgen_core::openapi::EndpointDescriptor;

const COLUMNS: usize = 6;

/// Endpoint table with 1-based row numbers.
pub struct EndpointTable<'a>(pub &'a [EndpointDescriptor]);

impl fmt::Display for EndpointTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers = ["#", "METHOD", "PATH", "SUMMARY", "PARAMS", "BODY"].map(String::from);
        let rows: Vec<[String; COLUMNS]> = self
            .0
            .iter()
            .enumerate()
            .map(|(i, e)| {
                [
                    (i + 1).to_string(),
                    e.method.to_string(),
                    e.path.clone(),
                    e.summary.clone(),
                    e.parameter_count.to_string(),
                    if e.has_body { "✓" } else { "✗" }.to_string(),
                ]
            })
            .collect();

        let mut widths = headers.clone().map(|h| h.chars().count());
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        write_row(f, &headers, &widths)?;
        for row in &rows {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_row(
    f: &mut fmt::Formatter<'_>,
    cells: &[String; COLUMNS],
    widths: &[usize; COLUMNS],
) -> fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(f, "{}", line.trim_end())
}

pub struct Report<'a>(pub &'a ValidationReport);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        writeln!(
            f,
            "{} ({} errors, {} warnings)",
            if report.is_valid { "Valid" } else { "Invalid" },
            report.errors().count(),
            report.warnings().count()
        )?;

        for issue in &report.issues {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            let location = issue
                .location()
                .map(|l| format!(" at {l}"))
                .unwrap_or_default();
            writeln!(f, "  [{severity}] {}{location}: {}", issue.code, issue.message)?;
        }

        for (key, value) in &report.stats {
            writeln!(f, "  {key}: {value}")?;
        }
        Ok(())
    }
}

/// Dashboard view: current counters, the windowed summary and recommendations.
pub struct Dashboard<'a> {
    pub metrics: &'a AgentMetrics,
    pub summary: &'a MetricsSummary,
    pub hours: u32,
    pub recommendations: &'a [Recommendation],
}

impl fmt::Display for Dashboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.metrics;
        let count = |v: Option<u64>| v.unwrap_or(0);
        let rate = |v: Option<f64>| v.map(metrics::percent).unwrap_or_else(|| "No data".into());

        writeln!(f, "LLM")?;
        writeln!(f, "  Model:          {}", m.model.as_deref().unwrap_or("unknown"))?;
        writeln!(f, "  Base URL:       {}", m.base_url.as_deref().unwrap_or("unknown"))?;

        writeln!(f, "Requests")?;
        writeln!(f, "  Total:          {}", count(m.total_requests))?;
        writeln!(f, "  Successful:     {}", count(m.successful_requests.or(m.successful)))?;
        writeln!(f, "  Failed:         {}", count(m.failed_requests.or(m.failed)))?;
        writeln!(f, "  Cache hit rate: {}", rate(m.cache_hit_rate))?;
        writeln!(f, "  Avg generation: {}", metrics::format_ms(m.avg_generation_time_ms))?;

        writeln!(f, "Summary (last {}h)", self.hours)?;
        if let Some(message) = &self.summary.message {
            writeln!(f, "  {message}")?;
        } else {
            let s = self.summary;
            writeln!(f, "  Success rate:   {}", rate(s.success_rate))?;
            writeln!(f, "  P95 generation: {}", metrics::format_ms(s.p95_generation_time_ms))?;
            if let Some(len) = s.avg_response_length {
                writeln!(f, "  Avg response:   {len:.0} chars")?;
            }
            for (kind, n) in &s.requests_by_type {
                writeln!(f, "  {kind}: {n}")?;
            }
        }

        if !self.recommendations.is_empty() {
            writeln!(f, "Recommendations")?;
            for r in self.recommendations {
                writeln!(f, "  [{}] {}", r.level, r.text)?;
            }
        }
        Ok(())
    }
}

//! Turns raw metrics into dashboard recommendations.

use std::fmt;

use crate::models::{AgentMetrics, MetricsSummary};

pub const GOOD_CACHE_HIT_RATE: f64 = 0.8;
pub const NORMAL_AVG_GENERATION_MS: f64 = 3000.0;
pub const GOOD_SUCCESS_RATE: f64 = 0.95;
pub const SLOW_P95_GENERATION_MS: f64 = 10000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Info => "info",
            Level::Warning => "warning",
            Level::Error => "error",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub level: Level,
    pub text: String,
}

impl Recommendation {
    fn new(level: Level, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Assess metrics against the dashboard thresholds. Figures the backend
/// did not report produce no recommendation.
pub fn assess(metrics: &AgentMetrics, summary: &MetricsSummary) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if let Some(rate) = metrics.cache_hit_rate {
        out.push(if rate > GOOD_CACHE_HIT_RATE {
            Recommendation::new(Level::Info, format!("Cache hit rate {} is above 80%", percent(rate)))
        } else {
            Recommendation::new(
                Level::Warning,
                format!("Cache hit rate {} is below 80%", percent(rate)),
            )
        });
    }

    if let Some(avg) = metrics.avg_generation_time_ms.or(summary.avg_generation_time_ms) {
        out.push(if avg < NORMAL_AVG_GENERATION_MS {
            Recommendation::new(
                Level::Info,
                format!("Average generation time {avg:.0} ms is within normal range"),
            )
        } else {
            Recommendation::new(
                Level::Warning,
                format!("Average generation time {avg:.0} ms exceeds 3000 ms"),
            )
        });
    }

    if let Some(rate) = summary.success_rate {
        out.push(if rate > GOOD_SUCCESS_RATE {
            Recommendation::new(Level::Info, format!("Success rate {} is stable", percent(rate)))
        } else {
            Recommendation::new(
                Level::Warning,
                format!("Success rate {} is below 95%", percent(rate)),
            )
        });
    }

    if let Some(p95) = summary.p95_generation_time_ms
        && p95 > SLOW_P95_GENERATION_MS
    {
        out.push(Recommendation::new(
            Level::Error,
            format!("P95 generation time {p95:.0} ms exceeds 10000 ms; optimisation required"),
        ));
    }

    out
}

/// `0.834` → `"83.4%"`.
pub fn percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Milliseconds with two decimals, or `"No data"`.
pub fn format_ms(ms: Option<f64>) -> String {
    match ms {
        Some(ms) => format!("{ms:.2} ms"),
        None => "No data".to_string(),
    }
}

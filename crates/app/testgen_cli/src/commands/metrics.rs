use testgen_core::metrics;

use super::Context;
use crate::Result;
use crate::render::Dashboard;

/// Print the metrics dashboard, or the raw Prometheus text.
pub async fn run(ctx: &Context, hours: u32, prometheus: bool) -> Result<()> {
    let client = ctx.client()?;

    if prometheus {
        print!("{}", client.prometheus_metrics().await?);
        return Ok(());
    }

    let (current, summary) = tokio::try_join!(client.metrics(), client.metrics_summary(hours))?;
    let recommendations = metrics::assess(&current, &summary);

    print!(
        "{}",
        Dashboard {
            metrics: &current,
            summary: &summary,
            hours,
            recommendations: &recommendations,
        }
    );
    Ok(())
}

pub async fn health(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let status = client.health().await?;
    println!("{}: {}", client.base_url(), status.status);
    Ok(())
}

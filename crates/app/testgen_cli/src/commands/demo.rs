use testgen_core::demos::{self, DEMOS};

use super::{Context, testcase};
use crate::cli::OutputArgs;
use crate::{Error, Result};

pub fn list() {
    for demo in DEMOS {
        println!(
            "{:<15} {:<4} {}  [{}]",
            demo.key,
            demo.test_type.as_str(),
            demo.title,
            demo.tags.join(", ")
        );
        println!("{:<20} {}", "", demo.description);
    }
}

/// Generate a test case for a built-in scenario.
pub async fn run(ctx: &Context, key: &str, output: &OutputArgs) -> Result<()> {
    let demo = demos::find(key).ok_or_else(|| {
        let known: Vec<&str> = DEMOS.iter().map(|d| d.key).collect();
        Error::Custom(format!("Unknown demo `{key}` (available: {})", known.join(", ")))
    })?;
    log::info!("Running demo: {}", demo.title);
    testcase::generate(ctx, &demo.request(), output).await
}

use std::path::Path;

use testgen_core::session::ValidationWarning;

use super::Context;
use crate::render::Report;
use crate::{Error, Result};

/// Send generated code to the backend validator and print its findings.
pub async fn run(ctx: &Context, file: &Path) -> Result<()> {
    let code = std::fs::read_to_string(file)?;
    if code.trim().is_empty() {
        return Err(ValidationWarning::MissingField("code").into());
    }

    let report = ctx.client()?.validate_testcase(&code).await?;
    print!("{}", Report(&report));

    if report.is_valid {
        Ok(())
    } else {
        Err(Error::Custom(format!(
            "{}: validation failed with {} errors",
            file.display(),
            report.errors().count()
        )))
    }
}

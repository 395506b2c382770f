use std::path::Path;

use testgen_core::openapi;
use testgen_core::upload::UploadPolicy;

use crate::render::EndpointTable;
use crate::{Error, Result};

/// Print the endpoints of an OpenAPI document as a table or JSON.
pub async fn list(file: &Path, json: bool) -> Result<()> {
    let loaded = UploadPolicy::default().load(file).await?;
    let endpoints = openapi::parse(loaded.content.as_str())?;

    let skipped = openapi::skipped_entries(loaded.content.as_str())?;
    if skipped > 0 {
        log::debug!("{} path entries are not supported operations", skipped);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&endpoints)?);
        return Ok(());
    }

    if endpoints.is_empty() {
        println!(
            "No endpoints found in {}. The document is valid but defines no GET, POST, PUT, PATCH or DELETE operations.",
            loaded.name
        );
    } else {
        print!("{}", EndpointTable(&endpoints));
        log::info!("{}: {} endpoints", loaded.name, endpoints.len());
    }
    Ok(())
}

/// Check that a document looks like OpenAPI.
pub async fn check(file: &Path) -> Result<()> {
    let loaded = UploadPolicy::default().load(file).await?;
    if openapi::is_valid_openapi(loaded.content.as_str()) {
        println!("{}: valid OpenAPI document", loaded.name);
        Ok(())
    } else {
        Err(Error::Custom(format!(
            "{}: not an OpenAPI document (requires `openapi`, `info` and `paths`)",
            loaded.name
        )))
    }
}

//! Subcommand implementations.

pub mod autotest;
pub mod demo;
pub mod endpoints;
pub mod metrics;
pub mod testcase;
pub mod token;
pub mod validate;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use testgen_api_client::{ApiClient, ClientConfig, FileTokenStore};
use testgen_core::code;

use crate::Result;
use crate::cli::{Cli, OutputArgs};

/// Settings shared by every command that talks to the backend.
pub struct Context {
    pub config: ClientConfig,
    pub token_file: Option<PathBuf>,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: ClientConfig::from_env()
                .with_base_url(&cli.base_url)
                .with_timeout(Duration::from_secs(cli.timeout)),
            token_file: cli.token_file.clone(),
        }
    }

    pub fn token_store(&self) -> FileTokenStore {
        match &self.token_file {
            Some(path) => FileTokenStore::new(path),
            None => FileTokenStore::default_location(),
        }
    }

    pub fn client(&self) -> Result<ApiClient> {
        log::debug!("backend: {}", self.config.base_url);
        Ok(ApiClient::new(&self.config, Arc::new(self.token_store()))?)
    }
}

/// Print generated code, or save it when `--out` is given.
///
/// A directory target gets a timestamped `test_<millis>.py` file.
pub fn emit(generated: &str, output: &OutputArgs) -> Result<()> {
    let text = if output.strip_fences {
        code::extract_python_code(generated)
    } else {
        generated.to_string()
    };

    match &output.out {
        Some(out) => {
            let path = target_path(out);
            std::fs::write(&path, text)?;
            log::info!("Saved generated code to {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn target_path(out: &Path) -> PathBuf {
    if out.is_dir() {
        out.join(code::default_file_name())
    } else {
        out.to_path_buf()
    }
}

pub mod formats;

use flexi_logger::Logger;

use crate::Error;

/// Logs go to stderr so stdout carries only command output.
pub fn init(verbose: bool) -> Result<(), Error> {
    let logger = if verbose {
        Logger::try_with_env_or_str("debug")?.format(formats::detailed_format)
    } else {
        Logger::try_with_env_or_str("info")?.format(formats::cli_format)
    };

    logger.log_to_stderr().start()?;

    Ok(())
}

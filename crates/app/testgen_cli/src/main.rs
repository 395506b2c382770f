// Import and re-export the `error` module
pub use self::error::{Error, Result};
mod error;

use clap::Parser;
use cli::{Cli, Commands, DemoCommands, TokenCommands};
use commands::Context;

mod cli;
mod commands;
mod logging;
mod render;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = run().await {
        match &e {
            Error::Warning(w) => log::warn!("{}", w),
            Error::Client(c) if c.is_retryable() => {
                log::error!("{}", e);
                log::info!("The backend may be down or slow; try again later.");
            }
            _ => log::error!("{}", e),
        }
        std::process::exit(e.exit_code());
    }
    Ok(())
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Cli::parse();
    logging::init(args.verbose)?;

    let ctx = Context::from_cli(&args);

    match args.command {
        Commands::Endpoints { file, json } => commands::endpoints::list(&file, json).await?,
        Commands::Check { file } => commands::endpoints::check(&file).await?,
        Commands::Testcase(testcase) => commands::testcase::run(&ctx, testcase).await?,
        Commands::Autotest(autotest) => commands::autotest::run(&ctx, autotest).await?,
        Commands::Validate { file } => commands::validate::run(&ctx, &file).await?,
        Commands::Metrics { hours, prometheus } => {
            commands::metrics::run(&ctx, hours, prometheus).await?
        }
        Commands::Health => commands::metrics::health(&ctx).await?,
        Commands::Demo { command } => match command {
            DemoCommands::List => commands::demo::list(),
            DemoCommands::Run { key, output } => commands::demo::run(&ctx, &key, &output).await?,
        },
        Commands::Token { command } => match command {
            TokenCommands::Set { token } => commands::token::set(&ctx, &token)?,
            TokenCommands::Clear => commands::token::clear(&ctx),
        },
        Commands::Version => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

use testgen_core::openapi::HttpMethod;
use testgen_core::openapi::endpoint::UnsupportedMethod;
use testgen_core::session::{LoadOutcome, ReviewSession, SessionError};
use testgen_core::upload::UploadPolicy;

use super::{Context, emit};
use crate::cli::AutotestArgs;
use crate::render::EndpointTable;
use crate::{Error, Result};

/// Generate an API autotest for one endpoint of a document.
pub async fn run(ctx: &Context, args: AutotestArgs) -> Result<()> {
    let mut session = ReviewSession::new();

    let ticket = session.begin_load();
    let loaded = match UploadPolicy::default().load(&args.file).await {
        Ok(loaded) => loaded,
        Err(e) => {
            session.fail_load(ticket, &e);
            return Err(e.into());
        }
    };
    if let LoadOutcome::Applied(count) = session.finish_load(ticket, loaded.content)? {
        log::debug!("{}: {} endpoints", loaded.name, count);
    }

    match &args.endpoint {
        Some(selector) => {
            select(&mut session, selector)?;
        }
        None if !session.endpoints().is_empty() => {
            eprint!("{}", EndpointTable(session.endpoints()));
        }
        None => {}
    }

    let (ticket, request) = session.begin_generation()?;
    log::info!(
        "Generating autotest for {} {}",
        request.method.map(|m| m.as_str()).unwrap_or_default(),
        request.path.as_deref().unwrap_or_default()
    );

    let client = ctx.client()?;
    match client.generate_autotest(&request).await {
        Ok(resp) => {
            session.finish_generation::<Error>(ticket, Ok(resp.code));
        }
        Err(e) => {
            session.finish_generation(ticket, Err(&e));
            return Err(e.into());
        }
    }

    emit(session.generated_code().unwrap_or_default(), &args.output)
}

/// Resolve an endpoint selector: a 1-based row number, a `METHOD /path`
/// route or a descriptor key.
fn select(session: &mut ReviewSession, selector: &str) -> Result<()> {
    let selector = selector.trim();

    if let Ok(row) = selector.parse::<usize>() {
        let key = row
            .checked_sub(1)
            .and_then(|i| session.endpoints().get(i))
            .map(|e| e.key.clone())
            .ok_or_else(|| SessionError::UnknownEndpoint(format!("row {row}")))?;
        session.select(&key)?;
        return Ok(());
    }

    if let Some((method, path)) = selector.split_once(char::is_whitespace) {
        let method: HttpMethod = method
            .parse()
            .map_err(|e: UnsupportedMethod| Error::Custom(e.to_string()))?;
        session.select_route(method, path.trim())?;
        return Ok(());
    }

    session.select(selector)?;
    Ok(())
}

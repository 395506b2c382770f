use testgen_api_client::TokenStore;

use super::Context;
use crate::Result;

pub fn set(ctx: &Context, token: &str) -> Result<()> {
    let store = ctx.token_store();
    store.set(token.trim())?;
    println!("Token saved to {}", store.path().display());
    Ok(())
}

pub fn clear(ctx: &Context) {
    let store = ctx.token_store();
    store.clear();
    println!("Token removed from {}", store.path().display());
}

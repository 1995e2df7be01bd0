//! Name to provider ID lookup.

use serde::Serialize;

use crate::{cli::types::PlayerId, stats::lookup::player_lookup_by_name, Result};

use super::{
    common::{print_json, CommandContext},
    compare::CompareError,
};

#[derive(Debug, Serialize)]
struct LookupResult<'a> {
    name: &'a str,
    id: PlayerId,
}

pub async fn handle_lookup(ctx: &CommandContext, name: &str, as_json: bool) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CompareError::MissingIdentifier.into());
    }
    let id = player_lookup_by_name(&ctx.source, name)
        .await
        .ok_or(CompareError::PlayerNotFound)?;

    if as_json {
        print_json(&LookupResult {
            name: name.trim(),
            id,
        })?;
    } else {
        println!("{}", id);
    }
    Ok(())
}

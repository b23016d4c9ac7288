//! Store listing and rating commands.

use anyhow::{bail, Result};
use console::style;
use ratehub_core::{Rating, RatingValue, Store};
use ratehub_router::Destination;

use super::RateArgs;
use crate::context::Context;

/// List stores with their average ratings.
pub fn list(ctx: &Context) -> Result<()> {
    let identity = ctx.authorize(Destination::Stores)?;
    let stores = ctx.stores()?;

    if ctx.output.is_json() {
        ctx.output.json_value(&stores);
        return Ok(());
    }

    ctx.output.header(&format!("Stores ({})", stores.len()));
    for store in &stores {
        let average = match store.average_rating() {
            Some(avg) => format!("{:.1} ★ ({})", avg, store.ratings.len()),
            None => "unrated".to_string(),
        };
        let own = store
            .rating_by(&identity.id)
            .map(|r| format!("  you rated {}", r.value))
            .unwrap_or_default();
        println!(
            "  {:>3}  {:<28} {:<12}{}",
            style(store.id.as_str()).dim(),
            store.name,
            average,
            style(own).dim(),
        );
    }
    Ok(())
}

/// Rate a store.
pub fn rate(args: RateArgs, ctx: &Context) -> Result<()> {
    let identity = ctx.authorize(Destination::Stores)?;
    let value = RatingValue::new(args.value)?;

    let mut stores = ctx.stores()?;
    let Some(store) = find_store(&mut stores, &args.store) else {
        bail!("no store matching '{}'", args.store);
    };

    let replacing = store.rating_by(&identity.id).is_some();
    store.rate(Rating::today(identity.id.clone(), value));
    let name = store.name.clone();
    let average = store.average_rating().unwrap_or_else(|| f64::from(value.get()));

    ctx.save_stores(&stores)?;

    let verb = if replacing { "updated to" } else { "rated" };
    ctx.output.success(&format!(
        "{name} {verb} {value} ★ (average now {average:.1})"
    ));
    Ok(())
}

fn find_store<'a>(stores: &'a mut [Store], needle: &str) -> Option<&'a mut Store> {
    stores
        .iter_mut()
        .find(|s| s.id.as_str() == needle || s.name.eq_ignore_ascii_case(needle))
}

//! Render the head tag block for a page.

use anyhow::Result;
use serde_json::json;

use super::PageArgs;
use crate::context::Context;

/// Run the render command.
pub fn run(args: PageArgs, ctx: &Context) -> Result<()> {
    let resolver = args.bind(ctx)?;
    let html = resolver.html()?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "path": args.path,
            "locale": resolver.locale()?,
            "html": html,
        }));
        return Ok(());
    }

    match html {
        Some(html) => ctx.output.raw(&html),
        None => ctx.output.warn(&format!("No metadata for {}", args.path)),
    }

    Ok(())
}

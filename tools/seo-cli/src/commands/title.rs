//! Print the computed title of a page.

use anyhow::Result;
use serde_json::json;

use super::PageArgs;
use crate::context::Context;

/// Run the title command.
pub fn run(args: PageArgs, ctx: &Context) -> Result<()> {
    let resolver = args.bind(ctx)?;
    let title = resolver.title()?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "path": args.path,
            "locale": resolver.locale()?,
            "title": title,
            "og_title": resolver.og_title()?,
            "description": resolver.meta_description()?,
            "og_description": resolver.og_description()?,
            "no_index": resolver.is_no_index()?,
            "no_follow": resolver.is_no_follow()?,
        }));
        return Ok(());
    }

    match title {
        Some(title) => {
            ctx.output.raw(&title);
            ctx.output.debug(&format!("{} characters", title.chars().count()));
        }
        None => ctx.output.warn(&format!("No title for {}", args.path)),
    }

    Ok(())
}

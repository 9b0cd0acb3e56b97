//! List alternate-locale links of a page.

use anyhow::Result;
use serde_json::json;

use super::PageArgs;
use crate::context::Context;

/// Run the alternates command.
pub fn run(args: PageArgs, ctx: &Context) -> Result<()> {
    let resolver = args.bind(ctx)?;
    let links = resolver.alternate_links()?;

    if ctx.output.is_json() {
        let links: Vec<_> = links
            .iter()
            .map(|link| json!({ "locale": link.locale, "url": link.url }))
            .collect();
        ctx.output.json(&links);
        return Ok(());
    }

    if links.is_empty() {
        ctx.output.warn(&format!("No alternate links for {}", args.path));
        return Ok(());
    }

    let width = links.iter().map(|l| l.locale.len()).max().unwrap_or(0).max(6);
    ctx.output.header(&format!("Alternates for {}", args.path));
    ctx.output.table_row(&["LOCALE", "URL"], &[width, 0]);
    for link in &links {
        ctx.output.table_row(&[link.locale.as_str(), link.url.as_str()], &[width, 0]);
    }

    Ok(())
}

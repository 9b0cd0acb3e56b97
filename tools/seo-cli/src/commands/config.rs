//! Site file management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, base_url } => init_config(force, &base_url, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let site = ctx.site()?;

    if ctx.output.is_json() {
        ctx.output.json(site);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    if let Some(path) = &ctx.config_path {
        ctx.output.kv("file", &path.display().to_string());
    }

    // Site section
    ctx.output.info("[site]");
    ctx.output.kv("base_url", &site.site.base_url);
    ctx.output.kv("namespace", &site.site.namespace);

    // Locales
    ctx.output.info("[locales]");
    ctx.output.kv("available", &site.locales.available.join(", "));
    if let Some(default) = site.default_locale() {
        ctx.output.kv("default", default);
    }
    for (locale, titles) in &site.locales.titles {
        ctx.output.kv(&format!("titles.{}.format", locale), &titles.format);
        if let Some(suffix) = &titles.suffix {
            ctx.output.kv(&format!("titles.{}.suffix", locale), suffix);
        }
    }

    // Routes
    if !site.routes.is_empty() {
        ctx.output.info("[[routes]]");
        for route in &site.routes {
            ctx.output.list_item(&route.name);
            for (locale, pattern) in &route.patterns {
                ctx.output.kv(locale, pattern);
            }
        }
    }

    // Pages
    if !site.pages.is_empty() {
        ctx.output.info(&format!("[[pages]] ({})", site.pages.len()));
        for page in &site.pages {
            ctx.output.list_item(&format!("/{} [{}]", page.path.trim_start_matches('/'), page.locale));
        }
    }

    if !site.og_images.is_empty() {
        ctx.output.info("[og_images]");
        for (route, pattern) in &site.og_images {
            ctx.output.kv(route, pattern);
        }
    }

    Ok(())
}

fn init_config(force: bool, base_url: &str, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Site file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config(base_url))?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "created": config_path }));
    } else {
        ctx.output.success(&format!("Created: {}", config_path.display()));
    }

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let site = ctx.site()?;
    let report = site.validate();

    if ctx.output.is_json() {
        ctx.output.json(&report);
        if !report.errors.is_empty() {
            bail!("Site file has {} error(s)", report.errors.len());
        }
        return Ok(());
    }

    ctx.output.header("Validating site file");

    if report.is_clean() {
        ctx.output.success("Site file is valid");
        return Ok(());
    }

    for error in &report.errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &report.warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !report.errors.is_empty() {
        bail!("Site file has {} error(s)", report.errors.len());
    }

    ctx.output.success("Site file is valid (with warnings)");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Output;

    #[test]
    fn test_init_writes_loadable_site_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::load_from(dir.path(), None, Output::new(false, true)).unwrap();

        init_config(false, "https://shop.example.com", &ctx).unwrap();

        let ctx = Context::load_from(dir.path(), None, Output::new(false, true)).unwrap();
        assert_eq!(ctx.site().unwrap().site.base_url, "https://shop.example.com");
        validate_config(&ctx).unwrap();
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("seo.toml"), "").unwrap();
        let ctx = Context::load_from(dir.path(), None, Output::new(false, true)).unwrap();

        let err = init_config(false, "https://example.com", &ctx).unwrap_err();
        assert!(err.to_string().contains("--force"));
        init_config(true, "https://example.com", &ctx).unwrap();
    }
}

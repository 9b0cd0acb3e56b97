//! CLI command implementations.

pub mod alternates;
pub mod config;
pub mod render;
pub mod title;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use seo_sdk::prelude::{MatchParams, MetaResolver, ACTION_KEY, LOCALE_KEY, PRESENTER_KEY};
use tracing::debug;

use crate::config::split_route;
use crate::context::Context;

/// Arguments shared by the page commands.
#[derive(Args)]
pub struct PageArgs {
    /// Request path, e.g. `/en/article/hello`.
    pub path: String,

    /// Locale override (default: from the matched route).
    #[arg(short, long)]
    pub locale: Option<String>,

    /// Route name override, e.g. `Front:Article:detail`.
    #[arg(short, long)]
    pub route: Option<String>,

    /// Extra route parameter, `name=value` (repeatable).
    #[arg(short, long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the loaded site file
    Show,

    /// Create a starter seo.toml
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,

        /// Base URL of the site.
        #[arg(long, default_value = "https://example.com")]
        base_url: String,
    },

    /// Check the site file for mistakes
    Validate,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected name=value, got '{}'", s)),
    }
}

impl PageArgs {
    /// Router parameters for the page: the matched route, then overrides.
    pub fn match_params(&self, ctx: &Context) -> Result<MatchParams> {
        let site = ctx.site()?;
        let mut params = match site.match_route(&self.path) {
            Some(params) => params,
            None if self.route.is_some() => MatchParams::new(),
            None => {
                debug!(path = %self.path, "no route matches");
                ctx.output.warn(&format!(
                    "No route matches {}; alternates and og:image are skipped",
                    self.path
                ));
                MatchParams::new()
            }
        };

        if let Some(route) = &self.route {
            let Some((presenter, action)) = split_route(route) else {
                bail!("Route '{}' must be Presenter:action", route);
            };
            params.insert(PRESENTER_KEY, presenter);
            params.insert(ACTION_KEY, action);
        }
        if let Some(locale) = &self.locale {
            params.insert(LOCALE_KEY, locale.as_str());
        }
        for (key, value) in &self.params {
            params.insert(key.as_str(), value.as_str());
        }
        Ok(params)
    }

    /// Resolver bound to this page.
    pub fn bind(&self, ctx: &Context) -> Result<MetaResolver> {
        let params = self.match_params(ctx)?;
        let route = params.route_name();
        debug!(
            path = %self.path,
            route = route.as_deref().unwrap_or("<no route>"),
            "bound page"
        );

        let mut resolver = ctx.site()?.resolver()?;
        resolver.bind(&self.path, params);
        Ok(resolver)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::generate_default_config;
    use crate::output::Output;

    fn site_context(dir: &std::path::Path) -> Context {
        std::fs::write(dir.join("seo.toml"), generate_default_config("https://example.com")).unwrap();
        Context::load_from(dir, None, Output::new(false, true)).unwrap()
    }

    fn page(path: &str) -> PageArgs {
        PageArgs {
            path: path.to_string(),
            locale: None,
            route: None,
            params: Vec::new(),
        }
    }

    #[test]
    fn test_unmatched_path_has_no_route() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = site_context(dir.path());

        let params = page("/en/nowhere/at/all").match_params(&ctx).unwrap();
        assert!(params.is_empty());
        assert_eq!(params.route_name(), None);

        let resolver = page("/en/nowhere/at/all").bind(&ctx).unwrap();
        assert!(resolver.is_bound());
    }

    #[test]
    fn test_overrides_apply_on_top_of_matched_route() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = site_context(dir.path());

        let mut args = page("/en/article/hello");
        args.locale = Some("cs".to_string());
        args.params = vec![("slug".to_string(), "ahoj".to_string())];
        let params = args.match_params(&ctx).unwrap();

        assert_eq!(params.route_name().as_deref(), Some("Front:Article:detail"));
        assert_eq!(params.locale(), Some("cs"));
        assert_eq!(params.get("slug"), Some("ahoj"));
    }

    #[test]
    fn test_route_override_requires_presenter_and_action() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = site_context(dir.path());

        let mut args = page("/en/nowhere");
        args.route = Some("Homepage".to_string());
        assert!(args.match_params(&ctx).is_err());
    }

    #[test]
    fn test_parse_key_val() {
        assert_eq!(
            parse_key_val("slug=a=b"),
            Ok(("slug".to_string(), "a=b".to_string()))
        );
        assert!(parse_key_val("slug").is_err());
        assert!(parse_key_val("=x").is_err());
    }
}

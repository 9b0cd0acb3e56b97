//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context as _, Result};
use tracing::debug;

use crate::config::SiteConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// Loaded site file, if one was found.
    pub config: Option<SiteConfig>,
    /// Where the site file was loaded from.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, reading the site file from `config_path` or the nearest
    /// one in the directory tree.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;
        Self::load_from(&cwd, config_path, output)
    }

    /// Like [`Context::load`], searching from `cwd`.
    pub fn load_from(cwd: &Path, config_path: Option<&str>, output: Output) -> Result<Self> {
        let (config_path, config) = match config_path {
            Some(path) => {
                let path = resolve_path(cwd, path);
                let config = SiteConfig::load(&path)?;
                (Some(path), Some(config))
            }
            None => match SiteConfig::find(cwd)? {
                Some((path, config)) => (Some(path), Some(config)),
                None => (None, None),
            },
        };

        if let Some(path) = &config_path {
            debug!(path = %path.display(), "using site file");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd: cwd.to_path_buf(),
        })
    }

    /// The site file, or an error telling the user how to create one.
    pub fn site(&self) -> Result<&SiteConfig> {
        self.config
            .as_ref()
            .ok_or_else(|| anyhow!("No site file found. Run `seo config init` to create one."))
    }
}

/// Resolve a path relative to the working directory.
fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::generate_default_config;

    fn quiet() -> Output {
        Output::new(false, true)
    }

    #[test]
    fn test_finds_site_file_in_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("seo.toml"), generate_default_config("https://example.com")).unwrap();
        let nested = dir.path().join("app").join("templates");
        std::fs::create_dir_all(&nested).unwrap();

        let ctx = Context::load_from(&nested, None, quiet()).unwrap();
        assert_eq!(ctx.config_path.as_deref(), Some(dir.path().join("seo.toml").as_path()));
        assert_eq!(ctx.site().unwrap().site.base_url, "https://example.com");
    }

    #[test]
    fn test_explicit_json_site_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("site.json"),
            r#"{
                "site": { "base_url": "https://example.org" },
                "locales": { "available": ["de"] },
                "pages": [{ "path": "/de/", "locale": "de", "meta_title": "Start" }]
            }"#,
        )
        .unwrap();

        let ctx = Context::load_from(dir.path(), Some("site.json"), quiet()).unwrap();
        let site = ctx.site().unwrap();
        assert_eq!(site.site.namespace, "seo-meta");
        assert_eq!(site.default_locale(), Some("de"));
        assert_eq!(site.pages[0].record.meta_title.as_deref(), Some("Start"));
    }

    #[test]
    fn test_missing_site_file() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = Context::load_from(dir.path(), None, quiet()).unwrap();
        assert!(ctx.config.is_none());
        assert!(ctx.site().unwrap_err().to_string().contains("seo config init"));
    }

    #[test]
    fn test_invalid_site_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("seo.toml"), "[site\nbase_url = 1").unwrap();
        let err = Context::load_from(dir.path(), None, quiet()).err().unwrap();
        assert!(format!("{:#}", err).contains("Failed to parse TOML site file"));
    }
}

//! Request-scoped metadata resolver.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use seo_cache::{CacheKey, CacheStore, Namespace};
use seo_core::{
    AfterMatch, ImageResolver, LinkBuilder, LocaleConfig, MatchParams, MetadataRecord,
    MetadataSource, RequestContext, RequestMatch,
};
use seo_html::{format_title, HeadTags, MetaTag};

use crate::alternate::{derive_alternates, AlternateLink};
use crate::error::{ResolveError, ResolveResult};

/// Cache namespace used unless overridden with [`MetaResolver::with_namespace`].
pub const DEFAULT_NAMESPACE: &str = "seo-meta";

/// How long a rendered tag block stays cached.
pub const TAG_BLOCK_TTL: Duration = Duration::from_secs(90 * 60);

/// Resolves and renders `<head>` metadata for one matched request.
///
/// A resolver starts unbound. The router binds it through [`AfterMatch`] (or
/// [`MetaResolver::bind`]); every read operation before that fails with
/// [`ResolveError::NotBound`]. Collaborators and the cache store are shared,
/// the bound match is not: use [`MetaResolver::fork`] to get a fresh resolver
/// per request.
#[derive(Clone)]
pub struct MetaResolver {
    source: Arc<dyn MetadataSource>,
    locales: Arc<dyn LocaleConfig>,
    links: Arc<dyn LinkBuilder>,
    images: Option<Arc<dyn ImageResolver>>,
    cache: Namespace,
    context: RequestContext,
}

impl MetaResolver {
    /// Create an unbound resolver caching into `store` under [`DEFAULT_NAMESPACE`].
    pub fn new(
        source: Arc<dyn MetadataSource>,
        locales: Arc<dyn LocaleConfig>,
        links: Arc<dyn LinkBuilder>,
        store: Arc<dyn CacheStore>,
    ) -> Self {
        Self {
            source,
            locales,
            links,
            images: None,
            cache: Namespace::new(store, DEFAULT_NAMESPACE),
            context: RequestContext::new(),
        }
    }

    /// Cache under a different namespace of the same store.
    pub fn with_namespace(mut self, name: impl Into<String>) -> Self {
        self.cache = Namespace::new(Arc::clone(self.cache.store()), name);
        self
    }

    /// Register the Open Graph image resolver.
    pub fn with_image_resolver(mut self, resolver: Arc<dyn ImageResolver>) -> Self {
        self.images = Some(resolver);
        self
    }

    /// Register the Open Graph image resolver, replacing any previous one.
    pub fn set_image_resolver(&mut self, resolver: Arc<dyn ImageResolver>) {
        self.images = Some(resolver);
    }

    /// A fresh, unbound resolver sharing this one's collaborators and cache.
    pub fn fork(&self) -> Self {
        Self {
            context: RequestContext::new(),
            ..self.clone()
        }
    }

    /// Bind the matched request, replacing any prior binding.
    pub fn bind(&mut self, path: &str, params: MatchParams) {
        self.context.bind(path, params);
    }

    /// Whether a request has been bound.
    pub fn is_bound(&self) -> bool {
        self.context.is_bound()
    }

    /// The bound request, if any.
    pub fn request(&self) -> Option<&RequestMatch> {
        self.context.current()
    }

    /// Cache namespace name.
    pub fn namespace(&self) -> &str {
        self.cache.name()
    }

    /// Locale of the bound request.
    pub fn locale(&self) -> ResolveResult<String> {
        let request = self.bound("resolve locale")?;
        Ok(self.locale_of(request))
    }

    /// Page title, formatted with the locale's title template.
    ///
    /// Without a meta title, the homepage falls back to the locale's site name;
    /// other pages have no title.
    pub fn title(&self) -> ResolveResult<Option<String>> {
        let request = self.bound("compile title")?;
        let locale = self.locale_of(request);
        let record = self.source.lookup(request.path(), &locale);
        Ok(self.resolve_title(request, &locale, &record))
    }

    /// Meta description.
    pub fn meta_description(&self) -> ResolveResult<Option<String>> {
        Ok(self.record("get meta description")?.meta_description)
    }

    /// Open Graph title, falling back to [`MetaResolver::title`].
    pub fn og_title(&self) -> ResolveResult<Option<String>> {
        match self.record("get Open Graph title")?.og_title {
            Some(title) => Ok(Some(title)),
            None => self.title(),
        }
    }

    /// Open Graph description, falling back to [`MetaResolver::meta_description`].
    pub fn og_description(&self) -> ResolveResult<Option<String>> {
        match self.record("get Open Graph description")?.og_description {
            Some(description) => Ok(Some(description)),
            None => self.meta_description(),
        }
    }

    /// Whether crawlers are asked not to index the page.
    pub fn is_no_index(&self) -> ResolveResult<bool> {
        Ok(self.record("get robots policy")?.no_index)
    }

    /// Whether crawlers are asked not to follow links on the page.
    pub fn is_no_follow(&self) -> ResolveResult<bool> {
        Ok(self.record("get robots policy")?.no_follow)
    }

    /// Alternate links for every available locale the route resolves in.
    pub fn alternate_links(&self) -> ResolveResult<Vec<AlternateLink>> {
        let request = self.bound("compile alternate links")?;
        Ok(self.alternates_for(request))
    }

    /// Open Graph image URL from the registered image resolver.
    pub fn og_image(&self) -> ResolveResult<Option<String>> {
        let request = self.bound("resolve Open Graph image")?;
        Ok(self.image_for(request))
    }

    /// Rendered `<head>` tag block, newline separated.
    ///
    /// Cached per path and locale for [`TAG_BLOCK_TTL`]. Returns `None`, and
    /// caches nothing, when the page has no metadata record or no tag could be
    /// produced. Cache failures are logged and otherwise ignored.
    pub fn html(&self) -> ResolveResult<Option<String>> {
        let request = self.bound("compile HTML meta tags")?;
        let locale = self.locale_of(request);
        let key = CacheKey::tag_block(request.path(), &locale);

        match self.cache.get(&key) {
            Ok(Some(block)) => {
                tracing::debug!(key = %key, "tag block cache hit");
                return Ok(Some(block));
            }
            Ok(None) => tracing::debug!(key = %key, "tag block cache miss"),
            Err(err) => tracing::warn!(key = %key, error = %err, "tag block cache read failed"),
        }

        let record = self.source.lookup(request.path(), &locale);
        if !record.present {
            tracing::debug!(path = request.path(), locale = %locale, "no metadata record");
            return Ok(None);
        }

        let Some(block) = self.build_tags(request, &locale, &record).render() else {
            return Ok(None);
        };

        if let Err(err) = self.cache.set(&key, &block, TAG_BLOCK_TTL) {
            tracing::warn!(key = %key, error = %err, "tag block cache write failed");
        }
        Ok(Some(block))
    }

    /// Drop every cached tag block in this resolver's namespace.
    ///
    /// Does not require a bound request. Returns the number of blocks removed.
    pub fn invalidate_cache(&self) -> ResolveResult<usize> {
        let removed = self.cache.clear()?;
        tracing::info!(namespace = self.cache.name(), removed, "invalidated tag block cache");
        Ok(removed)
    }

    fn bound(&self, operation: &'static str) -> ResolveResult<&RequestMatch> {
        self.context
            .current()
            .ok_or(ResolveError::NotBound { operation })
    }

    fn locale_of(&self, request: &RequestMatch) -> String {
        match request.params().locale() {
            Some(locale) => locale.to_string(),
            None => self.locales.current_locale(),
        }
    }

    fn record(&self, operation: &'static str) -> ResolveResult<MetadataRecord> {
        let request = self.bound(operation)?;
        let locale = self.locale_of(request);
        Ok(self.source.lookup(request.path(), &locale))
    }

    fn resolve_title(
        &self,
        request: &RequestMatch,
        locale: &str,
        record: &MetadataRecord,
    ) -> Option<String> {
        let titles = self.locales.title_config(locale);
        if let Some(title) = &record.meta_title {
            return Some(format_title(
                &titles.format,
                title,
                titles.separator.as_deref(),
                titles.suffix.as_deref(),
            ));
        }
        if request.params().is_homepage() {
            return titles.site_name;
        }
        None
    }

    fn alternates_for(&self, request: &RequestMatch) -> Vec<AlternateLink> {
        let Some(route) = request.route_name() else {
            tracing::debug!(path = request.path(), "match has no presenter/action; no alternates");
            return Vec::new();
        };
        let locales = self.locales.available_locales();
        derive_alternates(
            self.links.as_ref(),
            &route,
            &request.params().link_params(),
            &locales,
        )
    }

    fn image_for(&self, request: &RequestMatch) -> Option<String> {
        let images = self.images.as_ref()?;
        let route = request.route_name()?;
        images.resolve(&route, &request.params().link_params())
    }

    fn build_tags(&self, request: &RequestMatch, locale: &str, record: &MetadataRecord) -> HeadTags {
        let mut head = HeadTags::new();

        match self.resolve_title(request, locale, record) {
            Some(title) => head.push(MetaTag::title(title)),
            None => tracing::warn!(
                path = %format!("/{}", request.path()),
                locale,
                "meta title is not available"
            ),
        }
        if let Some(description) = &record.meta_description {
            head.push(MetaTag::description(description.as_str()));
        }
        if let Some(og_title) = &record.og_title {
            head.push(MetaTag::og_title(og_title.as_str()));
        }
        if let Some(og_description) = &record.og_description {
            head.push(MetaTag::og_description(og_description.as_str()));
        }

        let robots = record.robots_directives();
        if !robots.is_empty() {
            head.push(MetaTag::robots(&robots));
        }

        head.extend(self.alternates_for(request).iter().map(AlternateLink::to_tag));

        if let Some(image) = self.image_for(request) {
            head.push(MetaTag::og_image(image));
        }

        head
    }
}

impl AfterMatch for MetaResolver {
    fn matched(&mut self, path: &str, params: MatchParams) {
        self.bind(path, params);
    }
}

impl fmt::Debug for MetaResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetaResolver")
            .field("namespace", &self.cache.name())
            .field("request", &self.context.current())
            .field("image_resolver", &self.images.is_some())
            .finish()
    }
}

//! Core abstractions for request-scoped SEO metadata resolution.
//!
//! This crate provides the fundamental types and collaborator seams:
//! - `RequestContext` / `RequestMatch` / `MatchParams` - Matched request state
//! - `MetadataRecord` / `MetadataSource` - Per-page metadata lookup
//! - `LocaleConfig` / `TitleFormatConfig` - Localization and title settings
//! - `LinkBuilder` - Absolute URL generation for alternate locales
//! - `ImageResolver` - Optional Open Graph image lookup
//! - `AfterMatch` - Hook a router calls once a request has been matched
//!
//! Each seam ships a small table-driven implementation (`StaticMetadataSource`,
//! `StaticLocaleConfig`, `RouteTable`, `PatternImageResolver`) for development
//! and tests.

mod context;
mod error;
mod hook;
mod image;
mod link;
mod locale;
mod record;
mod source;

pub use context::*;
pub use error::*;
pub use hook::*;
pub use image::*;
pub use link::*;
pub use locale::*;
pub use record::*;
pub use source::*;

//! Metadata resolution for a matched request.
//!
//! `MetaResolver` combines the collaborator seams from `seo-core` into the
//! `<head>` block of a page: title, description, Open Graph tags, robots
//! directives and cross-locale alternate links. Rendered blocks are cached per
//! path and locale for 90 minutes.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use seo_resolver::MetaResolver;
//!
//! let mut resolver = MetaResolver::new(source, locales, links, store);
//! resolver.bind("/en/about", params);
//!
//! if let Some(head) = resolver.html()? {
//!     println!("{}", head);
//! }
//! ```

mod alternate;
mod error;
mod resolver;

pub use alternate::*;
pub use error::*;
pub use resolver::*;

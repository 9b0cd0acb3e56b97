//! HTML escaping, title formatting and head tag rendering.
//!
//! This crate provides:
//! - `escape_html` / `escape_html_attr` - Entity escaping for text and attribute values
//! - `format_title` - Title templating with a length fallback
//! - `MetaTag` / `HeadTags` - Ordered `<head>` tags rendered to a newline-joined block
//!
//! # Example
//!
//! ```ignore
//! use seo_html::{format_title, HeadTags, MetaTag};
//!
//! let title = format_title("{{ title }} {{ separator }} {{ suffix }}", "About", None, Some("Example"));
//!
//! let mut head = HeadTags::new();
//! head.push(MetaTag::title(title));
//! head.push(MetaTag::description("Who we are"));
//! assert_eq!(head.render().as_deref(), Some("<title>About | Example</title>\n<meta name=\"description\" content=\"Who we are\">"));
//! ```

mod escape;
mod tag;
mod title;

pub use escape::*;
pub use tag::*;
pub use title::*;

//! Page title formatting.

/// Placeholder for the page title.
pub const TITLE_PLACEHOLDER: &str = "{{ title }}";

/// Placeholder for the separator.
pub const SEPARATOR_PLACEHOLDER: &str = "{{ separator }}";

/// Placeholder for the suffix.
pub const SUFFIX_PLACEHOLDER: &str = "{{ suffix }}";

/// Separator used when a locale configures none.
pub const DEFAULT_SEPARATOR: &str = "|";

/// Longest formatted title (in Unicode scalar values) search engines display
/// in full; longer results fall back to the bare title.
pub const MAX_TITLE_CHARS: usize = 70;

/// Characters stripped from both ends when trimming.
const TRIM_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Characters collapsed to a single space inside the title.
const SPACE_CHARS: [char; 6] = [' ', '\t', '\n', '\r', '\x0B', '\x0C'];

/// Format a page title by template.
///
/// Substitutes `{{ title }}`, `{{ separator }}` and `{{ suffix }}` in order,
/// then strips separator characters dangling at either end (an empty suffix
/// takes its separator with it) and collapses whitespace runs. When the result
/// is longer than [`MAX_TITLE_CHARS`], the bare `title` is returned instead.
///
/// # Example
/// ```ignore
/// let format = "{{ title }} {{ separator }} {{ suffix }}";
/// assert_eq!(format_title(format, "About", None, Some("Example")), "About | Example");
/// assert_eq!(format_title(format, "Home", None, None), "Home");
/// ```
pub fn format_title(
    format: &str,
    title: &str,
    separator: Option<&str>,
    suffix: Option<&str>,
) -> String {
    let separator = separator.unwrap_or(DEFAULT_SEPARATOR).trim_matches(&TRIM_CHARS[..]);

    let substituted = format
        .replace(TITLE_PLACEHOLDER, title)
        .replace(SEPARATOR_PLACEHOLDER, separator)
        .replace(SUFFIX_PLACEHOLDER, suffix.unwrap_or(""));

    let trimmed = substituted.trim_matches(&TRIM_CHARS[..]);
    let trimmed = if separator.is_empty() {
        trimmed
    } else {
        trimmed.trim_matches(|c: char| separator.contains(c))
    };
    let collapsed = collapse_whitespace(trimmed.trim_matches(&TRIM_CHARS[..]));
    let formatted = collapsed.trim_matches(&TRIM_CHARS[..]).to_string();

    if formatted.chars().count() > MAX_TITLE_CHARS {
        title.to_string()
    } else {
        formatted
    }
}

/// Replace every run of whitespace with one space.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if SPACE_CHARS.contains(&c) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

//! HTML entity escaping.

use std::borrow::Cow;

/// Characters that require escaping in text and attribute values.
const ESCAPE_CHARS: [char; 5] = ['&', '<', '>', '"', '\''];

/// Characters whose presence makes a backtick value safe to leave unpadded.
const ATTR_DELIMITERS: [char; 5] = [' ', '<', '>', '"', '\''];

/// HTML5 entity for a special character.
#[inline]
fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&apos;"),
        _ => None,
    }
}

/// Escape a string for use anywhere inside HTML text (except comments).
///
/// Uses `Cow` to avoid allocation when nothing needs escaping.
///
/// # Example
/// ```ignore
/// assert_eq!(escape_html("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
/// ```
#[inline]
pub fn escape_html(s: &str) -> Cow<'_, str> {
    escape_with(s, true)
}

/// Escape raw bytes, replacing invalid UTF-8 sequences with U+FFFD.
///
/// Never fails; the result is always valid UTF-8.
pub fn escape_html_bytes(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    escape_html(&text).into_owned()
}

/// Escape a string for use inside a double- or single-quoted attribute value.
///
/// A value containing a backtick but no space, `<`, `>`, `"` or `'` gets a
/// trailing space first: some browsers treat such a value as backtick-quoted
/// when serializing `innerHTML`, which enables mXSS.
#[inline]
pub fn escape_html_attr(s: &str) -> Cow<'_, str> {
    escape_html_attr_with(s, true)
}

/// Like [`escape_html_attr`], optionally leaving existing character
/// references (`&amp;`, `&#39;`, `&#x27;`) untouched.
pub fn escape_html_attr_with(s: &str, double_encode: bool) -> Cow<'_, str> {
    if needs_backtick_padding(s) {
        let mut padded = String::with_capacity(s.len() + 1);
        padded.push_str(s);
        padded.push(' ');
        return Cow::Owned(escape_with(&padded, double_encode).into_owned());
    }
    escape_with(s, double_encode)
}

/// Whether an attribute value must be padded against backtick mXSS.
#[inline]
pub fn needs_backtick_padding(s: &str) -> bool {
    s.contains('`') && !s.contains(&ATTR_DELIMITERS[..])
}

fn escape_with(s: &str, double_encode: bool) -> Cow<'_, str> {
    if !s.contains(&ESCAPE_CHARS[..]) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + s.len() / 4);
    for (i, c) in s.char_indices() {
        if c == '&' && !double_encode && starts_with_char_reference(&s[i..]) {
            result.push('&');
            continue;
        }
        match entity(c) {
            Some(e) => result.push_str(e),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Whether `s` (starting at `&`) begins with `&name;`, `&#123;` or `&#x1f;`.
fn starts_with_char_reference(s: &str) -> bool {
    let Some(body) = s.strip_prefix('&') else {
        return false;
    };
    let Some(end) = body.find(';') else {
        return false;
    };
    let reference = &body[..end];

    if let Some(numeric) = reference.strip_prefix('#') {
        return match numeric.strip_prefix(|c: char| c == 'x' || c == 'X') {
            Some(hex) => !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit()),
            None => !numeric.is_empty() && numeric.chars().all(|c| c.is_ascii_digit()),
        };
    }

    let mut chars = reference.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric())
}

use proptest::prelude::*;
use seo_html::{escape_html, escape_html_attr, escape_html_bytes, format_title, needs_backtick_padding};

const DEFAULT: &str = "{{ title }} {{ separator }} {{ suffix }}";

fn attr_input() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just('`'),
            Just('&'),
            Just('<'),
            Just('>'),
            Just('"'),
            Just('\''),
            Just(' '),
            any::<char>(),
        ],
        0..24,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_attr_output_has_no_raw_delimiters(s in attr_input()) {
        let escaped = escape_html_attr(&s);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));
    }

    #[test]
    fn prop_attr_pads_backtick_values_by_one_space(s in attr_input()) {
        let escaped = escape_html_attr(&s);
        if needs_backtick_padding(&s) {
            let padded = format!("{} ", s);
            let expected = escape_html(&padded);
            prop_assert_eq!(escaped.as_ref(), expected.as_ref());
            prop_assert!(escaped.ends_with(' '));
        } else {
            let expected = escape_html(&s);
            prop_assert_eq!(escaped.as_ref(), expected.as_ref());
        }
    }

    #[test]
    fn prop_text_escaping_is_reversible(s in any::<String>()) {
        let escaped = escape_html(&s);
        let restored = escaped
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&amp;", "&");
        prop_assert_eq!(restored, s);
    }

    #[test]
    fn prop_byte_escaping_never_emits_markup(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let escaped = escape_html_bytes(&bytes);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
    }

    #[test]
    fn prop_title_fits_or_falls_back(
        title in "[a-zA-Z0-9 ]{0,90}",
        suffix in proptest::option::of("[a-zA-Z0-9 ]{0,40}"),
    ) {
        let result = format_title(DEFAULT, &title, None, suffix.as_deref());
        prop_assert!(result.chars().count() <= 70 || result == title);
    }

    #[test]
    fn prop_title_without_suffix_has_no_dangling_separator(title in "[a-zA-Z0-9][a-zA-Z0-9 ]{0,40}[a-zA-Z0-9]") {
        let result = format_title(DEFAULT, &title, None, None);
        prop_assert!(!result.starts_with('|'));
        prop_assert!(!result.ends_with('|'));
        prop_assert!(!result.contains("{{"));
    }
}

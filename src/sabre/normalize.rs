// Cleanup of model output before it is returned
// Author: kelexine (https://github.com/kelexine)

/// Line-break glyphs that reach us in place of `\n`.
///
/// U+2028/U+2029 show up when the model emits Unicode separators; the
/// `â€¨`/`â€©` forms are the same code points after a UTF-8 → Windows-1252
/// round trip (bytes `E2 80 A8` / `E2 80 A9` decoded as `â`, `€`, `¨`/`©`).
/// Mojibake forms are listed first so they are replaced as a whole.
pub const STRAY_LINE_BREAKS: [&str; 4] = [
    "\u{00E2}\u{20AC}\u{00A8}",
    "\u{00E2}\u{20AC}\u{00A9}",
    "\u{2028}",
    "\u{2029}",
];

/// Normalize raw model text into the `sabreText` payload.
///
/// 1. Drop carriage returns.
/// 2. Replace stray line-break glyphs with `\n`.
/// 3. Trim surrounding whitespace.
pub fn normalize_output(raw: &str) -> String {
    let mut text = raw.replace('\r', "");

    for glyph in STRAY_LINE_BREAKS {
        if text.contains(glyph) {
            text = text.replace(glyph, "\n");
        }
    }

    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_trims_and_strips_carriage_returns() {
        let raw = "\r\n  1  AA  100  Y  01JAN  JFK LAX  0800 1100\r\n";
        assert_eq!(normalize_output(raw), "1  AA  100  Y  01JAN  JFK LAX  0800 1100");
    }

    #[test]
    fn test_crlf_becomes_lf() {
        let raw = "1  AA  100  Y  01JAN  JFK ORD  0800 0945\r\n2  AA  200  Y  01JAN  ORD LAX  1100 1330";
        assert_eq!(
            normalize_output(raw),
            "1  AA  100  Y  01JAN  JFK ORD  0800 0945\n2  AA  200  Y  01JAN  ORD LAX  1100 1330"
        );
    }

    #[test]
    fn test_mojibake_line_separator() {
        let raw = "1  LH  400  J  12MAR  FRA JFK  1010 1250\u{00E2}\u{20AC}\u{00A8}OPERATED BY UNITED AIRLINES";
        let out = normalize_output(raw);
        assert_eq!(out, "1  LH  400  J  12MAR  FRA JFK  1010 1250\nOPERATED BY UNITED AIRLINES");
        assert!(!out.contains('\u{20AC}'));
        assert!(!out.contains('\u{00E2}'));
    }

    #[test]
    fn test_unicode_separators() {
        assert_eq!(normalize_output("A\u{2028}B\u{2029}C"), "A\nB\nC");
    }

    #[test]
    fn test_plain_text_untouched() {
        let raw = "1  AA  100  Y  01JAN  JFK LAX  0800 1100";
        assert_eq!(normalize_output(raw), raw);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert_eq!(normalize_output(""), "");
        assert_eq!(normalize_output(" \r\n\t "), "");
    }

    proptest! {
        #[test]
        fn prop_no_carriage_returns_or_separators(raw in "\\PC*") {
            let out = normalize_output(&raw);
            prop_assert!(!out.contains('\r'));
            prop_assert!(!out.contains('\u{2028}'), "output contains U+2028");
            prop_assert!(!out.contains('\u{2029}'), "output contains U+2029");
            prop_assert_eq!(out.trim(), out.as_str());
        }

        #[test]
        fn prop_idempotent(raw in "[A-Z0-9 +\\r\\n\u{2028}]{0,64}") {
            let once = normalize_output(&raw);
            prop_assert_eq!(normalize_output(&once), once);
        }
    }
}

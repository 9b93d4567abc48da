use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static BOLD_STARS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid bold-stars regex"));
static BOLD_UNDERSCORES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"__(.+?)__").expect("valid bold-underscores regex"));
static BOLD_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(?:strong|b)\b[^>]*>(.*?)</(?:strong|b)\s*>").expect("valid bold-tag regex")
});
static ITALIC_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(?:em|i)\b[^>]*>(.*?)</(?:em|i)\s*>").expect("valid italic-tag regex")
});
static BREAK_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<br\s*/?\s*>").expect("valid break-tag regex"));
static NUMERIC_ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#([xX][0-9a-fA-F]+|[0-9]+);").expect("valid entity regex"));

/// Renders the restricted Markdown subset to an HTML fragment.
///
/// Newlines become `<br>`; `**text**` and `__text__` spans become
/// `<strong>text</strong>`, one non-greedy match per pair, no nesting. No
/// other Markdown construct is recognized. Empty input yields empty output.
pub fn render_to_display(markdown: &str) -> String {
    let with_breaks = markdown.replace('\n', "<br>");
    let stars = BOLD_STARS_RE.replace_all(&with_breaks, "<strong>$1</strong>");
    BOLD_UNDERSCORES_RE
        .replace_all(&stars, "<strong>$1</strong>")
        .into_owned()
}

/// Extracts JSON-embeddable Markdown from an edited HTML fragment.
///
/// Steps, in order: entity decoding, bold tags back to `**text**`, italic
/// tags back to `*text*`, `<br>` variants back to the literal characters
/// `\` `n`, double-quote escaping, and a final trim. Line breaks come out as
/// the two-character escape on purpose: the only consumer is manual paste
/// back into a hand-maintained JSON data file.
///
/// The transform is lossy outside the supported subset; round-tripping
/// arbitrary HTML is out of contract.
pub fn extract_markdown(html: &str) -> String {
    let decoded = decode_entities(html);
    let bold = BOLD_TAG_RE.replace_all(&decoded, "**$1**");
    let italic = ITALIC_TAG_RE.replace_all(&bold, "*$1*");
    let breaks = BREAK_TAG_RE.replace_all(&italic, r"\n");
    breaks.replace('"', "\\\"").trim().to_string()
}

/// Decodes HTML character entities.
///
/// `&nbsp;` first, then numeric and common named entities, then an explicit
/// fallback pass for `&lt;`, `&gt;`, `&amp;` in that order. The fallback
/// runs after the generic pass so double-encoded sequences such as
/// `&amp;lt;` still come out as `<`.
fn decode_entities(input: &str) -> String {
    let spaced = input.replace("&nbsp;", " ");
    let numeric = NUMERIC_ENTITY_RE.replace_all(&spaced, |caps: &Captures<'_>| {
        let body = &caps[1];
        let parsed = if body.starts_with('x') || body.starts_with('X') {
            u32::from_str_radix(&body[1..], 16)
        } else {
            body.parse::<u32>()
        };
        match parsed.ok().and_then(char::from_u32) {
            Some(ch) => ch.to_string(),
            // Unrepresentable code point: leave the raw entity in place.
            None => caps[0].to_string(),
        }
    });
    let generic = numeric
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&");
    // Second pass over the bracket entities: decoding `&amp;` above can
    // uncover `&lt;`/`&gt;` hidden inside double-encoded text.
    generic
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::{decode_entities, extract_markdown, render_to_display};

    #[test]
    fn renders_bold_and_breaks() {
        assert_eq!(
            render_to_display("Hello **world**\nSecond line"),
            "Hello <strong>world</strong><br>Second line"
        );
    }

    #[test]
    fn renders_underscore_bold() {
        assert_eq!(
            render_to_display("both __kinds__ and **spans**"),
            "both <strong>kinds</strong> and <strong>spans</strong>"
        );
    }

    #[test]
    fn bold_match_is_non_greedy() {
        assert_eq!(
            render_to_display("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(render_to_display("no markup here"), "no markup here");
        assert_eq!(render_to_display(""), "");
    }

    #[test]
    fn unsupported_markdown_is_left_alone() {
        assert_eq!(render_to_display("# heading *italic*"), "# heading *italic*");
    }

    #[test]
    fn extracts_bold_italic_and_breaks() {
        assert_eq!(
            extract_markdown("Hello <strong>world</strong><br>Second line"),
            r"Hello **world**\nSecond line"
        );
        assert_eq!(
            extract_markdown("<B>loud</B> and <em>soft</em><br/>next"),
            r"**loud** and *soft*\nnext"
        );
    }

    #[test]
    fn extract_tolerates_tag_attributes() {
        assert_eq!(
            extract_markdown(r#"<strong class="x">bold</strong> <i style="">it</i>"#),
            "**bold** *it*"
        );
    }

    #[test]
    fn extract_escapes_quotes_and_trims() {
        assert_eq!(
            extract_markdown("  say &quot;hi&quot;  "),
            r#"say \"hi\""#
        );
    }

    #[test]
    fn decode_handles_double_encoded_entities() {
        assert_eq!(decode_entities("&amp;lt;tag&amp;gt;"), "<tag>");
        assert_eq!(decode_entities("a&nbsp;b &#65; &#x42;"), "a b A B");
    }

    #[test]
    fn round_trip_of_plain_text_matches_contract() {
        let source = "line one\nline \"two\"";
        let displayed = render_to_display(source);
        assert_eq!(extract_markdown(&displayed), r#"line one\nline \"two\""#);
    }
}

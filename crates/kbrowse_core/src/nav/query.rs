use crate::model::article::ArticleId;
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Matches the characters a browser's encodeURIComponent leaves unescaped,
// minus the sub-delims we never emit in slugs or search text.
const QUERY_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// The navigation parameters carried by a canonical URL.
///
/// At most one of the three is authoritative at a time; the resolution
/// priority is `id`, then `category`, then `search`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pub id: Option<ArticleId>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl QueryParams {
    /// Parses a URL or bare query string.
    ///
    /// Accepts full URLs (`index.html?id=3`), query strings with or without
    /// the leading `?`, and the empty string. Unknown keys are ignored; an
    /// `id` value that is not an integer is treated as absent. `+` decodes
    /// to a space inside the `search` value.
    pub fn parse(input: &str) -> Self {
        let query = match input.find('?') {
            Some(pos) => &input[pos + 1..],
            None => input,
        };

        let mut params = Self::default();
        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "id" => params.id = decode(value).parse().ok(),
                "category" => params.category = Some(decode(value)),
                "search" => params.search = Some(decode(&value.replace('+', "%20"))),
                _ => {}
            }
        }
        params
    }

    /// `true` when no navigation parameter is present.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.category.is_none() && self.search.is_none()
    }

    /// Canonical URL for an article detail view.
    pub fn article_url(id: ArticleId) -> String {
        format!("?id={id}")
    }

    /// Canonical URL for a category's article list.
    pub fn category_url(slug: &str) -> String {
        format!("?category={}", utf8_percent_encode(slug, QUERY_ENCODE))
    }

    /// Canonical URL for a search-results view.
    pub fn search_url(query: &str) -> String {
        format!("?search={}", utf8_percent_encode(query, QUERY_ENCODE))
    }

    /// Canonical URL for the categories view: no parameters at all.
    pub fn categories_url() -> String {
        String::new()
    }
}

fn decode(value: &str) -> String {
    percent_decode_str(value)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        // Invalid UTF-8 percent sequences keep their raw form.
        .unwrap_or_else(|_| value.to_string())
}

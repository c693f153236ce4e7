// Lenient URL splitting.
//
// Classification never gets to refuse an input, so this parser is total:
// any string, however mangled, yields a UrlParts. Inputs without a scheme
// separator keep their text in path/query so substring checks still see it.

/// The pieces of a URL that classification cares about.
///
/// Callers are expected to trim the raw string before parsing; the outer
/// request layers reject empty input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UrlParts {
    /// Lower-cased scheme, or empty when the input has no `://`.
    pub scheme: String,
    /// Lower-cased authority exactly as written, including any `www.`
    /// prefix and port. The feature extractor measures this form because
    /// the model was fitted against it.
    pub authority: String,
    /// Authority with a single leading `www.` stripped. Every rule and
    /// heuristic matches against this form.
    pub host: String,
    /// Lower-cased path, including its leading `/` when present.
    pub path: String,
    /// Lower-cased query, without the `?`.
    pub query: String,
}

impl UrlParts {
    /// Split a raw URL into parts. Never fails; components that cannot be
    /// recognized come back empty. Fragments never participate in
    /// classification and are dropped first.
    pub fn parse(url: &str) -> Self {
        let without_fragment = match url.find('#') {
            Some(i) => &url[..i],
            None => url,
        };

        let (scheme, after_scheme) = match without_fragment.find("://") {
            Some(i) if i > 0 => (
                without_fragment[..i].to_lowercase(),
                Some(&without_fragment[i + 3..]),
            ),
            _ => (String::new(), None),
        };

        let (authority, path_and_query) = match after_scheme {
            Some(rest) => {
                let end = rest.find(|c| c == '/' || c == '?').unwrap_or(rest.len());
                (rest[..end].to_lowercase(), &rest[end..])
            }
            // No scheme separator: the whole input is path/query territory.
            None => (String::new(), without_fragment),
        };

        let (path, query) = match path_and_query.find('?') {
            Some(i) => (
                path_and_query[..i].to_lowercase(),
                path_and_query[i + 1..].to_lowercase(),
            ),
            None => (path_and_query.to_lowercase(), String::new()),
        };

        let host = authority
            .strip_prefix("www.")
            .unwrap_or(&authority)
            .to_string();

        Self {
            scheme,
            authority,
            host,
            path,
            query,
        }
    }
}

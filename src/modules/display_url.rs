// Pure URL presentation logic - no framework imports.
// Row subtitles show a reader-friendly form of the record URL; everything
// here is local string work, nothing resolves or fetches.

use url::Url;

/// Display form of a URL for row subtitles: the scheme is dropped for
/// http/https, and the lone trailing slash of a root path is dropped.
/// Inputs that do not parse come back unchanged, so the raw record string
/// is always a valid fallback.
pub fn display_string(raw: &str) -> String {
    let parsed = match Url::parse(raw) {
        Ok(u) => u,
        Err(_) => return raw.to_string(),
    };

    let mut out = parsed.to_string();

    let web_scheme = matches!(parsed.scheme(), "http" | "https");
    if web_scheme
        && parsed.path() == "/"
        && parsed.query().is_none()
        && parsed.fragment().is_none()
        && out.ends_with('/')
    {
        out.pop();
    }

    if web_scheme {
        let prefix_len = parsed.scheme().len() + "://".len();
        out.split_off(prefix_len)
    } else {
        out
    }
}

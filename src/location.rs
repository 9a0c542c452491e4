//! Page locations and link resolution.
//!
//! Just enough URL handling to do what a browser does for sidebar links:
//! parse the current page address, resolve a relative `href` against it,
//! and decide which `href`s need the root-relative prefix.
//!
//! Both sides of a link comparison are percent-encoded the way a browser
//! serializes `location.href` and `a.href`.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

/// `href`s that already name a scheme or a host are left alone.
static EXTERNAL_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-z+]+:)?//").expect("static regex is valid"));

/// Errors parsing a page location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// Nothing but whitespace was given.
    #[error("Location is empty")]
    Empty,

    /// The input is relative; a page location must be absolute.
    #[error("Location {0:?} has no scheme (expected e.g. https://host/path)")]
    MissingScheme(String),
}

/// An absolute URL split into the parts link resolution needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    scheme: String,
    /// `Some` for `scheme://authority/...` URLs (the authority may be empty,
    /// as in `file:///book/index.html`).
    authority: Option<String>,
    path: String,
    query: String,
    fragment: String,
}

impl Location {
    /// Parse an absolute URL.
    pub fn parse(input: &str) -> Result<Self, LocationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(LocationError::Empty);
        }

        let (scheme, rest) = split_scheme(input)
            .ok_or_else(|| LocationError::MissingScheme(input.to_string()))?;

        let (rest, fragment) = match rest.find('#') {
            Some(pos) => (&rest[..pos], &rest[pos..]),
            None => (rest, ""),
        };
        let (rest, query) = match rest.find('?') {
            Some(pos) => (&rest[..pos], &rest[pos..]),
            None => (rest, ""),
        };

        let (authority, path) = match rest.strip_prefix("//") {
            Some(after) => {
                let slash = after.find('/').unwrap_or(after.len());
                let path = if slash == after.len() { "/" } else { &after[slash..] };
                let path = normalize_path(&percent_encode(path, Component::Path));
                (Some(after[..slash].to_ascii_lowercase()), path)
            }
            // Opaque paths (`mailto:...`) are kept as written.
            None => (None, normalize_path(rest)),
        };

        Ok(Self {
            scheme: scheme.to_ascii_lowercase(),
            authority,
            path,
            query: percent_encode(query, Component::Query),
            fragment: percent_encode(fragment, Component::Fragment),
        })
    }

    /// Lowercase scheme, without the colon.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Normalized, percent-encoded path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Fragment including its `#`, or empty.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Serialized form, equivalent to `location.href`.
    pub fn href(&self) -> String {
        self.to_string()
    }

    /// Resolve a reference the way an `<a href>` is resolved against the page.
    pub fn resolve(&self, reference: &str) -> Location {
        let reference = reference.trim();
        let mut next = self.clone();

        if reference.is_empty() {
            next.fragment.clear();
            return next;
        }

        if let Ok(absolute) = Location::parse(reference) {
            return absolute;
        }

        if let Some(network_path) = reference.strip_prefix("//") {
            return Location::parse(&format!("{}://{}", self.scheme, network_path))
                .unwrap_or(next);
        }

        if reference.starts_with('#') {
            next.fragment = percent_encode(reference, Component::Fragment);
            return next;
        }

        let (reference, fragment) = match reference.find('#') {
            Some(pos) => (&reference[..pos], &reference[pos..]),
            None => (reference, ""),
        };
        let (reference, query) = match reference.find('?') {
            Some(pos) => (&reference[..pos], &reference[pos..]),
            None => (reference, ""),
        };
        next.fragment = percent_encode(fragment, Component::Fragment);
        next.query = percent_encode(query, Component::Query);

        if reference.is_empty() {
            // Query-only reference keeps the path.
            return next;
        }

        let reference = percent_encode(reference, Component::Path);
        next.path = if reference.starts_with('/') {
            normalize_path(&reference)
        } else {
            let base_dir = match self.path.rfind('/') {
                Some(pos) => &self.path[..=pos],
                None => "",
            };
            normalize_path(&format!("{base_dir}{reference}"))
        };
        next
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.scheme)?;
        if let Some(authority) = &self.authority {
            write!(f, "//{authority}")?;
        }
        write!(f, "{}{}{}", self.path, self.query, self.fragment)
    }
}

impl std::str::FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::parse(s)
    }
}

/// The current page as link targets are compared against it.
///
/// A directory URL (ending in `/`) names its default document, so
/// `https://host/b/` and `https://host/b/index.html` canonicalize the same.
pub fn canonical_current_page(location: &Location, default_document: &str) -> String {
    let mut current = location.href();
    if current.ends_with('/') {
        current.push_str(default_document);
    }
    current
}

/// Whether an `href` gets the root-relative prefix.
///
/// In-page anchors (`#...`) and anything scheme-qualified or
/// protocol-relative (`https://...`, `//cdn/...`) are left untouched.
pub fn is_rewritable_href(href: &str) -> bool {
    !href.starts_with('#') && !EXTERNAL_HREF.is_match(href)
}

/// Apply the root-relative prefix to a rewritable `href`.
pub fn rewrite_href(href: &str, path_to_root: &str) -> Option<String> {
    is_rewritable_href(href).then(|| format!("{path_to_root}{href}"))
}

/// URL component whose percent-encode set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    Path,
    Query,
    Fragment,
}

impl Component {
    /// Controls, space and non-ASCII bytes are always escaped.
    fn escapes(self, byte: u8) -> bool {
        if byte <= b' ' || byte >= 0x7f {
            return true;
        }
        match self {
            Component::Path => {
                matches!(byte, b'"' | b'#' | b'<' | b'>' | b'?' | b'`' | b'{' | b'}')
            }
            Component::Query => matches!(byte, b'"' | b'#' | b'<' | b'>' | b'\''),
            Component::Fragment => matches!(byte, b'"' | b'<' | b'>' | b'`'),
        }
    }
}

/// Percent-encode `raw` as a browser serializes `component`.
///
/// `%` is never escaped, so existing escapes pass through unchanged and
/// encoding an already encoded string is a no-op.
fn percent_encode(raw: &str, component: Component) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if component.escapes(byte) {
            out.push('%');
            out.push(char::from(HEX[usize::from(byte >> 4)]));
            out.push(char::from(HEX[usize::from(byte & 0x0f)]));
        } else {
            out.push(char::from(byte));
        }
    }
    out
}

fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let colon = input.find(':')?;
    let scheme = &input[..colon];
    let mut chars = scheme.chars();
    let first = chars.next()?;
    if !first.is_ascii_alphabetic()
        || !chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }
    Some((scheme, &input[colon + 1..]))
}

/// Remove `.` and `..` segments, keeping a leading and trailing `/`.
pub(crate) fn normalize_path(path: &str) -> String {
    let starts_with_slash = path.starts_with('/');
    let ends_with_slash = path.len() > 1
        && (path.ends_with('/') || path.ends_with("/.") || path.ends_with("/.."));
    let mut parts: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => continue,
            ".." => {
                parts.pop();
            }
            _ => parts.push(segment),
        }
    }
    let mut out = if starts_with_slash {
        format!("/{}", parts.join("/"))
    } else {
        parts.join("/")
    };
    if ends_with_slash && !out.ends_with('/') {
        out.push('/');
    }
    if out.is_empty() && starts_with_slash {
        out.push('/');
    }
    out
}

#[cfg(test)]
#[path = "location_tests.rs"]
mod tests;

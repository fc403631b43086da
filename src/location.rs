// Link rewriting and current-page matching
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static EXTERNAL_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-zA-Z][a-zA-Z0-9+.-]*:|//)").expect("valid link pattern"));

/// Whether `href` is relative to the book root and needs the path-to-root prefix.
pub fn is_relative(href: &str) -> bool {
    !href.is_empty() && !href.starts_with('#') && !EXTERNAL_LINK.is_match(href)
}

/// Prefix relative links with `path_to_root`; anchors and absolute links pass through.
pub fn rewrite_href(href: &str, path_to_root: &str) -> String {
    if is_relative(href) {
        format!("{path_to_root}{href}")
    } else {
        href.to_string()
    }
}

/// Stand-in origin for locations given as rooted paths such as `/docs/guide.html`.
static ROOTED_ORIGIN: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://localhost/").expect("valid placeholder origin"));

#[derive(Clone, Debug, PartialEq, Eq)]
enum Base {
    /// A full URL such as `https://book.example.org/guide.html`.
    Absolute(Url),
    /// A path from the site root, compared by path and query only.
    Rooted(Url),
    /// A bare relative path, already in the tree's coordinates.
    Bare,
}

/// The current page with its fragment stripped and `/` spelled out as `/index.html`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveLocation {
    value: String,
    base: Base,
}

impl ActiveLocation {
    pub fn from_document(location: &str) -> Self {
        let base = if location.starts_with('/') && !location.starts_with("//") {
            ROOTED_ORIGIN.join(location).map(Base::Rooted).unwrap_or(Base::Bare)
        } else {
            Url::parse(location).map(Base::Absolute).unwrap_or(Base::Bare)
        };
        match base {
            Base::Absolute(url) => {
                let url = normalize(url);
                Self { value: url.to_string(), base: Base::Absolute(url) }
            }
            Base::Rooted(url) => {
                let url = normalize(url);
                Self { value: path_and_query(&url), base: Base::Rooted(url) }
            }
            Base::Bare => {
                let without_fragment = location.split('#').next().unwrap_or_default();
                let value = if without_fragment.ends_with('/') {
                    format!("{without_fragment}index.html")
                } else {
                    without_fragment.to_string()
                };
                Self { value, base: Base::Bare }
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The site root index page, which aliases the first chapter.
    pub fn is_index(&self) -> bool {
        self.value.ends_with("/index.html")
    }

    /// Resolve a rendered href the way the host page would.
    ///
    /// Against an absolute or rooted location this is URL joining; a bare
    /// path location is already in the tree's coordinates so the href is
    /// taken as written.
    pub fn resolve(&self, href: &str) -> String {
        match &self.base {
            Base::Absolute(base) => base
                .join(href)
                .map(|url| url.to_string())
                .unwrap_or_else(|_| href.to_string()),
            Base::Rooted(base) => resolve_rooted(base, href),
            Base::Bare => href.to_string(),
        }
    }

    pub fn matches(&self, href: &str) -> bool {
        self.resolve(href) == self.value
    }

    /// Match `href` as if the page sat at the site root. Only rooted
    /// locations have a root to resolve against.
    pub fn matches_from_root(&self, href: &str) -> bool {
        match &self.base {
            Base::Rooted(_) => resolve_rooted(&ROOTED_ORIGIN, href) == self.value,
            _ => false,
        }
    }
}

fn normalize(mut url: Url) -> Url {
    url.set_fragment(None);
    if url.path().ends_with('/') {
        let path = format!("{}index.html", url.path());
        url.set_path(&path);
    }
    url
}

fn path_and_query(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

/// Same-origin targets come back as path and query, anything else in full.
fn resolve_rooted(base: &Url, href: &str) -> String {
    match base.join(href) {
        Ok(url) if url.origin() == base.origin() => path_and_query(&url),
        Ok(url) => url.to_string(),
        Err(_) => href.to_string(),
    }
}

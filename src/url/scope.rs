use url::Url;

/// Which side of the crawl boundary a hyperlink falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkScope {
    /// Same host as the crawl's seed - eligible for crawling
    Internal,
    /// Any other link - recorded but never fetched
    External,
}

/// The host (and non-default port) every internal link must carry
///
/// Classification is a textual search: a link is internal when
/// `http://` or `https://` immediately followed by this authority appears
/// anywhere in it. Neither end of the match is anchored, so with a root of
/// `example.com` both `http://example.com.other.net/` and
/// `http://other.net/?next=http://example.com/` are classified internal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootHost {
    authority: String,
}

impl RootHost {
    /// Creates a root host from a raw `host[:port]` authority
    pub fn new(authority: impl Into<String>) -> Self {
        Self {
            authority: authority.into(),
        }
    }

    /// Derives the root host from the crawl's seed URL
    ///
    /// Returns None if the URL has no host (e.g. `mailto:` or `data:` URLs).
    ///
    /// # Examples
    ///
    /// ```
    /// use url::Url;
    /// use sumi_scout::url::RootHost;
    ///
    /// let seed = Url::parse("http://localhost:9000/index.html").unwrap();
    /// let root = RootHost::from_url(&seed).unwrap();
    /// assert_eq!(root.as_str(), "localhost:9000");
    /// ```
    pub fn from_url(url: &Url) -> Option<Self> {
        let host = url.host_str()?;
        let authority = match url.port() {
            Some(port) => format!("{}:{}", host, port),
            None => host.to_string(),
        };
        Some(Self::new(authority))
    }

    /// The `host[:port]` text links are matched against
    pub fn as_str(&self) -> &str {
        &self.authority
    }

    /// Returns true if the link is on the crawl's host
    pub fn is_internal(&self, link: &str) -> bool {
        link.match_indices("http")
            .filter_map(|(start, _)| {
                let rest = &link[start + "http".len()..];
                rest.strip_prefix("://").or_else(|| rest.strip_prefix("s://"))
            })
            .any(|rest| rest.starts_with(&self.authority))
    }

    /// Classifies a resolved hyperlink
    pub fn classify(&self, link: &Url) -> LinkScope {
        if self.is_internal(link.as_str()) {
            LinkScope::Internal
        } else {
            LinkScope::External
        }
    }
}

impl std::fmt::Display for RootHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.authority)
    }
}

/// Splits resolved hyperlinks into (internal, external), keeping page order
pub fn partition_links<I>(root: &RootHost, links: I) -> (Vec<String>, Vec<String>)
where
    I: IntoIterator<Item = Url>,
{
    let mut internal = Vec::new();
    let mut external = Vec::new();

    for link in links {
        match root.classify(&link) {
            LinkScope::Internal => internal.push(link.into()),
            LinkScope::External => external.push(link.into()),
        }
    }

    (internal, external)
}

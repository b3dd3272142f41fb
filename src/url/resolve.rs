use url::Url;

/// Resolves a raw reference found in a page against the page's URL
///
/// Surrounding whitespace is trimmed before resolution. References that
/// cannot be parsed are dropped; malformed markup is expected on real pages,
/// so this never reports an error.
///
/// # Arguments
///
/// * `base` - The URL of the page the reference was found on
/// * `raw` - The raw attribute value (absolute or relative)
///
/// # Returns
///
/// * `Some(Url)` - The absolute URL
/// * `None` - The reference could not be resolved
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sumi_scout::url::resolve_reference;
///
/// let base = Url::parse("http://localhost:9000/docs/index.html").unwrap();
/// let resolved = resolve_reference(&base, "../img/logo.png").unwrap();
/// assert_eq!(resolved.as_str(), "http://localhost:9000/img/logo.png");
/// ```
pub fn resolve_reference(base: &Url, raw: &str) -> Option<Url> {
    base.join(raw.trim()).ok()
}

/// Resolves a sequence of raw references, keeping order and duplicates
pub fn resolve_all<'a, I>(base: &Url, raw: I) -> Vec<Url>
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter()
        .filter_map(|reference| resolve_reference(base, reference))
        .collect()
}

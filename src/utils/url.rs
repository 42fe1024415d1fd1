pub use url::Url;

/// Schemes whose URLs embed their own content and never point at a remote file
const INLINE_SCHEMES: &[&str] = &["data:", "blob:"];

/// Removes the fragment, it never reaches the server
pub fn clean_url(url: Url) -> Url {
    let mut url = url;
    url.set_fragment(None);
    url
}

/// Strips credentials and fragment from a URL before sending it as `Referer`
pub fn get_referer_url(url: Url) -> Url {
    let mut url = url;
    // https://httpwg.org/specs/rfc9110.html#field.referer
    let _ = url.set_username("");
    let _ = url.set_password(None);
    url.set_fragment(None);
    url
}

pub fn is_http_url(url: &Url) -> bool {
    url.scheme() == "http" || url.scheme() == "https"
}

/// Whether the reference embeds its content instead of pointing at a resource
pub fn is_inline_reference(reference: &str) -> bool {
    let reference = reference.trim_start();
    INLINE_SCHEMES.iter().any(|scheme| {
        reference
            .get(..scheme.len())
            .is_some_and(|lead| lead.eq_ignore_ascii_case(scheme))
    })
}

/// Resolves a reference to an absolute HTTP(S) URL.
///
/// Absolute HTTP(S) references are taken as they are; anything else is joined
/// onto `base` when one is given. References which end up with another scheme,
/// or relative references without a base, yield `None`.
pub fn resolve_http_url(reference: &str, base: Option<&Url>) -> Option<Url> {
    let reference = reference.trim();

    if reference.is_empty() || is_inline_reference(reference) {
        return None;
    }

    let resolved = match Url::parse(reference) {
        Ok(parsed_url) => parsed_url,
        Err(url::ParseError::RelativeUrlWithoutBase) => base?.join(reference).ok()?,
        Err(_) => return None,
    };

    if is_http_url(&resolved) {
        Some(resolved)
    } else {
        None
    }
}

/// Parses a caller-supplied base URL; only HTTP(S) bases can anchor downloads
pub fn parse_base_url(input: &str) -> Option<Url> {
    Url::parse(input.trim()).ok().filter(is_http_url)
}

#[cfg(test)]
mod tests;

use url::Url;

/// Extracts the base64 payload from the `data` query parameter of a full
/// URL. Returns `None` when the URL does not parse or carries no such
/// parameter.
pub fn data_param_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;

    data_param(parsed.query().unwrap_or_default())
}

/// Finds the `data` parameter in a raw query string (no leading `?`),
/// using form-urlencoded semantics: percent-escapes decode to bytes read
/// as UTF-8, `+` is a space, malformed escapes pass through literally.
/// The first occurrence wins.
pub fn data_param(query: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key.as_ref() == "data")
        .map(|(_, value)| value.into_owned())
}

//! `application/x-www-form-urlencoded` pairs codec.

/// Decodes the provided query (or hash fragment) into key-value pairs.
///
/// A single leading `?` or `#` is ignored, so both a `location.search` and a
/// `location.hash` form are accepted as is. Percent-escapes and `+` are
/// decoded, a key without `=` yields an empty value, and pairs are returned
/// in source order with duplicates preserved.
#[must_use]
pub fn parse(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix(&['?', '#'][..]).unwrap_or(query);
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

/// Encodes the provided key-value pairs into a query string.
///
/// No leading `?` is produced. An empty input encodes as an empty [`String`].
#[must_use]
pub fn serialize<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        _ = query.append_pair(k.as_ref(), v.as_ref());
    }
    query.finish()
}

//! URL-encoded form and query string decoding

use crate::Error;

/// Media type browsers use for plain HTML form posts
pub const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Ordered, multi-valued `key=value` pairs from a query string or form body
///
/// Decoding is strict: a `%` that is not followed by two hex digits, a `;`
/// separator, or bytes that do not decode to UTF-8 are rejected instead of
/// being passed through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pairs: Vec<(String, String)>,
}

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `a=1&b=2` style input
    pub fn parse(input: &str) -> Result<Self, Error> {
        let mut pairs = Vec::new();

        for segment in input.split('&') {
            if segment.is_empty() {
                continue;
            }
            if segment.contains(';') {
                return Err(Error::BadRequest(format!(
                    "invalid semicolon separator in {:?}",
                    segment
                )));
            }

            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            pairs.push((decode_component(key)?, decode_component(value)?));
        }

        Ok(Self { pairs })
    }

    /// Decode a request body
    pub fn parse_bytes(body: &[u8]) -> Result<Self, Error> {
        let text = std::str::from_utf8(body)
            .map_err(|e| Error::BadRequest(format!("Failed to parse form data: {}", e)))?;
        Self::parse(text)
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Replace every value for `key` with `value`
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.pairs.retain(|(k, _)| *k != key);
        self.pairs.push((key, value.into()));
    }

    /// Append every pair of `other` after the existing ones
    pub fn extend(&mut self, other: FormValues) {
        self.pairs.extend(other.pairs);
    }
}

/// Percent-decode a request path. `+` is kept as-is and `%2F` becomes a
/// real `/`.
pub fn decode_path(raw: &str) -> Result<String, Error> {
    validate_escapes(raw)?;
    urlencoding::decode(raw)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::BadRequest(format!("invalid path: {}", e)))
}

fn decode_component(raw: &str) -> Result<String, Error> {
    validate_escapes(raw)?;

    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| Error::BadRequest(format!("Failed to parse form data: {}", e)))
}

fn validate_escapes(raw: &str) -> Result<(), Error> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes
                .get(i + 1..i + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit));
            if !valid {
                let end = (i + 3).min(bytes.len());
                return Err(Error::BadRequest(format!(
                    "invalid URL escape {:?}",
                    String::from_utf8_lossy(&bytes[i..end])
                )));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

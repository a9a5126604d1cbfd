//! Decoding of `Authorization: Basic <base64(username:password)>` headers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Credentials carried by a Basic `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Decode a raw `Authorization` header value.
///
/// Returns `None` when the scheme is not `Basic`, the payload is not valid
/// base64 or UTF-8, or there is no `:` separator. The password may itself
/// contain colons; only the first one splits.
pub fn decode_basic(header_value: &str) -> Option<BasicCredentials> {
    let (scheme, encoded) = header_value.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;

    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

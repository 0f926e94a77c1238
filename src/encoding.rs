//! RFC 3986 percent-encoding as required by OAuth 1.0.
//!
//! RFC 5849 Section 3.6 mandates one encoding for every place parameters appear on the wire:
//! the signature base string, the `Authorization` header and query or form bodies. Characters
//! in the unreserved set `A-Z a-z 0-9 - . _ ~` are emitted as-is, every other byte of the UTF-8
//! representation becomes `%XX` with uppercase hex digits. A space is `%20`, never `+`.
//!
//! # Reference
//! - [RFC 5849 Section 3.6](https://www.rfc-editor.org/rfc/rfc5849#section-3.6)
//! - [RFC 3986 Section 2.3](https://www.rfc-editor.org/rfc/rfc3986#section-2.3)

use std::borrow::Cow;

use crate::{Error, Result};

/// Percent-encodes `input`, leaving only RFC 3986 unreserved characters untouched.
///
/// # Examples
///
/// ```rust
/// use oauth_params::encoding::percent_encode;
///
/// assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
/// assert_eq!(percent_encode("a-b.c_d~e"), "a-b.c_d~e");
/// ```
#[must_use]
pub fn percent_encode(input: &str) -> Cow<'_, str> {
    urlencoding::encode(input)
}

/// Reverses [`percent_encode`].
///
/// A `+` is kept literally; form-encoded bodies that use it for spaces need to be converted
/// by the caller.
///
/// # Errors
/// Returns [`Error::Decode`] if the decoded bytes are not valid UTF-8.
pub fn percent_decode(input: &str) -> Result<Cow<'_, str>> {
    urlencoding::decode(input).map_err(|_| Error::Decode(input.to_string()))
}

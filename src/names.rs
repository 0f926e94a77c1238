//! Protocol parameter names and signature methods of RFC 5849.
//!
//! OAuth reserves a fixed set of parameter names, all starting with `oauth_`. This module models
//! that set as the [`OAuthParameter`] enum, so that it is a compile-time constant rather than
//! shared mutable state, and provides the prefix resolution that lets callers address a protocol
//! parameter by its bare suffix (`token` instead of `oauth_token`).
//!
//! # Reference
//! - [RFC 5849 Section 3.1](https://www.rfc-editor.org/rfc/rfc5849#section-3.1)

use std::str::FromStr;

use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// The prefix shared by every protocol parameter name.
pub const OAUTH_PREFIX: &str = "oauth_";

/// A protocol parameter recognized by OAuth 1.0.
///
/// The string form of each variant is the full, prefixed wire name.
///
/// # Examples
///
/// ```rust
/// use oauth_params::OAuthParameter;
///
/// let param: OAuthParameter = "oauth_nonce".parse().unwrap();
/// assert_eq!(param, OAuthParameter::Nonce);
/// assert_eq!(param.name(), "oauth_nonce");
/// assert_eq!(param.suffix(), "nonce");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumCount,
    EnumString,
    AsRefStr,
    Display,
    IntoStaticStr,
)]
pub enum OAuthParameter {
    /// `oauth_consumer_key`
    #[strum(serialize = "oauth_consumer_key")]
    ConsumerKey,
    /// `oauth_token`
    #[strum(serialize = "oauth_token")]
    Token,
    /// `oauth_token_secret`
    #[strum(serialize = "oauth_token_secret")]
    TokenSecret,
    /// `oauth_signature_method`
    #[strum(serialize = "oauth_signature_method")]
    SignatureMethod,
    /// `oauth_signature`
    #[strum(serialize = "oauth_signature")]
    Signature,
    /// `oauth_timestamp`
    #[strum(serialize = "oauth_timestamp")]
    Timestamp,
    /// `oauth_nonce`
    #[strum(serialize = "oauth_nonce")]
    Nonce,
    /// `oauth_verifier`
    #[strum(serialize = "oauth_verifier")]
    Verifier,
    /// `oauth_version`
    #[strum(serialize = "oauth_version")]
    Version,
    /// `oauth_callback`
    #[strum(serialize = "oauth_callback")]
    Callback,
    /// `oauth_session_handle`
    #[strum(serialize = "oauth_session_handle")]
    SessionHandle,
}

impl OAuthParameter {
    /// Looks up the protocol parameter with the given full name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::from_str(name).ok()
    }

    /// Looks up the protocol parameter whose name is `oauth_` followed by `suffix`
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::iter().find(|param| param.suffix() == suffix)
    }

    /// The full, prefixed wire name
    #[must_use]
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// The name without the `oauth_` prefix
    #[must_use]
    pub fn suffix(&self) -> &'static str {
        &self.name()[OAUTH_PREFIX.len()..]
    }
}

/// Returns `true` if `name` is one of the reserved protocol parameter names.
#[must_use]
pub fn is_oauth_name(name: &str) -> bool {
    OAuthParameter::from_name(name).is_some()
}

/// Resolves a bare name to its protocol form.
///
/// If `oauth_` followed by `name` is a recognized protocol parameter, the prefixed form is
/// returned; any other name comes back unchanged.
///
/// ```rust
/// use oauth_params::names::prefixed_name;
///
/// assert_eq!(prefixed_name("token"), "oauth_token");
/// assert_eq!(prefixed_name("bogus"), "bogus");
/// assert_eq!(prefixed_name("oauth_token"), "oauth_token");
/// ```
#[must_use]
pub fn prefixed_name(name: &str) -> &str {
    match OAuthParameter::from_suffix(name) {
        Some(param) => param.name(),
        None => name,
    }
}

/// Signature methods defined by RFC 5849 Section 3.4.
///
/// The string form is the exact value carried in `oauth_signature_method`; matching is case
/// sensitive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, EnumString, AsRefStr, Display,
)]
pub enum SignatureMethod {
    /// `HMAC-SHA1`, the method assumed when none is given
    #[default]
    #[strum(serialize = "HMAC-SHA1")]
    HmacSha1,
    /// `RSA-SHA1`
    #[strum(serialize = "RSA-SHA1")]
    RsaSha1,
    /// `PLAINTEXT`
    #[strum(serialize = "PLAINTEXT")]
    Plaintext,
}

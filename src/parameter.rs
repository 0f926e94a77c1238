//! A single OAuth request parameter.
//!
//! [`Parameter`] is one name/value pair as it appears in an `Authorization` header, a query
//! string or a form-encoded body. It knows whether its name is a reserved protocol name, how
//! it is percent-encoded, and how it sorts relative to other parameters when the normalized
//! parameter string is built.
//!
//! # Reference
//! - [RFC 5849 Section 3.4.1.3.2](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1.3.2)

use std::cmp::Ordering;
use std::fmt;

use crate::{encoding::percent_encode, names, Result};

/// A name/value pair of an OAuth request or response.
///
/// Equality and ordering are defined by `(name, value)`, both compared byte by byte. Two
/// parameters with the same name are ordered by value, as RFC 5849 requires for the
/// normalized parameter string.
///
/// # Examples
///
/// ```rust
/// use oauth_params::Parameter;
///
/// let mut param = Parameter::new("oauth_callback", "oob");
/// assert!(param.is_oauth());
///
/// param.set_value("http://printer.example.com/ready");
/// assert_eq!(
///     param.encoded(),
///     "oauth_callback=http%3A%2F%2Fprinter.example.com%2Fready"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameter {
    name: String,
    value: String,
}

impl Parameter {
    /// Creates a new parameter
    ///
    /// ## Arguments
    /// * `name`  - The parameter name, prefixed or not
    /// * `value` - The parameter value
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Parameter {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a parameter from raw bytes, e.g. data read off the wire
    ///
    /// ## Arguments
    /// * `name`  - The raw parameter name
    /// * `value` - The raw parameter value
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if either input is not valid UTF-8.
    pub fn from_raw(name: &[u8], value: &[u8]) -> Result<Self> {
        let name = match std::str::from_utf8(name) {
            Ok(name) => name,
            Err(e) => return Err(invalid_argument!("parameter name is not text - {}", e)),
        };

        let value = match std::str::from_utf8(value) {
            Ok(value) => value,
            Err(e) => {
                return Err(invalid_argument!(
                    "value of parameter '{}' is not text - {}",
                    name,
                    e
                ))
            }
        };

        Ok(Parameter::new(name, value))
    }

    /// Resolves a bare name to its protocol form, see [`names::prefixed_name`]
    ///
    /// ```rust
    /// use oauth_params::Parameter;
    ///
    /// assert_eq!(Parameter::prefixed_name("token"), "oauth_token");
    /// assert_eq!(Parameter::prefixed_name("bogus"), "bogus");
    /// ```
    #[must_use]
    pub fn prefixed_name(name: &str) -> &str {
        names::prefixed_name(name)
    }

    /// Total order used to build the normalized parameter string.
    ///
    /// Names are compared first; parameters sharing a name are ordered by value. Both
    /// comparisons are on the raw bytes.
    #[must_use]
    pub fn compare(a: &Parameter, b: &Parameter) -> Ordering {
        a.name
            .as_bytes()
            .cmp(b.name.as_bytes())
            .then_with(|| a.value.as_bytes().cmp(b.value.as_bytes()))
    }

    /// Returns the name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the name
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Replaces the value
    pub fn set_value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = value.into();
        self
    }

    /// Replaces the value with raw bytes
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidArgument`] if `value` is not valid UTF-8; the current
    /// value is kept in that case.
    pub fn set_value_raw(&mut self, value: &[u8]) -> Result<&mut Self> {
        match std::str::from_utf8(value) {
            Ok(value) => Ok(self.set_value(value)),
            Err(e) => Err(invalid_argument!(
                "value of parameter '{}' is not text - {}",
                self.name,
                e
            )),
        }
    }

    /// Returns `true` if the name is one of the reserved protocol parameter names
    #[must_use]
    pub fn is_oauth(&self) -> bool {
        names::is_oauth_name(&self.name)
    }

    /// The percent-encoded `name=value` form
    #[must_use]
    pub fn encoded(&self) -> String {
        format!(
            "{}={}",
            percent_encode(&self.name),
            percent_encode(&self.value)
        )
    }
}

impl PartialOrd for Parameter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Parameter {
    fn cmp(&self, other: &Self) -> Ordering {
        Parameter::compare(self, other)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded())
    }
}

impl<N, V> From<(N, V)> for Parameter
where
    N: Into<String>,
    V: Into<String>,
{
    fn from((name, value): (N, V)) -> Self {
        Parameter::new(name, value)
    }
}

impl From<&str> for Parameter {
    fn from(name: &str) -> Self {
        Parameter::new(name, String::new())
    }
}

impl From<String> for Parameter {
    fn from(name: String) -> Self {
        Parameter::new(name, String::new())
    }
}

//! Ordered, duplicate-tolerant collection of OAuth parameters.
//!
//! A [`ParameterList`] keeps [`Parameter`]s in insertion order until [`ParameterList::sort`] is
//! called. Several parameters may share a name; RFC 5849 requires every one of them to be
//! kept and ordered by value when the normalized parameter string is built.
//!
//! Besides positional storage, the list offers name-based access that understands the OAuth
//! naming convention. Reads accept protocol parameters by their bare suffix, so `token` finds
//! `oauth_token`, while a parameter stored under the literal name always takes precedence.
//!
//! # Examples
//!
//! ```rust
//! use oauth_params::ParameterList;
//!
//! let mut params = ParameterList::new();
//! params
//!     .set_multi([("consumer_key", "ck"), ("nonce", "n1"), ("custom", "v")])
//!     .add(("oauth_timestamp", "137131200"));
//!
//! assert_eq!(params.get("nonce"), Some("n1"));
//! assert_eq!(
//!     params.oauth_only().encoded(),
//!     "oauth_consumer_key=ck&oauth_nonce=n1&oauth_timestamp=137131200"
//! );
//! ```
//!
//! # Reference
//! - [RFC 5849 Section 3.4.1.3](https://www.rfc-editor.org/rfc/rfc5849#section-3.4.1.3)

use crate::{
    encoding::percent_decode,
    names::{OAuthParameter, SignatureMethod},
    Error, Parameter, Result,
};

/// An ordered multiset of [`Parameter`]s.
///
/// Lists produced by lookups ([`ParameterList::get_by_name`], [`ParameterList::oauth_only`],
/// [`ParameterList::remove_by_name`]) are independent containers holding copies; changing
/// them never touches the source list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ParameterList {
    parameters: Vec<Parameter>,
}

impl ParameterList {
    /// Creates an empty list
    #[must_use]
    pub fn new() -> Self {
        ParameterList {
            parameters: Vec::new(),
        }
    }

    /// Creates a list holding `parameters` in the given order
    #[must_use]
    pub fn with_parameters(parameters: Vec<Parameter>) -> Self {
        ParameterList { parameters }
    }

    /// Parses a `&`-separated, percent-encoded parameter string.
    ///
    /// Each segment is split on its first `=`; a segment without one yields a parameter with an
    /// empty value. Empty segments are skipped. Order and duplicates are preserved.
    ///
    /// ```rust
    /// use oauth_params::ParameterList;
    ///
    /// let params = ParameterList::from_encoded("b5=%3D%253D&a3=a&c%40=&a2=r%20b").unwrap();
    /// assert_eq!(params.len(), 4);
    /// assert_eq!(params.get("b5"), Some("=%3D"));
    /// assert_eq!(params.get("c@"), Some(""));
    /// ```
    ///
    /// # Errors
    /// Returns [`Error::Decode`] if a name or value decodes into invalid UTF-8.
    pub fn from_encoded(input: &str) -> Result<Self> {
        let mut list = ParameterList::new();

        for segment in input.split('&').filter(|segment| !segment.is_empty()) {
            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            list.add((percent_decode(name)?, percent_decode(value)?));
        }

        Ok(list)
    }

    /// Appends a parameter. Never deduplicates.
    ///
    /// Accepts a [`Parameter`], a `(name, value)` pair or a bare name, which is added with an
    /// empty value. The name is stored exactly as given.
    pub fn add(&mut self, parameter: impl Into<Parameter>) -> &mut Self {
        self.parameters.push(parameter.into());
        self
    }

    /// Sets several parameters at once.
    ///
    /// Each name is first resolved to its protocol form (`nonce` becomes `oauth_nonce`), then
    /// handled like [`ParameterList::set`]: an existing parameter is updated in place, otherwise
    /// a new one is added under the resolved name. Input order is preserved.
    pub fn set_multi<I, N, V>(&mut self, parameters: I) -> &mut Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in parameters {
            let name = Parameter::prefixed_name(name.as_ref());
            log::trace!("setting parameter '{}'", name);
            self.set(name, value);
        }

        self
    }

    /// Returns every parameter named exactly `name`, sorted. No prefix resolution is applied.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> ParameterList {
        let mut list: ParameterList = self
            .parameters
            .iter()
            .filter(|parameter| parameter.name() == name)
            .cloned()
            .collect();

        list.sort();
        list
    }

    /// Returns the first parameter named exactly `name` in sorted order, i.e. the one with the
    /// smallest value
    #[must_use]
    pub fn get_first_by_name(&self, name: &str) -> Option<&Parameter> {
        self.first_index(name).map(|index| &self.parameters[index])
    }

    /// Removes every parameter named exactly `name` and returns them, sorted.
    pub fn remove_by_name(&mut self, name: &str) -> ParameterList {
        let mut removed = ParameterList::new();

        let mut index = 0;
        while index < self.parameters.len() {
            if self.parameters[index].name() == name {
                removed.add(self.parameters.remove(index));
            } else {
                index += 1;
            }
        }

        if !removed.is_empty() {
            log::trace!("removed {} parameter(s) named '{}'", removed.len(), name);
        }

        removed.sort();
        removed
    }

    /// Returns the protocol parameters of this list, sorted. The list itself is unchanged.
    #[must_use]
    pub fn oauth_only(&self) -> ParameterList {
        let mut list: ParameterList = self
            .parameters
            .iter()
            .filter(|parameter| parameter.is_oauth())
            .cloned()
            .collect();

        list.sort();
        list
    }

    /// Sorts the list by name, then value, as required for the normalized parameter string
    pub fn sort(&mut self) -> &mut Self {
        self.parameters.sort_by(Parameter::compare);
        self
    }

    /// Looks up the value of a parameter by name.
    ///
    /// The lookup tries, in order:
    /// 1. the name as given
    /// 2. its protocol form, so `token` finds `oauth_token`
    /// 3. the bare suffix of a protocol name, so `oauth_token` finds `token`
    ///
    /// Among parameters sharing the matched name, the one with the smallest value is used.
    ///
    /// ```rust
    /// use oauth_params::ParameterList;
    ///
    /// let mut params = ParameterList::new();
    /// params.add(("oauth_token", "T1"));
    /// assert_eq!(params.get("token"), Some("T1"));
    /// assert_eq!(params.get("oauth_token"), Some("T1"));
    ///
    /// params.add(("token", "T2"));
    /// assert_eq!(params.get("token"), Some("T2"));
    /// assert_eq!(params.get("missing"), None);
    /// ```
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.resolve(name)
            .map(|index| self.parameters[index].value())
    }

    /// Sets the value of a parameter by name.
    ///
    /// An existing parameter is looked up by the name as given, then by its protocol form, and
    /// updated in place. Unlike [`ParameterList::get`], a protocol name never matches a bare
    /// entry, so `set("oauth_token", ..)` leaves an application parameter `token` alone.
    /// Otherwise a new parameter is added under `name` exactly as given; no protocol prefix is
    /// added. Use [`ParameterList::set_multi`] for prefix-aware insertion.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        match self.resolve_for_write(name) {
            Some(index) => {
                self.parameters[index].set_value(value);
            }
            None => {
                self.add(Parameter::new(name, value));
            }
        }

        self
    }

    /// Returns `true` if [`ParameterList::get`] would find a value for `name`
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes every parameter named like the protocol form of `name` and returns them, sorted.
    ///
    /// Unlike [`ParameterList::set`], this always resolves the prefix: `delete("token")`
    /// removes `oauth_token` entries, not `token` entries.
    pub fn delete(&mut self, name: &str) -> ParameterList {
        self.remove_by_name(Parameter::prefixed_name(name))
    }

    /// Returns the `oauth_signature_method` of this list.
    ///
    /// Falls back to `HMAC-SHA1` when the list carries no signature method.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedSignatureMethod`] for an unknown method.
    pub fn signature_method(&self) -> Result<SignatureMethod> {
        match self.get(OAuthParameter::SignatureMethod.name()) {
            Some(method) => method
                .parse()
                .map_err(|_| Error::UnsupportedSignatureMethod(method.to_string())),
            None => {
                log::debug!(
                    "no signature method present, assuming {}",
                    SignatureMethod::default()
                );
                Ok(SignatureMethod::default())
            }
        }
    }

    /// Joins the encoded form of every parameter with `&`, in current order.
    ///
    /// On a sorted list this is the normalized parameter string of RFC 5849 Section 3.4.1.3.2.
    #[must_use]
    pub fn encoded(&self) -> String {
        self.parameters
            .iter()
            .map(Parameter::encoded)
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Returns the number of parameters, duplicates included
    #[must_use]
    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    /// Returns `true` if the list holds no parameters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Iterates the parameters in current order
    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.parameters.iter()
    }

    /// Iterates the parameters mutably in current order
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Parameter> {
        self.parameters.iter_mut()
    }

    /// Returns the parameters as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Parameter] {
        &self.parameters
    }

    fn first_index(&self, name: &str) -> Option<usize> {
        self.parameters
            .iter()
            .enumerate()
            .filter(|(_, parameter)| parameter.name() == name)
            .min_by(|(_, a), (_, b)| Parameter::compare(a, b))
            .map(|(index, _)| index)
    }

    fn resolve_for_write(&self, name: &str) -> Option<usize> {
        self.first_index(name)
            .or_else(|| self.first_index(Parameter::prefixed_name(name)))
    }

    fn resolve(&self, name: &str) -> Option<usize> {
        self.resolve_for_write(name).or_else(|| {
            OAuthParameter::from_name(name).and_then(|param| self.first_index(param.suffix()))
        })
    }
}

impl From<Vec<Parameter>> for ParameterList {
    fn from(parameters: Vec<Parameter>) -> Self {
        ParameterList::with_parameters(parameters)
    }
}

impl FromIterator<Parameter> for ParameterList {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        ParameterList {
            parameters: iter.into_iter().collect(),
        }
    }
}

impl Extend<Parameter> for ParameterList {
    fn extend<I: IntoIterator<Item = Parameter>>(&mut self, iter: I) {
        self.parameters.extend(iter);
    }
}

impl IntoIterator for ParameterList {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter()
    }
}

impl<'a> IntoIterator for &'a mut ParameterList {
    type Item = &'a mut Parameter;
    type IntoIter = std::slice::IterMut<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.parameters.iter_mut()
    }
}

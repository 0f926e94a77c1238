// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # oauth-params
//!
//! The parameter model of OAuth 1.0 ([RFC 5849](https://www.rfc-editor.org/rfc/rfc5849)):
//! an ordered collection of name/value pairs that is normalized, sorted and percent-encoded
//! exactly as the OAuth signing algorithm requires.
//!
//! Signature methods, HTTP transport and consumer/provider workflows are left to the caller.
//! This crate produces the inputs they depend on: the normalized parameter string for the
//! signature base string, and the sorted protocol parameters for the `Authorization` header.
//!
//! ## Quick Start
//!
//! ```rust
//! use oauth_params::prelude::*;
//!
//! let mut params = ParameterList::new();
//! params.set_multi([
//!     ("consumer_key", "dpf43f3p2l4k3l03"),
//!     ("nonce", "kllo9940pd9333jh"),
//!     ("file", "vacation.jpg"),
//! ]);
//!
//! // Protocol parameters only, for the Authorization header
//! assert_eq!(
//!     params.oauth_only().encoded(),
//!     "oauth_consumer_key=dpf43f3p2l4k3l03&oauth_nonce=kllo9940pd9333jh"
//! );
//!
//! // Everything, sorted, for the signature base string
//! assert_eq!(
//!     params.sort().encoded(),
//!     "file=vacation.jpg&oauth_consumer_key=dpf43f3p2l4k3l03&oauth_nonce=kllo9940pd9333jh"
//! );
//! # Ok::<(), oauth_params::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`names`] - The reserved protocol parameter names and signature methods
//! - [`encoding`] - RFC 3986 percent-encoding
//! - [`Parameter`] - A single name/value pair with its sort order and encoded form
//! - [`ParameterList`] - The ordered, duplicate-tolerant collection
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Naming
//!
//! Protocol parameters may be addressed without their `oauth_` prefix. Reads through
//! [`ParameterList::get`] fall back to the prefixed name, [`ParameterList::set_multi`] stores
//! under the prefixed name, while [`ParameterList::add`] and [`ParameterList::set`] keep the
//! name exactly as given.
//!
//! ## Error Handling
//!
//! Lookups never fail; they return `None` or an empty list. Errors only come from turning raw
//! input into text:
//!
//! ```rust
//! use oauth_params::{Error, ParameterList};
//!
//! match ParameterList::from_encoded("oauth_token=%FF") {
//!     Ok(params) => println!("{} parameters", params.len()),
//!     Err(Error::Decode(input)) => println!("Not UTF-8: {}", input),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```
//!
//! ## Features
//!
//! - `serde` - `Serialize`/`Deserialize` for [`Parameter`] and [`ParameterList`]
#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types.
///
/// ```rust
/// use oauth_params::prelude::*;
///
/// let mut params = ParameterList::new();
/// params.add(Parameter::new("oauth_version", "1.0"));
/// assert_eq!(params.signature_method()?, SignatureMethod::HmacSha1);
/// # Ok::<(), oauth_params::Error>(())
/// ```
pub mod prelude;

/// RFC 3986 percent-encoding and decoding, as mandated by RFC 5849 Section 3.6.
pub mod encoding;

/// The reserved `oauth_` parameter names and the signature methods of RFC 5849.
pub mod names;

mod parameter;
mod parameterlist;

/// `oauth-params` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `oauth-params` Error type
///
/// Only raw-input conversions return errors; lookups report absence through `Option`.
pub use error::Error;

/// A single OAuth name/value pair.
pub use parameter::Parameter;

/// The ordered collection of OAuth parameters.
pub use parameterlist::ParameterList;

/// Reserved protocol parameter names and signature methods.
pub use names::{OAuthParameter, SignatureMethod};

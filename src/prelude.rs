//! # oauth-params Prelude
//!
//! This module provides a convenient prelude for the most commonly used types of the
//! oauth-params library. Import this module to get quick access to everything needed to
//! assemble and normalize OAuth request parameters.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all oauth-params operations
pub use crate::Error;

/// The result type used throughout oauth-params
pub use crate::Result;

// ================================================================================================
// Parameters
// ================================================================================================

/// A single name/value pair
pub use crate::Parameter;

/// The ordered parameter collection
pub use crate::ParameterList;

// ================================================================================================
// Protocol Names
// ================================================================================================

/// Reserved protocol parameter names and signature methods
pub use crate::names::{is_oauth_name, prefixed_name, OAuthParameter, SignatureMethod};

/// Percent-encoding used for every parameter on the wire
pub use crate::encoding::{percent_decode, percent_encode};

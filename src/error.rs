use thiserror::Error;

macro_rules! invalid_argument {
    // Single string version
    ($msg:expr) => {
        crate::Error::InvalidArgument {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidArgument {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Most operations of this crate are total: lookups that find nothing return `None` or an empty
/// [`crate::ParameterList`] instead of failing. Errors only surface at the boundaries where raw
/// input is turned into text.
///
/// # Error Categories
///
/// - [`Error::InvalidArgument`] - A name or value could not be represented as text
/// - [`Error::Decode`] - A percent-encoded sequence decoded into invalid UTF-8
/// - [`Error::UnsupportedSignatureMethod`] - `oauth_signature_method` holds an unknown method
///
/// # Examples
///
/// ```rust
/// use oauth_params::{Error, Parameter};
///
/// match Parameter::from_raw(b"oauth_nonce", &[0xff, 0xfe]) {
///     Ok(parameter) => println!("{}", parameter),
///     Err(Error::InvalidArgument { message, .. }) => eprintln!("Rejected: {}", message),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A name or value handed to a conversion boundary is not text.
    ///
    /// Signature computation depends on the exact bytes of every parameter, so input that is
    /// not valid UTF-8 is rejected instead of being coerced. The error includes the source
    /// location where the conversion was attempted.
    ///
    /// # Fields
    ///
    /// * `message` - Description of the rejected input
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Invalid argument - {file}:{line}: {message}")]
    InvalidArgument {
        /// The message to be printed for the InvalidArgument error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Percent-decoding produced bytes that are not valid UTF-8.
    ///
    /// The associated value is the encoded input that failed to decode.
    #[error("Failed to decode percent-encoded input - {0}")]
    Decode(String),

    /// The `oauth_signature_method` parameter names a method this crate does not know.
    #[error("Unsupported signature method - {0}")]
    UnsupportedSignatureMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_captures_location() {
        let err = invalid_argument!("value for '{}' is not text", "oauth_nonce");
        match err {
            Error::InvalidArgument {
                message,
                file,
                line,
            } => {
                assert_eq!(message, "value for 'oauth_nonce' is not text");
                assert!(file.ends_with("error.rs"));
                assert!(line > 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn display_messages() {
        let err = Error::Decode("%ff".to_string());
        assert_eq!(err.to_string(), "Failed to decode percent-encoded input - %ff");

        let err = Error::UnsupportedSignatureMethod("MD5".to_string());
        assert_eq!(err.to_string(), "Unsupported signature method - MD5");

        let err = invalid_argument!("bad");
        assert!(err.to_string().starts_with("Invalid argument - "));
        assert!(err.to_string().ends_with(": bad"));
    }
}

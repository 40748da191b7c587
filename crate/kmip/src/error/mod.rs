use std::num::TryFromIntError;

use thiserror::Error;

pub(crate) mod result;

#[derive(Error, Debug)]
pub enum KmipError {
    /// Malformed input: short buffers, wrong tag length, bad literals
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Accessor used on the wrong kind of TTLV record
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The item exists but is not valid under the requested protocol version
    #[error("Not supported for KMIP spec {spec}: {item}")]
    NotSupportedForSpec { spec: String, item: String },

    /// No registered mapping for a tag, description, code or version pair
    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Invalid registration: {0}")]
    InvalidRegistration(String),

    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("XML error: {0}")]
    Xml(String),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl KmipError {
    /// True for both "does not exist" and "exists but not for this spec".
    ///
    /// Callers that only care whether a lookup produced something use this
    /// instead of matching both variants.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UnknownIdentifier(_) | Self::NotSupportedForSpec { .. }
        )
    }

    pub(crate) fn not_supported(spec: impl ToString, item: impl ToString) -> Self {
        Self::NotSupportedForSpec {
            spec: spec.to_string(),
            item: item.to_string(),
        }
    }
}

impl From<TryFromIntError> for KmipError {
    fn from(e: TryFromIntError) -> Self {
        Self::InvalidArgument(e.to_string())
    }
}

impl From<std::string::FromUtf8Error> for KmipError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        Self::InvalidArgument(format!("invalid UTF-8 text: {e}"))
    }
}

impl From<hex::FromHexError> for KmipError {
    fn from(e: hex::FromHexError) -> Self {
        Self::InvalidArgument(format!("invalid hex: {e}"))
    }
}

impl From<time::error::ComponentRange> for KmipError {
    fn from(e: time::error::ComponentRange) -> Self {
        Self::InvalidArgument(format!("invalid date time: {e}"))
    }
}

impl From<quick_xml::Error> for KmipError {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for KmipError {
    fn from(e: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(e.to_string())
    }
}

/// Construct an `InvalidArgument` error from a format string.
#[macro_export]
macro_rules! kmip_error {
    ($msg:literal) => {
        $crate::KmipError::InvalidArgument(::core::format_args!($msg).to_string())
    };
    ($err:expr $(,)?) => ({
        $crate::KmipError::InvalidArgument($err.to_string())
    });
    ($fmt:expr, $($arg:tt)*) => {
        $crate::KmipError::InvalidArgument(::std::format!($fmt, $($arg)*))
    };
}

/// Return early with an `InvalidArgument` error.
#[macro_export]
macro_rules! kmip_bail {
    ($msg:literal) => {
        return ::core::result::Result::Err($crate::kmip_error!($msg))
    };
    ($err:expr $(,)?) => {
        return ::core::result::Result::Err($err)
    };
    ($fmt:expr, $($arg:tt)*) => {
        return ::core::result::Result::Err($crate::kmip_error!($fmt, $($arg)*))
    };
}

/// Return early with an `InvalidArgument` error if a condition is not satisfied.
#[macro_export]
macro_rules! kmip_ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err($crate::kmip_error!($msg));
        }
    };
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return ::core::result::Result::Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return ::core::result::Result::Err($crate::kmip_error!($fmt, $($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::KmipError;

    #[test]
    fn error_macros() {
        let err = kmip_error!("short buffer");
        assert_eq!(format!("{err}"), "Invalid argument: short buffer");

        let err = kmip_error!("expected {} bytes", 8);
        assert_eq!(format!("{err}"), "Invalid argument: expected 8 bytes");

        let res: Result<(), KmipError> = (|| {
            kmip_ensure!(1 + 1 == 3, "math is broken: {}", 2);
            Ok(())
        })();
        assert!(matches!(res, Err(KmipError::InvalidArgument(_))));

        let res: Result<(), KmipError> = (|| {
            kmip_bail!(KmipError::InvalidState("not a structure".to_owned()))
        })();
        assert!(matches!(res, Err(KmipError::InvalidState(_))));
    }

    #[test]
    fn not_found_covers_both_lookup_failures() {
        assert!(KmipError::UnknownIdentifier("0x420000".to_owned()).is_not_found());
        assert!(KmipError::not_supported("V1.2", "ProtocolVersion").is_not_found());
        assert!(!KmipError::TypeMismatch("Integer".to_owned()).is_not_found());
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator};

use crate::{KmipError, error::result::KmipResult};

/// The ten KMIP primitive wire types.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum EncodingType {
    Structure = 0x01,
    Integer = 0x02,
    LongInteger = 0x03,
    BigInteger = 0x04,
    Enumeration = 0x05,
    Boolean = 0x06,
    TextString = 0x07,
    ByteString = 0x08,
    DateTime = 0x09,
    Interval = 0x0A,
}

/// Raw size marker of variable length encodings
pub const VARIABLE_LENGTH: i32 = -1;

impl EncodingType {
    #[must_use]
    #[allow(clippy::as_conversions)]
    // This conversion is idiomatic for items marked with #[repr(u8)]
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> KmipResult<Self> {
        Self::iter()
            .find(|encoding_type| encoding_type.code() == code)
            .ok_or_else(|| KmipError::UnknownIdentifier(format!("encoding type code 0x{code:02X}")))
    }

    /// Textual name used by the JSON and XML `type` field.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Structure => "Structure",
            Self::Integer => "Integer",
            Self::LongInteger => "LongInteger",
            Self::BigInteger => "BigInteger",
            Self::Enumeration => "Enumeration",
            Self::Boolean => "Boolean",
            Self::TextString => "TextString",
            Self::ByteString => "ByteString",
            Self::DateTime => "DateTime",
            Self::Interval => "Interval",
        }
    }

    pub fn from_description(description: &str) -> KmipResult<Self> {
        description
            .parse()
            .map_err(|_e| KmipError::UnknownIdentifier(format!("encoding type {description}")))
    }

    /// Value size in bytes on the wire, `VARIABLE_LENGTH` when not fixed.
    #[must_use]
    pub const fn raw_size(self) -> i32 {
        match self {
            Self::Integer | Self::Enumeration | Self::Interval => 4,
            Self::LongInteger | Self::Boolean | Self::DateTime => 8,
            Self::Structure | Self::BigInteger | Self::TextString | Self::ByteString => {
                VARIABLE_LENGTH
            }
        }
    }

    #[must_use]
    pub const fn is_fixed_length(self) -> bool {
        self.raw_size() != VARIABLE_LENGTH
    }
}

impl fmt::Display for EncodingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

impl TryFrom<u8> for EncodingType {
    type Error = KmipError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_code(value)
    }
}

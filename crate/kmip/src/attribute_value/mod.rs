//! One canonical native representation for primitive KMIP values, shared by
//! the TTLV, JSON and XML bindings.

mod value_format;

use num_bigint_dig::BigInt;
use serde::Serialize;
use time::OffsetDateTime;
use tracing::trace;
pub use value_format::{JsonFormat, TtlvFormat, ValueFormat, XmlFormat};

use crate::{EncodingType, KmipError, error::result::KmipResult, ttlv::KmipBigInt};

/// The native shapes a primitive KMIP value can take.
#[derive(Debug, Clone, Eq)]
pub enum NativeValue {
    Int32(i32),
    Int64(i64),
    BigInt(KmipBigInt),
    Bool(bool),
    Text(String),
    Bytes(Vec<u8>),
    DateTime(OffsetDateTime),
}

impl NativeValue {
    #[must_use]
    pub const fn shape(&self) -> &'static str {
        match self {
            Self::Int32(_) => "32-bit integer",
            Self::Int64(_) => "64-bit integer",
            Self::BigInt(_) => "big integer",
            Self::Bool(_) => "boolean",
            Self::Text(_) => "string",
            Self::Bytes(_) => "byte sequence",
            Self::DateTime(_) => "date time",
        }
    }

    /// The encoding inferred from the shape alone
    #[must_use]
    pub const fn inferred_encoding(&self) -> EncodingType {
        match self {
            Self::Int32(_) => EncodingType::Integer,
            Self::Int64(_) => EncodingType::LongInteger,
            Self::BigInt(_) => EncodingType::BigInteger,
            Self::Bool(_) => EncodingType::Boolean,
            Self::Text(_) => EncodingType::TextString,
            Self::Bytes(_) => EncodingType::ByteString,
            Self::DateTime(_) => EncodingType::DateTime,
        }
    }

    /// Whether this shape may be carried by `encoding_type`.
    #[must_use]
    pub const fn fits(&self, encoding_type: EncodingType) -> bool {
        matches!(
            (encoding_type, self),
            (
                EncodingType::Integer | EncodingType::Enumeration | EncodingType::Interval,
                Self::Int32(_)
            ) | (EncodingType::LongInteger, Self::Int64(_))
                | (EncodingType::BigInteger, Self::BigInt(_))
                | (EncodingType::Boolean, Self::Bool(_))
                | (EncodingType::TextString, Self::Text(_))
                | (EncodingType::ByteString, Self::Bytes(_))
                | (EncodingType::DateTime, Self::DateTime(_))
        )
    }
}

/// Date times travel with one second precision on the wire,
/// so they compare at that precision.
impl PartialEq for NativeValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int32(l), Self::Int32(r)) => l == r,
            (Self::Int64(l), Self::Int64(r)) => l == r,
            (Self::BigInt(l), Self::BigInt(r)) => l == r,
            (Self::Bool(l), Self::Bool(r)) => l == r,
            (Self::Text(l), Self::Text(r)) => l == r,
            (Self::Bytes(l), Self::Bytes(r)) => l == r,
            (Self::DateTime(l), Self::DateTime(r)) => l.unix_timestamp() == r.unix_timestamp(),
            (_, _) => false,
        }
    }
}

impl From<i32> for NativeValue {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<i64> for NativeValue {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<KmipBigInt> for NativeValue {
    fn from(v: KmipBigInt) -> Self {
        Self::BigInt(v)
    }
}

impl From<BigInt> for NativeValue {
    fn from(v: BigInt) -> Self {
        Self::BigInt(v.into())
    }
}

impl From<bool> for NativeValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for NativeValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for NativeValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<Vec<u8>> for NativeValue {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(v)
    }
}

impl From<&[u8]> for NativeValue {
    fn from(v: &[u8]) -> Self {
        Self::Bytes(v.to_vec())
    }
}

impl From<OffsetDateTime> for NativeValue {
    fn from(v: OffsetDateTime) -> Self {
        Self::DateTime(v)
    }
}

/// An immutable pairing of one `EncodingType` with one native value.
///
/// The pairing is checked at construction; a `Structure` encoding is never
/// a valid attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeValue {
    encoding_type: EncodingType,
    value: NativeValue,
}

impl AttributeValue {
    pub fn new(encoding_type: EncodingType, value: impl Into<NativeValue>) -> KmipResult<Self> {
        let value = value.into();
        if !value.fits(encoding_type) {
            return Err(KmipError::TypeMismatch(format!(
                "a {} cannot be encoded as {encoding_type}",
                value.shape()
            )));
        }
        Ok(Self {
            encoding_type,
            value,
        })
    }

    /// Infer the encoding from the native shape.
    pub fn of(value: impl Into<NativeValue>) -> Self {
        let value = value.into();
        Self {
            encoding_type: value.inferred_encoding(),
            value,
        }
    }

    /// Store any serializable value as its JSON text in a `TextString`.
    ///
    /// Used by attributes whose native form is an arbitrary nested structure.
    pub fn of_serializable<T: Serialize + ?Sized>(value: &T) -> KmipResult<Self> {
        let text = serde_json::to_string(value)?;
        Ok(Self::text_string(text))
    }

    #[must_use]
    pub const fn integer(value: i32) -> Self {
        Self {
            encoding_type: EncodingType::Integer,
            value: NativeValue::Int32(value),
        }
    }

    #[must_use]
    pub const fn long_integer(value: i64) -> Self {
        Self {
            encoding_type: EncodingType::LongInteger,
            value: NativeValue::Int64(value),
        }
    }

    pub fn big_integer(value: impl Into<KmipBigInt>) -> Self {
        Self {
            encoding_type: EncodingType::BigInteger,
            value: NativeValue::BigInt(value.into()),
        }
    }

    /// Enumeration values are unsigned on the wire; they are kept bit for bit.
    #[must_use]
    pub const fn enumeration(value: u32) -> Self {
        Self {
            encoding_type: EncodingType::Enumeration,
            value: NativeValue::Int32(i32::from_be_bytes(value.to_be_bytes())),
        }
    }

    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self {
            encoding_type: EncodingType::Boolean,
            value: NativeValue::Bool(value),
        }
    }

    pub fn text_string(value: impl Into<String>) -> Self {
        Self {
            encoding_type: EncodingType::TextString,
            value: NativeValue::Text(value.into()),
        }
    }

    pub fn byte_string(value: impl Into<Vec<u8>>) -> Self {
        Self {
            encoding_type: EncodingType::ByteString,
            value: NativeValue::Bytes(value.into()),
        }
    }

    #[must_use]
    pub const fn date_time(value: OffsetDateTime) -> Self {
        Self {
            encoding_type: EncodingType::DateTime,
            value: NativeValue::DateTime(value),
        }
    }

    /// An interval in seconds, kept bit for bit like enumerations.
    #[must_use]
    pub const fn interval(seconds: u32) -> Self {
        Self {
            encoding_type: EncodingType::Interval,
            value: NativeValue::Int32(i32::from_be_bytes(seconds.to_be_bytes())),
        }
    }

    #[must_use]
    pub const fn encoding_type(&self) -> EncodingType {
        self.encoding_type
    }

    #[must_use]
    pub const fn value(&self) -> &NativeValue {
        &self.value
    }

    #[must_use]
    pub fn into_native(self) -> NativeValue {
        self.value
    }

    fn mismatch(&self, expected: &str) -> KmipError {
        KmipError::TypeMismatch(format!(
            "expected a {expected}, found a {} ({})",
            self.value.shape(),
            self.encoding_type
        ))
    }

    pub fn as_i32(&self) -> KmipResult<i32> {
        match self.value {
            NativeValue::Int32(v) => Ok(v),
            _ => Err(self.mismatch("32-bit integer")),
        }
    }

    /// The unsigned value of an Enumeration or Interval.
    pub fn as_u32(&self) -> KmipResult<u32> {
        self.as_i32().map(|v| u32::from_be_bytes(v.to_be_bytes()))
    }

    pub fn as_i64(&self) -> KmipResult<i64> {
        match self.value {
            NativeValue::Int64(v) => Ok(v),
            _ => Err(self.mismatch("64-bit integer")),
        }
    }

    pub fn as_big_int(&self) -> KmipResult<&KmipBigInt> {
        match &self.value {
            NativeValue::BigInt(v) => Ok(v),
            _ => Err(self.mismatch("big integer")),
        }
    }

    pub fn as_bool(&self) -> KmipResult<bool> {
        match self.value {
            NativeValue::Bool(v) => Ok(v),
            _ => Err(self.mismatch("boolean")),
        }
    }

    pub fn as_text(&self) -> KmipResult<&str> {
        match &self.value {
            NativeValue::Text(v) => Ok(v),
            _ => Err(self.mismatch("string")),
        }
    }

    pub fn as_bytes(&self) -> KmipResult<&[u8]> {
        match &self.value {
            NativeValue::Bytes(v) => Ok(v),
            _ => Err(self.mismatch("byte sequence")),
        }
    }

    pub fn as_date_time(&self) -> KmipResult<OffsetDateTime> {
        match self.value {
            NativeValue::DateTime(v) => Ok(v),
            _ => Err(self.mismatch("date time")),
        }
    }

    /// Render the value in the representation of format `F`.
    pub fn encode<F: ValueFormat>(&self) -> KmipResult<F::Owned> {
        trace!("encoding {} as {}", self.encoding_type, F::NAME);
        if matches!(
            self.encoding_type,
            EncodingType::Enumeration | EncodingType::Interval
        ) {
            return F::write_u32(self.as_u32()?);
        }
        match &self.value {
            NativeValue::Int32(v) => F::write_i32(*v),
            NativeValue::Int64(v) => F::write_i64(*v),
            NativeValue::BigInt(v) => F::write_big_int(v),
            NativeValue::Bool(v) => F::write_bool(*v),
            NativeValue::Text(v) => F::write_text(v),
            NativeValue::Bytes(v) => F::write_bytes(v),
            NativeValue::DateTime(v) => F::write_date_time(*v),
        }
    }

    /// Parse the representation of a value declared with `encoding_type`.
    ///
    /// Every format goes through this one dispatch, so each encoding maps to
    /// exactly one native shape whatever the source.
    pub fn decode<F: ValueFormat>(encoding_type: EncodingType, repr: &F::Repr) -> KmipResult<Self> {
        trace!("decoding {encoding_type} from {}", F::NAME);
        let value = match encoding_type {
            EncodingType::Integer => NativeValue::Int32(F::read_i32(repr)?),
            EncodingType::Enumeration | EncodingType::Interval => {
                NativeValue::Int32(i32::from_be_bytes(F::read_u32(repr)?.to_be_bytes()))
            }
            EncodingType::LongInteger => NativeValue::Int64(F::read_i64(repr)?),
            EncodingType::BigInteger => NativeValue::BigInt(F::read_big_int(repr)?),
            EncodingType::Boolean => NativeValue::Bool(F::read_bool(repr)?),
            EncodingType::TextString => NativeValue::Text(F::read_text(repr)?),
            EncodingType::ByteString => NativeValue::Bytes(F::read_bytes(repr)?),
            EncodingType::DateTime => NativeValue::DateTime(F::read_date_time(repr)?),
            EncodingType::Structure => {
                return Err(KmipError::UnsupportedEncoding(format!(
                    "{encoding_type} is not a primitive {} value",
                    F::NAME
                )));
            }
        };
        Ok(Self {
            encoding_type,
            value,
        })
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use serde::Serialize;
    use time::macros::datetime;

    use super::{AttributeValue, NativeValue};
    use crate::{EncodingType, KmipError, ttlv::KmipBigInt};

    #[test]
    fn construction_validates_the_pairing() {
        assert!(AttributeValue::new(EncodingType::Integer, 5_i32).is_ok());
        assert!(AttributeValue::new(EncodingType::Enumeration, 5_i32).is_ok());
        assert!(AttributeValue::new(EncodingType::Interval, 5_i32).is_ok());
        assert!(AttributeValue::new(EncodingType::DateTime, datetime!(2024-01-01 0:00 UTC)).is_ok());

        for (encoding_type, value) in [
            (EncodingType::Integer, NativeValue::Int64(5)),
            (EncodingType::LongInteger, NativeValue::Int32(5)),
            (EncodingType::Boolean, NativeValue::Text("true".to_owned())),
            (EncodingType::ByteString, NativeValue::Text("00".to_owned())),
            (EncodingType::TextString, NativeValue::Bytes(vec![0])),
            (EncodingType::Structure, NativeValue::Bytes(vec![])),
        ] {
            assert!(matches!(
                AttributeValue::new(encoding_type, value),
                Err(KmipError::TypeMismatch(_))
            ));
        }
    }

    #[test]
    fn of_infers_the_encoding() {
        assert_eq!(AttributeValue::of(1_i32).encoding_type(), EncodingType::Integer);
        assert_eq!(AttributeValue::of(1_i64).encoding_type(), EncodingType::LongInteger);
        assert_eq!(
            AttributeValue::of(KmipBigInt::from(1_i64)).encoding_type(),
            EncodingType::BigInteger
        );
        assert_eq!(AttributeValue::of(true).encoding_type(), EncodingType::Boolean);
        assert_eq!(AttributeValue::of("group").encoding_type(), EncodingType::TextString);
        assert_eq!(AttributeValue::of(vec![1_u8, 2]).encoding_type(), EncodingType::ByteString);
        assert_eq!(
            AttributeValue::of(datetime!(2024-01-01 0:00 UTC)).encoding_type(),
            EncodingType::DateTime
        );
    }

    #[test]
    fn of_serializable_falls_back_to_text() {
        #[derive(Serialize)]
        struct Link {
            link_type: u32,
            target: &'static str,
        }
        let value = AttributeValue::of_serializable(&Link {
            link_type: 0x0101,
            target: "uid-1",
        })
        .unwrap();
        assert_eq!(value.encoding_type(), EncodingType::TextString);
        assert_eq!(value.as_text().unwrap(), r#"{"link_type":257,"target":"uid-1"}"#);
    }

    #[test]
    fn unsigned_wrappers_keep_their_bits() {
        let extension = AttributeValue::enumeration(0x8000_0001);
        assert_eq!(extension.as_u32().unwrap(), 0x8000_0001);
        assert!(extension.as_i32().unwrap() < 0);
        assert_eq!(AttributeValue::interval(86_400).as_u32().unwrap(), 86_400);
    }

    #[test]
    fn accessors_report_mismatches() {
        let value = AttributeValue::text_string("abc");
        assert!(matches!(value.as_i32(), Err(KmipError::TypeMismatch(_))));
        assert!(value.as_bytes().is_err());
        assert_eq!(value.as_text().unwrap(), "abc");
    }

    #[test]
    fn date_times_compare_to_the_second() {
        let a = AttributeValue::date_time(datetime!(2024-05-01 10:00:00.250 UTC));
        let b = AttributeValue::date_time(datetime!(2024-05-01 10:00:00.900 UTC));
        assert_eq!(a, b);
    }
}

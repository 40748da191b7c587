use serde_json::Value;
use time::{OffsetDateTime, format_description::well_known::Iso8601};

use crate::{KmipError, KmipResultHelper, error::result::KmipResult, ttlv::KmipBigInt};

/// The per-shape readers and writers of one serialization surface.
///
/// `AttributeValue::encode` and `AttributeValue::decode` own the dispatch on
/// the encoding type; a format only knows how to render each native shape.
pub trait ValueFormat {
    /// Borrowed representation consumed when decoding
    type Repr: ?Sized;
    /// Owned representation produced when encoding
    type Owned;
    const NAME: &'static str;

    fn read_i32(repr: &Self::Repr) -> KmipResult<i32>;
    /// Enumerations and Intervals
    fn read_u32(repr: &Self::Repr) -> KmipResult<u32>;
    fn read_i64(repr: &Self::Repr) -> KmipResult<i64>;
    fn read_big_int(repr: &Self::Repr) -> KmipResult<KmipBigInt>;
    fn read_bool(repr: &Self::Repr) -> KmipResult<bool>;
    fn read_text(repr: &Self::Repr) -> KmipResult<String>;
    fn read_bytes(repr: &Self::Repr) -> KmipResult<Vec<u8>>;
    fn read_date_time(repr: &Self::Repr) -> KmipResult<OffsetDateTime>;

    fn write_i32(v: i32) -> KmipResult<Self::Owned>;
    fn write_u32(v: u32) -> KmipResult<Self::Owned>;
    fn write_i64(v: i64) -> KmipResult<Self::Owned>;
    fn write_big_int(v: &KmipBigInt) -> KmipResult<Self::Owned>;
    fn write_bool(v: bool) -> KmipResult<Self::Owned>;
    fn write_text(v: &str) -> KmipResult<Self::Owned>;
    fn write_bytes(v: &[u8]) -> KmipResult<Self::Owned>;
    fn write_date_time(v: OffsetDateTime) -> KmipResult<Self::Owned>;
}

fn fixed<const N: usize>(repr: &[u8], what: &str) -> KmipResult<[u8; N]> {
    <[u8; N]>::try_from(repr).map_err(|_e| {
        KmipError::InvalidArgument(format!(
            "{what} values are {N} bytes long, got {} bytes",
            repr.len()
        ))
    })
}

/// Unpadded TTLV value bytes.
pub struct TtlvFormat;

impl ValueFormat for TtlvFormat {
    type Owned = Vec<u8>;
    type Repr = [u8];

    const NAME: &'static str = "TTLV";

    fn read_i32(repr: &[u8]) -> KmipResult<i32> {
        Ok(i32::from_be_bytes(fixed::<4>(repr, "Integer")?))
    }

    fn read_u32(repr: &[u8]) -> KmipResult<u32> {
        Ok(u32::from_be_bytes(fixed::<4>(repr, "Enumeration")?))
    }

    fn read_i64(repr: &[u8]) -> KmipResult<i64> {
        Ok(i64::from_be_bytes(fixed::<8>(repr, "LongInteger")?))
    }

    fn read_big_int(repr: &[u8]) -> KmipResult<KmipBigInt> {
        if repr.is_empty() || repr.len() % 8 != 0 {
            return Err(KmipError::InvalidArgument(format!(
                "BigInteger values are a non-empty multiple of 8 bytes, got {} bytes",
                repr.len()
            )));
        }
        Ok(KmipBigInt::from_bytes_be(repr))
    }

    fn read_bool(repr: &[u8]) -> KmipResult<bool> {
        match u64::from_be_bytes(fixed::<8>(repr, "Boolean")?) {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(KmipError::InvalidArgument(format!(
                "invalid Boolean value: 0x{other:016X}"
            ))),
        }
    }

    fn read_text(repr: &[u8]) -> KmipResult<String> {
        Ok(String::from_utf8(repr.to_vec())?)
    }

    fn read_bytes(repr: &[u8]) -> KmipResult<Vec<u8>> {
        Ok(repr.to_vec())
    }

    fn read_date_time(repr: &[u8]) -> KmipResult<OffsetDateTime> {
        let timestamp = i64::from_be_bytes(fixed::<8>(repr, "DateTime")?);
        Ok(OffsetDateTime::from_unix_timestamp(timestamp)?)
    }

    fn write_i32(v: i32) -> KmipResult<Vec<u8>> {
        Ok(v.to_be_bytes().to_vec())
    }

    fn write_u32(v: u32) -> KmipResult<Vec<u8>> {
        Ok(v.to_be_bytes().to_vec())
    }

    fn write_i64(v: i64) -> KmipResult<Vec<u8>> {
        Ok(v.to_be_bytes().to_vec())
    }

    fn write_big_int(v: &KmipBigInt) -> KmipResult<Vec<u8>> {
        Ok(v.to_bytes_be())
    }

    fn write_bool(v: bool) -> KmipResult<Vec<u8>> {
        // booleans are encoded on 8 bytes
        Ok(u64::from(v).to_be_bytes().to_vec())
    }

    fn write_text(v: &str) -> KmipResult<Vec<u8>> {
        Ok(v.as_bytes().to_vec())
    }

    fn write_bytes(v: &[u8]) -> KmipResult<Vec<u8>> {
        Ok(v.to_vec())
    }

    fn write_date_time(v: OffsetDateTime) -> KmipResult<Vec<u8>> {
        Ok(v.unix_timestamp().to_be_bytes().to_vec())
    }
}

fn hex_value<const N: usize>(s: &str, what: &str) -> KmipResult<[u8; N]> {
    let digits = s.strip_prefix("0x").ok_or_else(|| {
        KmipError::InvalidArgument(format!("invalid {what} hex string {s}: it must start with 0x"))
    })?;
    let bytes = hex::decode(digits)?;
    fixed::<N>(&bytes, what)
}

fn format_date_time(v: OffsetDateTime) -> KmipResult<String> {
    v.format(&Iso8601::DEFAULT).map_err(|e| {
        KmipError::Serialization(format!("cannot format DateTime {v} into ISO8601: {e}"))
    })
}

fn parse_date_time(s: &str) -> KmipResult<OffsetDateTime> {
    OffsetDateTime::parse(s, &Iso8601::DEFAULT)
        .with_context(|| format!("invalid ISO8601 DateTime {s}"))
}

/// `serde_json` values, following the KMIP JSON profile.
pub struct JsonFormat;

impl JsonFormat {
    fn str(repr: &Value) -> KmipResult<&str> {
        repr.as_str()
            .ok_or_else(|| KmipError::InvalidArgument(format!("expected a JSON string, got {repr}")))
    }
}

impl ValueFormat for JsonFormat {
    type Owned = Value;
    type Repr = Value;

    const NAME: &'static str = "JSON";

    fn read_i32(repr: &Value) -> KmipResult<i32> {
        match repr {
            Value::Number(n) => {
                let v = n
                    .as_i64()
                    .ok_or_else(|| KmipError::InvalidArgument(format!("invalid Integer {n}")))?;
                Ok(i32::try_from(v)?)
            }
            Value::String(s) => Ok(i32::from_be_bytes(hex_value::<4>(s, "Integer")?)),
            other => Err(KmipError::InvalidArgument(format!(
                "invalid JSON value for a 32-bit integer: {other}"
            ))),
        }
    }

    fn read_u32(repr: &Value) -> KmipResult<u32> {
        match repr {
            Value::Number(n) => {
                let v = n
                    .as_u64()
                    .ok_or_else(|| KmipError::InvalidArgument(format!("invalid Enumeration {n}")))?;
                Ok(u32::try_from(v)?)
            }
            Value::String(s) => Ok(u32::from_be_bytes(hex_value::<4>(s, "Enumeration")?)),
            other => Err(KmipError::InvalidArgument(format!(
                "invalid JSON value for an unsigned 32-bit integer: {other}"
            ))),
        }
    }

    fn read_i64(repr: &Value) -> KmipResult<i64> {
        match repr {
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| KmipError::InvalidArgument(format!("invalid LongInteger {n}"))),
            Value::String(s) => Ok(i64::from_be_bytes(hex_value::<8>(s, "LongInteger")?)),
            other => Err(KmipError::InvalidArgument(format!(
                "invalid JSON value for a 64-bit integer: {other}"
            ))),
        }
    }

    fn read_big_int(repr: &Value) -> KmipResult<KmipBigInt> {
        KmipBigInt::from_hex(Self::str(repr)?)
    }

    fn read_bool(repr: &Value) -> KmipResult<bool> {
        repr.as_bool()
            .ok_or_else(|| KmipError::InvalidArgument(format!("invalid Boolean {repr}")))
    }

    fn read_text(repr: &Value) -> KmipResult<String> {
        Self::str(repr).map(ToOwned::to_owned)
    }

    fn read_bytes(repr: &Value) -> KmipResult<Vec<u8>> {
        Ok(hex::decode(Self::str(repr)?)?)
    }

    fn read_date_time(repr: &Value) -> KmipResult<OffsetDateTime> {
        parse_date_time(Self::str(repr)?)
    }

    fn write_i32(v: i32) -> KmipResult<Value> {
        Ok(Value::from(v))
    }

    fn write_u32(v: u32) -> KmipResult<Value> {
        Ok(Value::from(v))
    }

    fn write_i64(v: i64) -> KmipResult<Value> {
        // JavaScript numbers cannot hold every 64-bit integer
        Ok(Value::String(format!("0x{}", hex::encode_upper(v.to_be_bytes()))))
    }

    fn write_big_int(v: &KmipBigInt) -> KmipResult<Value> {
        Ok(Value::String(v.to_hex()))
    }

    fn write_bool(v: bool) -> KmipResult<Value> {
        Ok(Value::Bool(v))
    }

    fn write_text(v: &str) -> KmipResult<Value> {
        Ok(Value::String(v.to_owned()))
    }

    fn write_bytes(v: &[u8]) -> KmipResult<Value> {
        Ok(Value::String(hex::encode_upper(v)))
    }

    fn write_date_time(v: OffsetDateTime) -> KmipResult<Value> {
        format_date_time(v).map(Value::String)
    }
}

/// Text of the XML `value` attribute.
pub struct XmlFormat;

impl ValueFormat for XmlFormat {
    type Owned = String;
    type Repr = str;

    const NAME: &'static str = "XML";

    fn read_i32(repr: &str) -> KmipResult<i32> {
        repr.trim()
            .parse()
            .with_context(|| format!("invalid Integer {repr}"))
    }

    fn read_u32(repr: &str) -> KmipResult<u32> {
        repr.trim()
            .parse()
            .with_context(|| format!("invalid Enumeration {repr}"))
    }

    fn read_i64(repr: &str) -> KmipResult<i64> {
        repr.trim()
            .parse()
            .with_context(|| format!("invalid LongInteger {repr}"))
    }

    fn read_big_int(repr: &str) -> KmipResult<KmipBigInt> {
        KmipBigInt::from_hex(repr.trim())
    }

    fn read_bool(repr: &str) -> KmipResult<bool> {
        match repr.trim() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(KmipError::InvalidArgument(format!("invalid Boolean {other}"))),
        }
    }

    fn read_text(repr: &str) -> KmipResult<String> {
        Ok(repr.to_owned())
    }

    fn read_bytes(repr: &str) -> KmipResult<Vec<u8>> {
        Ok(hex::decode(repr.trim())?)
    }

    fn read_date_time(repr: &str) -> KmipResult<OffsetDateTime> {
        parse_date_time(repr.trim())
    }

    fn write_i32(v: i32) -> KmipResult<String> {
        Ok(v.to_string())
    }

    fn write_u32(v: u32) -> KmipResult<String> {
        Ok(v.to_string())
    }

    fn write_i64(v: i64) -> KmipResult<String> {
        Ok(v.to_string())
    }

    fn write_big_int(v: &KmipBigInt) -> KmipResult<String> {
        Ok(v.to_hex())
    }

    fn write_bool(v: bool) -> KmipResult<String> {
        Ok(v.to_string())
    }

    fn write_text(v: &str) -> KmipResult<String> {
        Ok(v.to_owned())
    }

    fn write_bytes(v: &[u8]) -> KmipResult<String> {
        Ok(hex::encode_upper(v))
    }

    fn write_date_time(v: OffsetDateTime) -> KmipResult<String> {
        format_date_time(v)
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use super::{JsonFormat, TtlvFormat, XmlFormat};
    use crate::{AttributeValue, EncodingType, KmipError, ttlv::KmipBigInt};

    fn samples() -> Vec<AttributeValue> {
        vec![
            AttributeValue::integer(-7),
            AttributeValue::enumeration(0x8000_0002),
            AttributeValue::interval(3600),
            AttributeValue::long_integer(i64::MIN),
            AttributeValue::big_integer(KmipBigInt::from(-1_234_567_890_123_456_789_i128)),
            AttributeValue::boolean(true),
            AttributeValue::text_string("Hello KMIP"),
            AttributeValue::byte_string(vec![0xDE, 0xAD, 0xBE, 0xEF]),
            AttributeValue::date_time(datetime!(2025-03-14 15:09:26 UTC)),
        ]
    }

    #[test]
    fn every_format_decodes_what_it_encodes() {
        for value in samples() {
            let bytes = value.encode::<TtlvFormat>().unwrap();
            assert_eq!(
                AttributeValue::decode::<TtlvFormat>(value.encoding_type(), &bytes).unwrap(),
                value
            );
            let json = value.encode::<JsonFormat>().unwrap();
            assert_eq!(
                AttributeValue::decode::<JsonFormat>(value.encoding_type(), &json).unwrap(),
                value
            );
            let xml = value.encode::<XmlFormat>().unwrap();
            assert_eq!(
                AttributeValue::decode::<XmlFormat>(value.encoding_type(), &xml).unwrap(),
                value
            );
        }
    }

    #[test]
    fn ttlv_value_bytes() {
        assert_eq!(
            AttributeValue::integer(1).encode::<TtlvFormat>().unwrap(),
            vec![0, 0, 0, 1]
        );
        assert_eq!(
            AttributeValue::boolean(true).encode::<TtlvFormat>().unwrap(),
            vec![0, 0, 0, 0, 0, 0, 0, 1]
        );
        assert_eq!(
            AttributeValue::date_time(datetime!(1970-01-01 0:01 UTC))
                .encode::<TtlvFormat>()
                .unwrap(),
            vec![0, 0, 0, 0, 0, 0, 0, 60]
        );
    }

    #[test]
    fn ttlv_rejects_wrong_widths_and_booleans() {
        assert!(matches!(
            AttributeValue::decode::<TtlvFormat>(EncodingType::Integer, &[0, 1]),
            Err(KmipError::InvalidArgument(_))
        ));
        assert!(AttributeValue::decode::<TtlvFormat>(EncodingType::LongInteger, &[0; 4]).is_err());
        assert!(AttributeValue::decode::<TtlvFormat>(EncodingType::BigInteger, &[0; 5]).is_err());
        assert!(
            AttributeValue::decode::<TtlvFormat>(EncodingType::Boolean, &[0, 0, 0, 0, 0, 0, 0, 2])
                .is_err()
        );
        assert!(AttributeValue::decode::<TtlvFormat>(EncodingType::TextString, &[0xFF, 0xFE]).is_err());
    }

    #[test]
    fn structure_is_not_a_primitive() {
        assert!(matches!(
            AttributeValue::decode::<TtlvFormat>(EncodingType::Structure, &[]),
            Err(KmipError::UnsupportedEncoding(_))
        ));
        assert!(matches!(
            AttributeValue::decode::<JsonFormat>(EncodingType::Structure, &json!([])),
            Err(KmipError::UnsupportedEncoding(_))
        ));
    }

    #[test]
    fn json_representations() {
        assert_eq!(AttributeValue::integer(8).encode::<JsonFormat>().unwrap(), json!(8));
        assert_eq!(
            AttributeValue::long_integer(1).encode::<JsonFormat>().unwrap(),
            json!("0x0000000000000001")
        );
        assert_eq!(
            AttributeValue::byte_string(vec![0xAB, 0x01])
                .encode::<JsonFormat>()
                .unwrap(),
            json!("AB01")
        );
        // numbers and 0x strings are both accepted for integers
        assert_eq!(
            AttributeValue::decode::<JsonFormat>(EncodingType::Integer, &json!("0x00000010"))
                .unwrap(),
            AttributeValue::integer(16)
        );
        assert_eq!(
            AttributeValue::decode::<JsonFormat>(EncodingType::LongInteger, &json!(42)).unwrap(),
            AttributeValue::long_integer(42)
        );
        assert!(
            AttributeValue::decode::<JsonFormat>(EncodingType::Integer, &json!(5_000_000_000_i64))
                .is_err()
        );
        assert!(AttributeValue::decode::<JsonFormat>(EncodingType::Boolean, &json!("yes")).is_err());
    }

    #[test]
    fn enumerations_are_unsigned_everywhere() {
        let vendor = AttributeValue::enumeration(0x8000_0001);
        assert_eq!(vendor.encode::<JsonFormat>().unwrap(), json!(2_147_483_649_u32));
        assert_eq!(vendor.encode::<XmlFormat>().unwrap(), "2147483649");
        assert_eq!(
            vendor.encode::<TtlvFormat>().unwrap(),
            vec![0x80, 0x00, 0x00, 0x01]
        );
        assert_eq!(
            AttributeValue::decode::<JsonFormat>(EncodingType::Enumeration, &json!(2_147_483_649_u32))
                .unwrap(),
            vendor
        );
        assert_eq!(
            AttributeValue::decode::<XmlFormat>(EncodingType::Enumeration, "2147483649").unwrap(),
            vendor
        );
        let interval = AttributeValue::interval(u32::MAX);
        assert_eq!(interval.encode::<JsonFormat>().unwrap(), json!(u32::MAX));
        assert_eq!(
            AttributeValue::decode::<XmlFormat>(EncodingType::Interval, "4294967295").unwrap(),
            interval
        );
        assert!(AttributeValue::decode::<JsonFormat>(EncodingType::Enumeration, &json!(-1)).is_err());
        assert!(AttributeValue::decode::<XmlFormat>(EncodingType::Interval, "-1").is_err());
    }

    #[test]
    fn xml_representations() {
        assert_eq!(AttributeValue::boolean(false).encode::<XmlFormat>().unwrap(), "false");
        assert_eq!(
            AttributeValue::long_integer(-3).encode::<XmlFormat>().unwrap(),
            "-3"
        );
        assert!(AttributeValue::decode::<XmlFormat>(EncodingType::Integer, "ten").is_err());
        assert!(AttributeValue::decode::<XmlFormat>(EncodingType::DateTime, "yesterday").is_err());
    }
}

use std::io::Write;

use tracing::debug;

use crate::{error::result::KmipResult, ttlv::TTLV};

/// Writes TTLV items to a byte sink, one padded record after the other.
pub struct TTLVBytesSerializer<W> {
    writer: W,
}

impl<W> TTLVBytesSerializer<W>
where
    W: Write,
{
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_ttlv(&mut self, ttlv: &TTLV) -> KmipResult<()> {
        debug!("[serialize] writing tag: {}", ttlv.tag);
        let record = ttlv.to_record()?;
        self.writer.write_all(&record.encode()?)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use num_bigint_dig::BigInt;
    use time::macros::datetime;

    use super::TTLVBytesSerializer;
    use crate::{AttributeValue, KmipError, KmipSpec, SpecContext, ttlv::TTLV};

    fn serialize(value: AttributeValue) -> Vec<u8> {
        let _guard = SpecContext::enter(KmipSpec::V1_2);
        let mut buffer = Vec::new();
        TTLVBytesSerializer::new(&mut buffer)
            .write_ttlv(&TTLV::primitive("CompromiseDate", value))
            .unwrap();
        buffer
    }

    /// Examples of the KMIP 1.x encoding section, all under tag 0x420020
    #[test]
    fn normative_encodings() {
        assert_eq!(
            serialize(AttributeValue::integer(8)),
            vec![
                0x42, 0x00, 0x20, 0x02, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x08, 0x00,
                0x00, 0x00, 0x00
            ]
        );
        assert_eq!(
            serialize(AttributeValue::long_integer(123_456_789_000_000_000)),
            vec![
                0x42, 0x00, 0x20, 0x03, 0x00, 0x00, 0x00, 0x08, 0x01, 0xB6, 0x9B, 0x4B, 0xA5,
                0x74, 0x92, 0x00
            ]
        );
        let big = BigInt::parse_bytes(b"1234567890000000000000000000", 10).unwrap();
        assert_eq!(
            serialize(AttributeValue::big_integer(big)),
            vec![
                0x42, 0x00, 0x20, 0x04, 0x00, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00, 0x00, 0x03,
                0xFD, 0x35, 0xEB, 0x6B, 0xC2, 0xDF, 0x46, 0x18, 0x08, 0x00, 0x00
            ]
        );
        assert_eq!(
            serialize(AttributeValue::enumeration(255)),
            vec![
                0x42, 0x00, 0x20, 0x05, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0xFF, 0x00,
                0x00, 0x00, 0x00
            ]
        );
        assert_eq!(
            serialize(AttributeValue::boolean(true)),
            vec![
                0x42, 0x00, 0x20, 0x06, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00,
                0x00, 0x00, 0x01
            ]
        );
        assert_eq!(
            serialize(AttributeValue::text_string("Hello World")),
            vec![
                0x42, 0x00, 0x20, 0x07, 0x00, 0x00, 0x00, 0x0B, 0x48, 0x65, 0x6C, 0x6C, 0x6F,
                0x20, 0x57, 0x6F, 0x72, 0x6C, 0x64, 0x00, 0x00, 0x00, 0x00, 0x00
            ]
        );
        assert_eq!(
            serialize(AttributeValue::byte_string(vec![0x01, 0x02, 0x03])),
            vec![
                0x42, 0x00, 0x20, 0x08, 0x00, 0x00, 0x00, 0x03, 0x01, 0x02, 0x03, 0x00, 0x00,
                0x00, 0x00, 0x00
            ]
        );
        assert_eq!(
            serialize(AttributeValue::date_time(datetime!(2008-03-14 11:56:40 UTC))),
            vec![
                0x42, 0x00, 0x20, 0x09, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00, 0x47,
                0xDA, 0x67, 0xF8
            ]
        );
        assert_eq!(
            serialize(AttributeValue::interval(864_000)),
            vec![
                0x42, 0x00, 0x20, 0x0A, 0x00, 0x00, 0x00, 0x04, 0x00, 0x0D, 0x2F, 0x00, 0x00,
                0x00, 0x00, 0x00
            ]
        );
    }

    #[test]
    fn normative_structure() {
        // A Structure holding an Enumeration 254 and an Integer 255
        let _guard = SpecContext::enter(KmipSpec::V1_2);
        let ttlv = TTLV::structure(
            "CompromiseDate",
            vec![
                TTLV::primitive("ApplicationSpecificInformation", AttributeValue::enumeration(254)),
                TTLV::primitive("ArchiveDate", AttributeValue::integer(255)),
            ],
        );
        assert_eq!(
            ttlv.to_bytes().unwrap(),
            vec![
                0x42, 0x00, 0x20, 0x01, 0x00, 0x00, 0x00, 0x20, 0x42, 0x00, 0x04, 0x05, 0x00,
                0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0xFE, 0x00, 0x00, 0x00, 0x00, 0x42, 0x00,
                0x05, 0x02, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00,
                0x00
            ]
        );
    }

    #[test]
    fn unknown_tag_names_fail() {
        let mut buffer = Vec::new();
        let err = TTLVBytesSerializer::new(&mut buffer)
            .write_ttlv(&TTLV::primitive("NoSuchTag", AttributeValue::integer(1)))
            .unwrap_err();
        assert!(matches!(err, KmipError::UnknownIdentifier(_)));
        assert!(buffer.is_empty());
    }
}

use std::io::{ErrorKind, Read};

use tracing::debug;

use crate::{
    KmipError,
    error::result::KmipResult,
    ttlv::{
        TTLV,
        ttlv_record::{ALIGNMENT, HEADER_SIZE, TtlvRecord},
    },
};

#[allow(clippy::as_conversions)]
const ALIGNMENT_U64: u64 = ALIGNMENT as u64;

/// Reads TTLV items from a byte source.
///
/// Iterating yields items until the source ends cleanly on a record
/// boundary; a record cut short is an error.
pub struct TTLVBytesDeserializer<R> {
    reader: R,
}

impl<R> TTLVBytesDeserializer<R>
where
    R: Read,
{
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn read_ttlv(&mut self) -> KmipResult<TTLV> {
        self.read_next()?.ok_or_else(|| {
            KmipError::Deserialization("no TTLV item left in the input".to_owned())
        })
    }

    /// Read the next item, `None` at a clean end of input.
    ///
    /// The value is read incrementally, so a length field larger than the
    /// data available never allocates more than what was received.
    pub fn read_next(&mut self) -> KmipResult<Option<TTLV>> {
        let mut header = [0_u8; HEADER_SIZE];
        let read = self.fill(&mut header)?;
        if read == 0 {
            return Ok(None);
        }
        if read < HEADER_SIZE {
            return Err(KmipError::InvalidArgument(format!(
                "insufficient data for a TTLV header: required {HEADER_SIZE} bytes, available \
                 {read}"
            )));
        }
        let [_, _, _, _, l0, l1, l2, l3] = header;
        let length = u64::from(u32::from_be_bytes([l0, l1, l2, l3]));
        // value plus padding up to the next 8-byte boundary
        let remaining = length.div_ceil(ALIGNMENT_U64) * ALIGNMENT_U64;
        let mut buffer = header.to_vec();
        let received = self
            .reader
            .by_ref()
            .take(remaining)
            .read_to_end(&mut buffer)?;
        if u64::try_from(received)? != remaining {
            return Err(KmipError::InvalidArgument(format!(
                "insufficient data for the TTLV value: declared {length} bytes, received \
                 {received} of {remaining} with padding"
            )));
        }
        let record = TtlvRecord::decode(&buffer)?;
        let ttlv = TTLV::from_record(&record)?;
        debug!("[deserialize] read tag: {}", ttlv.tag);
        Ok(Some(ttlv))
    }

    /// Read until `buf` is full or the input ends; returns the bytes read.
    fn fill(&mut self, buf: &mut [u8]) -> KmipResult<usize> {
        let mut read = 0;
        while read < buf.len() {
            match self.reader.read(&mut buf[read..]) {
                Ok(0) => break,
                Ok(n) => read += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(read)
    }
}

impl<R: Read> Iterator for TTLVBytesDeserializer<R> {
    type Item = KmipResult<TTLV>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next().transpose()
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::TTLVBytesDeserializer;
    use crate::{AttributeValue, KmipError, KmipSpec, SpecContext, ttlv::TTLV};

    #[test]
    fn reads_a_stream_of_items() {
        let _guard = SpecContext::enter(KmipSpec::V1_2);
        let items = vec![
            TTLV::primitive("AttributeIndex", AttributeValue::integer(3)),
            TTLV::primitive("ObjectGroup", AttributeValue::text_string("Group1")),
            TTLV::structure("ProtocolVersion", vec![]),
        ];
        let bytes = TTLV::to_bytes_all(&items).unwrap();
        let read = TTLVBytesDeserializer::new(bytes.as_slice())
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(read, items);

        let mut deserializer = TTLVBytesDeserializer::new(&bytes[..16]);
        assert_eq!(deserializer.read_ttlv().unwrap(), items[0]);
        assert!(deserializer.read_next().unwrap().is_none());
        assert!(deserializer.read_ttlv().is_err());
    }

    #[test]
    fn truncated_items_are_errors() {
        let _guard = SpecContext::enter(KmipSpec::V1_2);
        let bytes = TTLV::primitive("AttributeIndex", AttributeValue::integer(3))
            .to_bytes()
            .unwrap();
        for cut in [3, 8, 12, 15] {
            let mut deserializer = TTLVBytesDeserializer::new(&bytes[..cut]);
            assert!(matches!(
                deserializer.read_next(),
                Err(KmipError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn declared_length_beyond_the_input() {
        let _guard = SpecContext::enter(KmipSpec::V1_2);
        // AttributeName TextString claiming 0xFFFFFFF0 value bytes
        let header = [0x42, 0x00, 0x0A, 0x07, 0xFF, 0xFF, 0xFF, 0xF0];
        assert!(matches!(
            TTLVBytesDeserializer::new(header.as_slice()).read_next(),
            Err(KmipError::InvalidArgument(_))
        ));
        let mut with_some_value = header.to_vec();
        with_some_value.extend_from_slice(b"partial");
        assert!(matches!(
            TTLVBytesDeserializer::new(with_some_value.as_slice()).read_next(),
            Err(KmipError::InvalidArgument(_))
        ));
        assert!(matches!(
            TTLV::from_bytes_all(&header),
            Err(KmipError::InvalidArgument(_))
        ));
    }

    #[test]
    fn tags_are_resolved_under_the_current_spec() {
        let bytes = SpecContext::with_spec(KmipSpec::V1_2, || {
            TTLV::primitive("AttributeIndex", AttributeValue::integer(1))
                .to_bytes()
                .unwrap()
        });
        let err = SpecContext::with_spec(KmipSpec::V2_1, || {
            TTLVBytesDeserializer::new(bytes.as_slice()).read_ttlv()
        })
        .unwrap_err();
        assert!(matches!(err, KmipError::NotSupportedForSpec { .. }));
    }
}

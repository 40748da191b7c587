//! Binary TTLV framing.
//!
//! A record is a 3-byte big-endian tag, a 1-byte type, a 4-byte big-endian
//! length counting the unpadded value bytes, then the value, zero padded so
//! the whole record is a multiple of 8 bytes long. A Structure's value is
//! the concatenation of its already padded child records.

use std::fmt::Write;

use tracing::trace;

use crate::{
    EncodingType, KmipError,
    error::result::KmipResult,
    kmip_tag::{TAG_SIZE, tag_value},
};

/// tag (3) + type (1) + length (4)
pub const HEADER_SIZE: usize = 8;

/// Records always end on a multiple of this
pub const ALIGNMENT: usize = 8;

/// The smallest multiple of `ALIGNMENT` holding `len` bytes.
#[must_use]
pub const fn padded_length(len: usize) -> usize {
    len.div_ceil(ALIGNMENT) * ALIGNMENT
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtlvRecord {
    tag: [u8; TAG_SIZE],
    encoding_type: EncodingType,
    value: Vec<u8>,
}

impl TtlvRecord {
    /// Build a record from raw parts; the tag must be exactly 3 bytes.
    pub fn new(tag: &[u8], encoding_type: EncodingType, value: Vec<u8>) -> KmipResult<Self> {
        let tag = <[u8; TAG_SIZE]>::try_from(tag).map_err(|_e| {
            KmipError::InvalidArgument(format!(
                "tag must be {TAG_SIZE} bytes long, got {} bytes",
                tag.len()
            ))
        })?;
        if u32::try_from(value.len()).is_err() {
            return Err(KmipError::InvalidArgument(format!(
                "value of {} bytes does not fit a TTLV length",
                value.len()
            )));
        }
        Ok(Self {
            tag,
            encoding_type,
            value,
        })
    }

    /// A Structure record holding `children` in order.
    pub fn structure(tag: &[u8], children: &[Self]) -> KmipResult<Self> {
        let mut value = Vec::with_capacity(children.iter().map(Self::encoded_len).sum());
        for child in children {
            child.encode_into(&mut value)?;
        }
        Self::new(tag, EncodingType::Structure, value)
    }

    #[must_use]
    pub const fn tag(&self) -> [u8; TAG_SIZE] {
        self.tag
    }

    #[must_use]
    pub const fn tag_value(&self) -> u32 {
        tag_value(self.tag)
    }

    #[must_use]
    pub const fn encoding_type(&self) -> EncodingType {
        self.encoding_type
    }

    /// Unpadded value length, as written in the header
    #[must_use]
    pub fn length(&self) -> usize {
        self.value.len()
    }

    /// Total size on the wire, padding included
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        padded_length(HEADER_SIZE + self.value.len())
    }

    #[must_use]
    pub fn is_structure(&self) -> bool {
        self.encoding_type == EncodingType::Structure
    }

    /// The raw unpadded value bytes of a primitive record.
    pub fn primitive_value(&self) -> KmipResult<&[u8]> {
        if self.is_structure() {
            return Err(KmipError::InvalidState(format!(
                "record 0x{} is a Structure, it has no primitive value",
                hex::encode_upper(self.tag)
            )));
        }
        Ok(&self.value)
    }

    /// The child records of a Structure, in serialized order.
    pub fn nested_value(&self) -> KmipResult<Vec<Self>> {
        if !self.is_structure() {
            return Err(KmipError::InvalidState(format!(
                "record 0x{} is a {}, not a Structure",
                hex::encode_upper(self.tag),
                self.encoding_type
            )));
        }
        if self.value.is_empty() {
            return Ok(vec![]);
        }
        Self::decode_all(&self.value)
    }

    pub fn encode(&self) -> KmipResult<Vec<u8>> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut out)?;
        Ok(out)
    }

    /// Append the padded record to `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) -> KmipResult<()> {
        let length = u32::try_from(self.value.len())?;
        out.extend_from_slice(&self.tag);
        out.push(self.encoding_type.code());
        out.extend_from_slice(&length.to_be_bytes());
        out.extend_from_slice(&self.value);
        let padding = self.encoded_len() - HEADER_SIZE - self.value.len();
        out.resize(out.len() + padding, 0);
        Ok(())
    }

    /// Decode the record at the start of `bytes`; trailing bytes are ignored.
    pub fn decode(bytes: &[u8]) -> KmipResult<Self> {
        Self::decode_prefix(bytes).map(|(record, _)| record)
    }

    /// Decode the record at the start of `bytes` and return it with the
    /// number of bytes consumed, padding included.
    pub fn decode_prefix(bytes: &[u8]) -> KmipResult<(Self, usize)> {
        if bytes.is_empty() {
            return Err(KmipError::InvalidArgument(
                "cannot decode a TTLV record from empty input".to_owned(),
            ));
        }
        let Some((header, rest)) = bytes.split_first_chunk::<HEADER_SIZE>() else {
            return Err(KmipError::InvalidArgument(format!(
                "insufficient data for a TTLV header: required {HEADER_SIZE} bytes, available {}",
                bytes.len()
            )));
        };
        let [t0, t1, t2, type_code, l0, l1, l2, l3] = *header;
        let encoding_type = EncodingType::from_code(type_code).map_err(|_e| {
            KmipError::InvalidArgument(format!("invalid TTLV type code 0x{type_code:02X}"))
        })?;
        let length = usize::try_from(u32::from_be_bytes([l0, l1, l2, l3]))?;
        let value = rest.get(..length).ok_or_else(|| {
            KmipError::InvalidArgument(format!(
                "insufficient data for the TTLV value: declared {length} bytes, available {}",
                rest.len()
            ))
        })?;
        let consumed = padded_length(HEADER_SIZE + length);
        if consumed > bytes.len() {
            return Err(KmipError::InvalidArgument(format!(
                "insufficient data for the TTLV padding: required {} bytes, available {}",
                consumed - HEADER_SIZE - length,
                bytes.len() - HEADER_SIZE - length
            )));
        }
        trace!(
            "decoded record 0x{} {encoding_type} length {length}",
            hex::encode_upper([t0, t1, t2])
        );
        Ok((
            Self {
                tag: [t0, t1, t2],
                encoding_type,
                value: value.to_vec(),
            },
            consumed,
        ))
    }

    /// Encode sibling records back to back, with no extra framing.
    pub fn encode_all(records: &[Self]) -> KmipResult<Vec<u8>> {
        let mut out = Vec::with_capacity(records.iter().map(Self::encoded_len).sum());
        for record in records {
            record.encode_into(&mut out)?;
        }
        Ok(out)
    }

    /// Decode every sibling record of `bytes`.
    pub fn decode_all(bytes: &[u8]) -> KmipResult<Vec<Self>> {
        if bytes.is_empty() {
            return Err(KmipError::InvalidArgument(
                "cannot decode TTLV records from empty input".to_owned(),
            ));
        }
        let mut records = Vec::new();
        let mut offset = 0;
        while let Some(remaining) = bytes.get(offset..).filter(|r| !r.is_empty()) {
            let (record, consumed) = Self::decode_prefix(remaining)?;
            records.push(record);
            offset += consumed;
        }
        Ok(records)
    }

    /// Upper-case hex of the header followed by the unpadded value.
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let length = u32::try_from(self.value.len()).unwrap_or(u32::MAX);
        format!(
            "{}{:02X}{}{}",
            hex::encode_upper(self.tag),
            self.encoding_type.code(),
            hex::encode_upper(length.to_be_bytes()),
            hex::encode_upper(&self.value)
        )
    }

    /// A multi-line, tab indented rendering of the record tree.
    ///
    /// Diagnostic only: the output cannot be parsed back.
    #[must_use]
    pub fn structured_string(&self) -> String {
        let mut out = String::new();
        self.write_structured(&mut out, 0);
        out
    }

    fn write_structured(&self, out: &mut String, level: usize) {
        let indent = "\t".repeat(level);
        let _ = writeln!(out, "{indent}Tag : (0x{})", hex::encode_upper(self.tag));
        let _ = writeln!(out, "{indent}Type : {}", self.encoding_type);
        let _ = writeln!(out, "{indent}Length : {}", self.value.len());
        if self.value.is_empty() {
            let _ = writeln!(out, "{indent}Value : null");
        } else if self.is_structure() {
            let _ = writeln!(out, "{indent}Value : ");
            match Self::decode_all(&self.value) {
                Ok(children) => {
                    for child in children {
                        child.write_structured(out, level + 1);
                    }
                }
                Err(e) => {
                    let _ = writeln!(out, "{indent}\t<malformed: {e}>");
                }
            }
        } else {
            let _ = writeln!(out, "{indent}Value : {}", hex::encode_upper(&self.value));
        }
    }
}

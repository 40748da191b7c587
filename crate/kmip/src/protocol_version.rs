use std::fmt;

use crate::{
    AttributeValue, EncodingType, KmipError, KmipSpec, KmipTag, Tag,
    error::result::KmipResult,
    kmip_data_type::KmipDataType,
    ttlv::{HEADER_SIZE, TTLV},
};

/// The `ProtocolVersion` structure carried by every KMIP message header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProtocolVersion {
    pub protocol_version_major: i32,
    pub protocol_version_minor: i32,
}

impl fmt::Display for ProtocolVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}.{}",
            self.protocol_version_major, self.protocol_version_minor
        )
    }
}

impl ProtocolVersion {
    #[must_use]
    pub const fn new(major: i32, minor: i32) -> Self {
        Self {
            protocol_version_major: major,
            protocol_version_minor: minor,
        }
    }

    /// The registered spec for this version.
    pub fn spec(&self) -> KmipResult<KmipSpec> {
        KmipSpec::from_version(self.protocol_version_major, self.protocol_version_minor)
    }

    pub fn to_ttlv(&self) -> TTLV {
        TTLV::structure(
            Tag::ProtocolVersion.description(),
            vec![
                TTLV::primitive(
                    Tag::ProtocolVersionMajor.description(),
                    AttributeValue::integer(self.protocol_version_major),
                ),
                TTLV::primitive(
                    Tag::ProtocolVersionMinor.description(),
                    AttributeValue::integer(self.protocol_version_minor),
                ),
            ],
        )
    }

    pub fn from_ttlv(ttlv: &TTLV) -> KmipResult<Self> {
        crate::kmip_ensure!(
            ttlv.tag == Tag::ProtocolVersion.description(),
            "expected a ProtocolVersion structure, got {}",
            ttlv.tag
        );
        let field = |tag: Tag| -> KmipResult<i32> {
            ttlv.child(tag.description())?
                .ok_or_else(|| {
                    crate::kmip_error!("ProtocolVersion is missing its {}", tag.description())
                })?
                .primitive_value()?
                .as_i32()
        };
        Ok(Self::new(
            field(Tag::ProtocolVersionMajor)?,
            field(Tag::ProtocolVersionMinor)?,
        ))
    }

    /// Scan a raw TTLV message for the first major/minor pair.
    ///
    /// No tag is resolved, so this works before the spec of the message
    /// is known. Returns `None` when either number is missing.
    pub fn find_in_bytes(bytes: &[u8]) -> KmipResult<Option<Self>> {
        let major = find_integer(bytes, Tag::ProtocolVersionMajor)?;
        let minor = find_integer(bytes, Tag::ProtocolVersionMinor)?;
        Ok(major.zip(minor).map(|(major, minor)| Self::new(major, minor)))
    }
}

/// Look for an Integer record of `tag` at each 8-byte boundary.
fn find_integer(bytes: &[u8], tag: Tag) -> KmipResult<Option<i32>> {
    let [b0, b1, b2] = KmipTag::from(tag).to_bytes();
    let header = [
        b0,
        b1,
        b2,
        EncodingType::Integer.code(),
        0x00,
        0x00,
        0x00,
        0x04,
    ];
    for offset in (0..bytes.len()).step_by(HEADER_SIZE) {
        if bytes.get(offset..offset + HEADER_SIZE) != Some(&header[..]) {
            continue;
        }
        let value = bytes
            .get(offset + HEADER_SIZE..offset + HEADER_SIZE + 4)
            .ok_or_else(|| {
                KmipError::InvalidArgument(format!(
                    "truncated {} at offset {offset}",
                    tag.description()
                ))
            })?;
        let value = <[u8; 4]>::try_from(value)
            .map_err(|e| KmipError::InvalidArgument(e.to_string()))?;
        return Ok(Some(i32::from_be_bytes(value)));
    }
    Ok(None)
}

impl From<KmipSpec> for ProtocolVersion {
    fn from(spec: KmipSpec) -> Self {
        Self::new(spec.major(), spec.minor())
    }
}

impl KmipDataType for ProtocolVersion {
    fn kmip_tag(&self) -> KmipTag {
        Tag::ProtocolVersion.into()
    }

    fn encoding_type(&self) -> EncodingType {
        EncodingType::Structure
    }

    fn is_supported_for(&self, spec: KmipSpec) -> bool {
        spec != KmipSpec::UnsupportedVersion
    }
}

use tracing::trace;

use super::{TTLVBytesSerializer, ttlv_record::TtlvRecord};
use crate::{
    AttributeValue, EncodingType, KmipError, KmipTag, TtlvFormat, error::result::KmipResult,
};

/// A TTLV item with its tag resolved to a name.
///
/// This is the common tree the binary, JSON and XML encodings convert from
/// and to. Tag names are resolved through the tag registry under the
/// current thread's `SpecContext`; a name written `0x540001` stands for
/// the raw tag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TTLV {
    pub tag: String,
    pub value: TTLValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TTLValue {
    Structure(Vec<TTLV>),
    Primitive(AttributeValue),
}

impl TTLValue {
    #[must_use]
    pub const fn encoding_type(&self) -> EncodingType {
        match self {
            Self::Structure(_) => EncodingType::Structure,
            Self::Primitive(value) => value.encoding_type(),
        }
    }
}

impl TTLV {
    pub fn structure(tag: impl Into<String>, children: Vec<Self>) -> Self {
        Self {
            tag: tag.into(),
            value: TTLValue::Structure(children),
        }
    }

    pub fn primitive(tag: impl Into<String>, value: AttributeValue) -> Self {
        Self {
            tag: tag.into(),
            value: TTLValue::Primitive(value),
        }
    }

    /// The children of a Structure.
    pub fn children(&self) -> KmipResult<&[Self]> {
        match &self.value {
            TTLValue::Structure(children) => Ok(children),
            TTLValue::Primitive(value) => Err(KmipError::InvalidState(format!(
                "{} is a {}, not a Structure",
                self.tag,
                value.encoding_type()
            ))),
        }
    }

    /// The first child named `tag`, if any.
    pub fn child(&self, tag: &str) -> KmipResult<Option<&Self>> {
        Ok(self.children()?.iter().find(|c| c.tag == tag))
    }

    pub fn primitive_value(&self) -> KmipResult<&AttributeValue> {
        match &self.value {
            TTLValue::Primitive(value) => Ok(value),
            TTLValue::Structure(_) => Err(KmipError::InvalidState(format!(
                "{} is a Structure, it has no primitive value",
                self.tag
            ))),
        }
    }

    /// Resolve the tag name under the current spec.
    pub fn kmip_tag(&self) -> KmipResult<KmipTag> {
        match self.tag.strip_prefix("0x") {
            Some(hex_value) => {
                let value = u32::from_str_radix(hex_value, 16).map_err(|e| {
                    KmipError::InvalidArgument(format!("invalid hex tag {}: {e}", self.tag))
                })?;
                KmipTag::resolve_value(value)
            }
            None => KmipTag::resolve_name(&self.tag),
        }
    }

    /// Lower the tree to raw records.
    pub fn to_record(&self) -> KmipResult<TtlvRecord> {
        let tag = self.kmip_tag()?.to_bytes();
        match &self.value {
            TTLValue::Structure(children) => {
                let children = children
                    .iter()
                    .map(Self::to_record)
                    .collect::<KmipResult<Vec<_>>>()?;
                TtlvRecord::structure(&tag, &children)
            }
            TTLValue::Primitive(value) => {
                TtlvRecord::new(&tag, value.encoding_type(), value.encode::<TtlvFormat>()?)
            }
        }
    }

    /// Lift raw records into the tree, resolving tags under the current spec.
    pub fn from_record(record: &TtlvRecord) -> KmipResult<Self> {
        let tag = KmipTag::resolve_value(record.tag_value())?;
        let value = if record.is_structure() {
            TTLValue::Structure(
                record
                    .nested_value()?
                    .iter()
                    .map(Self::from_record)
                    .collect::<KmipResult<Vec<_>>>()?,
            )
        } else {
            TTLValue::Primitive(AttributeValue::decode::<TtlvFormat>(
                record.encoding_type(),
                record.primitive_value()?,
            )?)
        };
        trace!("lifted {tag} ({})", value.encoding_type());
        Ok(Self {
            tag: tag.description().to_owned(),
            value,
        })
    }

    pub fn to_bytes(&self) -> KmipResult<Vec<u8>> {
        let mut writer = Vec::new();
        TTLVBytesSerializer::new(&mut writer).write_ttlv(self)?;
        Ok(writer)
    }

    /// Decode the first item of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> KmipResult<Self> {
        Self::from_record(&TtlvRecord::decode(bytes)?)
    }

    pub fn to_bytes_all(items: &[Self]) -> KmipResult<Vec<u8>> {
        let mut writer = Vec::new();
        let mut serializer = TTLVBytesSerializer::new(&mut writer);
        for item in items {
            serializer.write_ttlv(item)?;
        }
        Ok(writer)
    }

    /// Decode every sibling item of `bytes`.
    pub fn from_bytes_all(bytes: &[u8]) -> KmipResult<Vec<Self>> {
        TtlvRecord::decode_all(bytes)?
            .iter()
            .map(Self::from_record)
            .collect()
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::{TTLV, TTLValue};
    use crate::{AttributeValue, KmipError, KmipSpec, SpecContext};

    #[test]
    fn accessors() {
        let ttlv = TTLV::structure(
            "ProtocolVersion",
            vec![
                TTLV::primitive("ProtocolVersionMajor", AttributeValue::integer(1)),
                TTLV::primitive("ProtocolVersionMinor", AttributeValue::integer(2)),
            ],
        );
        assert_eq!(ttlv.children().unwrap().len(), 2);
        assert_eq!(
            ttlv.child("ProtocolVersionMinor")
                .unwrap()
                .unwrap()
                .primitive_value()
                .unwrap()
                .as_i32()
                .unwrap(),
            2
        );
        assert!(ttlv.child("AttributeIndex").unwrap().is_none());
        assert!(matches!(
            ttlv.primitive_value(),
            Err(KmipError::InvalidState(_))
        ));
        let leaf = TTLV::primitive("AttributeIndex", AttributeValue::integer(0));
        assert!(leaf.children().is_err());
        assert!(matches!(leaf.value, TTLValue::Primitive(_)));
    }

    #[test]
    fn hex_tag_names() {
        let _guard = SpecContext::enter(KmipSpec::V1_2);
        let by_hex = TTLV::primitive("0x420009", AttributeValue::integer(1));
        let by_name = TTLV::primitive("AttributeIndex", AttributeValue::integer(1));
        assert_eq!(by_hex.to_bytes().unwrap(), by_name.to_bytes().unwrap());
        // decoding always yields the registered name
        assert_eq!(TTLV::from_bytes(&by_hex.to_bytes().unwrap()).unwrap(), by_name);
        assert!(TTLV::primitive("0xZZ", AttributeValue::integer(1)).to_bytes().is_err());
    }
}
